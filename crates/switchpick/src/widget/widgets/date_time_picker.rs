//! DateTimePicker, a date control and a time control behind a view switcher.
//!
//! The picker shows one control at a time. Two trigger buttons switch
//! between them with a horizontal slide: showing the time slides the date
//! out to the left, showing the date slides the time out to the right. The
//! trigger for the page already in front is disabled.
//!
//! The picker keeps a cached [`Timestamp`] that always matches what the two
//! controls show. A user edit in the date control replaces the date half of
//! the cache and keeps the time half; a user edit in the time control does the
//! reverse. Setting the timestamp from outside pushes both halves down into
//! the controls.
//!
//! # Example
//!
//! ```
//! use switchpick::{DateFields, DateTimePicker, PickerTrigger, PickerView, TimeFields, Timestamp};
//!
//! let start = Timestamp::from_fields(
//!     DateFields::new(2014, 0, 15).unwrap(),
//!     TimeFields::new(9, 30).unwrap(),
//! );
//! let mut picker = DateTimePicker::with_timestamp(start);
//!
//! picker.timestamp_changed.connect(|ts| {
//!     println!("Picked: {}", ts);
//! });
//!
//! // The user turns the date wheel
//! picker.date_control_mut().select_date(DateFields::new(2014, 2, 20).unwrap());
//! assert_eq!(picker.timestamp().to_string(), "2014-03-20 09:30");
//!
//! // and switches to the time page
//! assert!(picker.click(PickerTrigger::ShowTime));
//! assert_eq!(picker.visible_view(), PickerView::Time);
//! ```

use std::sync::Arc;
use std::time::Duration;

use switchpick_core::logging::targets;
use switchpick_core::{ConnectionId, Property, Signal};

use crate::config::PickerConfig;
use crate::error::Result;
use crate::timestamp::{CalendarField, DateFields, TimeFields, Timestamp};
use crate::widget::animation::{Animation, AnimationKind, Easing};
use crate::widget::controls::{DateControl, PickerTrigger, PickerView, TimeControl, ViewSwitcher};

use super::date_spinner::DateSpinner;
use super::time_spinner::TimeSpinner;
use super::trigger_button::TriggerButton;
use super::view_flipper::ViewFlipper;

/// A composite widget for choosing a date and a time.
///
/// The control types default to the crate's headless controls. A host
/// toolkit can supply its own through [`DateTimePicker::with_controls`].
///
/// # Signals
///
/// - `timestamp_changed(Timestamp)`: Emitted whenever the cached timestamp changes
/// - `view_changed(PickerView)`: Emitted when the other page comes to the front
pub struct DateTimePicker<D = DateSpinner, T = TimeSpinner, S = ViewFlipper>
where
    D: DateControl,
    T: TimeControl,
    S: ViewSwitcher,
{
    /// The date page.
    date_control: D,
    /// The time page.
    time_control: T,
    /// Shows one page at a time.
    switcher: S,

    /// Brings the date page to the front.
    show_date: TriggerButton,
    /// Brings the time page to the front.
    show_time: TriggerButton,

    /// Composite of both controls. Shared with the control slots.
    timestamp: Arc<Property<Timestamp>>,
    /// Earliest selectable date.
    min_date: Property<Option<Timestamp>>,
    /// Latest selectable date.
    max_date: Property<Option<Timestamp>>,
    /// Page in front.
    visible: Property<PickerView>,

    /// Slide length.
    transition_duration: Duration,
    /// Slide easing.
    transition_easing: Easing,

    date_connection: ConnectionId,
    time_connection: ConnectionId,

    /// Signal emitted when the cached timestamp changes.
    pub timestamp_changed: Arc<Signal<Timestamp>>,
    /// Signal emitted when the visible page changes.
    pub view_changed: Signal<PickerView>,
}

impl DateTimePicker {
    /// Create a picker showing the current time.
    pub fn new() -> Self {
        Self::with_timestamp(Timestamp::now())
    }

    /// Create a picker showing `initial`.
    pub fn with_timestamp(initial: Timestamp) -> Self {
        Self::with_controls(
            DateSpinner::new(),
            TimeSpinner::new(),
            ViewFlipper::new(),
            initial,
        )
    }

    /// Create a picker from milliseconds since the Unix epoch.
    pub fn from_epoch_millis(millis: i64) -> Result<Self> {
        Ok(Self::with_timestamp(Timestamp::from_epoch_millis(millis)?))
    }

    /// Create a picker from a configuration.
    pub fn from_config(config: &PickerConfig) -> Result<Self> {
        let mut picker = Self::with_timestamp(config.initial_timestamp()?);
        picker.apply_config(config)?;
        Ok(picker)
    }
}

impl Default for DateTimePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, T, S> DateTimePicker<D, T, S>
where
    D: DateControl,
    T: TimeControl,
    S: ViewSwitcher,
{
    /// Assemble a picker from controls supplied by the host.
    ///
    /// The date page is registered first and starts in front.
    pub fn with_controls(
        mut date_control: D,
        mut time_control: T,
        mut switcher: S,
        initial: Timestamp,
    ) -> Self {
        switcher.add_view(PickerView::Date);
        switcher.add_view(PickerView::Time);

        date_control.update_date(initial.date_fields());
        time_control.update_time(initial.time_fields());
        let shown = initial
            .with_date(date_control.date())
            .with_time(time_control.time());

        let timestamp = Arc::new(Property::new(shown));
        let timestamp_changed = Arc::new(Signal::new());

        let date_connection = {
            let cache = Arc::clone(&timestamp);
            let notify = Arc::clone(&timestamp_changed);
            date_control
                .date_changed()
                .connect(move |&date| apply_date(&cache, &notify, date))
        };
        let time_connection = {
            let cache = Arc::clone(&timestamp);
            let notify = Arc::clone(&timestamp_changed);
            time_control
                .time_changed()
                .connect(move |&time| apply_time(&cache, &notify, time))
        };

        let mut show_date = TriggerButton::new("Date");
        show_date.set_enabled(false);
        let show_time = TriggerButton::new("Time");

        tracing::debug!(target: targets::PICKER, timestamp = %shown, "date-time picker created");

        Self {
            date_control,
            time_control,
            switcher,
            show_date,
            show_time,
            timestamp,
            min_date: Property::new(None),
            max_date: Property::new(None),
            visible: Property::new(PickerView::Date),
            transition_duration: Animation::DEFAULT_DURATION,
            transition_easing: Easing::default(),
            date_connection,
            time_connection,
            timestamp_changed,
            view_changed: Signal::new(),
        }
    }

    /// Apply hour format, bounds and transition settings from `config`.
    ///
    /// The initial value is only applied when the configuration names one.
    /// Bounds are installed before the initial value, so the initial value is
    /// only clamped by the new bounds. Nothing changes if any timestamp in
    /// `config` is out of range.
    pub fn apply_config(&mut self, config: &PickerConfig) -> Result<()> {
        let min_date = config.min_date()?;
        let max_date = config.max_date()?;
        let initial = config
            .initial_millis
            .map(Timestamp::from_epoch_millis)
            .transpose()?;

        // Clear first so a new minimum never meets an old maximum
        self.set_min_date(None);
        self.set_max_date(None);
        self.set_min_date(min_date);
        self.set_max_date(max_date);
        if let Some(initial) = initial {
            self.set_timestamp(initial);
        }
        self.set_hour_format_24(config.hour_format_24);
        self.set_transition(config.transition.duration(), config.transition.easing);
        Ok(())
    }

    // =========================================================================
    // Timestamp Access
    // =========================================================================

    /// Get the cached timestamp.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp.get()
    }

    /// Show `timestamp` in both controls and cache it.
    ///
    /// If the date control clamps the date into its bounds, the cache takes the
    /// clamped date so it never disagrees with the controls.
    pub fn set_timestamp(&mut self, timestamp: Timestamp) {
        self.date_control.update_date(timestamp.date_fields());
        self.time_control.update_time(timestamp.time_fields());

        let shown = timestamp
            .with_date(self.date_control.date())
            .with_time(self.time_control.time());
        if shown != timestamp {
            tracing::debug!(
                target: targets::PICKER,
                requested = %timestamp,
                shown = %shown,
                "timestamp adjusted by date bounds"
            );
        }
        commit(&self.timestamp, &self.timestamp_changed, shown);
    }

    /// Read one field of the cached timestamp.
    pub fn field(&self, field: CalendarField) -> i32 {
        self.timestamp().field(field)
    }

    /// The cached timestamp as milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.timestamp().epoch_millis()
    }

    /// Set the timestamp from milliseconds since the Unix epoch.
    pub fn set_epoch_millis(&mut self, millis: i64) -> Result<()> {
        self.set_timestamp(Timestamp::from_epoch_millis(millis)?);
        Ok(())
    }

    /// Reset both controls and the cache to the current time.
    pub fn reset(&mut self) {
        self.set_timestamp(Timestamp::now());
    }

    /// Push a date into the date control, keeping the time.
    pub fn update_date(&mut self, date: DateFields) {
        self.date_control.update_date(date);
        let shown = self.timestamp().with_date(self.date_control.date());
        commit(&self.timestamp, &self.timestamp_changed, shown);
    }

    /// Push a time into the time control, keeping the date.
    pub fn update_time(&mut self, time: TimeFields) {
        self.time_control.update_time(time);
        let shown = self.timestamp().with_time(self.time_control.time());
        commit(&self.timestamp, &self.timestamp_changed, shown);
    }

    // =========================================================================
    // Control Events
    // =========================================================================

    /// Handle a user edit in the date control.
    ///
    /// The date half of the cache is replaced; the time half is kept. The time
    /// control is not touched. Controls wired through
    /// [`DateControl::date_changed`] call this automatically.
    ///
    /// This is the entry point for a change the date control has already
    /// made. It does not move the control, so calling it directly with a date
    /// the control does not show leaves the two out of step. To change the
    /// date from code, use [`update_date`](Self::update_date).
    pub fn on_date_control_changed(&self, date: DateFields) {
        apply_date(&self.timestamp, &self.timestamp_changed, date);
    }

    /// Handle a user edit in the time control.
    ///
    /// The time half of the cache is replaced; the date half is kept. Like
    /// [`on_date_control_changed`](Self::on_date_control_changed) this does
    /// not move the control; use [`update_time`](Self::update_time) to change
    /// the time from code.
    pub fn on_time_control_changed(&self, time: TimeFields) {
        apply_time(&self.timestamp, &self.timestamp_changed, time);
    }

    // =========================================================================
    // Page Switching
    // =========================================================================

    /// The page in front.
    pub fn visible_view(&self) -> PickerView {
        self.visible.get()
    }

    /// Whether a trigger currently accepts clicks.
    pub fn is_trigger_enabled(&self, trigger: PickerTrigger) -> bool {
        self.trigger_button(trigger).is_enabled()
    }

    /// The button behind a trigger.
    pub fn trigger_button(&self, trigger: PickerTrigger) -> &TriggerButton {
        match trigger {
            PickerTrigger::ShowDate => &self.show_date,
            PickerTrigger::ShowTime => &self.show_time,
        }
    }

    /// Press a trigger button.
    ///
    /// Returns `false` without doing anything while the trigger is disabled.
    pub fn click(&mut self, trigger: PickerTrigger) -> bool {
        if !self.trigger_button(trigger).click() {
            tracing::trace!(target: targets::PICKER, ?trigger, "click on disabled trigger ignored");
            return false;
        }
        self.toggle_view(trigger);
        true
    }

    /// Bring the page named by `trigger` to the front.
    ///
    /// Disables `trigger`, enables the other one, and slides the pages. Does
    /// nothing if that page is already in front.
    pub fn toggle_view(&mut self, trigger: PickerTrigger) {
        let target = trigger.target();
        if self.visible.get() == target {
            tracing::trace!(target: targets::PICKER, ?target, "page already visible");
            return;
        }

        match trigger {
            PickerTrigger::ShowDate => {
                let (out_slide, in_slide) = (
                    self.slide(AnimationKind::SlideOutRight),
                    self.slide(AnimationKind::SlideInLeft),
                );
                self.show_date.set_enabled(false);
                self.switcher.set_out_animation(out_slide);
                self.switcher.set_in_animation(in_slide);
                self.show_time.set_enabled(true);
                self.switcher.show_previous();
            }
            PickerTrigger::ShowTime => {
                let (out_slide, in_slide) = (
                    self.slide(AnimationKind::SlideOutLeft),
                    self.slide(AnimationKind::SlideInRight),
                );
                self.show_time.set_enabled(false);
                self.switcher.set_out_animation(out_slide);
                self.switcher.set_in_animation(in_slide);
                self.show_date.set_enabled(true);
                self.switcher.show_next();
            }
        }

        self.visible.set(target);
        tracing::debug!(target: targets::PICKER, view = ?target, "page switched");
        self.view_changed.emit(target);
    }

    /// Set slide length and easing.
    pub fn set_transition(&mut self, duration: Duration, easing: Easing) {
        self.transition_duration = duration;
        self.transition_easing = easing;
    }

    fn slide(&self, kind: AnimationKind) -> Animation {
        Animation::new(kind)
            .with_duration(self.transition_duration)
            .with_easing(self.transition_easing)
    }

    // =========================================================================
    // Date Bounds
    // =========================================================================

    /// The earliest selectable date, or `None` when unbounded.
    pub fn min_date(&self) -> Option<Timestamp> {
        self.min_date.get()
    }

    /// Set or clear the earliest selectable date.
    ///
    /// The date control enforces the bound; if that moves the shown date,
    /// the cache follows.
    pub fn set_min_date(&mut self, bound: Option<Timestamp>) {
        self.min_date.set(bound);
        self.date_control.set_min_date(bound);
        self.sync_date_from_control();
    }

    /// The latest selectable date, or `None` when unbounded.
    pub fn max_date(&self) -> Option<Timestamp> {
        self.max_date.get()
    }

    /// Set or clear the latest selectable date.
    pub fn set_max_date(&mut self, bound: Option<Timestamp>) {
        self.max_date.set(bound);
        self.date_control.set_max_date(bound);
        self.sync_date_from_control();
    }

    fn sync_date_from_control(&self) {
        let shown = self.date_control.date();
        let cached = self.timestamp();
        if cached.date_fields() != shown {
            tracing::debug!(target: targets::PICKER, date = %shown, "date moved into bounds");
            commit(&self.timestamp, &self.timestamp_changed, cached.with_date(shown));
        }
    }

    // =========================================================================
    // Hour Format
    // =========================================================================

    /// Switch the time control between 24-hour and 12-hour display.
    pub fn set_hour_format_24(&mut self, use_24_hour: bool) {
        self.time_control.set_hour_format_24(use_24_hour);
    }

    /// Whether the time control displays 24-hour time.
    pub fn is_hour_format_24(&self) -> bool {
        self.time_control.is_hour_format_24()
    }

    // =========================================================================
    // Controls
    // =========================================================================

    /// The date control.
    pub fn date_control(&self) -> &D {
        &self.date_control
    }

    /// Mutable access to the date control.
    ///
    /// User-style edits made through the control emit its change signal and
    /// update the cache. Silent programmatic updates should go through
    /// [`update_date`](Self::update_date) instead.
    pub fn date_control_mut(&mut self) -> &mut D {
        &mut self.date_control
    }

    /// The time control.
    pub fn time_control(&self) -> &T {
        &self.time_control
    }

    /// Mutable access to the time control. See [`date_control_mut`](Self::date_control_mut).
    pub fn time_control_mut(&mut self) -> &mut T {
        &mut self.time_control
    }

    /// The view switcher.
    pub fn view_switcher(&self) -> &S {
        &self.switcher
    }
}

impl<D, T, S> Drop for DateTimePicker<D, T, S>
where
    D: DateControl,
    T: TimeControl,
    S: ViewSwitcher,
{
    fn drop(&mut self) {
        // Host controls may outlive the picker
        let results = [
            self.date_control.date_changed().try_disconnect(self.date_connection),
            self.time_control.time_changed().try_disconnect(self.time_connection),
        ];
        for result in results {
            if let Err(err) = result {
                tracing::warn!(target: targets::PICKER, %err, "control slot was already gone");
            }
        }
    }
}

/// Store `next` and notify if it differs from the cache.
fn commit(cache: &Property<Timestamp>, notify: &Signal<Timestamp>, next: Timestamp) {
    if cache.set(next) {
        tracing::trace!(target: targets::PICKER, timestamp = %next, "timestamp changed");
        notify.emit(next);
    }
}

fn apply_date(cache: &Property<Timestamp>, notify: &Signal<Timestamp>, date: DateFields) {
    commit(cache, notify, cache.get().with_date(date));
}

fn apply_time(cache: &Property<Timestamp>, notify: &Signal<Timestamp>, time: TimeFields) {
    commit(cache, notify, cache.get().with_time(time));
}

static_assertions::assert_impl_all!(DateTimePicker: Send, Sync);
