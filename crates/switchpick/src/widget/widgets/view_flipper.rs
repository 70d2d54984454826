//! ViewFlipper container implementation.
//!
//! This module provides [`ViewFlipper`], a headless switcher that keeps a list
//! of views and shows one of them at a time, with separate enter and exit
//! animations.
//!
//! # Example
//!
//! ```
//! use switchpick::widget::controls::{PickerView, ViewSwitcher};
//! use switchpick::widget::widgets::ViewFlipper;
//!
//! let mut flipper = ViewFlipper::new();
//! flipper.add_view(PickerView::Date);
//! flipper.add_view(PickerView::Time);
//!
//! flipper.current_changed.connect(|&index| {
//!     println!("Switched to page: {}", index);
//! });
//!
//! flipper.show_next();
//! assert_eq!(flipper.current_view(), Some(PickerView::Time));
//! ```
//!
//! A renderer plays back the most recent change from [`ViewFlipper::last_transition`]:
//!
//! ```
//! use std::time::Duration;
//! use switchpick::widget::animation::{Animation, AnimationKind};
//! use switchpick::widget::controls::{PickerView, ViewSwitcher};
//! use switchpick::widget::widgets::ViewFlipper;
//!
//! let mut flipper = ViewFlipper::new();
//! flipper.add_view(PickerView::Date);
//! flipper.add_view(PickerView::Time);
//! flipper.set_out_animation(Animation::new(AnimationKind::SlideOutLeft));
//! flipper.set_in_animation(Animation::new(AnimationKind::SlideInRight));
//! flipper.show_next();
//!
//! let page_width = 320.0;
//! let transition = flipper.last_transition().unwrap();
//! let elapsed = Duration::from_millis(150);
//! let leaving_x = page_width
//!     * transition.out_animation.kind().offset_fraction(transition.out_animation.progress_at(elapsed));
//! let entering_x = page_width
//!     * transition.in_animation.kind().offset_fraction(transition.in_animation.progress_at(elapsed));
//!
//! // Both pages move left together
//! assert!(leaving_x < 0.0 && entering_x > 0.0);
//! assert!((entering_x - leaving_x - page_width).abs() < 1e-3);
//! ```

use switchpick_core::Signal;
use switchpick_core::logging::targets;

use crate::widget::animation::Animation;
use crate::widget::controls::{PickerView, ViewSwitcher};

/// The last page change, with the animations configured at the time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransition {
    /// Index that left.
    pub from_index: usize,
    /// Index that entered.
    pub to_index: usize,
    /// Animation for the entering page.
    pub in_animation: Animation,
    /// Animation for the leaving page.
    pub out_animation: Animation,
}

/// A container that displays one registered view at a time.
///
/// # Signals
///
/// - `current_changed(usize)`: Emitted when the current page changes
pub struct ViewFlipper {
    /// Registered pages, in order.
    pages: Vec<PickerView>,

    /// Index of the page in front.
    current: usize,

    /// Animation for the page that comes to the front.
    in_animation: Animation,

    /// Animation for the page that leaves.
    out_animation: Animation,

    /// Most recent page change.
    last_transition: Option<PageTransition>,

    /// Signal emitted when current page changes.
    pub current_changed: Signal<usize>,
}

impl ViewFlipper {
    /// Create an empty flipper.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: 0,
            in_animation: Animation::none(),
            out_animation: Animation::none(),
            last_transition: None,
            current_changed: Signal::new(),
        }
    }

    /// Number of pages.
    pub fn count(&self) -> usize {
        self.pages.len()
    }

    /// Check if no pages are registered.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Index of the page in front. Zero when empty.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Bring the page at `index` to the front.
    ///
    /// Returns `false` for an out-of-range index.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index >= self.pages.len() {
            return false;
        }
        if index != self.current {
            let from_index = self.current;
            self.current = index;
            self.last_transition = Some(PageTransition {
                from_index,
                to_index: index,
                in_animation: self.in_animation,
                out_animation: self.out_animation,
            });
            tracing::trace!(target: targets::CONTROLS, from_index, to_index = index, "page changed");
            self.current_changed.emit(index);
        }
        true
    }

    /// Index of `view`, if registered.
    pub fn index_of(&self, view: PickerView) -> Option<usize> {
        self.pages.iter().position(|&page| page == view)
    }

    /// Animation used for the entering page.
    pub fn in_animation(&self) -> Animation {
        self.in_animation
    }

    /// Animation used for the leaving page.
    pub fn out_animation(&self) -> Animation {
        self.out_animation
    }

    /// The most recent page change, for a renderer to play back.
    pub fn last_transition(&self) -> Option<PageTransition> {
        self.last_transition
    }
}

impl Default for ViewFlipper {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSwitcher for ViewFlipper {
    fn add_view(&mut self, view: PickerView) -> usize {
        self.pages.push(view);
        self.pages.len() - 1
    }

    fn current_view(&self) -> Option<PickerView> {
        self.pages.get(self.current).copied()
    }

    fn show_next(&mut self) {
        if !self.pages.is_empty() {
            self.set_current_index((self.current + 1) % self.pages.len());
        }
    }

    fn show_previous(&mut self) {
        if !self.pages.is_empty() {
            let len = self.pages.len();
            self.set_current_index((self.current + len - 1) % len);
        }
    }

    fn set_in_animation(&mut self, animation: Animation) {
        self.in_animation = animation;
    }

    fn set_out_animation(&mut self, animation: Animation) {
        self.out_animation = animation;
    }
}

static_assertions::assert_impl_all!(ViewFlipper: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::animation::AnimationKind;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn two_pages() -> ViewFlipper {
        let mut flipper = ViewFlipper::new();
        assert_eq!(flipper.add_view(PickerView::Date), 0);
        assert_eq!(flipper.add_view(PickerView::Time), 1);
        flipper
    }

    #[test]
    fn test_empty_flipper() {
        let mut flipper = ViewFlipper::new();
        assert!(flipper.is_empty());
        assert_eq!(flipper.current_view(), None);
        flipper.show_next();
        flipper.show_previous();
        assert_eq!(flipper.current_index(), 0);
        assert!(!flipper.set_current_index(0));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut flipper = two_pages();
        assert_eq!(flipper.current_view(), Some(PickerView::Date));

        flipper.show_next();
        assert_eq!(flipper.current_view(), Some(PickerView::Time));
        flipper.show_next();
        assert_eq!(flipper.current_view(), Some(PickerView::Date));
        flipper.show_previous();
        assert_eq!(flipper.current_view(), Some(PickerView::Time));
    }

    #[test]
    fn test_current_changed_signal() {
        let mut flipper = two_pages();
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        flipper.current_changed.connect(move |&i| received_clone.lock().push(i));

        flipper.set_current_index(0);
        flipper.set_current_index(1);
        flipper.show_previous();

        assert_eq!(*received.lock(), vec![1, 0]);
    }

    #[test]
    fn test_transition_records_animations() {
        let mut flipper = two_pages();
        flipper.set_in_animation(Animation::new(AnimationKind::SlideInRight));
        flipper.set_out_animation(Animation::new(AnimationKind::SlideOutLeft));
        assert_eq!(flipper.last_transition(), None);

        flipper.show_next();
        let transition = flipper.last_transition().unwrap();
        assert_eq!((transition.from_index, transition.to_index), (0, 1));
        assert_eq!(transition.in_animation.kind(), AnimationKind::SlideInRight);
        assert_eq!(transition.out_animation.kind(), AnimationKind::SlideOutLeft);
        assert_eq!(flipper.index_of(PickerView::Time), Some(1));
    }
}
