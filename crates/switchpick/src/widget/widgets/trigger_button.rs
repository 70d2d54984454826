//! Trigger button implementation.
//!
//! A [`TriggerButton`] is the minimal button a picker needs: a label, an
//! enabled flag, and a `clicked` signal that only fires while enabled.

use switchpick_core::Signal;

/// A labelled button that can be disabled.
///
/// # Signals
///
/// - `clicked()`: Emitted when the button is clicked while enabled
/// - `enabled_changed(bool)`: Emitted when the enabled state changes
pub struct TriggerButton {
    /// The button's text label.
    text: String,

    /// Whether clicks are accepted.
    enabled: bool,

    /// Signal emitted when the button is clicked.
    pub clicked: Signal<()>,

    /// Signal emitted when the enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl TriggerButton {
    /// Create an enabled button with the given label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: true,
            clicked: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    /// Get the button's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the button's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the button accepts clicks.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the button.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.enabled_changed.emit(enabled);
        }
    }

    /// Click the button.
    ///
    /// Returns `false` and emits nothing while the button is disabled.
    pub fn click(&self) -> bool {
        if !self.enabled {
            return false;
        }
        self.clicked.emit(());
        true
    }
}

static_assertions::assert_impl_all!(TriggerButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_disabled_button_ignores_clicks() {
        let mut button = TriggerButton::new("Time");
        let clicks = Arc::new(AtomicUsize::new(0));
        let clicks_clone = clicks.clone();
        button.clicked.connect(move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(button.click());
        button.set_enabled(false);
        assert!(!button.click());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_enabled_changed_only_on_change() {
        let mut button = TriggerButton::new("Date");
        let changes = Arc::new(AtomicUsize::new(0));
        let changes_clone = changes.clone();
        button.enabled_changed.connect(move |_| {
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.set_enabled(true);
        button.set_enabled(false);
        button.set_enabled(false);
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        button.set_text("Pick date");
        assert_eq!(button.text(), "Pick date");
    }
}
