//! Logging facilities for switchpick.
//!
//! switchpick uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Filter by subsystem with the names in [`targets`], for example
//! `RUST_LOG=switchpick::picker=debug`.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "switchpick_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "switchpick_core::signal";
    /// Composite picker target.
    pub const PICKER: &str = "switchpick::picker";
    /// Date, time and switcher controls target.
    pub const CONTROLS: &str = "switchpick::controls";
    /// Configuration loading target.
    pub const CONFIG: &str = "switchpick::config";
    /// Performance spans target.
    pub const PERF: &str = "switchpick::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
