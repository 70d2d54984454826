//! Enter/exit animations for views in a switcher.

use std::time::Duration;

use super::Easing;

/// Visual effect used when a view enters or leaves the switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationKind {
    /// Instant switch.
    #[default]
    None,
    /// Cross-fade using opacity.
    Fade,
    /// Enter from the left edge.
    SlideInLeft,
    /// Enter from the right edge.
    SlideInRight,
    /// Leave through the left edge.
    SlideOutLeft,
    /// Leave through the right edge.
    SlideOutRight,
}

impl AnimationKind {
    /// Horizontal offset at `progress`, as a fraction of the view width.
    ///
    /// Negative values are left of the resting position.
    pub fn offset_fraction(self, progress: f32) -> f32 {
        match self {
            AnimationKind::SlideInLeft => progress - 1.0,
            AnimationKind::SlideInRight => 1.0 - progress,
            AnimationKind::SlideOutLeft => -progress,
            AnimationKind::SlideOutRight => progress,
            AnimationKind::None | AnimationKind::Fade => 0.0,
        }
    }
}

/// An animation description handed to a view switcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    kind: AnimationKind,
    duration: Duration,
    easing: Easing,
}

impl Animation {
    /// Default length of a slide.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    /// Create an animation with the default duration and easing.
    pub fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            duration: Self::DEFAULT_DURATION,
            easing: Easing::default(),
        }
    }

    /// An instant switch.
    pub fn none() -> Self {
        Self::new(AnimationKind::None).with_duration(Duration::ZERO)
    }

    /// Set duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set easing using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The visual effect.
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// Total running time.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Easing curve.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Eased progress in 0.0..=1.0 after `elapsed` time.
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || self.kind == AnimationKind::None {
            return 1.0;
        }
        let linear = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(linear)
    }

    /// Whether the animation has finished after `elapsed` time.
    pub fn is_finished_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration || self.kind == AnimationKind::None
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::none()
    }
}
