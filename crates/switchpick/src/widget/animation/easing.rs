//! Easing curves for view transitions.

use serde::{Deserialize, Serialize};

/// Rate-of-change curve applied to a transition's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic, starts slow.
    EaseIn,
    /// Quadratic, ends slow.
    EaseOut,
    /// Quadratic, slow at both ends.
    #[default]
    EaseInOut,
    /// Cubic, ends slow. Closest to the stock slide animations on mobile.
    Decelerate,
}

impl Easing {
    /// Map linear progress `t` (clamped to 0.0..=1.0) through this curve.
    ///
    /// ```
    /// use switchpick::widget::animation::Easing;
    ///
    /// assert_eq!(Easing::Linear.apply(0.5), 0.5);
    /// assert!(Easing::EaseIn.apply(0.5) < 0.5);
    /// assert!(Easing::Decelerate.apply(0.5) > 0.5);
    /// ```
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Decelerate => 1.0 - (1.0 - t).powi(3),
        }
    }
}
