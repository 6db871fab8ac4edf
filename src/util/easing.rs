//! Easing curves for radius and color transitions.

use serde::{Deserialize, Serialize};

/// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No easing.
    Linear,
    /// Fast start, slow end.
    QuadraticOut,
    /// Slow start and end.
    SmoothStep,
    /// Cubic Bezier with fixed end points 0 and 1 and inner controls
    /// `c1`, `c2`: `c1·3t(1-t)² + c2·3(1-t)t² + t³`.
    CubicHermite {
        /// First inner control value.
        c1: f32,
        /// Second inner control value.
        c2: f32,
    },
}

impl Easing {
    /// Gentle ease-out used when nothing else is configured.
    pub const DEFAULT: Self = Self::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate at `t`, clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let rest = 1.0 - t;
                1.0 - rest * rest
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::CubicHermite { c1, c2 } => {
                let rest = 1.0 - t;
                c1 * 3.0 * t * rest * rest + c2 * 3.0 * rest * t * t + t * t * t
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
