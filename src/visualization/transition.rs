use std::time::Duration;

use super::AtomRadii;
use crate::util::easing::Easing;

/// Eased animation between two radius tables, e.g. when switching from
/// ball-and-stick to space-filling.
///
/// Time is supplied by the caller so the transition can be driven by any
/// frame clock.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiiTransition {
    from: AtomRadii,
    to: AtomRadii,
    duration: Duration,
    easing: Easing,
}

impl RadiiTransition {
    /// Default transition length.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    /// Transition from `from` to `to` over [`Self::DEFAULT_DURATION`].
    #[must_use]
    pub fn new(from: AtomRadii, to: AtomRadii) -> Self {
        Self {
            from,
            to,
            duration: Self::DEFAULT_DURATION,
            easing: Easing::DEFAULT,
        }
    }

    /// Override the duration. A zero duration jumps straight to the
    /// target.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Override the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]` after `elapsed`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Radii after `elapsed`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> AtomRadii {
        let t = self.easing.apply(self.progress(elapsed));
        AtomRadii::interpolated(&self.from, &self.to, t)
    }

    /// Whether `elapsed` has reached the end of the transition.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Target radii.
    #[must_use]
    pub fn target(&self) -> &AtomRadii {
        &self.to
    }
}
