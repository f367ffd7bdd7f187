//! Time-based tween animator for snapping to a target offset

use std::time::{Duration, Instant};

use super::easing::Easing;

/// One sample of a running snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSample {
    pub offset: f32,
    pub finished: bool,
}

/// Tween from one offset to another over a fixed wall-clock duration.
///
/// Progress is re-derived from elapsed time on every sample, so dropped or
/// late frames never slow the animation down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnimator {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl SnapAnimator {
    pub fn start(
        from: f32,
        to: f32,
        started_at: Instant,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: Instant) -> SnapSample {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return SnapSample {
                offset: self.to,
                finished: true,
            };
        }
        let eased = self.easing.apply(self.progress(now));
        SnapSample {
            offset: self.from + (self.to - self.from) * eased,
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_exactly_on_target() {
        let t0 = Instant::now();
        let snap = SnapAnimator::start(
            12.5,
            -310.0,
            t0,
            Duration::from_millis(300),
            Easing::EaseOutCubic,
        );
        let end = snap.sample(t0 + Duration::from_millis(300));
        assert_eq!(end.offset, -310.0);
        assert!(end.finished);
        // Late frames clamp to the target as well.
        let late = snap.sample(t0 + Duration::from_secs(5));
        assert_eq!(late.offset, -310.0);
    }

    #[test]
    fn progress_follows_wall_clock() {
        let t0 = Instant::now();
        let snap = SnapAnimator::start(
            0.0,
            100.0,
            t0,
            Duration::from_millis(400),
            Easing::Linear,
        );
        let quarter = snap.sample(t0 + Duration::from_millis(100));
        assert!((quarter.offset - 25.0).abs() < 1e-3);
        assert!(!quarter.finished);
        assert_eq!(snap.sample(t0).offset, 0.0);
    }
}
