//! Post-release momentum with per-frame geometric decay.

/// Velocity left over from a drag, decayed by `friction` every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Momentum {
    velocity: f32,
    friction: f32,
    stop_velocity: f32,
}

impl Momentum {
    pub fn new(velocity: f32, friction: f32, stop_velocity: f32) -> Self {
        Self {
            velocity,
            friction,
            stop_velocity,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_moving(&self) -> bool {
        self.velocity.abs() > self.stop_velocity
    }

    /// Advance one frame. Returns the displacement to apply, or `None`
    /// (and zeroes the velocity) once below the stop threshold.
    pub fn step(&mut self) -> Option<f32> {
        if !self.is_moving() {
            self.velocity = 0.0;
            return None;
        }
        let displacement = self.velocity;
        self.velocity *= self.friction;
        Some(displacement)
    }

    /// Halt immediately, e.g. after hitting a track bound.
    pub fn stop(&mut self) {
        self.velocity = 0.0;
    }

    /// Continuous-limit travel `v / (1 - f)`. Upper bound on what
    /// [`step`](Self::step) will actually cover.
    pub fn projected_distance(&self) -> f32 {
        self.velocity / (1.0 - self.friction)
    }

    /// Frames until the velocity drops to the stop threshold.
    pub fn frames_to_rest(&self) -> u32 {
        let speed = self.velocity.abs();
        if speed <= self.stop_velocity {
            return 0;
        }
        let frames = (self.stop_velocity / speed).ln() / self.friction.ln();
        frames.ceil().max(0.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decays_geometrically() {
        let mut momentum = Momentum::new(10.0, 0.5, 0.5);
        assert_eq!(momentum.step(), Some(10.0));
        assert_eq!(momentum.step(), Some(5.0));
        assert_eq!(momentum.step(), Some(2.5));
        assert_eq!(momentum.step(), Some(1.25));
        assert_eq!(momentum.step(), Some(0.625));
        assert_eq!(momentum.step(), None);
        assert_eq!(momentum.velocity(), 0.0);
    }

    #[test]
    fn slow_release_never_moves() {
        let mut momentum = Momentum::new(-0.5, 0.95, 0.5);
        assert!(!momentum.is_moving());
        assert_eq!(momentum.step(), None);
        assert_eq!(momentum.frames_to_rest(), 0);
    }

    #[test]
    fn frames_to_rest_matches_stepping() {
        for friction in [0.5_f32, 0.9, 0.92, 0.95, 0.99] {
            let mut momentum = Momentum::new(-42.0, friction, 0.5);
            let predicted = momentum.frames_to_rest();
            let mut steps: u32 = 0;
            while momentum.step().is_some() {
                steps += 1;
            }
            assert!(
                steps.abs_diff(predicted) <= 1,
                "friction {friction}: predicted {predicted}, stepped {steps}"
            );
        }
    }
}
