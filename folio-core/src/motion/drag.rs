//! Pointer drag tracking with click-vs-drag disambiguation.

/// Live state between a pointer-down and its matching up/cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_x: f32,
    /// Scroll offset when the pointer went down.
    pub start_offset: f32,
    pub last_x: f32,
    /// Instantaneous velocity (px/frame) from the latest move.
    pub velocity: f32,
    /// Set once the pointer has travelled past the drag threshold. Stays set
    /// for the rest of the session.
    pub engaged: bool,
}

impl DragSession {
    pub fn new(pointer_x: f32, start_offset: f32) -> Self {
        Self {
            start_x: pointer_x,
            start_offset,
            last_x: pointer_x,
            velocity: 0.0,
            engaged: false,
        }
    }

    /// Feed a pointer move. Returns the new scroll offset once the session
    /// is engaged, `None` while it is still a potential click.
    pub fn update(&mut self, pointer_x: f32, threshold: f32) -> Option<f32> {
        let travel = pointer_x - self.start_x;
        if !self.engaged && travel.abs() > threshold {
            self.engaged = true;
        }
        if !self.engaged {
            return None;
        }
        self.velocity = pointer_x - self.last_x;
        self.last_x = pointer_x;
        Some(self.start_offset + travel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_moves_stay_a_click() {
        let mut session = DragSession::new(100.0, 0.0);
        assert_eq!(session.update(110.0, 15.0), None);
        assert_eq!(session.update(85.0, 15.0), None);
        assert!(!session.engaged);
        assert_eq!(session.velocity, 0.0);
    }

    #[test]
    fn engages_past_threshold_and_tracks_velocity() {
        let mut session = DragSession::new(100.0, 40.0);
        assert_eq!(session.update(120.0, 15.0), Some(60.0));
        assert!(session.engaged);
        assert_eq!(session.velocity, 20.0);
        assert_eq!(session.update(126.0, 15.0), Some(66.0));
        assert_eq!(session.velocity, 6.0);
        // Coming back inside the threshold keeps dragging.
        assert_eq!(session.update(101.0, 15.0), Some(41.0));
        assert_eq!(session.velocity, -25.0);
    }
}
