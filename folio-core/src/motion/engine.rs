//! CarouselMotion: owner of the scroll offset and its single active driver

use std::time::Instant;

use tracing::debug;

use super::animator::SnapAnimator;
use super::drag::DragSession;
use super::geometry::{self, clamp_offset};
use super::kinetic::Momentum;
use super::transform::{CardTransform, card_transform_at};
use super::types::{CarouselConfig, Direction, WrapMode};
use crate::error::Result;

/// Below this distance (px) a snap is skipped and the offset is written
/// directly.
const SNAP_EPSILON: f32 = 1e-3;

/// What is currently driving the scroll offset.
///
/// Idle doubles as auto-scroll: when auto-scroll is enabled and nothing is
/// hovering the carousel, idle frames drift the offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionState {
    Idle,
    /// Pointer is down. Only moves the offset once the session engages.
    Pressed(DragSession),
    /// Post-release momentum.
    Kinetic(Momentum),
    /// Timed tween toward a card.
    Snap { animator: SnapAnimator, index: usize },
}

impl MotionState {
    pub fn label(&self) -> &'static str {
        match self {
            MotionState::Idle => "idle",
            MotionState::Pressed(_) => "pressed",
            MotionState::Kinetic(_) => "kinetic",
            MotionState::Snap { .. } => "snap",
        }
    }
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Pointer never passed the drag threshold. The caller decides what a
    /// click means; the engine does nothing.
    Click,
    /// Drag released with enough speed to coast.
    Fling { velocity: f32 },
    /// Drag released without meaningful speed.
    Settled,
    /// No press was active.
    Ignored,
}

/// The carousel motion engine.
#[derive(Debug, Clone)]
pub struct CarouselMotion {
    config: CarouselConfig,
    scroll_offset: f32,
    hovered: bool,
    state: MotionState,
}

impl CarouselMotion {
    /// Create an engine at offset 0. An empty track is accepted and simply
    /// never moves.
    pub fn new(config: CarouselConfig) -> Result<Self> {
        config.validate_motion()?;
        Ok(Self {
            config,
            scroll_offset: 0.0,
            hovered: false,
            state: MotionState::Idle,
        })
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.config.item_count
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// True once a press has turned into a drag. Renderers use this to
    /// suppress click actions and switch the cursor.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, MotionState::Pressed(session) if session.engaged)
    }

    /// Whether idle frames currently drift the offset.
    pub fn is_auto_scrolling(&self) -> bool {
        matches!(self.state, MotionState::Idle)
            && self.config.auto_scroll
            && !self.hovered
            && self.config.item_count > 0
            && !self.drift_blocked()
    }

    /// Clamped tracks stop drifting once the bound in the drift direction
    /// is reached.
    fn drift_blocked(&self) -> bool {
        let speed = self.config.auto_scroll_speed;
        match geometry::scroll_bounds(&self.config) {
            Some((min, max)) => {
                (speed > 0.0 && self.scroll_offset >= max)
                    || (speed < 0.0 && self.scroll_offset <= min)
            }
            None => speed == 0.0,
        }
    }

    /// Whether the host must keep delivering frames.
    pub fn needs_frames(&self) -> bool {
        match self.state {
            MotionState::Kinetic(_) | MotionState::Snap { .. } => true,
            MotionState::Idle => self.is_auto_scrolling(),
            MotionState::Pressed(_) => false,
        }
    }

    fn transition(&mut self, next: MotionState) {
        let prev = self.state.label();
        if prev != next.label() {
            debug!(
                from = prev,
                to = next.label(),
                offset = self.scroll_offset,
                "carousel motion transition"
            );
        }
        self.state = next;
    }

    /// Circular offsets are folded into one lap so drift never runs out of
    /// `f32` precision; clamped offsets are held inside the bounds.
    fn set_offset(&mut self, offset: f32) -> bool {
        let next = match self.config.wrap_mode {
            WrapMode::Circular => {
                geometry::wrap_offset(offset, self.config.track_length())
            }
            WrapMode::Clamped => clamp_offset(&self.config, offset),
        };
        let changed = next != self.scroll_offset;
        self.scroll_offset = next;
        changed
    }

    /// Jump straight to an offset, cancelling any animation.
    pub fn jump_to(&mut self, offset: f32) {
        self.transition(MotionState::Idle);
        self.set_offset(offset);
    }

    /// Pointer/touch down. Cancels momentum or a running snap.
    pub fn begin_drag(&mut self, pointer_x: f32) {
        if self.config.item_count == 0 {
            return;
        }
        let session = DragSession::new(pointer_x, self.scroll_offset);
        self.transition(MotionState::Pressed(session));
    }

    /// Pointer/touch move. Returns whether the offset changed.
    pub fn drag_move(&mut self, pointer_x: f32) -> bool {
        let MotionState::Pressed(mut session) = self.state else {
            return false;
        };
        let was_engaged = session.engaged;
        let next = session.update(pointer_x, self.config.drag_threshold);
        self.state = MotionState::Pressed(session);
        if session.engaged && !was_engaged {
            debug!(pointer_x, "drag engaged");
        }
        match next {
            Some(offset) => self.set_offset(offset),
            None => false,
        }
    }

    /// Pointer/touch up. Starts momentum if the press became a drag.
    pub fn end_drag(&mut self) -> DragOutcome {
        let MotionState::Pressed(session) = self.state else {
            return DragOutcome::Ignored;
        };
        if !session.engaged {
            self.transition(MotionState::Idle);
            return DragOutcome::Click;
        }
        let momentum = Momentum::new(
            session.velocity,
            self.config.friction,
            self.config.stop_velocity,
        );
        if momentum.is_moving() {
            debug!(
                velocity = session.velocity,
                projected = momentum.projected_distance(),
                "fling"
            );
            self.transition(MotionState::Kinetic(momentum));
            DragOutcome::Fling {
                velocity: session.velocity,
            }
        } else {
            self.transition(MotionState::Idle);
            DragOutcome::Settled
        }
    }

    /// Pointer cancelled by the platform: drop the session without momentum.
    pub fn cancel_drag(&mut self) {
        if matches!(self.state, MotionState::Pressed(_)) {
            self.transition(MotionState::Idle);
        }
    }

    /// Hover pauses auto-scroll.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Pointer left the carousel: release any press, then un-hover.
    pub fn pointer_leave(&mut self) -> DragOutcome {
        let outcome = self.end_drag();
        self.hovered = false;
        outcome
    }

    /// Animate so that `index` ends up centered.
    ///
    /// Circular tracks take the shorter way round; clamped tracks clamp the
    /// index to the last card.
    pub fn scroll_to_index(&mut self, index: usize, now: Instant) {
        let count = self.config.item_count;
        if count == 0 {
            return;
        }
        let index = match self.config.wrap_mode {
            WrapMode::Circular => index % count,
            WrapMode::Clamped => index.min(count - 1),
        };
        let target =
            geometry::snap_target(&self.config, self.scroll_offset, index);
        if (target - self.scroll_offset).abs() < SNAP_EPSILON {
            self.transition(MotionState::Idle);
            self.set_offset(target);
            return;
        }
        debug!(
            index,
            from = self.scroll_offset,
            to = target,
            "snap to index"
        );
        let animator = SnapAnimator::start(
            self.scroll_offset,
            target,
            now,
            self.config.snap_duration,
            self.config.snap_easing,
        );
        self.transition(MotionState::Snap { animator, index });
    }

    /// Move one card left or right of the current (or pending) center.
    pub fn step(&mut self, direction: Direction, now: Instant) {
        let count = self.config.item_count;
        let Some(base) = self.anchor_index() else {
            return;
        };
        let target = match self.config.wrap_mode {
            WrapMode::Circular => {
                (base as isize + direction.sign()).rem_euclid(count as isize)
                    as usize
            }
            WrapMode::Clamped => match direction {
                Direction::Prev => base.saturating_sub(1),
                Direction::Next => (base + 1).min(count - 1),
            },
        };
        self.scroll_to_index(target, now);
    }

    /// Card nearest the visual center right now.
    pub fn center_index(&self) -> Option<usize> {
        geometry::center_index(&self.config, self.scroll_offset)
    }

    /// Index navigation should be relative to: the snap destination when
    /// one is running, else the current center.
    fn anchor_index(&self) -> Option<usize> {
        match self.state {
            MotionState::Snap { index, .. } => Some(index),
            _ => self.center_index(),
        }
    }

    /// Advance one animation frame. Returns whether the offset changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.config.item_count == 0 {
            return false;
        }
        match self.state {
            MotionState::Idle => {
                if self.is_auto_scrolling() {
                    self.set_offset(
                        self.scroll_offset + self.config.auto_scroll_speed,
                    )
                } else {
                    false
                }
            }
            MotionState::Pressed(_) => false,
            MotionState::Kinetic(mut momentum) => match momentum.step() {
                Some(displacement) => {
                    let wanted = self.scroll_offset + displacement;
                    let changed = self.set_offset(wanted);
                    if clamp_offset(&self.config, wanted) != wanted {
                        // Ran into a bound.
                        momentum.stop();
                        self.transition(MotionState::Idle);
                    } else {
                        self.state = MotionState::Kinetic(momentum);
                    }
                    changed
                }
                None => {
                    self.transition(MotionState::Idle);
                    false
                }
            },
            MotionState::Snap { animator, .. } => {
                let sample = animator.sample(now);
                let changed = self.set_offset(sample.offset);
                if sample.finished {
                    self.transition(MotionState::Idle);
                }
                changed
            }
        }
    }

    /// Replace the item count, e.g. after filtering. Cancels animations and
    /// pulls the offset back inside the new bounds.
    pub fn set_item_count(&mut self, item_count: usize) {
        if item_count == self.config.item_count {
            return;
        }
        self.config.item_count = item_count;
        self.transition(MotionState::Idle);
        self.set_offset(self.scroll_offset);
    }

    /// Transform for one card. Empty tracks yield [`CardTransform::CENTER`]
    /// but callers should skip rendering instead.
    pub fn card_transform(&self, index: usize) -> CardTransform {
        if self.config.item_count == 0 {
            return CardTransform::CENTER;
        }
        card_transform_at(&self.config, index, self.scroll_offset)
    }

    /// Transforms for every card, in index order.
    pub fn card_transforms(
        &self,
    ) -> impl ExactSizeIterator<Item = CardTransform> + '_ {
        (0..self.config.item_count)
            .map(|index| card_transform_at(&self.config, index, self.scroll_offset))
    }
}
