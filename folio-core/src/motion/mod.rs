//! Carousel motion engine
//!
//! A single scroll offset (the virtual camera position along a 1-D track)
//! drives every card on the landing-page carousel. This module owns that
//! offset and everything that mutates it: drag sessions, post-release
//! momentum, idle auto-scroll, and timed snaps to an index. Per-card visual
//! state is never stored; [`transform`] recomputes it from the offset each
//! frame.
//!
//! Exactly one [`MotionState`] drives the offset at a time. Entering a new
//! state replaces the previous one, which is how in-flight animations are
//! cancelled.

pub mod animator;
pub mod drag;
pub mod easing;
pub mod engine;
pub mod geometry;
pub mod kinetic;
pub mod transform;
pub mod types;

pub use animator::{SnapAnimator, SnapSample};
pub use drag::DragSession;
pub use easing::Easing;
pub use engine::{CarouselMotion, DragOutcome, MotionState};
pub use geometry::{
    center_index, item_position, scroll_bounds, shortest_path_delta,
    snap_target, wrap_offset,
};
pub use kinetic::Momentum;
pub use transform::{CardTransform, card_transform_at};
pub use types::{ArcProfile, CarouselConfig, Direction, WrapMode};
