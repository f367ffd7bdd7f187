//! Host for the Folio carousel engine.
//!
//! [`runtime`] owns the frame loop and input surface, [`scene`] turns
//! engine state into CSS-ready frames, and [`script`] replays recorded
//! gestures so motion can be inspected without a browser.

pub mod runtime;
pub mod scene;
pub mod script;

pub use runtime::{CarouselHandle, DEFAULT_FRAME_INTERVAL, FrameScheduler};
pub use scene::{Scene, SceneFrame, SceneRecorder};
pub use script::{GestureScript, ReplaySummary, replay};
