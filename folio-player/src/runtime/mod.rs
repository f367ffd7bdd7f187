//! Host side of the carousel: the frame loop and the input surface that
//! feeds it.

pub mod handle;
pub mod scheduler;

pub use handle::CarouselHandle;
pub use scheduler::{
    DEFAULT_FRAME_INTERVAL, FrameObserver, FrameScheduler, frame_now,
};
