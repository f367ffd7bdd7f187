//! Core library for the Folio portfolio site.
//!
//! The interesting part lives in [`motion`]: the drag/momentum carousel
//! engine that turns a single scroll offset into per-card 3D transforms.
//! [`preview`] and [`query`] carry the small amount of list logic the
//! landing page needs around it.

#![allow(missing_docs)]

pub mod error;
pub mod motion;
pub mod preview;
pub mod query;

pub use error::{MotionError, Result};
pub use motion::{
    ArcProfile, CardTransform, CarouselConfig, CarouselMotion, Direction,
    DragOutcome, Easing, MotionState, WrapMode,
};
pub use preview::{NavKey, PreviewNavigator};
pub use query::PortfolioFilters;
