//! Carousel configuration for Folio.
//!
//! Settings are read from a TOML or JSON file (or inline JSON in the
//! environment), resolved against a preset and the viewport width, and
//! validated into a [`folio_core::CarouselConfig`]. Hard precondition
//! violations fail the load; questionable but legal values come back as
//! [`ConfigWarnings`].

#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::carousel::{
    CarouselConfigSource, CarouselPreset, CarouselSettings,
};
pub use validation::{ConfigWarning, ConfigWarnings};
