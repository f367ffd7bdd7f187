//! Environment keys, file names and thresholds shared by the loader and
//! validation.

use std::ops::RangeInclusive;

/// Path to a TOML or JSON carousel config file.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CAROUSEL_CONFIG_PATH";

/// Inline JSON carousel config.
pub const CONFIG_JSON_ENV: &str = "FOLIO_CAROUSEL_CONFIG_JSON";

/// Files probed, relative to the search root, when neither environment
/// variable is set.
pub const DEFAULT_CONFIG_CANDIDATES: &[&str] = &[
    "carousel.toml",
    "carousel.json",
    "config/carousel.toml",
    "config/carousel.json",
];

/// Matches the built-in fallback portfolio.
pub const DEFAULT_ITEM_COUNT: usize = 6;

pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1440.0;

/// Snap durations outside this window feel either abrupt or sluggish.
pub const SNAP_DURATION_COMFORT_MS: RangeInclusive<u64> = 300..=600;

/// Friction above this keeps a fling coasting for several seconds.
pub const FRICTION_WARN_ABOVE: f32 = 0.99;

/// Past a quarter turn the back face of a card shows.
pub const ROTATION_WARN_ABOVE: f32 = 90.0;
