use folio_core::{ArcProfile, CarouselConfig, Easing, WrapMode};
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    constants::{
        CONFIG_JSON_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_CANDIDATES,
        DEFAULT_ITEM_COUNT, DEFAULT_VIEWPORT_WIDTH,
    },
    loader::{ConfigLoader, error::ConfigLoadError},
};

/// Source that produced the carousel settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CarouselConfigSource {
    #[default]
    Default,
    /// Path handed in directly, e.g. `--config`.
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl fmt::Display for CarouselConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "built-in defaults"),
            Self::Explicit(path) => write!(f, "{}", path.display()),
            Self::EnvPath(path) => {
                write!(f, "{} ({CONFIG_PATH_ENV})", path.display())
            }
            Self::EnvInline => write!(f, "{CONFIG_JSON_ENV}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Baseline the remaining settings are layered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselPreset {
    /// Wide wrap-around hero carousel.
    #[default]
    Theater,
    /// Bounded arc with a viewport-sized radius.
    Arc,
}

/// User-facing carousel settings. Every field is optional; anything left
/// out falls back to the preset, and sizes fall back to values derived
/// from `viewport_width`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    pub preset: CarouselPreset,
    /// Number of cards on the track. Hosts that know their list replace
    /// this before building the engine.
    pub item_count: usize,
    /// Used to pick a card width and arc radius when those are not given.
    pub viewport_width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_radius: Option<f32>,
    /// Per-frame velocity multiplier after release. Must stay below 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction: Option<f32>,
    /// Pointer travel (px) before a press becomes a drag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag_threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_velocity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scroll: Option<bool>,
    /// Idle drift in px per frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scroll_speed: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_easing: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_mode: Option<WrapMode>,
    pub profile: ArcProfile,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            preset: CarouselPreset::default(),
            item_count: DEFAULT_ITEM_COUNT,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            item_width: None,
            arc_radius: None,
            friction: None,
            drag_threshold: None,
            stop_velocity: None,
            auto_scroll: None,
            auto_scroll_speed: None,
            snap_duration_ms: None,
            snap_easing: None,
            wrap_mode: None,
            profile: ArcProfile::default(),
        }
    }
}

impl CarouselSettings {
    /// Resolve the settings into an engine config. No validation happens
    /// here; see [`ConfigLoader::load`].
    pub fn to_config(&self) -> CarouselConfig {
        let item_width = self.item_width.unwrap_or_else(|| {
            CarouselConfig::responsive_item_width(self.viewport_width)
        });

        let mut config = match self.preset {
            CarouselPreset::Theater => {
                CarouselConfig::theater_defaults(self.item_count, item_width)
            }
            CarouselPreset::Arc => {
                let mut config =
                    CarouselConfig::arc_defaults(self.item_count, item_width);
                config.arc_radius =
                    CarouselConfig::responsive_arc_radius(self.viewport_width);
                config
            }
        };

        if let Some(radius) = self.arc_radius {
            config.arc_radius = radius;
        }
        if let Some(friction) = self.friction {
            config.friction = friction;
        }
        if let Some(threshold) = self.drag_threshold {
            config.drag_threshold = threshold;
        }
        if let Some(stop) = self.stop_velocity {
            config.stop_velocity = stop;
        }
        if let Some(enabled) = self.auto_scroll {
            config.auto_scroll = enabled;
        }
        if let Some(speed) = self.auto_scroll_speed {
            config.auto_scroll_speed = speed;
        }
        if let Some(ms) = self.snap_duration_ms {
            config.snap_duration = Duration::from_millis(ms);
        }
        if let Some(easing) = self.snap_easing {
            config.snap_easing = easing;
        }
        if let Some(mode) = self.wrap_mode {
            config.wrap_mode = mode;
        }
        config.profile = self.profile;
        config
    }

    /// Load carousel settings using environment variables.
    /// Evaluation order:
    /// 1) `$FOLIO_CAROUSEL_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$FOLIO_CAROUSEL_CONFIG_JSON` (inline JSON),
    /// 3) the first default file found in the working directory,
    /// 4) defaults if none of the above is present.
    pub fn load_from_env()
    -> Result<(Self, CarouselConfigSource), ConfigLoadError> {
        ConfigLoader::new().resolve_settings()
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let origin = path.display().to_string();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents).map_err(|err| {
                ConfigLoadError::Parse {
                    origin,
                    message: err.to_string(),
                }
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    ConfigLoadError::Parse {
                        origin,
                        message: err.to_string(),
                    }
                })
            }
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        // Try TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                ConfigLoadError::Parse {
                    origin: origin.to_string(),
                    message: format!(
                        "toml error: {toml_err}; json error: {json_err}"
                    ),
                }
            })
        })
    }

    pub fn parse_json(raw: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|err| ConfigLoadError::Parse {
            origin: CONFIG_JSON_ENV.to_string(),
            message: err.to_string(),
        })
    }

    /// First default config file under `root`, if any.
    pub fn find_default_file(root: &Path) -> Option<PathBuf> {
        DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.is_file())
    }

    /// Render as TOML, e.g. to seed a config file.
    pub fn to_toml(&self) -> Result<String, ConfigLoadError> {
        toml::to_string_pretty(self).map_err(|err| ConfigLoadError::Parse {
            origin: "carousel settings".to_string(),
            message: err.to_string(),
        })
    }
}
