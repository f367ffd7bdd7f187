pub mod error;

use std::{
    collections::HashMap,
    env,
    path::PathBuf,
};

use folio_core::CarouselConfig;
use tracing::{debug, info, warn};

use crate::{
    constants::{CONFIG_JSON_ENV, CONFIG_PATH_ENV},
    models::carousel::{CarouselConfigSource, CarouselSettings},
    validation::{self, ConfigWarnings},
};

use self::error::ConfigLoadError;

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub settings: CarouselSettings,
    pub config: CarouselConfig,
    pub source: CarouselConfigSource,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone)]
enum EnvSource {
    Process,
    Fixed(HashMap<String, String>),
}

/// Locates, parses and validates carousel configuration.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    search_root: PathBuf,
    item_count: Option<usize>,
    env: EnvSource,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            explicit_path: None,
            search_root: PathBuf::from("."),
            item_count: None,
            env: EnvSource::Process,
        }
    }

    /// Load this file and skip every other source.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    /// Directory the default config files are looked up in.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    /// Override the configured item count with the length of the host's
    /// actual list.
    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = Some(count);
        self
    }

    /// Read environment variables from `vars` instead of the process
    /// environment.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = EnvSource::Fixed(
            vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        );
        self
    }

    fn var(&self, key: &str) -> Option<String> {
        let value = match &self.env {
            EnvSource::Process => env::var(key).ok(),
            EnvSource::Fixed(vars) => vars.get(key).cloned(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Find and parse settings without resolving them.
    ///
    /// Order: explicit path, `$FOLIO_CAROUSEL_CONFIG_PATH`,
    /// `$FOLIO_CAROUSEL_CONFIG_JSON`, default files under the search root,
    /// then built-in defaults.
    pub fn resolve_settings(
        &self,
    ) -> Result<(CarouselSettings, CarouselConfigSource), ConfigLoadError> {
        if let Some(path) = &self.explicit_path {
            let settings = CarouselSettings::load_from_file(path)?;
            return Ok((settings, CarouselConfigSource::Explicit(path.clone())));
        }

        if let Some(path_str) = self.var(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path_str);
            let settings = CarouselSettings::load_from_file(&path)?;
            return Ok((settings, CarouselConfigSource::EnvPath(path)));
        }

        if let Some(raw) = self.var(CONFIG_JSON_ENV) {
            let settings = CarouselSettings::parse_json(&raw)?;
            return Ok((settings, CarouselConfigSource::EnvInline));
        }

        if let Some(path) = CarouselSettings::find_default_file(&self.search_root)
        {
            let settings = CarouselSettings::load_from_file(&path)?;
            return Ok((settings, CarouselConfigSource::File(path)));
        }

        Ok((CarouselSettings::default(), CarouselConfigSource::Default))
    }

    /// Resolve, validate and collect warnings.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (mut settings, source) = self.resolve_settings()?;
        if let Some(count) = self.item_count {
            settings.item_count = count;
        }
        debug!(%source, preset = ?settings.preset, "carousel settings resolved");

        let config = settings.to_config();
        config.validate()?;

        let warnings = validation::check(&config);
        for warning in warnings.iter() {
            warn!(
                hint = warning.hint.as_deref().unwrap_or(""),
                "{}",
                warning.message
            );
        }

        info!(
            %source,
            items = config.item_count,
            item_width = config.item_width,
            wrap_mode = ?config.wrap_mode,
            "carousel config loaded"
        );

        Ok(ConfigLoad {
            settings,
            config,
            source,
            warnings,
        })
    }
}
