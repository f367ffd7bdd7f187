//! Soft checks on a resolved carousel config.
//!
//! Anything the engine cannot run with is a hard error from
//! [`CarouselConfig::validate`]. The checks here only flag values that are
//! legal but likely to feel wrong.

use folio_core::CarouselConfig;

use crate::constants::{
    FRICTION_WARN_ABOVE, ROTATION_WARN_ABOVE, SNAP_DURATION_COMFORT_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings {
    items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push(&mut self, message: impl Into<String>, hint: Option<String>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

impl IntoIterator for ConfigWarnings {
    type Item = ConfigWarning;
    type IntoIter = std::vec::IntoIter<ConfigWarning>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Collect warnings for a config that already passed hard validation.
pub fn check(config: &CarouselConfig) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if config.friction > FRICTION_WARN_ABOVE {
        warnings.push(
            format!(
                "friction {} decays very slowly; a fling may coast for seconds",
                config.friction
            ),
            Some("0.92 to 0.95 feels natural".to_string()),
        );
    }

    let snap_ms = config.snap_duration.as_millis();
    let comfort = SNAP_DURATION_COMFORT_MS;
    if snap_ms < u128::from(*comfort.start())
        || snap_ms > u128::from(*comfort.end())
    {
        warnings.push(
            format!("snap duration {snap_ms} ms is outside the usual range"),
            Some(format!(
                "use {}-{} ms",
                comfort.start(),
                comfort.end()
            )),
        );
    }

    if config.drag_threshold == 0.0 {
        warnings.push(
            "drag threshold is 0; any pointer jitter turns a click into a drag",
            Some("10 to 15 px keeps card clicks reliable".to_string()),
        );
    }

    if config.auto_scroll && config.auto_scroll_speed == 0.0 {
        warnings.push(
            "auto-scroll is enabled with a speed of 0",
            Some("set auto_scroll = false instead".to_string()),
        );
    }

    if config.profile.max_rotation > ROTATION_WARN_ABOVE {
        warnings.push(
            format!(
                "max rotation {} degrees shows the back of outer cards",
                config.profile.max_rotation
            ),
            None,
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn presets_are_clean() {
        assert!(check(&CarouselConfig::theater_defaults(6, 300.0)).is_empty());
        assert!(check(&CarouselConfig::arc_defaults(6, 300.0)).is_empty());
    }

    #[test]
    fn slow_friction_and_long_snap_warn() {
        let mut config = CarouselConfig::theater_defaults(6, 300.0);
        config.friction = 0.995;
        config.snap_duration = Duration::from_millis(1200);
        let warnings = check(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.message.contains("friction")));
        assert!(warnings.iter().any(|w| w.message.contains("1200 ms")));
    }

    #[test]
    fn comfort_window_is_inclusive() {
        let mut config = CarouselConfig::theater_defaults(6, 300.0);
        config.snap_duration = Duration::from_millis(300);
        assert!(check(&config).is_empty());
        config.snap_duration = Duration::from_millis(299);
        assert_eq!(check(&config).len(), 1);
    }
}
