//! Per-card visual state derived from the scroll offset.

use super::geometry::visual_offset;
use super::types::CarouselConfig;

/// Everything the rendering layer needs to place one card.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardTransform {
    /// Horizontal offset from the visual center, px.
    pub translate_x: f32,
    /// Degrees.
    pub rotate_y: f32,
    /// Always `<= 0`; cards recede as they leave the center.
    pub translate_z: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Blur radius, px.
    pub blur: f32,
    pub brightness: f32,
    pub z_index: i32,
    pub visible: bool,
}

impl CardTransform {
    /// Transform of the centered card.
    pub const CENTER: CardTransform = CardTransform {
        translate_x: 0.0,
        rotate_y: 0.0,
        translate_z: 0.0,
        scale: 1.0,
        opacity: 1.0,
        blur: 0.0,
        brightness: 1.0,
        z_index: 100,
        visible: true,
    };
}

/// Compute the transform for `index` at the given scroll offset.
///
/// Pure and callable at any time. Callers must not pass an empty track.
pub fn card_transform_at(
    config: &CarouselConfig,
    index: usize,
    scroll: f32,
) -> CardTransform {
    let profile = &config.profile;
    let offset = visual_offset(config, index, scroll);

    let normalized = offset / (config.item_width * profile.spread);
    let distance = normalized.abs();
    let visible = distance < profile.visibility_cutoff;

    let rotate_y = (normalized * profile.degrees_per_unit)
        .clamp(-profile.max_rotation, profile.max_rotation);
    let translate_z = -distance * config.arc_radius * profile.depth_ratio;
    let scale = (1.0 - distance * profile.scale_slope).max(profile.scale_floor);
    let opacity = if visible {
        (1.0 - distance * profile.opacity_slope).max(profile.opacity_floor)
    } else {
        0.0
    };
    let blur = (distance * profile.blur_slope).min(profile.blur_cap);
    let brightness =
        (1.0 - distance * profile.brightness_slope).max(profile.brightness_floor);
    let z_index =
        (profile.z_index_base - distance * profile.z_index_slope).round() as i32;

    CardTransform {
        translate_x: offset,
        rotate_y,
        translate_z,
        scale,
        opacity,
        blur,
        brightness,
        z_index,
        visible,
    }
}
