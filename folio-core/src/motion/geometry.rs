//! Pure track geometry: where cards sit, how offsets wrap, and how far the
//! camera has to move to center a given index.

use super::types::{CarouselConfig, WrapMode};

/// Reduce `raw` into `(-track_length / 2, track_length / 2]`.
///
/// A non-positive track length returns `raw` untouched.
#[inline]
pub fn wrap_offset(raw: f32, track_length: f32) -> f32 {
    if track_length <= 0.0 {
        return raw;
    }
    let wrapped = raw.rem_euclid(track_length);
    if wrapped > track_length / 2.0 {
        wrapped - track_length
    } else {
        wrapped
    }
}

/// Track position of a card's center.
///
/// Circular tracks start card 0 at the origin. Clamped tracks are laid out
/// symmetrically around the origin so the scroll bounds are
/// `±(N - 1) * item_width / 2`.
#[inline]
pub fn item_position(config: &CarouselConfig, index: usize) -> f32 {
    match config.wrap_mode {
        WrapMode::Circular => index as f32 * config.item_width,
        WrapMode::Clamped => {
            let middle = config.item_count.saturating_sub(1) as f32 / 2.0;
            (index as f32 - middle) * config.item_width
        }
    }
}

/// Card offset from the visual center before wrapping.
#[inline]
pub fn raw_offset(config: &CarouselConfig, index: usize, scroll: f32) -> f32 {
    item_position(config, index) - scroll
}

/// Card offset from the visual center as it is rendered.
#[inline]
pub fn visual_offset(config: &CarouselConfig, index: usize, scroll: f32) -> f32 {
    let raw = raw_offset(config, index, scroll);
    match config.wrap_mode {
        WrapMode::Circular => wrap_offset(raw, config.track_length()),
        WrapMode::Clamped => raw,
    }
}

/// Inclusive scroll bounds; `None` for circular tracks.
pub fn scroll_bounds(config: &CarouselConfig) -> Option<(f32, f32)> {
    match config.wrap_mode {
        WrapMode::Circular => None,
        WrapMode::Clamped => {
            let half = config.item_count.saturating_sub(1) as f32
                * config.item_width
                / 2.0;
            Some((-half, half))
        }
    }
}

/// Apply the track bounds to a candidate offset.
#[inline]
pub fn clamp_offset(config: &CarouselConfig, offset: f32) -> f32 {
    match scroll_bounds(config) {
        Some((min, max)) => offset.clamp(min, max),
        None => offset,
    }
}

/// Signed camera movement that brings `target_index` to the center of a
/// circular track along the shorter way round.
pub fn shortest_path_delta(
    current_offset: f32,
    target_index: usize,
    item_width: f32,
    item_count: usize,
) -> f32 {
    let raw = target_index as f32 * item_width - current_offset;
    wrap_offset(raw, item_count as f32 * item_width)
}

/// Absolute offset that centers `index`, given where the camera is now.
///
/// Circular tracks pick the nearest lap; clamped tracks go straight to the
/// card's (in-bounds) position.
pub fn snap_target(config: &CarouselConfig, current: f32, index: usize) -> f32 {
    match config.wrap_mode {
        WrapMode::Circular => {
            current
                + shortest_path_delta(
                    current,
                    index % config.item_count.max(1),
                    config.item_width,
                    config.item_count,
                )
        }
        WrapMode::Clamped => {
            let last = config.item_count.saturating_sub(1);
            clamp_offset(config, item_position(config, index.min(last)))
        }
    }
}

/// Index of the card closest to the visual center, or `None` for an empty
/// track.
pub fn center_index(config: &CarouselConfig, scroll: f32) -> Option<usize> {
    let count = config.item_count;
    if count == 0 || config.item_width <= 0.0 {
        return None;
    }
    let slots = scroll / config.item_width;
    match config.wrap_mode {
        WrapMode::Circular => {
            Some((slots.round() as i64).rem_euclid(count as i64) as usize)
        }
        WrapMode::Clamped => {
            let middle = (count - 1) as f32 / 2.0;
            let index = (slots + middle).round().max(0.0) as usize;
            Some(index.min(count - 1))
        }
    }
}
