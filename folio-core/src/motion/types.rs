//! Shared types for the carousel motion engine

use std::time::Duration;

use super::easing::Easing;
use crate::error::{MotionError, Result};

/// Track boundary behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WrapMode {
    /// Finite track. The offset is bounded so the first and last card can
    /// reach the center but never scroll past it.
    Clamped,
    /// Wrap-around track. The last card sits next to the first and offsets
    /// are reduced modulo the track length.
    #[default]
    Circular,
}

/// Navigation direction for prev/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn sign(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Shaping constants that turn a card's distance from center into its
/// rotation, depth, fade and stacking order.
///
/// Distances are first normalized: `n = offset / (item_width * spread)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArcProfile {
    /// Item widths per normalized unit.
    pub spread: f32,
    /// rotateY degrees per normalized unit.
    pub degrees_per_unit: f32,
    /// Absolute cap on rotateY, in degrees.
    pub max_rotation: f32,
    /// translateZ recession per normalized unit, as a fraction of the arc
    /// radius.
    pub depth_ratio: f32,
    pub scale_slope: f32,
    pub scale_floor: f32,
    pub opacity_slope: f32,
    /// Lowest opacity a visible card can reach.
    pub opacity_floor: f32,
    pub blur_slope: f32,
    /// Maximum blur radius in pixels.
    pub blur_cap: f32,
    pub brightness_slope: f32,
    pub brightness_floor: f32,
    pub z_index_base: f32,
    pub z_index_slope: f32,
    /// Cards with `|n|` at or beyond this are hidden.
    pub visibility_cutoff: f32,
}

impl ArcProfile {
    /// Reject values that would panic or turn transforms into NaN.
    pub fn validate(&self) -> Result<()> {
        if !(self.spread.is_finite() && self.spread > 0.0) {
            return Err(MotionError::InvalidSpread(self.spread));
        }
        if !(self.max_rotation.is_finite() && self.max_rotation >= 0.0) {
            return Err(MotionError::InvalidMaxRotation(self.max_rotation));
        }
        for (field, value) in [
            ("scale_floor", self.scale_floor),
            ("opacity_floor", self.opacity_floor),
            ("brightness_floor", self.brightness_floor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MotionError::FloorOutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("degrees_per_unit", self.degrees_per_unit),
            ("depth_ratio", self.depth_ratio),
            ("scale_slope", self.scale_slope),
            ("opacity_slope", self.opacity_slope),
            ("blur_slope", self.blur_slope),
            ("blur_cap", self.blur_cap),
            ("brightness_slope", self.brightness_slope),
            ("z_index_base", self.z_index_base),
            ("z_index_slope", self.z_index_slope),
            ("visibility_cutoff", self.visibility_cutoff),
        ] {
            if !value.is_finite() {
                return Err(MotionError::NonFiniteProfile { field, value });
            }
        }
        Ok(())
    }
}

impl Default for ArcProfile {
    fn default() -> Self {
        Self {
            spread: 2.5,
            degrees_per_unit: 25.0,
            max_rotation: 60.0,
            depth_ratio: 0.1,
            scale_slope: 0.1,
            scale_floor: 0.8,
            opacity_slope: 0.5,
            opacity_floor: 0.15,
            blur_slope: 6.0,
            blur_cap: 10.0,
            brightness_slope: 0.4,
            brightness_floor: 0.4,
            z_index_base: 100.0,
            z_index_slope: 10.0,
            visibility_cutoff: 4.0,
        }
    }
}

/// Static configuration for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub item_count: usize,
    /// Horizontal stride between card centers, in pixels.
    pub item_width: f32,
    /// Radius of the virtual arc cards recede along.
    pub arc_radius: f32,
    /// Per-frame velocity multiplier once a drag is released.
    pub friction: f32,
    /// Pointer travel (px) before a press becomes a drag.
    pub drag_threshold: f32,
    /// Momentum stops once |velocity| drops to this (px/frame).
    pub stop_velocity: f32,
    pub auto_scroll: bool,
    /// Idle drift in px/frame.
    pub auto_scroll_speed: f32,
    pub snap_duration: Duration,
    pub snap_easing: Easing,
    pub wrap_mode: WrapMode,
    pub profile: ArcProfile,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::theater_defaults(0, 300.0)
    }
}

impl CarouselConfig {
    /// Wide, flat, wrap-around carousel used on the landing page hero.
    pub fn theater_defaults(item_count: usize, item_width: f32) -> Self {
        Self {
            item_count,
            item_width,
            arc_radius: 2000.0,
            friction: 0.95,
            drag_threshold: 15.0,
            stop_velocity: 0.5,
            auto_scroll: true,
            auto_scroll_speed: 0.5,
            snap_duration: Duration::from_millis(600),
            snap_easing: Easing::EaseOutQuart,
            wrap_mode: WrapMode::Circular,
            profile: ArcProfile::default(),
        }
    }

    /// Bounded arc used by the portfolio section. Tighter radius and a
    /// quicker momentum falloff.
    pub fn arc_defaults(item_count: usize, item_width: f32) -> Self {
        Self {
            arc_radius: 800.0,
            friction: 0.92,
            wrap_mode: WrapMode::Clamped,
            ..Self::theater_defaults(item_count, item_width)
        }
    }

    /// Card width that fits a viewport of the given width.
    pub fn responsive_item_width(viewport_width: f32) -> f32 {
        if viewport_width < 640.0 {
            220.0
        } else if viewport_width < 1024.0 {
            260.0
        } else {
            300.0
        }
    }

    /// Arc radius that fits a viewport of the given width.
    pub fn responsive_arc_radius(viewport_width: f32) -> f32 {
        (viewport_width * 0.8).min(800.0)
    }

    /// Length of one full lap of the track.
    pub fn track_length(&self) -> f32 {
        self.item_count as f32 * self.item_width
    }

    /// Validate everything except the item count. An empty track is legal
    /// at runtime (filters can empty the list); the engine just idles.
    pub fn validate_motion(&self) -> Result<()> {
        if !(self.item_width.is_finite() && self.item_width > 0.0) {
            return Err(MotionError::InvalidItemWidth(self.item_width));
        }
        if !(self.arc_radius.is_finite() && self.arc_radius > 0.0) {
            return Err(MotionError::InvalidArcRadius(self.arc_radius));
        }
        // Strictly below 1 so momentum reaches the stop threshold in
        // finitely many frames.
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(MotionError::InvalidFriction(self.friction));
        }
        if !(self.stop_velocity.is_finite() && self.stop_velocity > 0.0) {
            return Err(MotionError::InvalidStopVelocity(self.stop_velocity));
        }
        if !(self.drag_threshold.is_finite() && self.drag_threshold >= 0.0) {
            return Err(MotionError::InvalidDragThreshold(self.drag_threshold));
        }
        if self.snap_duration.is_zero() {
            return Err(MotionError::ZeroSnapDuration);
        }
        if !self.auto_scroll_speed.is_finite() {
            return Err(MotionError::InvalidAutoScrollSpeed(
                self.auto_scroll_speed,
            ));
        }
        self.profile.validate()
    }

    /// Full validation, including a non-empty track.
    pub fn validate(&self) -> Result<()> {
        if self.item_count == 0 {
            return Err(MotionError::EmptyTrack);
        }
        self.validate_motion()
    }
}
