use thiserror::Error;

/// Configuration rejected by the motion engine.
///
/// The engine itself never fails at runtime; these only surface when a
/// [`CarouselConfig`](crate::motion::CarouselConfig) is validated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("carousel needs at least one item")]
    EmptyTrack,

    #[error("item width must be a positive number of pixels, got {0}")]
    InvalidItemWidth(f32),

    #[error("arc radius must be positive, got {0}")]
    InvalidArcRadius(f32),

    #[error("friction must lie strictly between 0 and 1, got {0}")]
    InvalidFriction(f32),

    #[error("stop velocity must be positive, got {0}")]
    InvalidStopVelocity(f32),

    #[error("drag threshold must be zero or positive, got {0}")]
    InvalidDragThreshold(f32),

    #[error("snap duration must be non-zero")]
    ZeroSnapDuration,

    #[error("auto-scroll speed must be a finite number, got {0}")]
    InvalidAutoScrollSpeed(f32),

    #[error("profile spread must be positive, got {0}")]
    InvalidSpread(f32),

    #[error("profile max rotation must be zero or positive, got {0}")]
    InvalidMaxRotation(f32),

    #[error("profile {field} must lie between 0 and 1, got {value}")]
    FloorOutOfRange { field: &'static str, value: f32 },

    #[error("profile {field} must be a finite number, got {value}")]
    NonFiniteProfile { field: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, MotionError>;
