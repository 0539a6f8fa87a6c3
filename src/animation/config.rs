//! Animation pacing configuration

use std::fmt;
use std::time::Duration;

/// Frame rate and knight speed for the animator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    fps: u32,
    squares_per_second: f64,
}

/// Error type for out-of-range animation settings
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidFps(u32),
    InvalidSpeed(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFps(fps) => write!(
                f,
                "Frame rate must be between 1 and {} fps, got {fps}",
                AnimationConfig::MAX_FPS
            ),
            Self::InvalidSpeed(speed) => write!(
                f,
                "Speed must be between {} and {} squares per second, got {speed}",
                AnimationConfig::MIN_SPEED,
                AnimationConfig::MAX_SPEED
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fps: Self::DEFAULT_FPS,
            squares_per_second: Self::DEFAULT_SPEED,
        }
    }
}

impl AnimationConfig {
    pub const DEFAULT_FPS: u32 = 60;
    /// 5 pixels per frame on a 75-pixel square at 60 fps
    pub const DEFAULT_SPEED: f64 = 4.0;
    pub const MAX_FPS: u32 = 240;
    pub const MIN_SPEED: f64 = 0.25;
    pub const MAX_SPEED: f64 = 64.0;

    /// Create a validated config
    ///
    /// # Errors
    /// Returns `ConfigError` if `fps` is outside `1..=240` or the speed is
    /// outside `MIN_SPEED..=MAX_SPEED`.
    pub fn new(fps: u32, squares_per_second: f64) -> Result<Self, ConfigError> {
        if fps == 0 || fps > Self::MAX_FPS {
            return Err(ConfigError::InvalidFps(fps));
        }
        if !(Self::MIN_SPEED..=Self::MAX_SPEED).contains(&squares_per_second) {
            return Err(ConfigError::InvalidSpeed(squares_per_second));
        }
        Ok(Self {
            fps,
            squares_per_second,
        })
    }

    #[must_use]
    pub const fn fps(&self) -> u32 {
        self.fps
    }

    #[must_use]
    pub const fn squares_per_second(&self) -> f64 {
        self.squares_per_second
    }

    /// Distance the knight covers in one frame, in square units
    #[must_use]
    pub fn step_per_frame(&self) -> f64 {
        self.squares_per_second / f64::from(self.fps)
    }

    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }

    /// Double the speed, capped at `MAX_SPEED`
    #[must_use]
    pub fn faster(self) -> Self {
        Self {
            squares_per_second: (self.squares_per_second * 2.0).min(Self::MAX_SPEED),
            ..self
        }
    }

    /// Halve the speed, floored at `MIN_SPEED`
    #[must_use]
    pub fn slower(self) -> Self {
        Self {
            squares_per_second: (self.squares_per_second / 2.0).max(Self::MIN_SPEED),
            ..self
        }
    }
}
