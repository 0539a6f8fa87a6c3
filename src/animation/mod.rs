//! Tour animation
//!
//! Pure playback state for the presenter: interpolation, visited overlay and
//! arrow list, all derived from a solved path. No terminal code lives here.

pub mod config;
mod controller;
pub mod geometry;

pub use config::{AnimationConfig, ConfigError};
pub use controller::{AnimationController, AnimationState, frames_for};
pub use geometry::{ARROW_HEAD_LENGTH, Arrow, Point};
