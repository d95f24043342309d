//! Waste Sorter - a drag-and-drop recycling canvas game
//!
//! Core modules:
//! - `sim`: Simulation (items, bins, drag state, disposal checks)
//! - `renderer`: Draws a simulation onto any [`renderer::Surface`]
//! - `platform`: Browser glue (canvas surface, image loading)
//! - `config`: Data-driven item and bin tables

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::Simulation;

/// Game configuration constants
pub mod consts {
    /// Default item edge length (items are square unless configured otherwise)
    pub const ITEM_SIZE: f32 = 50.0;
    /// Fall speed in units per frame (not scaled by frame time)
    pub const FALL_SPEED: f32 = 0.5;

    /// Default bin height
    pub const BIN_HEIGHT: f32 = 100.0;

    /// Decomposition jitter around the parent position
    pub const DECOMPOSE_JITTER_X: f32 = 50.0;
    pub const DECOMPOSE_JITTER_Y: f32 = 25.0;

    /// Initial scatter covers the top fraction of the surface
    pub const SCATTER_HEIGHT_FRACTION: f32 = 0.3;

    /// Notification defaults (milliseconds / pixels)
    pub const NOTIFICATION_MS: f64 = 2000.0;
    pub const NOTIFICATION_PADDING: f32 = 20.0;
    pub const NOTIFICATION_HEIGHT: f32 = 50.0;
}
