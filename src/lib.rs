//! Goalpost - a tiny browser platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `level`: Canonical level layout and validation
//! - `tuning`: Data-driven movement constants
//! - `effects`: Cosmetic timer schedules (hit flash, form reveal)
//! - `renderer`: WebGPU rectangle pipeline
//! - `platform`: Browser input mapping
//! - `settings`: URL-query configuration
//! - `audio`: Procedural sound cues

pub mod audio;
pub mod effects;
pub mod level;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use level::{Level, LevelError};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// World dimensions (canvas pixels, y grows downward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player spawn point (top-left corner) and size
    pub const SPAWN_X: f32 = 50.0;
    pub const SPAWN_Y: f32 = 500.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    /// Horizontal speed (pixels per frame)
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Initial upward speed of a jump (pixels per frame)
    pub const JUMP_SPEED: f32 = 11.0;
    /// Downward acceleration (pixels per frame²)
    pub const GRAVITY: f32 = 0.5;

    /// Ground strip along the bottom of the world
    pub const GROUND_Y: f32 = 560.0;
    pub const GROUND_HEIGHT: f32 = 40.0;

    /// Hit flash: number of color alternations and spacing
    pub const FLASH_ALTERNATIONS: u32 = 6;
    pub const FLASH_INTERVAL_MS: u32 = 100;
    /// Pause between touching the goal and revealing the form
    pub const GOAL_REVEAL_DELAY_MS: u32 = 500;
}
