//! Data-driven movement constants
//!
//! All values are per animation frame. There is no fixed timestep, so a
//! faster display makes the game play faster.

use serde::{Deserialize, Serialize};

use crate::consts::{GRAVITY, JUMP_SPEED, PLAYER_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal speed while a direction is held
    pub speed: f32,
    /// Upward speed applied at the start of a jump
    pub jump_speed: f32,
    /// Added to vertical velocity every frame
    pub gravity: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,
        }
    }
}
