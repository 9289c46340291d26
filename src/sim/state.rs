//! Game state and core simulation types
//!
//! Everything the step function reads or writes lives in [`GameState`]; there
//! is no module-level mutable state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{ColorTag, Rect};
use crate::level::{Level, LevelError};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to press start; ticks are no-ops
    #[default]
    Waiting,
    /// Active gameplay
    Playing,
}

/// The player's rectangle plus its motion state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    pub on_ground: bool,
    /// Set once the goal is touched. Never cleared.
    pub complete: bool,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect {
                pos,
                size,
                color: ColorTag::Player,
            },
            vel: Vec2::ZERO,
            on_ground: false,
            complete: false,
        }
    }

    /// Put the player back at `spawn` with no momentum
    pub fn respawn(&mut self, spawn: Vec2) {
        self.rect.pos = spawn;
        self.vel = Vec2::ZERO;
        self.on_ground = false;
    }
}

/// Vertical back-and-forth motion for a moving hazard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillation {
    /// Pixels per frame; the sign is the current direction (positive = down)
    pub vertical_speed: f32,
    pub range_top: f32,
    pub range_bottom: f32,
}

/// A hazard rectangle, static or oscillating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
    #[serde(default)]
    pub oscillation: Option<Oscillation>,
}

impl Hazard {
    pub fn fixed(rect: Rect) -> Self {
        Self {
            rect,
            oscillation: None,
        }
    }

    pub fn oscillating(rect: Rect, oscillation: Oscillation) -> Self {
        Self {
            rect,
            oscillation: Some(oscillation),
        }
    }

    pub fn is_moving(&self) -> bool {
        self.oscillation.is_some()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// World width and height
    pub world: Vec2,
    /// Where the player reappears after touching a hazard
    pub spawn: Vec2,
    /// Movement constants
    pub tuning: Tuning,
    pub player: Player,
    pub ground: Rect,
    pub goal: Rect,
    /// Hazards in collision-test order. The count never changes.
    pub hazards: Vec<Hazard>,
    /// Ticks advanced while playing
    pub frame: u64,
    /// Times the player has been sent back to spawn
    pub resets: u32,
}

impl GameState {
    /// Build a state from a level layout, rejecting invalid layouts
    pub fn new(level: Level) -> Result<Self, LevelError> {
        level.validate()?;
        Ok(Self::from_level(level))
    }

    fn from_level(level: Level) -> Self {
        let Level {
            world,
            spawn,
            player_size,
            ground,
            goal,
            hazards,
            tuning,
        } = level;

        Self {
            phase: GamePhase::Waiting,
            world,
            spawn,
            tuning,
            player: Player::new(spawn, player_size),
            ground,
            goal,
            hazards,
            frame: 0,
            resets: 0,
        }
    }

    /// Transition from waiting to playing. Later calls do nothing.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Waiting {
            self.phase = GamePhase::Playing;
            log::info!("Game started");
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing && !self.player.complete
    }
}

impl Default for GameState {
    fn default() -> Self {
        // The built-in layout is covered by the level tests
        Self::from_level(Level::default())
    }
}
