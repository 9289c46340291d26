//! Level layout
//!
//! There is exactly one level. `Level::default()` is that layout; `validate`
//! guards anything built by hand (tests, tuning experiments).

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::rect::{ColorTag, Rect};
use crate::sim::state::{Hazard, Oscillation};
use crate::tuning::Tuning;

/// Why a layout was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    #[error("{what} must have a positive size, got {width}x{height}")]
    NonPositiveSize {
        what: &'static str,
        width: f32,
        height: f32,
    },
    #[error("player width {player_width} does not fit in world width {world_width}")]
    PlayerTooWide { player_width: f32, world_width: f32 },
    #[error("spawn point ({x}, {y}) lies outside the world")]
    SpawnOutsideWorld { x: f32, y: f32 },
    #[error("hazard {index}: range top {top} is not above range bottom {bottom}")]
    InvertedRange { index: usize, top: f32, bottom: f32 },
    #[error("hazard {index}: height {height} does not fit in its range of {span}")]
    HazardTallerThanRange { index: usize, height: f32, span: f32 },
    #[error("hazard {index}: oscillation speed is zero")]
    StalledHazard { index: usize },
    #[error("hazard {index}: spans {top}..{bottom}, outside its range {range_top}..{range_bottom}")]
    HazardOutsideRange {
        index: usize,
        top: f32,
        bottom: f32,
        range_top: f32,
        range_bottom: f32,
    },
}

/// Static description of the world the simulation starts from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub world: Vec2,
    pub spawn: Vec2,
    pub player_size: Vec2,
    pub ground: Rect,
    pub goal: Rect,
    pub hazards: Vec<Hazard>,
    #[serde(default)]
    pub tuning: Tuning,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            world: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            spawn: Vec2::new(SPAWN_X, SPAWN_Y),
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            ground: Rect::new(0.0, GROUND_Y, WORLD_WIDTH, GROUND_HEIGHT, ColorTag::Ground),
            goal: Rect::new(740.0, 480.0, 40.0, 80.0, ColorTag::Goal),
            hazards: vec![
                Hazard::fixed(Rect::new(400.0, 520.0, 50.0, 50.0, ColorTag::Hazard)),
                Hazard::oscillating(
                    Rect::new(250.0, 300.0, 40.0, 40.0, ColorTag::MovingHazard),
                    Oscillation {
                        vertical_speed: 2.0,
                        range_top: 250.0,
                        range_bottom: 540.0,
                    },
                ),
                Hazard::oscillating(
                    Rect::new(580.0, 380.0, 40.0, 40.0, ColorTag::MovingHazard),
                    Oscillation {
                        vertical_speed: 3.0,
                        range_top: 300.0,
                        range_bottom: 545.0,
                    },
                ),
            ],
            tuning: Tuning::default(),
        }
    }
}

fn check_size(what: &'static str, size: Vec2) -> Result<(), LevelError> {
    if size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(LevelError::NonPositiveSize {
            what,
            width: size.x,
            height: size.y,
        })
    }
}

impl Level {
    /// Check the layout for anything the step function cannot handle
    pub fn validate(&self) -> Result<(), LevelError> {
        check_size("world", self.world)?;
        check_size("player", self.player_size)?;
        check_size("ground", self.ground.size)?;
        check_size("goal", self.goal.size)?;

        if self.player_size.x > self.world.x {
            return Err(LevelError::PlayerTooWide {
                player_width: self.player_size.x,
                world_width: self.world.x,
            });
        }

        let inside = self.spawn.x >= 0.0
            && self.spawn.x + self.player_size.x <= self.world.x
            && self.spawn.y >= 0.0
            && self.spawn.y <= self.world.y;
        if !inside {
            return Err(LevelError::SpawnOutsideWorld {
                x: self.spawn.x,
                y: self.spawn.y,
            });
        }

        for (index, hazard) in self.hazards.iter().enumerate() {
            check_size("hazard", hazard.rect.size)?;
            let Some(osc) = hazard.oscillation else {
                continue;
            };
            if osc.range_top >= osc.range_bottom {
                return Err(LevelError::InvertedRange {
                    index,
                    top: osc.range_top,
                    bottom: osc.range_bottom,
                });
            }
            let span = osc.range_bottom - osc.range_top;
            if hazard.rect.size.y >= span {
                return Err(LevelError::HazardTallerThanRange {
                    index,
                    height: hazard.rect.size.y,
                    span,
                });
            }
            if osc.vertical_speed == 0.0 {
                return Err(LevelError::StalledHazard { index });
            }
            // A hazard outside its track would flip direction every tick
            let track = Rect::new(
                hazard.rect.left(),
                osc.range_top,
                hazard.rect.size.x,
                span,
                hazard.rect.color,
            );
            if !track.contains(&hazard.rect) {
                return Err(LevelError::HazardOutsideRange {
                    index,
                    top: hazard.rect.top(),
                    bottom: hazard.rect.bottom(),
                    range_top: osc.range_top,
                    range_bottom: osc.range_bottom,
                });
            }
        }

        Ok(())
    }
}
