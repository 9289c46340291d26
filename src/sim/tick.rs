//! Per-frame simulation tick
//!
//! Core game loop that advances the world by one animation frame.

use super::collision::{advance_hazard, clamp_to_world, first_hazard_hit, intersects, resolve_ground};
use super::state::GameState;
use crate::consts::{FLASH_ALTERNATIONS, FLASH_INTERVAL_MS, GOAL_REVEAL_DELAY_MS};
use crate::platform::input::Action;

/// Held-key state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl TickInput {
    /// Record a press or release of a logical action
    pub fn apply(&mut self, action: Action, pressed: bool) {
        match action {
            Action::Left => self.left = pressed,
            Action::Right => self.right = pressed,
            Action::Jump => self.jump = pressed,
        }
    }
}

/// What happened to the player this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepOutcome {
    #[default]
    Continue,
    /// Player touched a hazard and was sent back to spawn
    HitHazard,
    /// Player touched the goal; the level is complete
    ReachedGoal,
}

/// Side-effect requests for the host. The simulation never performs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player left the ground this tick
    Jumped,
    /// Player touched the hazard at `index` in the hazard list
    HazardHit { index: usize },
    /// Alternate the player color `alternations` times, `interval_ms` apart
    StartFlash { alternations: u32, interval_ms: u32 },
    /// Hide the game and show the form after `delay_ms`
    RevealForm { delay_ms: u32 },
}

/// Result of one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutput {
    pub outcome: StepOutcome,
    pub events: Vec<GameEvent>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutput {
    let mut out = TickOutput::default();

    if !state.is_running() {
        return out;
    }

    state.frame += 1;
    let tuning = state.tuning;
    let player = &mut state.player;

    // Left is checked first, so holding both directions moves left
    player.vel.x = if input.left {
        -tuning.speed
    } else if input.right {
        tuning.speed
    } else {
        0.0
    };

    if input.jump && player.on_ground {
        player.vel.y = -tuning.jump_speed;
        player.on_ground = false;
        out.events.push(GameEvent::Jumped);
    }

    player.vel.y += tuning.gravity;
    player.rect.pos += player.vel;

    clamp_to_world(player, state.world.x);
    resolve_ground(player, &state.ground);

    for hazard in &mut state.hazards {
        advance_hazard(hazard);
    }

    if let Some(index) = first_hazard_hit(&state.player.rect, &state.hazards) {
        state.player.respawn(state.spawn);
        state.resets += 1;
        log::debug!(
            "Hazard {} hit on frame {} (reset #{})",
            index,
            state.frame,
            state.resets
        );
        out.outcome = StepOutcome::HitHazard;
        out.events.push(GameEvent::HazardHit { index });
        out.events.push(GameEvent::StartFlash {
            alternations: FLASH_ALTERNATIONS,
            interval_ms: FLASH_INTERVAL_MS,
        });
        return out;
    }

    if intersects(&state.player.rect, &state.goal) {
        state.player.complete = true;
        log::info!(
            "Goal reached on frame {} after {} resets",
            state.frame,
            state.resets
        );
        out.outcome = StepOutcome::ReachedGoal;
        out.events.push(GameEvent::RevealForm {
            delay_ms: GOAL_REVEAL_DELAY_MS,
        });
    }

    out
}
