//! Scripted input for headless runs
//!
//! Walks right, hops static hazards, and waits in front of a moving hazard
//! until it will stay above the player's head for the whole crossing. Used by
//! the native demo and as an end-to-end check that the level is beatable.

use super::collision::advance_hazard;
use super::state::{GameState, Hazard};
use super::tick::TickInput;

/// Start a jump when a static hazard's left edge is this close ahead
const JUMP_LOOKAHEAD: f32 = 30.0;
/// Decide whether to cross a moving hazard once this close to it
const CROSSING_DISTANCE: f32 = 8.0;
/// Extra frames of clearance past the crossing itself
const CROSSING_MARGIN: u32 = 2;

/// Pick this frame's input from the current state
pub fn scripted_input(state: &GameState) -> TickInput {
    let player = &state.player;
    let mut jump = false;
    let mut go = true;

    for hazard in &state.hazards {
        let gap = hazard.rect.left() - player.rect.right();
        if gap < 0.0 {
            continue;
        }
        if !hazard.is_moving() {
            jump |= gap < JUMP_LOOKAHEAD;
        } else if gap < CROSSING_DISTANCE && player.on_ground {
            let distance = gap + player.rect.size.x + hazard.rect.size.x;
            let frames = (distance / state.tuning.speed) as u32 + CROSSING_MARGIN;
            if !stays_above(hazard, frames, player.rect.top()) {
                go = false;
            }
        }
    }

    TickInput {
        left: false,
        right: go,
        jump: jump && go,
    }
}

/// Forecast whether the hazard's bottom edge stays at or above `line`
/// for the next `frames` ticks
fn stays_above(hazard: &Hazard, frames: u32, line: f32) -> bool {
    let mut forecast = hazard.clone();
    (0..frames).all(|_| {
        advance_hazard(&mut forecast);
        forecast.rect.bottom() <= line
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::sim::rect::{ColorTag, Rect};
    use crate::sim::state::Oscillation;
    use crate::sim::tick::{StepOutcome, tick};

    fn started() -> GameState {
        let mut state = GameState::new(Level::default()).unwrap();
        state.start();
        state
    }

    #[test]
    fn test_default_level_is_beatable() {
        let mut state = started();
        let mut reached = None;
        for _ in 0..600 {
            let input = scripted_input(&state);
            if tick(&mut state, &input).outcome == StepOutcome::ReachedGoal {
                reached = Some(state.frame);
                break;
            }
        }
        assert!(reached.is_some(), "no goal after {} frames", state.frame);
        assert_eq!(state.resets, 0);
        assert!(state.player.complete);
    }

    #[test]
    fn test_jumps_before_static_hazard() {
        let mut state = started();
        state.hazards.retain(|h| !h.is_moving());
        state.player.rect.pos.x = 340.0;
        state.player.on_ground = true;
        let input = scripted_input(&state);
        assert!(input.right && input.jump);
    }

    #[test]
    fn test_waits_under_descending_hazard() {
        let mut state = started();
        // Right in front of the player and heading for the ground
        state.hazards = vec![Hazard::oscillating(
            Rect::new(145.0, 400.0, 40.0, 40.0, ColorTag::MovingHazard),
            Oscillation {
                vertical_speed: 3.0,
                range_top: 300.0,
                range_bottom: 545.0,
            },
        )];
        state.player.rect.pos = glam::Vec2::new(100.0, 500.0);
        state.player.on_ground = true;
        let input = scripted_input(&state);
        assert!(!input.right);
        assert!(!input.jump);
    }

    #[test]
    fn test_crosses_under_high_hazard() {
        let mut state = started();
        // Near the top of its track and climbing
        state.hazards = vec![Hazard::oscillating(
            Rect::new(145.0, 260.0, 40.0, 40.0, ColorTag::MovingHazard),
            Oscillation {
                vertical_speed: -2.0,
                range_top: 250.0,
                range_bottom: 540.0,
            },
        )];
        state.player.rect.pos = glam::Vec2::new(100.0, 500.0);
        state.player.on_ground = true;
        assert!(scripted_input(&state).right);
    }
}
