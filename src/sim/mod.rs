//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, driven by the host
//! - No timers; cosmetic delays are returned as events
//! - Stable iteration order (hazard list order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::scripted_input;
pub use collision::intersects;
pub use rect::{ColorTag, Rect};
pub use state::{GamePhase, GameState, Hazard, Oscillation, Player};
pub use tick::{GameEvent, StepOutcome, TickInput, TickOutput, tick};
