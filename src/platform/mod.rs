//! Platform abstraction layer
//!
//! Translates browser events into the simulation's logical inputs.

pub mod input;

pub use input::Action;
