//! WebGPU rendering module
//!
//! Every entity is a filled rectangle; one triangle list per frame.

pub mod backdrop;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use backdrop::Backdrop;
pub use pipeline::{RenderError, RenderState};
