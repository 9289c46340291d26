//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::ColorTag;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    use crate::sim::ColorTag;

    pub const PLAYER: [f32; 4] = [0.2, 0.6, 1.0, 1.0];
    pub const PLAYER_FLASH: [f32; 4] = [1.0, 0.25, 0.25, 1.0];
    pub const GROUND: [f32; 4] = [0.35, 0.25, 0.15, 1.0];
    pub const GOAL: [f32; 4] = [0.2, 0.85, 0.35, 1.0];
    pub const HAZARD: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
    pub const MOVING_HAZARD: [f32; 4] = [1.0, 0.55, 0.1, 1.0];
    /// Solid fill used when no background image is available
    pub const BACKGROUND: [f32; 4] = [0.53, 0.81, 0.92, 1.0]; // Sky blue

    pub fn for_tag(tag: ColorTag) -> [f32; 4] {
        match tag {
            ColorTag::Player => PLAYER,
            ColorTag::PlayerFlash => PLAYER_FLASH,
            ColorTag::Ground => GROUND,
            ColorTag::Goal => GOAL,
            ColorTag::Hazard => HAZARD,
            ColorTag::MovingHazard => MOVING_HAZARD,
        }
    }
}

impl From<ColorTag> for [f32; 4] {
    fn from(tag: ColorTag) -> Self {
        colors::for_tag(tag)
    }
}
