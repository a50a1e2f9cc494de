//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::vis::ColoredPoint;

/// 2D vertex with position and color
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

impl From<ColoredPoint> for Vertex {
    fn from(point: ColoredPoint) -> Self {
        Self::new(point.position.x, point.position.y, point.color)
    }
}

/// Scene colors
pub mod colors {
    pub const OBSTACLE: [f32; 4] = [0.25, 0.25, 0.25, 1.0];
    pub const PLAYER: [f32; 4] = [0.25, 0.25, 0.25, 1.0];
    /// Viewport outline
    pub const BOUNDARY_LINE: [f32; 4] = [0.625, 0.625, 0.625, 0.9];
    /// Debug probe rays
    pub const RAY: [f32; 4] = [0.5, 0.5, 0.5, 0.275];
}
