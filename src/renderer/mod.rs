//! Render data
//!
//! The visibility pass only produces data; this module turns that data into
//! colored triangle lists in scene coordinates, laid out for a wgpu vertex
//! buffer (`Vertex::desc`). Uploading and drawing is left to the host.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::geom::{Boundary, Obstacle};
use crate::settings::Settings;
use crate::vis::Frame;
use vertex::colors;

/// Line width for the viewport outline and debug rays
pub const LINE_WIDTH: f32 = 1.825;

/// Every vertex for one frame, back to front: obstacles, lit fan, viewport
/// outline, rays
pub fn frame_vertices(
    frame: &Frame,
    obstacles: &[Obstacle],
    boundary: &Boundary,
    settings: &Settings,
) -> Vec<Vertex> {
    let mut vertices = shapes::obstacles(obstacles);
    vertices.extend(shapes::fan(&frame.triangles));
    vertices.extend(shapes::outline(boundary, LINE_WIDTH, colors::BOUNDARY_LINE));
    if settings.show_rays {
        vertices.extend(shapes::segments(&frame.boundary_rays, LINE_WIDTH, settings.ray_color));
    }
    vertices
}
