//! Triangle-list geometry for the frame's drawables

use glam::Vec2;

use super::vertex::Vertex;
use crate::geom::{Boundary, Obstacle};
use crate::vis::{Segment, Triangle};

/// Flatten the visibility fan into a triangle list
pub fn fan(triangles: &[Triangle]) -> Vec<Vertex> {
    triangles
        .iter()
        .flat_map(|triangle| triangle.vertices.map(Vertex::from))
        .collect()
}

/// Two triangles per obstacle, corners 0-1-2 and 2-3-0
pub fn obstacles(obstacles: &[Obstacle]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(obstacles.len() * 6);

    for obstacle in obstacles {
        let p = obstacle.quad().points;
        let c = obstacle.color;
        for i in [0, 1, 2, 2, 3, 0] {
            vertices.push(Vertex::new(p[i].x, p[i].y, c));
        }
    }

    vertices
}

/// Thin quads along each segment
pub fn segments(segments: &[Segment], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(segments.len() * 6);
    let half = width / 2.0;

    for &(from, to) in segments {
        // Perpendicular for width
        let dir = (to - from).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let a0 = from + perp;
        let a1 = from - perp;
        let b0 = to + perp;
        let b1 = to - perp;

        vertices.push(Vertex::new(a0.x, a0.y, color));
        vertices.push(Vertex::new(a1.x, a1.y, color));
        vertices.push(Vertex::new(b0.x, b0.y, color));

        vertices.push(Vertex::new(b0.x, b0.y, color));
        vertices.push(Vertex::new(a1.x, a1.y, color));
        vertices.push(Vertex::new(b1.x, b1.y, color));
    }

    vertices
}

/// Viewport outline as four segments
pub fn outline(boundary: &Boundary, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    segments(&boundary.edges(), width, color)
}
