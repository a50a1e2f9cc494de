//! Fan triangulation with distance fade
//!
//! Every triangle shares the viewpoint as its apex. Edge vertices fade from
//! opaque at the viewpoint to fully transparent at `MAX_DIAGONAL`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Limits;
use super::error::{BufferKind, Bounded, VisibilityError};
use super::raycast::HitPoint;
use crate::geom::epsilon;

/// A position with an RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredPoint {
    pub position: Vec2,
    pub color: [f32; 4],
}

/// One slice of the visibility fan: `[apex, previous hit, current hit]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [ColoredPoint; 3],
}

/// Base colors of the fan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanStyle {
    /// Apex color; its alpha is used as-is
    pub apex: [f32; 4],
    /// Edge color; its alpha is replaced by the distance fade
    pub edge: [f32; 4],
}

impl Default for FanStyle {
    fn default() -> Self {
        Self {
            apex: [1.0, 1.0, 1.0, 1.0],
            edge: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// `1 - clamp(distance / max_diagonal, 0, 1)`
#[inline]
pub fn fade_alpha(distance: f32, max_diagonal: f32) -> f32 {
    1.0 - (distance / epsilon(max_diagonal)).clamp(0.0, 1.0)
}

/// Build the fan over angularly sorted hits
pub fn triangulate(
    look_from: Vec2,
    hits: &[HitPoint],
    style: &FanStyle,
    max_diagonal: f32,
    limits: &Limits,
) -> Result<Vec<Triangle>, VisibilityError> {
    let mut triangles = Bounded::new(BufferKind::Triangles, limits.triangles);

    let apex = ColoredPoint {
        position: look_from,
        color: style.apex,
    };
    let faded = |position: Vec2| {
        let [r, g, b, _] = style.edge;
        ColoredPoint {
            position,
            color: [r, g, b, fade_alpha(look_from.distance(position), max_diagonal)],
        }
    };

    for pair in hits.windows(2) {
        triangles.push(Triangle {
            vertices: [apex, faded(pair[0].point), faded(pair[1].point)],
        })?;
    }

    Ok(triangles.into_vec())
}
