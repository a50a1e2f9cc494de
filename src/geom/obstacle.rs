//! Oriented rectangles and the viewport boundary
//!
//! An obstacle is stored the way it is drawn: a local origin, a size and a
//! rotation about its own center. The four corners are derived on demand.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kernel::turn;

/// Corners of the unit quad, in edge order
const UNIT_QUAD: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// An oriented rectangle that blocks light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Local origin (top-left before rotation)
    pub translate: Vec2,
    /// Width and height, never negative
    pub size: Vec2,
    /// Rotation about the rectangle's center (radians)
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_obstacle_color")]
    pub color: [f32; 4],
}

fn default_obstacle_color() -> [f32; 4] {
    crate::renderer::vertex::colors::OBSTACLE
}

impl Obstacle {
    /// Negative sizes are clamped to zero
    pub fn new(translate: Vec2, size: Vec2, rotation: f32, color: [f32; 4]) -> Self {
        Self {
            translate,
            size: size.max(Vec2::ZERO),
            rotation,
            color,
        }
    }

    /// Axis-aligned obstacle around `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        let size = size.max(Vec2::ZERO);
        Self::new(center - size / 2.0, size, 0.0, default_obstacle_color())
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.translate + self.size / 2.0
    }

    /// Scale the unit quad, rotate it about the center, then translate
    pub fn quad(&self) -> Quad {
        let half = self.size / 2.0;
        let center = self.center();
        Quad {
            points: UNIT_QUAD
                .map(|unit| turn(Vec2::ZERO, unit * self.size - half, self.rotation) + center),
        }
    }
}

/// The four corners of a rotated obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub points: [Vec2; 4],
}

impl Quad {
    /// Edges 0→1, 1→2, 2→3, 3→0
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        let p = self.points;
        [(p[0], p[1]), (p[1], p[2]), (p[2], p[3]), (p[3], p[0])]
    }
}

/// Viewport rectangle that always closes visibility
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub origin: Vec2,
    pub size: Vec2,
    /// Length every unobstructed ray is extended to; should exceed any
    /// on-screen distance
    pub max_diagonal: f32,
}

impl Boundary {
    /// Viewport anchored at (0, 0), diagonal rounded up
    pub fn viewport(width: f32, height: f32) -> Self {
        let size = Vec2::new(width, height).max(Vec2::ZERO);
        Self {
            origin: Vec2::ZERO,
            size,
            max_diagonal: size.length().ceil(),
        }
    }

    pub fn new(origin: Vec2, size: Vec2, max_diagonal: f32) -> Self {
        Self {
            origin,
            size: size.max(Vec2::ZERO),
            max_diagonal,
        }
    }

    pub fn with_max_diagonal(mut self, max_diagonal: f32) -> Self {
        self.max_diagonal = max_diagonal;
        self
    }

    pub fn corners(&self) -> [Vec2; 4] {
        let o = self.origin;
        let s = self.size;
        [o, o + Vec2::new(s.x, 0.0), o + s, o + Vec2::new(0.0, s.y)]
    }

    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        let c = self.corners();
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.origin + self.size;
        point.cmpge(self.origin).all() && point.cmple(max).all()
    }
}
