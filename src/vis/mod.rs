//! Per-frame visibility computation
//!
//! Stateless pipeline, run once per frame:
//! - `fov`: cone interval from the viewpoint and look direction
//! - `candidates`: corner probes, each bracketed by two nudged rays
//! - `raycast`: shorten every probe to its nearest obstruction
//! - `sort`: cyclic angular order around the viewpoint
//! - `fan`: triangle fan with distance fade
//!
//! Nothing is retained between frames. The obstacles and viewpoint are read
//! only; the working buffers are bounded by `Limits` and an overflow fails the
//! frame instead of truncating it.

pub mod candidates;
pub mod error;
pub mod fan;
pub mod fov;
pub mod raycast;
pub mod sort;

pub use candidates::{CandidateRay, Candidates, Nudge, Obstruction, Segment, bracket, maybe_emit_candidate};
pub use error::{BufferKind, VisibilityError};
pub use fan::{ColoredPoint, FanStyle, Triangle, fade_alpha};
pub use fov::Fov;
pub use raycast::HitPoint;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CAP_CANDIDATES, CAP_LINES, CAP_TRIANGLES};
use crate::geom::{Boundary, Obstacle, Quad};

/// Where the light comes from and where it points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub look_from: Vec2,
    pub look_to: Vec2,
}

impl View {
    /// Viewpoint at `from` aimed at `target` (cursor, AI target, ...)
    pub fn aimed(from: Vec2, target: Vec2) -> Self {
        Self {
            look_from: from,
            look_to: target,
        }
    }
}

/// Capacity of each per-frame working buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub candidates: usize,
    pub lines: usize,
    pub triangles: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            candidates: CAP_CANDIDATES,
            lines: CAP_LINES,
            triangles: CAP_TRIANGLES,
        }
    }
}

impl Limits {
    pub fn unbounded() -> Self {
        Self {
            candidates: usize::MAX,
            lines: usize::MAX,
            triangles: usize::MAX,
        }
    }
}

/// Everything one frame hands to the renderer
#[derive(Debug, Clone)]
pub struct Frame {
    pub fov: Fov,
    /// Refined hits in angular order
    pub hits: Vec<HitPoint>,
    /// Fan in angular order
    pub triangles: Vec<Triangle>,
    /// Debug rays to the cone edges and every probed corner
    pub boundary_rays: Vec<Segment>,
}

/// The visibility pass, parameterised by cone width, buffer limits and colors
#[derive(Debug, Clone)]
pub struct Visibility {
    /// Half of the cone's opening angle (radians)
    pub half_fov: f32,
    pub limits: Limits,
    pub style: FanStyle,
}

impl Visibility {
    pub fn new(half_fov: f32) -> Self {
        Self {
            half_fov,
            limits: Limits::default(),
            style: FanStyle::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_style(mut self, style: FanStyle) -> Self {
        self.style = style;
        self
    }

    /// Run the whole pipeline for one frame
    pub fn compute(
        &self,
        obstacles: &[Obstacle],
        boundary: &Boundary,
        view: View,
    ) -> Result<Frame, VisibilityError> {
        let look_from = view.look_from;
        let fov = Fov::new(look_from, view.look_to, self.half_fov, boundary.max_diagonal)?;
        let quads: Vec<Quad> = obstacles.iter().map(Obstacle::quad).collect();

        let Candidates { rays, lines } =
            candidates::generate(look_from, &fov, &quads, boundary, &self.limits)?;
        let mut hits = raycast::cast_all(look_from, &rays, &quads, boundary);
        sort::sort_by_angle(look_from, &mut hits);
        let triangles = fan::triangulate(
            look_from,
            &hits,
            &self.style,
            boundary.max_diagonal,
            &self.limits,
        )?;

        log::trace!(
            "fov [{:.2}, {:.2}]: {} hits, {} triangles",
            fov.lo,
            fov.hi,
            hits.len(),
            triangles.len()
        );

        Ok(Frame {
            fov,
            hits,
            triangles,
            boundary_rays: lines,
        })
    }
}
