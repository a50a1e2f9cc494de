//! Candidate rays
//!
//! Every corner inside the cone is probed three times: once straight at the
//! corner and once just past each side of it (±`EPSILON` radians). The straight
//! ray finds the corner, the nudged rays discover what lies behind it.

use glam::Vec2;

use super::Limits;
use super::error::{BufferKind, Bounded, VisibilityError};
use super::fov::Fov;
use crate::consts::EPSILON;
use crate::geom::{Boundary, Quad, extend, turn};

/// Angular perturbation applied to a candidate ray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    None,
    Minus,
    Plus,
}

impl Nudge {
    #[inline]
    pub fn radians(&self) -> f32 {
        match self {
            Nudge::None => 0.0,
            Nudge::Minus => -EPSILON,
            Nudge::Plus => EPSILON,
        }
    }
}

/// What a point sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstruction {
    /// An edge or corner of `obstacles[index]`
    Obstacle(usize),
    /// An edge or corner of the viewport boundary
    Boundary,
    /// Free space at `MAX_DIAGONAL`
    Open,
}

/// A ray from the viewpoint to `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateRay {
    /// Far end of the ray before refinement
    pub target: Vec2,
    pub nudge: Nudge,
    /// What `target` already lies on, if anything
    pub anchor: Obstruction,
}

/// Debug line from the viewpoint to a probed corner
pub type Segment = (Vec2, Vec2);

/// Candidates plus the matching debug rays for one frame
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    pub rays: Vec<CandidateRay>,
    pub lines: Vec<Segment>,
}

/// Unperturbed candidate for `corner`, or `None` when it is outside the cone
///
/// The far point is the corner itself, pulled in to `max_diagonal` when the
/// corner is farther away than that.
pub fn maybe_emit_candidate(
    look_from: Vec2,
    corner: Vec2,
    anchor: Obstruction,
    fov: &Fov,
    max_diagonal: f32,
) -> Option<CandidateRay> {
    if !fov.contains(look_from, corner) {
        return None;
    }
    let ray = if look_from.distance(corner) > max_diagonal {
        CandidateRay {
            target: extend(look_from, corner, max_diagonal),
            nudge: Nudge::None,
            anchor: Obstruction::Open,
        }
    } else {
        CandidateRay {
            target: corner,
            nudge: Nudge::None,
            anchor,
        }
    };
    Some(ray)
}

/// The ray itself followed by its -ε and +ε neighbours
pub fn bracket(look_from: Vec2, ray: CandidateRay, max_diagonal: f32) -> [CandidateRay; 3] {
    let nudged = |nudge: Nudge| CandidateRay {
        target: extend(look_from, turn(look_from, ray.target, nudge.radians()), max_diagonal),
        nudge,
        anchor: Obstruction::Open,
    };
    [ray, nudged(Nudge::Minus), nudged(Nudge::Plus)]
}

/// Enumerate every candidate ray for one frame
///
/// The two cone edges always come first, then the boundary corners, then the
/// obstacle corners in order.
pub fn generate(
    look_from: Vec2,
    fov: &Fov,
    quads: &[Quad],
    boundary: &Boundary,
    limits: &Limits,
) -> Result<Candidates, VisibilityError> {
    let max_diagonal = boundary.max_diagonal;
    let mut rays = Bounded::new(BufferKind::Candidates, limits.candidates);
    let mut lines = Bounded::new(BufferKind::Lines, limits.lines);

    let edges = fov.targets.iter().map(|&target| CandidateRay {
        target,
        nudge: Nudge::None,
        anchor: Obstruction::Open,
    });
    let boundary_corners = boundary.corners().into_iter().map(|c| (c, Obstruction::Boundary));
    let obstacle_corners = quads
        .iter()
        .enumerate()
        .flat_map(|(i, quad)| quad.points.map(|c| (c, Obstruction::Obstacle(i))));
    let corners = boundary_corners
        .chain(obstacle_corners)
        .filter_map(|(corner, anchor)| {
            maybe_emit_candidate(look_from, corner, anchor, fov, max_diagonal)
        });

    for ray in edges.chain(corners) {
        lines.push((look_from, ray.target))?;
        for candidate in bracket(look_from, ray, max_diagonal) {
            rays.push(candidate)?;
        }
    }

    log::trace!("{} candidate rays from {} probed directions", rays.len(), lines.len());

    Ok(Candidates {
        rays: rays.into_vec(),
        lines: lines.into_vec(),
    })
}
