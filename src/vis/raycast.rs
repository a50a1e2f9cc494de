//! Ray refinement
//!
//! Each candidate segment `look_from → target` is tested against every edge in
//! turn, and every hit replaces the far end. Hits only ever shorten the
//! segment, so after the last edge the far end is the nearest obstruction.
//! Later edges must be tested against the already shortened segment.

use glam::Vec2;

use super::candidates::{CandidateRay, Obstruction};
use crate::geom::{Boundary, Quad, segment_intersect};

/// A refined candidate ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitPoint {
    pub point: Vec2,
    pub obstruction: Obstruction,
}

/// Shorten `ray` to the first obstacle or boundary edge it crosses
pub fn refine(look_from: Vec2, ray: &CandidateRay, quads: &[Quad], boundary: &Boundary) -> HitPoint {
    let mut hit = HitPoint {
        point: ray.target,
        obstruction: ray.anchor,
    };

    let obstacle_edges = quads
        .iter()
        .enumerate()
        .flat_map(|(i, quad)| quad.edges().map(|edge| (edge, Obstruction::Obstacle(i))));
    let boundary_edges = boundary.edges().into_iter().map(|edge| (edge, Obstruction::Boundary));

    for ((b0, b1), owner) in obstacle_edges.chain(boundary_edges) {
        if let Some(point) = segment_intersect(look_from, hit.point, b0, b1) {
            hit = HitPoint {
                point,
                obstruction: owner,
            };
        }
    }

    hit
}

/// Refine every candidate, preserving order
pub fn cast_all(
    look_from: Vec2,
    rays: &[CandidateRay],
    quads: &[Quad],
    boundary: &Boundary,
) -> Vec<HitPoint> {
    rays.iter().map(|ray| refine(look_from, ray, quads, boundary)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Obstacle;
    use crate::vis::candidates::Nudge;

    fn open_ray(target: Vec2) -> CandidateRay {
        CandidateRay {
            target,
            nudge: Nudge::None,
            anchor: Obstruction::Open,
        }
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-2
    }

    #[test]
    fn test_refine_unobstructed_keeps_target() {
        let boundary = Boundary::new(Vec2::splat(-2000.0), Vec2::splat(4000.0), 1000.0);
        let hit = refine(Vec2::ZERO, &open_ray(Vec2::new(1000.0, 0.0)), &[], &boundary);
        assert_eq!(hit.point, Vec2::new(1000.0, 0.0));
        assert_eq!(hit.obstruction, Obstruction::Open);
    }

    #[test]
    fn test_refine_stops_at_boundary() {
        let boundary = Boundary::viewport(400.0, 300.0).with_max_diagonal(1000.0);
        let look_from = Vec2::new(100.0, 150.0);
        let hit = refine(look_from, &open_ray(Vec2::new(1100.0, 150.0)), &[], &boundary);
        assert!(close(hit.point, Vec2::new(400.0, 150.0)));
        assert_eq!(hit.obstruction, Obstruction::Boundary);
    }

    #[test]
    fn test_refine_finds_nearest_of_several() {
        let boundary = Boundary::new(Vec2::splat(-2000.0), Vec2::splat(4000.0), 1000.0);
        // Far obstacle listed first so the nearer one must shorten it again
        let quads = [
            Obstacle::centered(Vec2::new(300.0, 0.0), Vec2::new(20.0, 20.0)).quad(),
            Obstacle::centered(Vec2::new(100.0, 0.0), Vec2::new(20.0, 20.0)).quad(),
        ];
        let hit = refine(Vec2::ZERO, &open_ray(Vec2::new(1000.0, 0.0)), &quads, &boundary);
        assert!(close(hit.point, Vec2::new(90.0, 0.0)));
        assert_eq!(hit.obstruction, Obstruction::Obstacle(1));

        // Same answer in the other order
        let reversed = [quads[1], quads[0]];
        let hit = refine(Vec2::ZERO, &open_ray(Vec2::new(1000.0, 0.0)), &reversed, &boundary);
        assert!(close(hit.point, Vec2::new(90.0, 0.0)));
        assert_eq!(hit.obstruction, Obstruction::Obstacle(0));
    }

    #[test]
    fn test_refine_hidden_corner_lands_on_near_face() {
        let boundary = Boundary::new(Vec2::splat(-2000.0), Vec2::splat(4000.0), 1000.0);
        let quads = [Obstacle::centered(Vec2::new(50.0, 0.0), Vec2::new(10.0, 10.0)).quad()];
        let ray = CandidateRay {
            target: Vec2::new(55.0, -5.0),
            nudge: Nudge::None,
            anchor: Obstruction::Obstacle(0),
        };
        let hit = refine(Vec2::ZERO, &ray, &quads, &boundary);
        assert!((hit.point.x - 45.0).abs() < 1e-3);
        assert!((hit.point.y - -5.0 * 45.0 / 55.0).abs() < 1e-3);
    }

    #[test]
    fn test_cast_all_preserves_order() {
        let boundary = Boundary::new(Vec2::splat(-2000.0), Vec2::splat(4000.0), 1000.0);
        let rays = [open_ray(Vec2::new(0.0, 10.0)), open_ray(Vec2::new(10.0, 0.0))];
        let hits = cast_all(Vec2::ZERO, &rays, &[], &boundary);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].point, Vec2::new(0.0, 10.0));
        assert_eq!(hits[1].point, Vec2::new(10.0, 0.0));
    }
}
