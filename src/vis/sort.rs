//! Angular ordering of hit points around the viewpoint
//!
//! Angles are compared by their wrapped difference, not their raw value, so
//! the order is cyclic and only well defined while every point sits inside a
//! half plane. The cone is at most 180° wide, so that holds.

use glam::Vec2;

use super::raycast::HitPoint;
use crate::geom::{polar_degrees, wrap_degrees};

/// Insertion sort by polar angle around `look_from`, ascending
pub fn sort_by_angle(look_from: Vec2, hits: &mut [HitPoint]) {
    let mut angles: Vec<f32> = hits
        .iter()
        .map(|hit| polar_degrees(hit.point - look_from))
        .collect();

    for i in 1..hits.len() {
        let mut j = i;
        while j > 0 && wrap_degrees(angles[j] - angles[j - 1]) < 0.0 {
            hits.swap(j - 1, j);
            angles.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vis::candidates::Obstruction;

    fn hit_at(degrees: f32, distance: f32) -> HitPoint {
        let radians = degrees.to_radians();
        HitPoint {
            point: Vec2::new(radians.cos(), radians.sin()) * distance,
            obstruction: Obstruction::Open,
        }
    }

    fn angles(hits: &[HitPoint]) -> Vec<f32> {
        hits.iter().map(|h| polar_degrees(h.point)).collect()
    }

    #[test]
    fn test_sort_plain_range() {
        let mut hits = vec![hit_at(80.0, 10.0), hit_at(20.0, 5.0), hit_at(50.0, 7.0)];
        sort_by_angle(Vec2::ZERO, &mut hits);
        let sorted = angles(&hits);
        assert!((sorted[0] - 20.0).abs() < 1e-3);
        assert!((sorted[1] - 50.0).abs() < 1e-3);
        assert!((sorted[2] - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_sort_across_zero() {
        // 350° is "before" 10° for a cone straddling zero
        let mut hits = vec![hit_at(10.0, 1.0), hit_at(30.0, 1.0), hit_at(350.0, 1.0), hit_at(0.5, 1.0)];
        sort_by_angle(Vec2::ZERO, &mut hits);
        let sorted = angles(&hits);
        assert!((sorted[0] - 350.0).abs() < 1e-3);
        assert!((sorted[1] - 0.5).abs() < 1e-3);
        assert!((sorted[2] - 10.0).abs() < 1e-3);
        assert!((sorted[3] - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut hits = vec![
            hit_at(300.0, 4.0),
            hit_at(340.0, 9.0),
            hit_at(320.0, 2.0),
            hit_at(5.0, 3.0),
            hit_at(330.0, 1.0),
        ];
        sort_by_angle(Vec2::ZERO, &mut hits);
        let once = hits.clone();
        sort_by_angle(Vec2::ZERO, &mut hits);
        assert_eq!(hits, once);
    }

    #[test]
    fn test_sort_around_offset_viewpoint() {
        let look_from = Vec2::new(100.0, 100.0);
        let mut hits: Vec<HitPoint> = [60.0, -30.0, 0.0]
            .iter()
            .map(|&d| {
                let mut hit = hit_at(d, 20.0);
                hit.point += look_from;
                hit
            })
            .collect();
        sort_by_angle(look_from, &mut hits);
        let sorted: Vec<f32> = hits.iter().map(|h| polar_degrees(h.point - look_from)).collect();
        assert!((sorted[0] - 330.0).abs() < 1e-2);
        assert!(sorted[1] < 1e-2 || sorted[1] > 360.0 - 1e-2);
        assert!((sorted[2] - 60.0).abs() < 1e-2);
    }
}
