//! Vector math for the visibility pipeline
//!
//! Zero-length inputs are never an error here: `epsilon` substitutes a tiny
//! denominator instead. This is an approximation, and the angular comparisons
//! downstream are tuned to it, so keep it.

use glam::Vec2;

use crate::consts::EPSILON;

/// Replace an exact zero with `EPSILON`
#[inline]
pub fn epsilon(x: f32) -> f32 {
    if x == 0.0 { EPSILON } else { x }
}

/// Unit vector in the direction of `v`; the zero vector stays zero
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v / epsilon(v.length())
}

/// Rotate `point` counter-clockwise about `pivot`
#[inline]
pub fn turn(pivot: Vec2, point: Vec2, radians: f32) -> Vec2 {
    pivot + Vec2::from_angle(radians).rotate(point - pivot)
}

/// Move from `a` toward `b` by exactly `length`
#[inline]
pub fn extend(a: Vec2, b: Vec2, length: f32) -> Vec2 {
    a + normalize(b - a) * length
}

/// Polar angle of `v` in degrees, in [0, 360)
///
/// Not `atan2`: a zero component is swapped for `EPSILON` before the
/// arctangent, so axis-aligned directions land a hair off the axis
/// (`(1, 0)` is slightly above 0°, `(0, 0)` reads as 45°).
pub fn polar_degrees(v: Vec2) -> f32 {
    let degrees = (epsilon(v.y) / epsilon(v.x)).atan().to_degrees();
    if v.x < 0.0 {
        return 180.0 + degrees;
    }
    if v.y < 0.0 {
        return 360.0 + degrees;
    }
    degrees
}

/// Wrap an angular delta in degrees into (-180, 180]
#[inline]
pub fn wrap_degrees(mut degrees: f32) -> f32 {
    while degrees > 180.0 {
        degrees -= 360.0;
    }
    while degrees <= -180.0 {
        degrees += 360.0;
    }
    degrees
}

/// Intersection of segments `a0→a1` and `b0→b1`
///
/// Parallel segments (zero determinant) and intersections outside either
/// segment's [0, 1] parameter range yield `None`.
///
/// Solved in f64: a ray aimed at a corner runs almost parallel to the edge
/// next to it, and the f32 determinant cancels badly there.
pub fn segment_intersect(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> Option<Vec2> {
    let (a0, a1, b0, b1) = (a0.as_dvec2(), a1.as_dvec2(), b0.as_dvec2(), b1.as_dvec2());
    let d0 = a0 - a1;
    let d1 = a0 - b0;
    let d2 = b0 - b1;

    let denominator = d0.perp_dot(d2);
    if denominator == 0.0 {
        return None;
    }
    let t = d1.perp_dot(d2) / denominator;
    let u = -d0.perp_dot(d1) / denominator;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some((a0 + t * (a1 - a0)).as_vec2())
}
