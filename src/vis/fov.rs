//! Field-of-view interval
//!
//! The cone is kept as a plain ascending numeric range `[lo, hi]` in degrees.
//! When the cone straddles 0° the lower bound goes negative, which is why
//! `contains` tests each angle both as-is and minus 360.

use glam::Vec2;

use super::error::VisibilityError;
use crate::geom::{extend, polar_degrees, turn, wrap_degrees};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fov {
    /// Lower bound in degrees, possibly negative
    pub lo: f32,
    /// Upper bound in degrees, in [0, 360)
    pub hi: f32,
    /// Far ends of the two cone edges, `MAX_DIAGONAL` from the viewpoint
    pub targets: [Vec2; 2],
}

impl Fov {
    /// Build the cone of total width `2 * half_fov` around `look_from → look_to`
    pub fn new(
        look_from: Vec2,
        look_to: Vec2,
        half_fov: f32,
        max_diagonal: f32,
    ) -> Result<Self, VisibilityError> {
        let width = (2.0 * half_fov).to_degrees().abs();
        if !width.is_finite() || width > 180.0 {
            return Err(VisibilityError::DegenerateFov { degrees: width });
        }

        let targets = [
            extend(look_from, turn(look_from, look_to, -half_fov), max_diagonal),
            extend(look_from, turn(look_from, look_to, half_fov), max_diagonal),
        ];
        let mut lo = polar_degrees(targets[0] - look_from);
        let mut hi = polar_degrees(targets[1] - look_from);

        if wrap_degrees(hi - lo) < 0.0 {
            std::mem::swap(&mut lo, &mut hi);
        }
        if hi < lo {
            lo -= 360.0;
        }

        Ok(Self { lo, hi, targets })
    }

    /// Angular width in degrees
    #[inline]
    pub fn span(&self) -> f32 {
        self.hi - self.lo
    }

    pub fn contains_degrees(&self, degrees: f32) -> bool {
        let inside = |d: f32| self.lo <= d && d <= self.hi;
        inside(degrees) || inside(degrees - 360.0)
    }

    /// Whether `point` lies inside the cone seen from `look_from`
    pub fn contains(&self, look_from: Vec2, point: Vec2) -> bool {
        self.contains_degrees(polar_degrees(point - look_from))
    }
}
