//! 2D geometry
//!
//! Pure vector math plus the rectangle shapes the visibility pass casts
//! rays against.

pub mod kernel;
pub mod obstacle;

pub use kernel::{epsilon, extend, normalize, polar_degrees, segment_intersect, turn, wrap_degrees};
pub use obstacle::{Boundary, Obstacle, Quad};
