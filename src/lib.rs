//! Flashlight - field-of-view visibility fans for 2D fog-of-war lighting
//!
//! Core modules:
//! - `geom`: Geometry kernel, obstacles and the viewport boundary
//! - `vis`: Per-frame visibility pass (candidates, ray refinement, sort, fan)
//! - `viewpoint`: Player and cursor adapters that produce a view each frame
//! - `scene`: Obstacle layouts, loadable from JSON
//! - `renderer`: WebGPU rendering of the fan and the scene
//! - `settings`: Tunables persisted as JSON

pub mod geom;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod viewpoint;
pub mod vis;

pub use scene::Scene;
pub use settings::{Settings, SettingsError};
pub use viewpoint::{CursorLight, MoveInput, PlayerController};
pub use vis::{Frame, View, Visibility, VisibilityError};

/// Configuration constants
pub mod consts {
    /// Substitute for a zero component in polar angles and the shortest nudge
    pub const EPSILON: f32 = 0.00001;

    /// Reference viewport
    pub const WINDOW_WIDTH: f32 = 1536.0;
    pub const WINDOW_HEIGHT: f32 = 768.0;

    /// Full cone angle (degrees)
    pub const FOV_DEGREES: f32 = 70.0;
    /// Light sits this far in front of the player, toward the cursor
    pub const LOOK_FROM_OFFSET: f32 = 15.0;

    /// Player motion: acceleration per frame and velocity damping
    pub const RUN: f32 = 3.75;
    pub const FRICTION: f32 = 0.7875;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 24.0;
    pub const PLAYER_HEIGHT: f32 = 16.0;

    /// Per-frame working buffer capacities
    pub const CAP_LINES: usize = 256;
    pub const CAP_CANDIDATES: usize = 768; // three probes per line
    pub const CAP_TRIANGLES: usize = 768;
}
