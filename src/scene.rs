//! Scene snapshot: the viewport boundary plus the obstacles inside it
//!
//! Scenes are plain data. They can be loaded from JSON, built by hand, or
//! scattered from a seed for stress runs.

use std::path::Path;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::geom::{Boundary, Obstacle};
use crate::renderer::vertex::colors;
use crate::settings::SettingsError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub boundary: Boundary,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

impl Scene {
    pub fn new(boundary: Boundary) -> Self {
        Self {
            boundary,
            obstacles: Vec::new(),
        }
    }

    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Walls and pillars in a 1536×768 viewport
    pub fn demo() -> Self {
        let wall = |x: f32, y: f32, w: f32, h: f32| {
            Obstacle::new(Vec2::new(x, y), Vec2::new(w, h), 0.0, colors::OBSTACLE)
        };
        Self {
            boundary: Boundary::viewport(WINDOW_WIDTH, WINDOW_HEIGHT),
            obstacles: vec![
                wall(400.0, 400.0, 25.0, 100.0),
                wall(600.0, 250.0, 10.0, 150.0),
                wall(850.0, 400.0, 5.0, 300.0),
                wall(850.0, 300.0, 100.0, 5.0),
                wall(1200.0, 150.0, 5.0, 50.0),
                wall(1150.0, 225.0, 25.0, 25.0),
                wall(1175.0, 650.0, 5.0, 75.0),
            ],
        }
    }

    /// `count` random rotated rectangles inside `boundary`
    pub fn scatter(boundary: Boundary, count: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let max = boundary.origin + boundary.size;
        let obstacles = (0..count)
            .map(|_| {
                let size = Vec2::new(rng.random_range(5.0..120.0), rng.random_range(5.0..120.0));
                let center = Vec2::new(
                    rng.random_range(boundary.origin.x..max.x.max(boundary.origin.x + 1.0)),
                    rng.random_range(boundary.origin.y..max.y.max(boundary.origin.y + 1.0)),
                );
                Obstacle::centered(center, size)
                    .with_rotation(rng.random_range(0.0..std::f32::consts::TAU))
            })
            .collect();
        Self {
            boundary,
            obstacles,
        }
    }

    /// Advance every obstacle's rotation, wrapping at a full turn
    pub fn spin(&mut self, radians: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.rotation = (obstacle.rotation + radians).rem_euclid(std::f32::consts::TAU);
        }
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::demo()
    }
}
