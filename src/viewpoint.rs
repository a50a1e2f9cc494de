//! Viewpoint sources
//!
//! Thin adapters that turn input into a `View` for the visibility pass. The
//! pass itself does not care whether the light is carried by a player, pinned
//! to the cursor, or aimed by an AI.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use crate::geom::{Obstacle, extend, normalize, polar_degrees};
use crate::renderer::vertex::colors;
use crate::settings::Settings;
use crate::vis::View;

/// Held movement keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    /// Unnormalized direction in screen space (y grows downward)
    pub fn direction(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;
        if self.up {
            direction.y -= 1.0;
        }
        if self.down {
            direction.y += 1.0;
        }
        if self.left {
            direction.x -= 1.0;
        }
        if self.right {
            direction.x += 1.0;
        }
        direction
    }
}

/// A player carrying the light, aiming at the cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerController {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl PlayerController {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Advance one frame and return the light's view
    ///
    /// Diagonal input is normalized so it is not faster than straight input.
    pub fn step(&mut self, settings: &Settings, input: &MoveInput, cursor: Vec2) -> View {
        self.velocity += normalize(input.direction()) * settings.run;
        self.velocity *= settings.friction;
        self.position += self.velocity;

        View::aimed(extend(self.position, cursor, settings.look_from_offset), cursor)
    }

    /// The player's body, turned so its depth runs along the look direction
    pub fn body(&self, view: &View, settings: &Settings) -> Obstacle {
        let heading = polar_degrees(view.look_to - view.look_from).to_radians();
        Obstacle::new(
            self.position - settings.player_size / 2.0,
            settings.player_size,
            heading + FRAC_PI_2,
            colors::PLAYER,
        )
    }
}

/// A light pinned to the cursor, shining in a fixed direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorLight {
    pub direction: Vec2,
}

impl Default for CursorLight {
    fn default() -> Self {
        Self { direction: Vec2::X }
    }
}

impl CursorLight {
    pub fn view(&self, cursor: Vec2) -> View {
        View::aimed(cursor, cursor + self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction() {
        let input = MoveInput {
            up: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(1.0, -1.0));
        // Opposite keys cancel
        let input = MoveInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::ZERO);
    }

    #[test]
    fn test_player_accelerates_then_coasts() {
        let settings = Settings::default();
        let mut player = PlayerController::new(Vec2::new(100.0, 100.0));
        let right = MoveInput {
            right: true,
            ..Default::default()
        };

        player.step(&settings, &right, Vec2::new(500.0, 100.0));
        let first = player.velocity.x;
        assert!((first - settings.run * settings.friction).abs() < 1e-5);
        player.step(&settings, &right, Vec2::new(500.0, 100.0));
        assert!(player.velocity.x > first);

        // Friction bleeds speed once the key is released
        let moving = player.velocity.x;
        player.step(&settings, &MoveInput::default(), Vec2::new(500.0, 100.0));
        assert!((player.velocity.x - moving * settings.friction).abs() < 1e-5);
        assert!(player.position.x > 100.0);
    }

    #[test]
    fn test_diagonal_not_faster() {
        let settings = Settings::default();
        let mut straight = PlayerController::new(Vec2::ZERO);
        let mut diagonal = PlayerController::new(Vec2::ZERO);
        straight.step(
            &settings,
            &MoveInput {
                down: true,
                ..Default::default()
            },
            Vec2::ZERO,
        );
        diagonal.step(
            &settings,
            &MoveInput {
                down: true,
                left: true,
                ..Default::default()
            },
            Vec2::ZERO,
        );
        assert!((straight.velocity.length() - diagonal.velocity.length()).abs() < 1e-4);
    }

    #[test]
    fn test_look_from_is_offset_toward_cursor() {
        let settings = Settings::default();
        let mut player = PlayerController::new(Vec2::new(200.0, 200.0));
        let view = player.step(&settings, &MoveInput::default(), Vec2::new(200.0, 500.0));
        assert!((view.look_from - Vec2::new(200.0, 200.0 + settings.look_from_offset)).length() < 1e-4);
        assert_eq!(view.look_to, Vec2::new(200.0, 500.0));
    }

    #[test]
    fn test_body_does_not_contain_light() {
        let settings = Settings::default();
        let mut player = PlayerController::new(Vec2::new(300.0, 300.0));
        let view = player.step(&settings, &MoveInput::default(), Vec2::new(700.0, 420.0));
        let body = player.body(&view, &settings);
        assert!((body.center() - player.position).length() < 1e-4);

        // Depth runs along the look direction, so the light sits outside the body
        let quad = body.quad();
        let forward = (view.look_to - view.look_from).normalize();
        let reach = quad
            .points
            .iter()
            .map(|p| (*p - player.position).dot(forward))
            .fold(f32::MIN, f32::max);
        assert!((reach - settings.player_size.y / 2.0).abs() < 1e-3);
        assert!(reach < settings.look_from_offset);
    }

    #[test]
    fn test_cursor_light() {
        let light = CursorLight {
            direction: Vec2::new(0.0, -1.0),
        };
        let view = light.view(Vec2::new(10.0, 20.0));
        assert_eq!(view.look_from, Vec2::new(10.0, 20.0));
        assert_eq!(view.look_to, Vec2::new(10.0, 19.0));
    }
}
