//! Flashlight - headless demo
//!
//! Walks a player around a scene with a wandering cursor and runs the
//! visibility pass every frame, reporting timing once per second.
//!
//! Usage: `flashlight [--cursor-light] [settings.json] [scene.json]`

use std::path::Path;
use std::time::{Duration, Instant};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use flashlight::geom::Boundary;
use flashlight::renderer;
use flashlight::{CursorLight, MoveInput, PlayerController, Scene, Settings, View, VisibilityError};

const FRAMES: u64 = 3600;
const SEED: u64 = 0x5eed;
/// Waypoints stay this far from the viewport edges
const MARGIN: f32 = 40.0;

/// Per-second counters, reset after each report
#[derive(Default)]
struct Stats {
    frames: u64,
    skipped: u64,
    elapsed: Duration,
    lines: usize,
    quads: usize,
    points: usize,
    triangles: usize,
    vertices: usize,
}

impl Stats {
    fn report(&mut self) {
        let ns_per_frame = self.elapsed.as_nanos() as f64 / self.frames.max(1) as f64;
        log::info!(
            "{:9.0} ns/f | {} frames ({} skipped) | {} lines, {} quads, {} points, {} triangles, {} vertices",
            ns_per_frame,
            self.frames,
            self.skipped,
            self.lines,
            self.quads,
            self.points,
            self.triangles,
            self.vertices
        );
        *self = Self::default();
    }
}

/// Random point a margin inside the boundary
fn waypoint(rng: &mut Pcg32, boundary: &Boundary) -> Vec2 {
    let min = boundary.origin + MARGIN;
    let max = (boundary.origin + boundary.size - MARGIN).max(min + 1.0);
    Vec2::new(rng.random_range(min.x..max.x), rng.random_range(min.y..max.y))
}

/// Hold whichever keys move the player toward `target`
fn steer(from: Vec2, target: Vec2) -> MoveInput {
    let delta = target - from;
    MoveInput {
        up: delta.y < -MARGIN / 4.0,
        down: delta.y > MARGIN / 4.0,
        left: delta.x < -MARGIN / 4.0,
        right: delta.x > MARGIN / 4.0,
    }
}

fn main() {
    env_logger::init();
    log::info!("Flashlight (headless) starting...");

    let mut cursor_light = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--cursor-light" => cursor_light = true,
            _ => paths.push(arg),
        }
    }

    let settings = match paths.first() {
        Some(path) => Settings::load_or_default(Path::new(path)),
        None => Settings::default(),
    };
    let mut scene = match paths.get(1) {
        Some(path) => Scene::load(Path::new(path)).unwrap_or_else(|e| {
            log::warn!("Using demo scene ({}: {})", path, e);
            Scene::demo()
        }),
        None => Scene::demo(),
    };
    log::info!(
        "Scene: {} obstacles in {}x{}, fov {} degrees",
        scene.obstacles.len(),
        scene.boundary.size.x,
        scene.boundary.size.y,
        settings.fov_degrees
    );

    let visibility = settings.visibility();
    let boundary = scene.boundary;
    let mut rng = Pcg32::seed_from_u64(SEED);
    let mut player = PlayerController::new(boundary.origin + boundary.size / 2.0);
    let light = CursorLight::default();
    let mut goal = waypoint(&mut rng, &boundary);
    let mut cursor = waypoint(&mut rng, &boundary);
    let mut cursor_goal = waypoint(&mut rng, &boundary);

    let mut stats = Stats::default();
    let mut totals = (0u64, 0u64);

    for _ in 0..FRAMES {
        let start = Instant::now();

        if player.position.distance(goal) < MARGIN {
            goal = waypoint(&mut rng, &boundary);
        }
        if cursor.distance(cursor_goal) < MARGIN {
            cursor_goal = waypoint(&mut rng, &boundary);
        }
        cursor = cursor.lerp(cursor_goal, 0.05);

        let (view, body): (View, _) = if cursor_light {
            (light.view(cursor), None)
        } else {
            let view = player.step(&settings, &steer(player.position, goal), cursor);
            (view, Some(player.body(&view, &settings)))
        };
        scene.spin(settings.spin_per_frame);

        stats.frames += 1;
        totals.0 += 1;
        match visibility.compute(&scene.obstacles, &boundary, view) {
            Ok(frame) => {
                let mut drawn = scene.obstacles.clone();
                drawn.extend(body);
                let vertices = renderer::frame_vertices(&frame, &drawn, &boundary, &settings);

                stats.lines = frame.boundary_rays.len();
                stats.quads = drawn.len();
                stats.points = frame.hits.len();
                stats.triangles = frame.triangles.len();
                stats.vertices = vertices.len();
            }
            Err(e @ VisibilityError::CapacityExceeded { .. }) => {
                log::warn!("Skipping frame: {}", e);
                stats.skipped += 1;
                totals.1 += 1;
            }
            Err(e) => {
                log::error!("Visibility pass rejected the view: {}", e);
                return;
            }
        }

        stats.elapsed += start.elapsed();
        if stats.elapsed >= Duration::from_secs(1) {
            stats.report();
        }
    }

    if stats.frames > 0 {
        stats.report();
    }
    log::info!("Done: {} frames, {} skipped", totals.0, totals.1);
}
