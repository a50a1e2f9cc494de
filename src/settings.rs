//! Tunables and preferences
//!
//! Persisted as JSON. Missing fields fall back to their defaults so an old
//! settings file keeps loading after new fields are added.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::vertex::colors;
use crate::vis::{FanStyle, Limits, Visibility};

/// Failure to read or parse a settings or scene file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "i/o error: {e}"),
            SettingsError::Parse(e) => write!(f, "invalid json: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Light and movement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Light cone ===
    /// Full opening angle of the cone (degrees, at most 180)
    pub fov_degrees: f32,
    /// How far in front of the player the light sits
    pub look_from_offset: f32,
    /// Apex and edge colors of the lit fan
    pub fan: FanStyle,

    // === Player ===
    /// Acceleration per frame while a direction is held
    pub run: f32,
    /// Velocity multiplier applied every frame
    pub friction: f32,
    /// Player body (width across the look direction, depth along it)
    pub player_size: Vec2,

    // === Scene ===
    /// Obstacle spin per frame (radians); 0 keeps the scene still
    pub spin_per_frame: f32,

    // === Debug ===
    /// Draw the probe rays on top of the fan
    pub show_rays: bool,
    pub ray_color: [f32; 4],

    /// Per-frame working buffer capacities
    pub limits: Limits,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fov_degrees: FOV_DEGREES,
            look_from_offset: LOOK_FROM_OFFSET,
            fan: FanStyle::default(),

            run: RUN,
            friction: FRICTION,
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),

            spin_per_frame: 0.001,

            show_rays: false,
            ray_color: colors::RAY,

            limits: Limits::default(),
        }
    }
}

impl Settings {
    /// Half of the cone angle in radians
    pub fn half_fov(&self) -> f32 {
        (self.fov_degrees / 2.0).to_radians()
    }

    /// Visibility pass configured from these settings
    pub fn visibility(&self) -> Visibility {
        Visibility::new(self.half_fov())
            .with_limits(self.limits)
            .with_style(self.fan)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.fov_degrees, 70.0);
        assert!((settings.half_fov() - 35f32.to_radians()).abs() < 1e-6);
        assert_eq!(settings.visibility().limits, Limits::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "fov_degrees": 90.0 }"#).unwrap();
        assert_eq!(settings.fov_degrees, 90.0);
        assert_eq!(settings.run, RUN);
        assert_eq!(settings.limits, Limits::default());
    }

    #[test]
    fn test_partial_limits_keep_other_capacities() {
        let settings: Settings =
            serde_json::from_str(r#"{ "limits": { "triangles": 512 } }"#).unwrap();
        assert_eq!(settings.limits.triangles, 512);
        assert_eq!(settings.limits.lines, CAP_LINES);
        assert_eq!(settings.limits.candidates, CAP_CANDIDATES);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let path = Path::new("/nonexistent/flashlight/settings.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(path), Settings::default());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let path = std::env::temp_dir().join(format!("flashlight-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let result = Settings::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("flashlight-settings-{}.json", std::process::id()));
        let settings = Settings {
            fov_degrees: 45.0,
            show_rays: true,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, settings);
    }
}
