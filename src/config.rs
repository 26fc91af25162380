//! JSON configuration for the display, renderer and animations.
//!
//! Every field has a default matching the original deployment (a single
//! 32x32 panel), so an empty or missing config file still produces a
//! runnable setup. The binary loads `config.json` and falls back to
//! defaults with a warning when it can't.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::colors::pack_color;
use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::render::DEFAULT_FOCAL_LENGTH;

/// Errors that can occur when loading a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read.
    Io(std::io::Error),
    /// File was not valid JSON for the config schema.
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub renderer: RendererConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            renderer: RendererConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl Config {
    /// Load a config file, filling unspecified fields with defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Physical panel layout. The framebuffer resolution is derived from it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Rows of one panel.
    #[serde(default = "default_rows")]
    pub rows: u32,
    /// Columns of one panel.
    #[serde(default = "default_cols")]
    pub cols: u32,
    /// Panels chained horizontally.
    #[serde(default = "default_one")]
    pub chain_length: u32,
    /// Chains stacked vertically.
    #[serde(default = "default_one")]
    pub parallel: u32,
    /// Panel brightness percentage, applied by the preview.
    #[serde(default = "default_brightness")]
    pub brightness: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 32,
            chain_length: 1,
            parallel: 1,
            brightness: 100,
        }
    }
}

impl DisplayConfig {
    /// Total framebuffer resolution across all chained panels.
    pub fn resolution(&self) -> (u32, u32) {
        (self.cols * self.chain_length, self.rows * self.parallel)
    }
}

/// Projection and lighting options.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RendererConfig {
    #[serde(default = "default_focal_length")]
    pub focal_length: f32,
    /// Per-frame delay for the animation loop.
    #[serde(default = "default_frame_rate_ms")]
    pub frame_rate_ms: u64,
    #[serde(default = "default_light_dir_x")]
    pub light_dir_x: f32,
    #[serde(default = "default_light_dir_y")]
    pub light_dir_y: f32,
    #[serde(default = "default_light_dir_z")]
    pub light_dir_z: f32,
    #[serde(default = "default_255")]
    pub light_r: u8,
    #[serde(default = "default_255")]
    pub light_g: u8,
    #[serde(default = "default_light_b")]
    pub light_b: u8,
    #[serde(default = "default_100")]
    pub shadow_r: u8,
    #[serde(default = "default_100")]
    pub shadow_g: u8,
    #[serde(default = "default_100")]
    pub shadow_b: u8,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            focal_length: DEFAULT_FOCAL_LENGTH,
            frame_rate_ms: 33,
            light_dir_x: 0.8,
            light_dir_y: 0.6,
            light_dir_z: 1.0,
            light_r: 255,
            light_g: 255,
            light_b: 200,
            shadow_r: 100,
            shadow_g: 100,
            shadow_b: 100,
        }
    }
}

impl RendererConfig {
    /// Build the directional light these options describe.
    pub fn light(&self) -> DirectionalLight {
        DirectionalLight::new(
            Vec3::new(self.light_dir_x, self.light_dir_y, self.light_dir_z),
            pack_color(self.light_r, self.light_g, self.light_b),
            pack_color(self.shadow_r, self.shadow_g, self.shadow_b),
        )
    }
}

/// Scene animation options.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(default = "default_num_cubes")]
    pub num_cubes: u32,
    #[serde(default = "default_cube_size")]
    pub cube_size: f32,
    #[serde(default = "default_rotation_speed_x")]
    pub rotation_speed_x: f32,
    #[serde(default = "default_rotation_speed_y")]
    pub rotation_speed_y: f32,
    #[serde(default = "default_rotation_speed_z")]
    pub rotation_speed_z: f32,
    /// Vertical bob frequency for the cube field.
    #[serde(default = "default_bob_speed")]
    pub position_animation_speed: f32,
    /// Vertical bob amplitude in world units.
    #[serde(default = "default_bob_amplitude")]
    pub position_animation_amplitude: f32,
    /// Seconds between falling-rain spawns.
    #[serde(default = "default_spawn_interval")]
    pub spawn_interval: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            num_cubes: 3,
            cube_size: 2.5,
            rotation_speed_x: 0.7,
            rotation_speed_y: 0.5,
            rotation_speed_z: 0.3,
            position_animation_speed: 0.5,
            position_animation_amplitude: 2.0,
            spawn_interval: 0.3,
        }
    }
}

fn default_rows() -> u32 {
    32
}
fn default_cols() -> u32 {
    32
}
fn default_one() -> u32 {
    1
}
fn default_brightness() -> u8 {
    100
}
fn default_focal_length() -> f32 {
    DEFAULT_FOCAL_LENGTH
}
fn default_frame_rate_ms() -> u64 {
    33
}
fn default_light_dir_x() -> f32 {
    0.8
}
fn default_light_dir_y() -> f32 {
    0.6
}
fn default_light_dir_z() -> f32 {
    1.0
}
fn default_255() -> u8 {
    255
}
fn default_light_b() -> u8 {
    200
}
fn default_100() -> u8 {
    100
}
fn default_num_cubes() -> u32 {
    3
}
fn default_cube_size() -> f32 {
    2.5
}
fn default_rotation_speed_x() -> f32 {
    0.7
}
fn default_rotation_speed_y() -> f32 {
    0.5
}
fn default_rotation_speed_z() -> f32 {
    0.3
}
fn default_bob_speed() -> f32 {
    0.5
}
fn default_bob_amplitude() -> f32 {
    2.0
}
fn default_spawn_interval() -> f32 {
    0.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.display.resolution(), (32, 32));
        assert_eq!(config.renderer.frame_rate_ms, 33);
        assert!((config.renderer.focal_length - 5.0).abs() < f32::EPSILON);
        assert_eq!(config.animation.num_cubes, 3);
        assert!((config.animation.cube_size - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_deserialize_partial_display() {
        let json = r#"{ "display": { "rows": 64, "chain_length": 2 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.display.rows, 64);
        assert_eq!(config.display.cols, 32); // default
        assert_eq!(config.display.resolution(), (64, 64));
        assert_eq!(config.renderer, RendererConfig::default());
    }

    #[test]
    fn test_resolution_derivation() {
        let display = DisplayConfig {
            rows: 32,
            cols: 64,
            chain_length: 3,
            parallel: 2,
            brightness: 100,
        };
        assert_eq!(display.resolution(), (192, 64));
    }

    #[test]
    fn test_light_from_renderer_config() {
        let renderer = RendererConfig::default();
        let light = renderer.light();
        assert!((light.direction.length() - 1.0).abs() < 1e-6);
        assert_eq!(light.light_color, crate::colors::DEFAULT_LIGHT);
        assert_eq!(light.shadow_color, crate::colors::DEFAULT_SHADOW);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let path = std::env::temp_dir().join("ledshade_bad_config.json");
        std::fs::write(&path, "{ not json").unwrap();
        match Config::load(&path) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        match Config::load("/nonexistent/ledshade/config.json") {
            Err(ConfigError::Io(_)) => {}
            other => panic!("expected IO error, got {:?}", other.map(|_| ())),
        }
    }
}
