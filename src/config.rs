//! Runtime configuration.
//!
//! Defaults reproduce the reference look: 5000 pink particles, a 2 second
//! explosion, and a camera 50 units back with a 75° field of view. Every
//! value can be overridden from a JSON file, where missing keys keep their
//! defaults:
//!
//! ```json
//! { "particle_count": 8000, "motion": { "explode_duration_ms": 3000 } }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::shapes::ShapeId;

/// Particle integration constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Fraction of the remaining distance covered per frame while settling.
    pub ease_rate: f32,
    /// Per-frame velocity multiplier while exploding.
    pub explode_decay: f32,
    /// Initial speed of every particle when an explosion starts.
    pub explode_speed: f32,
    /// How long an explosion lasts before particles settle again.
    pub explode_duration_ms: u64,
    /// Edge length of the cube the particles start in.
    pub initial_spread: f32,
    /// Edge length of the cube initial velocities are drawn from.
    pub initial_velocity: f32,
}

impl MotionConfig {
    pub fn explode_duration(&self) -> Duration {
        Duration::from_millis(self.explode_duration_ms)
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            ease_rate: 0.05,
            explode_decay: 0.98,
            explode_speed: 3.0,
            explode_duration_ms: 2000,
            initial_spread: 100.0,
            initial_velocity: 0.1,
        }
    }
}

/// Gesture response constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Radians per frame while an open palm is held.
    pub rotation_speed: f32,
    /// Per-frame rotation speed multiplier once the palm is gone.
    pub rotation_decay: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 0.02,
            rotation_decay: 0.95,
        }
    }
}

/// Camera, window and point appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Point sprite size in world units.
    pub point_size: f32,
    /// Linear RGB, 0.0-1.0.
    pub color: [f32; 3],
    pub opacity: f32,
    /// Exponential-squared fog density.
    pub fog_density: f32,
    /// Distance of the camera from the origin along +Z.
    pub camera_distance: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            point_size: 0.5,
            // #ff69b4
            color: [1.0, 105.0 / 255.0, 180.0 / 255.0],
            opacity: 0.8,
            fog_density: 0.0008,
            camera_distance: 50.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            window_width: 1280,
            window_height: 720,
        }
    }
}

/// Complete configuration for a particle-morph session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    pub particle_count: u32,
    pub initial_shape: ShapeId,
    pub motion: MotionConfig,
    pub control: ControlConfig,
    pub view: ViewConfig,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            particle_count: 5000,
            initial_shape: ShapeId::Heart,
            motion: MotionConfig::default(),
            control: ControlConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

impl MorphConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the shape shown at startup.
    pub fn with_shape(mut self, shape: ShapeId) -> Self {
        self.initial_shape = shape;
        self
    }

    /// Set how long an explosion lasts.
    pub fn with_explode_duration(mut self, duration: Duration) -> Self {
        self.motion.explode_duration_ms = duration.as_millis() as u64;
        self
    }

    /// Set the settling ease rate.
    pub fn with_ease_rate(mut self, rate: f32) -> Self {
        self.motion.ease_rate = rate;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if self.particle_count == 0 {
            return Err(invalid("particle_count", "must be at least 1"));
        }
        if !(self.motion.ease_rate > 0.0 && self.motion.ease_rate <= 1.0) {
            return Err(invalid("motion.ease_rate", "must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.motion.explode_decay) {
            return Err(invalid("motion.explode_decay", "must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.control.rotation_decay) {
            return Err(invalid("control.rotation_decay", "must be in [0, 1]"));
        }
        if !(self.view.fov_degrees > 0.0 && self.view.fov_degrees < 180.0) {
            return Err(invalid("view.fov_degrees", "must be in (0, 180)"));
        }
        if !(self.view.near > 0.0 && self.view.far > self.view.near) {
            return Err(invalid("view.near", "need 0 < near < far"));
        }
        Ok(())
    }
}
