//! Tunables for the particle field.
//!
//! Every field has a default matching the portfolio page, so a JSON file only
//! needs to list the values it changes:
//!
//! ```json
//! { "max_particles": 80, "link_distance": 90.0 }
//! ```

use crate::error::ConfigError;
use crate::surface::Rgba;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Particle field configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Surface area (square pixels) per particle.
    pub density_area: f32,
    /// Upper bound on the particle count, keeps the pairwise pass cheap.
    pub max_particles: usize,
    /// Distance within which the pointer pushes particles away.
    pub pointer_radius: f32,
    /// Displacement applied at zero distance from the pointer.
    pub repel_strength: f32,
    /// Particles closer than this are joined by a line.
    pub link_distance: f32,
    /// Line alpha for two touching particles.
    pub link_opacity: f32,
    /// Drift velocity components are drawn from `-max_speed..max_speed`.
    pub max_speed: f32,
    /// Particle radius range, `min_size..max_size`.
    pub min_size: f32,
    pub max_size: f32,
    pub line_width: f32,
    pub particle_color: Rgba,
    /// Line color; alpha is replaced per line.
    pub link_color: Rgba,
    /// Clear color of the native viewer. The browser canvas is transparent.
    pub background: Rgba,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density_area: 15_000.0,
            max_particles: 150,
            pointer_radius: 150.0,
            repel_strength: 2.0,
            link_distance: 120.0,
            link_opacity: 0.3,
            max_speed: 0.25,
            min_size: 1.0,
            max_size: 3.0,
            line_width: 1.0,
            particle_color: Rgba::new(0, 212, 255, 0.8),
            link_color: Rgba::new(0, 212, 255, 1.0),
            background: Rgba::new(10, 10, 15, 1.0),
        }
    }
}

impl FieldConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
