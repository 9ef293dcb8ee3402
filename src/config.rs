use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::models::GeometryTrait;

/// Luminance threshold used when none is configured
pub const DEFAULT_THRESHOLD: u8 = 100;

/// Everything the solver needs besides the pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Pixels with mean RGB above this become white, the rest black
    pub threshold: u8,
    /// Piece outline geometry
    pub geometry: GeometryTrait,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            geometry: GeometryTrait::default(),
        }
    }
}

impl SolverConfig {
    /// Config with the given geometry and the default threshold
    pub fn with_geometry(geometry: GeometryTrait) -> Self {
        Self {
            geometry,
            ..Default::default()
        }
    }

    /// Apply `GAP_THRESHOLD` from the environment, if set and valid
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(threshold) = threshold_from_env() {
            self.threshold = threshold;
        }
        self
    }

    /// Check the geometry can describe a piece
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()
    }
}

/// Threshold override from `GAP_THRESHOLD`.
///
/// Returns `None` when unset or not a number in 0..=255.
pub fn threshold_from_env() -> Option<u8> {
    match env::var("GAP_THRESHOLD") {
        Ok(value) => value.trim().parse::<u8>().ok(),
        Err(_) => None,
    }
}

/// Load and validate a JSON solver config. Missing fields take defaults.
pub fn load_config(path: &Path) -> Result<SolverConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config = parse_config(&data).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

fn parse_config(data: &str) -> Result<SolverConfig, serde_json::Error> {
    serde_json::from_str(data)
}
