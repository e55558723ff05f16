use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::frame::ProjectionConfig;

/// Application settings, loadable from a JSON file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            camera: CameraConfig::default(),
            projection: ProjectionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse config JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_json(&text).with_context(|| format!("In {:?}", path))?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
