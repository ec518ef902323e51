//! Runtime configuration with TOML preset support.
//!
//! All sub-structs use `#[serde(default)]` so partial TOML files (e.g. only
//! overriding `[camera]`) work correctly. `Options::default()` reproduces
//! the shipped viewer's tuning.

mod assets;
mod camera;
mod display;

use std::path::Path;

pub use assets::AssetOptions;
pub use camera::CameraOptions;
pub use display::DisplayOptions;
use serde::{Deserialize, Serialize};

use crate::error::MeshviewError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera motion tunables.
    pub camera: CameraOptions,
    /// Clear/object/light colors.
    pub display: DisplayOptions,
    /// Resource names resolved through the platform API.
    pub assets: AssetOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MeshviewError> {
        let content =
            std::fs::read_to_string(path).map_err(MeshviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| MeshviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MeshviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MeshviewError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(MeshviewError::Io)
    }
}
