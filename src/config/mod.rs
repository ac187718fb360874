//! JSON configuration for the library knobs and the demo tools.
//!
//! Every struct is `#[serde(default)]` where a sensible default exists, so a
//! config file only lists what it changes.

mod templates;
mod tools;

pub use crate::bounds::BoundsParams;
pub use crate::snap::SnapParams;
pub use templates::TemplatePaths;
pub use tools::{BoundsOutputConfig, BoundsToolConfig, GridRenderConfig, GridRenderOutput};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and parse a JSON config file.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests;
