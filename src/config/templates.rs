use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Corner bitmaps of the renderer skin, in priority order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatePaths {
    pub top_left: Vec<PathBuf>,
    pub bottom_right: Vec<PathBuf>,
}

impl TemplatePaths {
    pub fn is_empty(&self) -> bool {
        self.top_left.is_empty() || self.bottom_right.is_empty()
    }
}
