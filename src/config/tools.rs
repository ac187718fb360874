use super::TemplatePaths;
use crate::bounds::BoundsParams;
use crate::geometry::Rotation;
use crate::grid::GridType;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct BoundsToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub bounds: BoundsParams,
    /// When both corner lists are non-empty, template matching runs as well.
    #[serde(default)]
    pub templates: TemplatePaths,
    pub output: BoundsOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct BoundsOutputConfig {
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
    /// Copy of the input with the detected rectangle drawn on it.
    #[serde(default)]
    pub annotated_image: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridRenderConfig {
    pub width: u32,
    pub height: u32,
    /// Grids to render; empty means every grid that has a construction.
    pub grids: Vec<GridType>,
    pub rotation: Rotation,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub line_color: [u8; 3],
    pub background: [u8; 3],
    pub output: GridRenderOutput,
}

impl Default for GridRenderConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            grids: Vec::new(),
            rotation: Rotation::R0,
            flip_horizontal: false,
            flip_vertical: false,
            line_color: [0, 0, 0],
            background: [255, 255, 255],
            output: GridRenderOutput::default(),
        }
    }
}

impl GridRenderConfig {
    pub fn selected_grids(&self) -> Vec<GridType> {
        if self.grids.is_empty() {
            GridType::ALL
                .into_iter()
                .filter(|g| *g != GridType::None && g.has_construction())
                .collect()
        } else {
            self.grids.clone()
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridRenderOutput {
    /// One PNG per grid, named after the grid type.
    pub icon_dir: PathBuf,
    /// Map of grid type to vector path data.
    pub paths_json: PathBuf,
}

impl Default for GridRenderOutput {
    fn default() -> Self {
        Self {
            icon_dir: PathBuf::from("out/grids"),
            paths_json: PathBuf::from("out/grids/paths.json"),
        }
    }
}
