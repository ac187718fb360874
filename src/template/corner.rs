use crate::error::Result;
use crate::geometry::Point;
use crate::image::io::load_rgb_image;
use crate::image::PixelBuffer;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Integer pixel position inside a captured image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Corner {
    pub x: usize,
    pub y: usize,
}

impl Corner {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Both coordinates strictly positive.
    #[inline]
    pub fn is_interior(&self) -> bool {
        self.x > 0 && self.y > 0
    }
}

impl From<Corner> for Point {
    fn from(c: Corner) -> Self {
        Point::new(c.x as f64, c.y as f64)
    }
}

/// Small reference bitmap of one corner of the renderer's canvas frame.
#[derive(Clone, Debug)]
pub struct CornerTemplate {
    name: String,
    image: PixelBuffer,
}

impl CornerTemplate {
    pub fn new(name: impl Into<String>, image: PixelBuffer) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Load a template bitmap; its name is the file stem.
    pub fn load(path: &Path) -> Result<Self> {
        let image = load_rgb_image(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, image))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.image.height()
    }
}
