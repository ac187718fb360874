#![doc = include_str!("../README.md")]

// Core algorithms.
pub mod bounds;
pub mod geometry;
pub mod grid;
pub mod image;
pub mod segments;
pub mod template;

// Application-level glue: window choice, snapping, naming.
pub mod apps;
pub mod aspect;
pub mod snap;

// Ambient.
pub mod config;
pub mod diagnostics;
pub mod error;

// --- High-level re-exports -------------------------------------------------

pub use crate::bounds::{BoundsDetector, BoundsParams};
pub use crate::error::{Result, ScreenGridError};
pub use crate::geometry::{Line, Point, Rectangle, Rotation};
pub use crate::grid::{create_grid, GridRequest, GridType};
pub use crate::image::{Pixel, PixelBuffer};
pub use crate::snap::{GridTargetLocation, OverlayPlacement, SnapParams, Snapper};
pub use crate::template::TemplateMatcher;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use screen_grid::prelude::*;
///
/// let frame = Pixel::rgb(30, 30, 30);
/// let (w, h) = (64usize, 48usize);
/// let data = (0..h)
///     .flat_map(|y| (0..w).map(move |x| (x, y)))
///     .map(|(x, y)| {
///         if (12..52).contains(&x) && (10..38).contains(&y) {
///             Pixel::rgb(x as u8, y as u8, 128)
///         } else {
///             frame
///         }
///     })
///     .collect();
/// let img = PixelBuffer::from_pixels(w, h, data).unwrap();
///
/// let bounds = BoundsDetector::default().detect(&img).unwrap();
/// assert_eq!(bounds, Rectangle::new(12.0, 10.0, 40.0, 28.0));
///
/// let lines = GridRequest::new(GridType::Thirds, bounds.width, bounds.height)
///     .lines()
///     .unwrap();
/// assert_eq!(lines.len(), 4);
/// ```
pub mod prelude {
    pub use crate::bounds::BoundsDetector;
    pub use crate::geometry::{Line, Point, Rectangle};
    pub use crate::grid::{create_grid, GridRequest, GridType};
    pub use crate::image::{Pixel, PixelBuffer};
}
