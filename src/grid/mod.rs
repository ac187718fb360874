//! Composition grid generator.
//!
//! Every construction is produced in normalized canvas coordinates (`[0,1]` on
//! both axes, Y down) and is later mapped to pixels with
//! [`crate::geometry::transform`]. Constructions that must keep their own
//! proportions (Fibonacci, spiral, dynamic rectangles, circles) receive the
//! canvas aspect ratio, with width and height swapped when the grid is drawn
//! rotated by a quarter turn.
//!
//! Families:
//! - `fixed`: literal fractional positions (thirds, golden ratio, diagonals,
//!   crosshair, golden triangle);
//! - `fibonacci`: ten Fibonacci squares spiralling outwards;
//! - `spiral`: sampled golden spiral;
//! - `dynamic`: aspect-locked rectangles and golden circles.

mod catalog;
mod dynamic;
mod fibonacci;
mod fit;
mod fixed;
mod path;
pub mod ratios;
mod request;
mod spiral;
mod types;

pub use catalog::{GridModeItem, GRID_MODES};
pub use fibonacci::{fibonacci_squares, Fitting};
pub use fit::{align_to_center, canvas_aspect, extents, fit_rectangle, stretch_to_rectangle};
pub use path::render_path_data;
pub use request::GridRequest;
pub use spiral::spiral_polyline;
pub use types::GridType;

use crate::error::{Result, ScreenGridError};
use crate::geometry::Line;
use log::debug;

/// Normalized grid lines for `grid_type` on a `width x height` canvas.
///
/// `is_rotated` tells aspect-dependent constructions that the canvas will be
/// turned by 90 or 270 degrees. `GridType::None` yields no lines;
/// `GridType::Armature14Line` has no construction and fails with
/// `UnsupportedGrid`.
pub fn create_grid(grid_type: GridType, width: f64, height: f64, is_rotated: bool) -> Result<Vec<Line>> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(ScreenGridError::InvalidArgument(format!(
            "canvas size must be positive, got {width}x{height}"
        )));
    }
    let aspect = canvas_aspect(width, height, is_rotated);

    let lines = match grid_type {
        GridType::None => Vec::new(),
        GridType::Crosshair => fixed::crosshair(width, height),
        GridType::Thirds => fixed::thirds(),
        GridType::DiagonalOfThirds => fixed::diagonal_of_thirds(),
        GridType::GoldenRatio => fixed::golden_ratio(),
        GridType::GoldenTriangle => fixed::golden_triangle(width, height),
        GridType::GoldenDiagonal1 => fixed::golden_diagonal_1(),
        GridType::GoldenDiagonal2 => fixed::golden_diagonal_2(),
        GridType::FibonacciRectanglesZoomed => {
            fibonacci::fibonacci_rectangles(Fitting::Zoomed { aspect })
        }
        GridType::FibonacciRectanglesStretched => {
            fibonacci::fibonacci_rectangles(Fitting::Stretched)
        }
        GridType::GoldenSpiralZoomed => spiral::golden_spiral(Fitting::Zoomed { aspect }),
        GridType::GoldenSpiralStretched => spiral::golden_spiral(Fitting::Stretched),
        GridType::GoldenCircles => dynamic::golden_circles(aspect),
        GridType::OneDotFiveRectangle => dynamic::one_dot_five_rectangle(aspect),
        GridType::GoldenRectangle => dynamic::golden_rectangle(aspect),
        GridType::RootPhiRectangle => dynamic::root_phi_rectangle(aspect),
        GridType::Root2Rectangle => dynamic::root2_rectangle(aspect),
        GridType::Root3Rectangle => dynamic::root3_rectangle(aspect),
        GridType::Root4Rectangle => dynamic::root4_rectangle(aspect),
        GridType::Root5Rectangle => dynamic::root5_rectangle(aspect),
        GridType::Armature14Line => return Err(ScreenGridError::UnsupportedGrid(grid_type)),
    };

    debug!(
        "create_grid: {:?} {}x{} rotated={} -> {} lines",
        grid_type,
        width,
        height,
        is_rotated,
        lines.len()
    );
    Ok(lines)
}
