//! Grids defined by literal fractional positions.

use super::ratios::{HALF, ONE_SIXTH, ONE_THIRD, PHI_3_8, PHI_5_8, TWO_THIRDS};
use crate::geometry::{perpendicular_foot, Line, Point};

const HORIZONTAL_TICK: f64 = 3.0 / 100.0;
const VERTICAL_TICK: f64 = 1.0 / 30.0;
const CENTRAL_TICK: f64 = 3.0 / 200.0;

fn lines(coords: &[[f64; 4]]) -> Vec<Line> {
    coords
        .iter()
        .map(|&[x1, y1, x2, y2]| Line::from_coords(x1, y1, x2, y2))
        .collect()
}

/// Edge ticks plus a central cross whose vertical arm is scaled by the canvas
/// ratio so it renders square.
pub fn crosshair(width: f64, height: f64) -> Vec<Line> {
    let aspect = width / height;
    lines(&[
        [0.0, HALF, HORIZONTAL_TICK, HALF],
        [1.0, HALF, 1.0 - HORIZONTAL_TICK, HALF],
        [HALF, 1.0, HALF, 1.0 - VERTICAL_TICK],
        [HALF, 0.0, HALF, VERTICAL_TICK],
        [HALF - CENTRAL_TICK, HALF, HALF + CENTRAL_TICK, HALF],
        [HALF, HALF - CENTRAL_TICK * aspect, HALF, HALF + CENTRAL_TICK * aspect],
    ])
}

pub fn thirds() -> Vec<Line> {
    lines(&[
        [0.0, ONE_THIRD, 1.0, ONE_THIRD],
        [0.0, TWO_THIRDS, 1.0, TWO_THIRDS],
        [ONE_THIRD, 0.0, ONE_THIRD, 1.0],
        [TWO_THIRDS, 0.0, TWO_THIRDS, 1.0],
    ])
}

pub fn diagonal_of_thirds() -> Vec<Line> {
    lines(&[
        [0.0, 1.0, 1.0, 0.0],
        [0.0, 1.0 - ONE_SIXTH, 1.0 - ONE_SIXTH, 0.0],
        [ONE_SIXTH, 1.0, 1.0, ONE_SIXTH],
    ])
}

pub fn golden_ratio() -> Vec<Line> {
    lines(&[
        [0.0, PHI_3_8, 1.0, PHI_3_8],
        [0.0, PHI_5_8, 1.0, PHI_5_8],
        [PHI_3_8, 0.0, PHI_3_8, 1.0],
        [PHI_5_8, 0.0, PHI_5_8, 1.0],
    ])
}

/// Main diagonal and the two perpendiculars dropped onto it from the other
/// corners. The feet are computed in pixel space so the right angles survive
/// a non-square canvas.
pub fn golden_triangle(width: f64, height: f64) -> Vec<Line> {
    let bottom_left = Point::new(0.0, height);
    let top_right = Point::new(width, 0.0);

    let foot = |corner: Point| {
        let f = perpendicular_foot(bottom_left, top_right, corner);
        // Reflect onto the top-left to bottom-right diagonal.
        Point::new(f.x / width, (height - f.y) / height)
    };

    vec![
        Line::from_coords(0.0, 0.0, 1.0, 1.0),
        Line::new(Point::new(0.0, 1.0), foot(Point::ZERO)),
        Line::new(Point::new(1.0, 0.0), foot(Point::new(width, height))),
    ]
}

pub fn golden_diagonal_1() -> Vec<Line> {
    lines(&[
        [0.0, 1.0, 1.0, 0.0],
        [0.0, 1.0, PHI_3_8, 0.0],
        [PHI_5_8, 1.0, 1.0, 0.0],
    ])
}

pub fn golden_diagonal_2() -> Vec<Line> {
    lines(&[
        [0.0, 1.0, 1.0, 0.0],
        [0.0, 0.0, PHI_3_8, 1.0],
        [PHI_5_8, 0.0, 1.0, 1.0],
    ])
}
