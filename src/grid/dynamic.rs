//! Aspect-locked rectangle grids ("dynamic rectangles") and golden circles.
//!
//! Each construction first fits a centered sub-rectangle of the target ratio
//! into the canvas (`fit::fit_rectangle`), draws its contour and both main
//! diagonals, then adds its own decoration.

use super::fit::fit_rectangle;
use super::ratios::{root, root_phi, HALF, ONE_DOT_FIVE, PHI, PHI_3_8, PHI_5_8};
use crate::geometry::{Line, Point, Rectangle};
use std::f64::consts::TAU;

const CIRCLE_SEGMENTS: usize = 100;

fn contour_with_diagonals(r: &Rectangle) -> Vec<Line> {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    vec![
        Line::from_coords(l, t, l, b),
        Line::from_coords(rt, t, rt, b),
        Line::from_coords(l, t, rt, t),
        Line::from_coords(l, b, rt, b),
        Line::from_coords(l, t, rt, b),
        Line::from_coords(l, b, rt, t),
    ]
}

/// Verticals at `w` from both sides and horizontals at `h` from top and bottom.
fn inset_cross(r: &Rectangle, w: f64, h: f64) -> [Line; 4] {
    [
        Line::from_coords(r.left() + w, r.top(), r.left() + w, r.bottom()),
        Line::from_coords(r.right() - w, r.top(), r.right() - w, r.bottom()),
        Line::from_coords(r.left(), r.top() + h, r.right(), r.top() + h),
        Line::from_coords(r.left(), r.bottom() - h, r.right(), r.bottom() - h),
    ]
}

fn horizontals(r: &Rectangle, h: f64) -> [Line; 2] {
    [
        Line::from_coords(r.left(), r.top() + h, r.right(), r.top() + h),
        Line::from_coords(r.left(), r.bottom() - h, r.right(), r.bottom() - h),
    ]
}

/// Diagonals of the two side bands of width `w` (reciprocal construction).
fn side_band_diagonals(r: &Rectangle, w: f64) -> [Line; 4] {
    [
        Line::from_coords(r.left(), r.top(), r.left() + w, r.bottom()),
        Line::from_coords(r.left(), r.bottom(), r.left() + w, r.top()),
        Line::from_coords(r.right(), r.top(), r.right() - w, r.bottom()),
        Line::from_coords(r.right(), r.bottom(), r.right() - w, r.top()),
    ]
}

/// `splits` evenly spaced verticals inside the rectangle.
fn vertical_divisions(r: &Rectangle, splits: usize) -> impl Iterator<Item = Line> + '_ {
    let step = r.width / (splits + 1) as f64;
    (1..=splits).map(move |i| {
        let x = r.left() + i as f64 * step;
        Line::from_coords(x, r.top(), x, r.bottom())
    })
}

/// Fitted rectangle, then reciprocal bands of width `W / ratio^2`.
fn reciprocal_rectangle(ratio: f64, aspect: f64) -> Vec<Line> {
    let r = fit_rectangle(ratio, aspect);
    let mut lines = contour_with_diagonals(&r);
    let w = r.width / (ratio * ratio);
    let h = r.height / (ratio * ratio);
    lines.extend(inset_cross(&r, w, h));
    lines.extend(side_band_diagonals(&r, w));
    lines
}

pub fn one_dot_five_rectangle(aspect: f64) -> Vec<Line> {
    reciprocal_rectangle(ONE_DOT_FIVE, aspect)
}

pub fn root_phi_rectangle(aspect: f64) -> Vec<Line> {
    reciprocal_rectangle(root_phi(), aspect)
}

pub fn golden_rectangle(aspect: f64) -> Vec<Line> {
    let r = fit_rectangle(PHI, aspect);
    let mut lines = contour_with_diagonals(&r);
    let w = r.width * PHI_3_8;
    let h = r.height * PHI_3_8;
    lines.extend(horizontals(&r, h));
    lines.extend([
        Line::from_coords(r.left() + w, r.top(), r.left() + w, r.bottom()),
        Line::from_coords(r.right() - w, r.top(), r.right() - w, r.bottom()),
    ]);
    lines.extend(side_band_diagonals(&r, w));
    lines
}

pub fn root2_rectangle(aspect: f64) -> Vec<Line> {
    let r = fit_rectangle(root(2.0), aspect);
    let mut lines = contour_with_diagonals(&r);
    lines.extend([
        Line::from_coords(r.left(), HALF, r.right(), HALF),
        Line::from_coords(HALF, r.top(), HALF, r.bottom()),
        Line::from_coords(r.left(), r.bottom(), HALF, r.top()),
        Line::from_coords(r.left(), r.top(), HALF, r.bottom()),
        Line::from_coords(HALF, r.bottom(), r.right(), r.top()),
        Line::from_coords(HALF, r.top(), r.right(), r.bottom()),
    ]);
    lines
}

pub fn root3_rectangle(aspect: f64) -> Vec<Line> {
    let r = fit_rectangle(root(3.0), aspect);
    let mut lines = contour_with_diagonals(&r);
    lines.extend(vertical_divisions(&r, 2));
    lines.extend(side_band_diagonals(&r, r.width / 3.0));
    lines.extend(horizontals(&r, r.height / 3.0));
    lines
}

pub fn root4_rectangle(aspect: f64) -> Vec<Line> {
    let r = fit_rectangle(root(4.0), aspect);
    let mut lines = contour_with_diagonals(&r);
    lines.extend(vertical_divisions(&r, 3));
    lines.extend(side_band_diagonals(&r, r.width / 4.0));
    lines.extend([
        Line::from_coords(r.left(), r.bottom(), r.center_x(), r.top()),
        Line::from_coords(r.right(), r.bottom(), r.center_x(), r.top()),
        Line::from_coords(r.left(), r.top(), r.center_x(), r.bottom()),
        Line::from_coords(r.right(), r.top(), r.center_x(), r.bottom()),
    ]);
    lines.extend(horizontals(&r, r.height / 4.0));
    lines
}

pub fn root5_rectangle(aspect: f64) -> Vec<Line> {
    let r = fit_rectangle(root(5.0), aspect);
    let mut lines = contour_with_diagonals(&r);
    lines.extend(vertical_divisions(&r, 4));
    lines.extend(side_band_diagonals(&r, r.width / 5.0));
    lines.push(Line::from_coords(r.left(), r.center_y(), r.right(), r.center_y()));
    lines.extend(horizontals(&r, r.height / 5.0));
    lines
}

/// Closed polyline approximating a circle on a canvas of ratio `aspect`.
///
/// The vertical radius is scaled by `aspect` so the circle stays round in
/// pixels; Y is flipped into screen orientation.
fn circle(center: Point, radius: f64, aspect: f64) -> Vec<Line> {
    let points: Vec<Point> = (0..=CIRCLE_SEGMENTS)
        .map(|i| {
            let theta = TAU * i as f64 / CIRCLE_SEGMENTS as f64;
            Point::new(
                center.x + radius * theta.cos(),
                1.0 - (center.y + radius * theta.sin() * aspect),
            )
        })
        .collect();
    points.windows(2).map(|w| Line::new(w[0], w[1])).collect()
}

/// Two pairs of circles in a golden rectangle: diameters `W/phi` and
/// `W(1 - 1/phi)`, each pair touching the left and right sides.
pub fn golden_circles(aspect: f64) -> Vec<Line> {
    let r = fit_rectangle(PHI, aspect);
    let mid = r.top() + r.height / 2.0;

    let major = r.width * PHI_5_8 / 2.0;
    let minor = r.width * PHI_3_8 / 2.0;

    let mut lines = Vec::with_capacity(4 * CIRCLE_SEGMENTS);
    for radius in [major, minor] {
        lines.extend(circle(Point::new(r.left() + radius, mid), radius, aspect));
        lines.extend(circle(Point::new(r.right() - radius, mid), radius, aspect));
    }
    lines
}
