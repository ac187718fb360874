//! Fitting helpers shared by the grid families: extents, affine stretches,
//! centering and the aspect-locked sub-rectangle.

use super::ratios::{HALF, PHI};
use crate::geometry::{Line, Point, Rectangle};

/// Bounding box of a line set. `None` for an empty set.
pub fn extents(lines: &[Line]) -> Option<Rectangle> {
    let first = lines.first()?.p1;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in lines.iter().flat_map(|l| [l.p1, l.p2]) {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(Rectangle::from_edges(min_x, min_y, max_x, max_y))
}

/// Affinely map the box `[min_x, max_x] x [min_y, max_y]` onto
/// `[0, target_w] x [0, target_h]`.
pub fn stretch_to_rectangle(
    target_w: f64,
    target_h: f64,
    lines: &[Line],
    bounds: &Rectangle,
) -> Vec<Line> {
    let scale_x = target_w / bounds.width;
    let scale_y = target_h / bounds.height;
    lines
        .iter()
        .map(|l| {
            l.map(|p| {
                Point::new(
                    (p.x - bounds.left()) * scale_x,
                    (p.y - bounds.top()) * scale_y,
                )
            })
        })
        .collect()
}

/// Stretch independently per axis to fill the unit square exactly.
pub fn stretch_to_unit(lines: &[Line], bounds: &Rectangle) -> Vec<Line> {
    stretch_to_rectangle(1.0, 1.0, lines, bounds)
}

/// Translate so the bounding box of `lines` is centered in the unit square.
pub fn align_to_center(lines: &[Line]) -> Vec<Line> {
    let Some(ext) = extents(lines) else {
        return Vec::new();
    };
    let dx = (1.0 - ext.width) / 2.0 - ext.left();
    let dy = (1.0 - ext.height) / 2.0 - ext.top();
    lines
        .iter()
        .map(|l| l.map(|p| Point::new(p.x + dx, p.y + dy)))
        .collect()
}

/// Scale a phi-proportioned construction so it keeps its shape on a canvas of
/// ratio `aspect`, then center it.
///
/// Narrower canvases than phi fill the width; wider ones fill the height.
pub fn stretch_with_aspect(lines: &[Line], aspect: f64, bounds: &Rectangle) -> Vec<Line> {
    let stretched = if aspect < PHI {
        stretch_to_rectangle(1.0, (PHI - 1.0) * aspect, lines, bounds)
    } else {
        stretch_to_rectangle(PHI / aspect, 1.0, lines, bounds)
    };
    align_to_center(&stretched)
}

/// Canvas width:height ratio, with the axes swapped for a rotated grid.
#[inline]
pub fn canvas_aspect(width: f64, height: f64, is_rotated: bool) -> f64 {
    if is_rotated {
        height / width
    } else {
        width / height
    }
}

/// Centered sub-rectangle of the unit square whose pixel ratio is `desired`
/// on a canvas of ratio `actual`.
///
/// Width shrinks when the canvas is wider than desired, height otherwise.
pub fn fit_rectangle(desired: f64, actual: f64) -> Rectangle {
    if desired < actual {
        let w = desired / actual;
        Rectangle::from_edges(HALF - w / 2.0, 0.0, HALF + w / 2.0, 1.0)
    } else {
        let h = actual / desired;
        Rectangle::from_edges(0.0, HALF - h / 2.0, 1.0, HALF + h / 2.0)
    }
}
