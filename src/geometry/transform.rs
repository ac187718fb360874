use super::line::Line;
use super::point::Point;
use super::rotation::Rotation;
use nalgebra::{Point2, Rotation2, Vector2};

#[inline]
fn center() -> Vector2<f64> {
    Vector2::new(0.5, 0.5)
}

/// Rotate about the canvas center, flip, then scale to `width x height`.
///
/// Rotation and flips act on normalized coordinates; denormalization is
/// always the last step.
pub fn transform_point(
    point: Point,
    rotation: Rotation,
    flip_horizontal: bool,
    flip_vertical: bool,
    width: f64,
    height: f64,
) -> Point {
    let mut p = Point2::from(point);

    if rotation != Rotation::R0 {
        let rot = Rotation2::new(rotation.angle());
        p = rot * (p - center()) + center();
    }

    if flip_horizontal {
        p.x = 1.0 - p.x;
    }
    if flip_vertical {
        p.y = 1.0 - p.y;
    }

    Point::new(p.x * width, p.y * height)
}

/// `transform_point` applied to both endpoints of every line.
pub fn transform(
    lines: &[Line],
    rotation: Rotation,
    flip_horizontal: bool,
    flip_vertical: bool,
    width: f64,
    height: f64,
) -> Vec<Line> {
    lines
        .iter()
        .map(|line| {
            line.map(|p| {
                transform_point(p, rotation, flip_horizontal, flip_vertical, width, height)
            })
        })
        .collect()
}

/// Foot of the perpendicular from `p3` onto the infinite line through `p1`, `p2`.
///
/// `p1` and `p2` must differ.
pub fn perpendicular_foot(p1: Point, p2: Point, p3: Point) -> Point {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let k = (dy * (p3.x - p1.x) - dx * (p3.y - p1.y)) / (dy * dy + dx * dx);
    Point::new(p3.x - k * dy, p3.y + k * dx)
}
