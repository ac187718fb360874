//! Sequence of Fibonacci squares attached around a growing bounding box.

use super::fit::{stretch_to_unit, stretch_with_aspect};
use crate::geometry::{Line, Point, Rectangle};

const NUMBER_OF_RECTANGLES: usize = 10;

/// Whether the construction keeps its own proportions or fills the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fitting {
    /// Keep phi proportions for a canvas of the given width:height ratio.
    Zoomed { aspect: f64 },
    Stretched,
}

fn contour(left: i64, right: i64, top: i64, bottom: i64) -> [Line; 4] {
    let (l, r, t, b) = (left as f64, right as f64, top as f64, bottom as f64);
    [
        Line::new(Point::new(l, b), Point::new(r, b)),
        Line::new(Point::new(r, b), Point::new(r, t)),
        Line::new(Point::new(r, t), Point::new(l, t)),
        Line::new(Point::new(l, t), Point::new(l, b)),
    ]
}

/// Raw construction in integer units and the final bounding box.
///
/// Squares are attached cyclically below, right, above and left of the
/// current box, starting from a unit square to the right of the origin.
pub fn fibonacci_squares() -> (Vec<Line>, Rectangle) {
    let (mut current, mut previous) = (1i64, 0i64);
    let (mut left, mut right, mut top, mut bottom) = (0i64, 1i64, 0i64, 0i64);

    let mut lines = Vec::with_capacity(NUMBER_OF_RECTANGLES * 4);
    for i in 0..NUMBER_OF_RECTANGLES {
        match i % 4 {
            0 => {
                lines.extend(contour(left, right, bottom, bottom + current));
                bottom += current;
            }
            1 => {
                lines.extend(contour(right, right + current, top, bottom));
                right += current;
            }
            2 => {
                lines.extend(contour(left, right, top - current, top));
                top -= current;
            }
            _ => {
                lines.extend(contour(left - current, left, top, bottom));
                left -= current;
            }
        }
        let next = current + previous;
        previous = current;
        current = next;
    }

    let bounds = Rectangle::from_edges(left as f64, top as f64, right as f64, bottom as f64);
    (lines, bounds)
}

pub fn fibonacci_rectangles(fitting: Fitting) -> Vec<Line> {
    let (lines, bounds) = fibonacci_squares();
    match fitting {
        Fitting::Zoomed { aspect } => stretch_with_aspect(&lines, aspect, &bounds),
        Fitting::Stretched => stretch_to_unit(&lines, &bounds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::fit::extents;

    #[test]
    fn squares_have_fibonacci_sides() {
        let (lines, bounds) = fibonacci_squares();
        assert_eq!(lines.len(), 40);
        let sides: Vec<f64> = lines.chunks(4).map(|c| c[0].length()).collect();
        assert_eq!(sides, vec![1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0]);
        assert_eq!((bounds.width, bounds.height), (89.0, 55.0));
    }

    #[test]
    fn stretched_fills_unit_square() {
        let lines = fibonacci_rectangles(Fitting::Stretched);
        let ext = extents(&lines).unwrap();
        assert!(ext.left().abs() < 1e-12 && ext.top().abs() < 1e-12);
        assert!((ext.right() - 1.0).abs() < 1e-12 && (ext.bottom() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zoomed_is_centered() {
        let lines = fibonacci_rectangles(Fitting::Zoomed { aspect: 4.0 / 3.0 });
        let ext = extents(&lines).unwrap();
        assert!((ext.center_x() - 0.5).abs() < 1e-9);
        assert!((ext.center_y() - 0.5).abs() < 1e-9);
        assert!((ext.width - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fitting_compares_by_aspect() {
        let zoomed = Fitting::Zoomed { aspect: 16.0 / 9.0 };
        assert_eq!(zoomed, Fitting::Zoomed { aspect: 16.0 / 9.0 });
        assert_ne!(zoomed, Fitting::Zoomed { aspect: 4.0 / 3.0 });
        assert_ne!(zoomed, Fitting::Stretched);
        // NaN aspects never compare equal, so `Fitting` is only `PartialEq`.
        assert_ne!(
            Fitting::Zoomed { aspect: f64::NAN },
            Fitting::Zoomed { aspect: f64::NAN }
        );
    }
}
