use super::point::Point;
use serde::{Deserialize, Serialize};

/// Directed segment `p1 -> p2`. Direction carries no geometric meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: Point::new(x1, y1),
            p2: Point::new(x2, y2),
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.p1.distance(&self.p2)
    }

    /// Apply `f` to both endpoints.
    #[inline]
    pub fn map(&self, mut f: impl FnMut(Point) -> Point) -> Line {
        Line::new(f(self.p1), f(self.p2))
    }

    #[inline]
    pub fn is_horizontal(&self, eps: f64) -> bool {
        (self.p1.y - self.p2.y).abs() <= eps
    }

    #[inline]
    pub fn is_vertical(&self, eps: f64) -> bool {
        (self.p1.x - self.p2.x).abs() <= eps
    }
}
