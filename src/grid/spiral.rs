//! Golden spiral `r(theta) = b^theta`, `b = phi^(2/pi)`, sampled as a polyline.

use super::fibonacci::Fitting;
use super::fit::{extents, stretch_to_unit, stretch_with_aspect};
use super::ratios::{golden_spiral_base, PHI};
use crate::geometry::{Line, Point, Rectangle};
use std::f64::consts::TAU;

const NUMBER_OF_TURNS: f64 = 3.0;
const TAIL_STEP: f64 = 0.001 * TAU;

struct Sampler {
    base: f64,
    points: Vec<Point>,
    min: Point,
    max: Point,
}

impl Sampler {
    fn new() -> Self {
        Self {
            base: golden_spiral_base(),
            points: Vec::new(),
            min: Point::new(0.5, 0.5),
            max: Point::new(0.5, 0.5),
        }
    }

    /// Sample at `theta`, Y flipped into screen orientation.
    fn push(&mut self, theta: f64) -> Point {
        let r = self.base.powf(theta);
        let p = Point::new(0.5 + r * theta.cos(), 1.0 - (0.5 + r * theta.sin()));
        self.points.push(p);
        self.min = Point::new(self.min.x.min(p.x), self.min.y.min(p.y));
        self.max = Point::new(self.max.x.max(p.x), self.max.y.max(p.y));
        p
    }
}

/// Raw spiral polyline and its bounding box.
///
/// Three turns are sampled with a step that shrinks as the radius grows, then
/// the curve continues in fine steps until it reaches the top of the box
/// built by the first three turns, so the spiral ends inscribed in it.
pub fn spiral_polyline() -> (Vec<Line>, Rectangle) {
    let mut sampler = Sampler::new();

    let max_angle = NUMBER_OF_TURNS * TAU;
    let mut theta = 0.0;
    while theta < max_angle {
        sampler.push(theta);
        let turn = theta / TAU;
        theta += 0.005 * 5.0 * NUMBER_OF_TURNS / (turn + 1.0) * TAU;
    }

    let top = sampler.min.y;
    let mut theta = max_angle;
    loop {
        let p = sampler.push(theta);
        if p.y <= top {
            break;
        }
        theta += TAIL_STEP;
    }

    let lines = sampler
        .points
        .windows(2)
        .map(|w| Line::new(w[0], w[1]))
        .collect();
    let bounds = Rectangle::from_edges(sampler.min.x, sampler.min.y, sampler.max.x, sampler.max.y);
    (lines, bounds)
}

pub fn golden_spiral(fitting: Fitting) -> Vec<Line> {
    let (lines, bounds) = spiral_polyline();
    match fitting {
        Fitting::Zoomed { aspect } => {
            let mut lines = stretch_with_aspect(&lines, aspect, &bounds);
            if let Some(ext) = extents(&lines) {
                // Mark the constrained axis of the fitted spiral.
                if aspect < PHI {
                    lines.push(Line::from_coords(0.0, ext.top(), 1.0, ext.top()));
                    lines.push(Line::from_coords(0.0, ext.bottom(), 1.0, ext.bottom()));
                } else {
                    lines.push(Line::from_coords(ext.left(), 0.0, ext.left(), 1.0));
                    lines.push(Line::from_coords(ext.right(), 0.0, ext.right(), 1.0));
                }
            }
            lines
        }
        Fitting::Stretched => stretch_to_unit(&lines, &bounds),
    }
}
