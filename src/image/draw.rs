//! Raster output for the tools (grid icons, annotated captures), drawn with
//! `imageproc`.

use crate::geometry::{Line, Point, Rectangle};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

/// Part of `line` inside `[0, w] x [0, h]` (Liang-Barsky), or `None`.
fn clip_to_canvas(line: &Line, w: f64, h: f64) -> Option<Line> {
    let (x0, y0) = (line.p1.x, line.p1.y);
    let (dx, dy) = (line.p2.x - x0, line.p2.y - y0);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [(-dx, x0), (dx, w - x0), (-dy, y0), (dy, h - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
        }
    }
    (t0 <= t1).then(|| {
        Line::new(
            Point::new(x0 + t0 * dx, y0 + t0 * dy),
            Point::new(x0 + t1 * dx, y0 + t1 * dy),
        )
    })
}

/// Draw pixel-space lines. Lines are clipped to the canvas first, and
/// coordinates on the far edge land on the last row/column so edge lines
/// stay visible.
pub fn draw_lines(img: &mut RgbImage, lines: &[Line], color: Rgb<u8>) {
    let (w, h) = (f64::from(img.width()), f64::from(img.height()));
    if w == 0.0 || h == 0.0 {
        return;
    }
    let to_pixel = |p: Point| ((p.x.min(w - 1.0)) as f32, (p.y.min(h - 1.0)) as f32);
    for l in lines {
        if !(l.p1.x.is_finite() && l.p1.y.is_finite() && l.p2.x.is_finite() && l.p2.y.is_finite()) {
            continue;
        }
        if let Some(c) = clip_to_canvas(l, w, h) {
            draw_line_segment_mut(img, to_pixel(c.p1), to_pixel(c.p2), color);
        }
    }
}

/// Outline of an inclusive pixel rectangle; degenerate rectangles draw nothing.
pub fn draw_rectangle(img: &mut RgbImage, rect: &Rectangle, color: Rgb<u8>) {
    let (width, height) = (rect.width.round(), rect.height.round());
    if !(width >= 1.0 && height >= 1.0 && rect.x.is_finite() && rect.y.is_finite()) {
        return;
    }
    let outline = Rect::at(rect.x.round() as i32, rect.y.round() as i32).of_size(width as u32, height as u32);
    draw_hollow_rect_mut(img, outline, color);
}
