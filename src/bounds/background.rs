use crate::geometry::Rectangle;
use crate::image::{ImageView, Pixel, PixelBuffer};

/// Tightest rectangle containing every pixel that differs from `background`.
///
/// Suits viewers that draw the picture on a flat canvas without a frame.
/// `None` when the whole image is background.
pub fn find_non_background_bounds(image: &PixelBuffer, background: Pixel) -> Option<Rectangle> {
    let differs = |p: &Pixel| *p != background;
    let row_has_content = |y: usize| image.row(y).iter().any(differs);
    let column_has_content = |x: usize| (0..image.height()).any(|y| differs(&image.get(x, y)));

    let top = (0..image.height()).find(|&y| row_has_content(y))?;
    let bottom = (0..image.height()).rev().find(|&y| row_has_content(y))?;
    let left = (0..image.width()).find(|&x| column_has_content(x))?;
    let right = (0..image.width()).rev().find(|&x| column_has_content(x))?;

    Some(Rectangle::new(
        left as f64,
        top as f64,
        (right - left + 1) as f64,
        (bottom - top + 1) as f64,
    ))
}
