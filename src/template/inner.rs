use super::corner::Corner;
use crate::image::{ImageView, PixelBuffer};

/// First picture pixel inside the canvas, scanning down from `top_left`.
///
/// The canvas color is sampled at `top_left`. Each row of the region
/// `[tl.x, br.x) x [tl.y, br.y)` is scanned left to right and its first pixel
/// of another color ends the row; that pixel is the answer only on rows
/// strictly below `top_left`.
pub fn find_inner_top_left(image: &PixelBuffer, top_left: Corner, bottom_right: Corner) -> Option<Corner> {
    let canvas = image.get(top_left.x, top_left.y);
    (top_left.y..bottom_right.y).find_map(|y| {
        let row = image.row(y);
        let x = (top_left.x..bottom_right.x).find(|&x| row[x] != canvas)?;
        (y > top_left.y).then_some(Corner::new(x, y))
    })
}

/// Last picture pixel inside the canvas, scanning up from `bottom_right`.
///
/// The canvas color is sampled at `bottom_right`. Rows `br.y-1` down to
/// `tl.y+1` are scanned right to left over columns `br.x-1` down to
/// `tl.x+1`; the first pixel of another color is the answer.
pub fn find_inner_bottom_right(image: &PixelBuffer, top_left: Corner, bottom_right: Corner) -> Option<Corner> {
    let canvas = image.get(bottom_right.x, bottom_right.y);
    (top_left.y + 1..bottom_right.y).rev().find_map(|y| {
        let row = image.row(y);
        (top_left.x + 1..bottom_right.x)
            .rev()
            .find(|&x| row[x] != canvas)
            .map(|x| Corner::new(x, y))
    })
}
