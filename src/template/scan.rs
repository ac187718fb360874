//! Sliding-window search of a template over an image.
//!
//! Offsets are visited column by column (x outer, y inner). With the
//! `parallel` feature the columns are distributed over rayon workers;
//! `find_map_first` keeps the result identical to the sequential scan.

use crate::image::PixelBuffer;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn first_row_match(image: &PixelBuffer, fragment: &PixelBuffer, x: usize, rows: usize) -> Option<(usize, usize)> {
    (0..rows)
        .find(|&y| image.compare_fragment(fragment, x, y, true))
        .map(|y| (x, y))
}

/// First tolerant match scanning x ascending over `0..W-tw`, y over `0..H-th`.
pub(crate) fn first_match_forward(image: &PixelBuffer, fragment: &PixelBuffer) -> Option<(usize, usize)> {
    let columns = image.width().checked_sub(fragment.width())?;
    let rows = image.height().checked_sub(fragment.height())?;

    #[cfg(feature = "parallel")]
    {
        (0..columns)
            .into_par_iter()
            .find_map_first(|x| first_row_match(image, fragment, x, rows))
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..columns).find_map(|x| first_row_match(image, fragment, x, rows))
    }
}

/// First tolerant match scanning x descending from `W-tw-1` down to 1, y
/// ascending over `0..H-th`.
pub(crate) fn first_match_backward(image: &PixelBuffer, fragment: &PixelBuffer) -> Option<(usize, usize)> {
    let start = image.width().checked_sub(fragment.width() + 1)?;
    let rows = image.height().checked_sub(fragment.height())?;

    #[cfg(feature = "parallel")]
    {
        (1..start + 1)
            .into_par_iter()
            .rev()
            .find_map_first(|x| first_row_match(image, fragment, x, rows))
    }
    #[cfg(not(feature = "parallel"))]
    {
        (1..start + 1)
            .rev()
            .find_map(|x| first_row_match(image, fragment, x, rows))
    }
}
