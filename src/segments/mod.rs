//! One-dimensional integer segments and the algebra used by bounds detection.
//!
//! A row or column of a screenshot is reduced to a derivative signal; runs of
//! zeros in that signal are visually uniform stretches (background, borders).
//! This module finds those runs, intersects run sets coming from several
//! sampled stripes, and locates the widest gap between consecutive runs,
//! which is where the inner image sits.
//!
//! All functions are pure and operate on closed intervals `[start, end]`.
//! "No intersection" is expressed as `None` rather than a sentinel segment,
//! so a genuine single-element segment at index 0 stays representable.

mod algebra;
mod segment;

pub use algebra::{find_zero_segments, intersect, intersect_all, max_gap_between};
pub use segment::IntegerSegment;
