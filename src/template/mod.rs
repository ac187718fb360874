//! Locating a renderer's canvas through bitmaps of its frame corners.
//!
//! The render window draws the picture on a flat canvas whose corners carry
//! a fixed UI decoration. `TemplateMatcher` slides each known corner bitmap
//! over the capture (tolerant comparison, see
//! [`PixelBuffer::compare_fragment`](crate::image::PixelBuffer::compare_fragment)),
//! trying variants in priority order, then walks inwards from the two canvas
//! corners to the first pixels that differ from the canvas color.
//!
//! Corner bitmaps are loaded from disk ([`TemplateSet::load`]); matching is
//! tied to one skin at one display scale.

mod corner;
mod inner;
mod matcher;
mod scan;
mod set;
mod strategy;

pub use corner::{Corner, CornerTemplate};
pub use inner::{find_inner_bottom_right, find_inner_top_left};
pub use matcher::TemplateMatcher;
pub use set::TemplateSet;
pub use strategy::{BottomRightTemplate, CornerMatcher, TopLeftTemplate};
