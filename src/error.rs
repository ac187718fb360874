//! Error type shared by the fallible entry points of the crate.
//!
//! Detection that simply finds nothing is not an error: detectors return
//! `Option` for that. Errors here are either malformed inputs (wrong pixel
//! format, short buffers), caller defects (too few segments, a grid type
//! without a construction) or I/O failures in the tooling paths.

use crate::grid::GridType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenGridError {
    #[error("Image format {found} not supported, expected 3-byte RGB")]
    UnsupportedFormat { found: String },

    #[error("Pixel buffer too small: needed {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Grid type {0:?} has no construction")]
    UnsupportedGrid(GridType),

    #[error("Window capture failed: {0}")]
    Capture(String),

    #[error("Image decoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScreenGridError>;
