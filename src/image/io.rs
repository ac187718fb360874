//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a PNG/etc. and flatten it to 3-byte RGB.
//! - `load_rgb_image_strict`: read an image and refuse anything not already RGB8.
//! - `save_rgb_png`: write a `PixelBuffer` as a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::PixelBuffer;
use crate::error::{Result, ScreenGridError};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit RGB, dropping alpha.
pub fn load_rgb_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)?.into_rgb8();
    Ok(PixelBuffer::from_rgb_image(&img))
}

/// Load an image from disk, failing with `UnsupportedFormat` unless it decodes as RGB8.
pub fn load_rgb_image_strict(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)?;
    PixelBuffer::from_dynamic(&img)
}

/// Save a pixel buffer as PNG, creating parent directories.
pub fn save_rgb_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    buffer.to_rgb_image().save(path)?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(ScreenGridError::from)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
