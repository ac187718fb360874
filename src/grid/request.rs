use super::types::GridType;
use crate::error::Result;
use crate::geometry::{transform, Line, Rotation};
use serde::{Deserialize, Serialize};

/// Everything needed to draw a grid on a canvas of `width x height` pixels.
///
/// Orientation changes produce a new request instead of mutating state, so a
/// renderer can diff two requests and redraw only on change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRequest {
    pub grid_type: GridType,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub flip_horizontal: bool,
    #[serde(default)]
    pub flip_vertical: bool,
}

impl GridRequest {
    pub fn new(grid_type: GridType, width: f64, height: f64) -> Self {
        Self {
            grid_type,
            width,
            height,
            rotation: Rotation::R0,
            flip_horizontal: false,
            flip_vertical: false,
        }
    }

    #[inline]
    pub fn is_rotated(&self) -> bool {
        self.rotation.swaps_axes()
    }

    pub fn with_size(self, width: f64, height: f64) -> Self {
        Self { width, height, ..self }
    }

    pub fn with_grid(self, grid_type: GridType) -> Self {
        Self { grid_type, ..self }
    }

    pub fn rotated_clockwise(self) -> Self {
        Self {
            rotation: self.rotation.rotate_clockwise(),
            ..self
        }
    }

    pub fn rotated_counter_clockwise(self) -> Self {
        Self {
            rotation: self.rotation.rotate_counter_clockwise(),
            ..self
        }
    }

    pub fn flipped_horizontal(self) -> Self {
        Self {
            flip_horizontal: !self.flip_horizontal,
            ..self
        }
    }

    pub fn flipped_vertical(self) -> Self {
        Self {
            flip_vertical: !self.flip_vertical,
            ..self
        }
    }

    /// Grid lines in pixel coordinates.
    pub fn lines(&self) -> Result<Vec<Line>> {
        let normalized = super::create_grid(self.grid_type, self.width, self.height, self.is_rotated())?;
        Ok(transform(
            &normalized,
            self.rotation,
            self.flip_horizontal,
            self.flip_vertical,
            self.width,
            self.height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_changes_return_new_requests() {
        let base = GridRequest::new(GridType::GoldenSpiralZoomed, 800.0, 600.0);
        let turned = base.rotated_counter_clockwise();
        assert_eq!(base.rotation, Rotation::R0);
        assert_eq!(turned.rotation, Rotation::R90);
        assert!(turned.is_rotated());
        assert_eq!(turned.rotated_clockwise(), base);
        assert_eq!(base.flipped_horizontal().flipped_horizontal(), base);
    }

    #[test]
    fn thirds_in_pixels() {
        let lines = GridRequest::new(GridType::Thirds, 300.0, 90.0).lines().unwrap();
        assert_eq!(lines.len(), 4);
        assert!((lines[0].p1.y - 30.0).abs() < 1e-9);
        assert!((lines[2].p1.x - 100.0).abs() < 1e-9);
    }
}
