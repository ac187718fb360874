use super::types::GridType;
use serde::Serialize;

/// Menu entry for a selectable grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridModeItem {
    pub grid_type: GridType,
    pub title: &'static str,
    /// Horizontal and vertical flips change the picture.
    pub flip_enabled: bool,
    /// Quarter-turn rotation changes the picture.
    pub rotate_enabled: bool,
}

const fn item(grid_type: GridType, title: &'static str, flip: bool, rotate: bool) -> GridModeItem {
    GridModeItem {
        grid_type,
        title,
        flip_enabled: flip,
        rotate_enabled: rotate,
    }
}

/// Selectable grids in menu order. `GridType::None` is not listed.
pub const GRID_MODES: [GridModeItem; 20] = [
    item(GridType::Crosshair, "Crosshair", false, false),
    item(GridType::Thirds, "Thirds", false, false),
    item(GridType::GoldenRatio, "Golden Ratio", false, false),
    item(GridType::DiagonalOfThirds, "Diagonal of Thirds", true, true),
    item(GridType::GoldenTriangle, "Golden Triangle", true, true),
    item(GridType::GoldenDiagonal1, "Golden Diagonal 1", true, true),
    item(GridType::GoldenDiagonal2, "Golden Diagonal 2", true, true),
    item(GridType::FibonacciRectanglesZoomed, "Fibonacci Rectangles", true, true),
    item(GridType::GoldenSpiralZoomed, "Golden Spiral", true, true),
    item(
        GridType::FibonacciRectanglesStretched,
        "Fibonacci Rectangles (stretched)",
        true,
        true,
    ),
    item(GridType::GoldenSpiralStretched, "Golden Spiral (stretched)", true, true),
    item(GridType::GoldenCircles, "Golden Circles", false, true),
    item(GridType::OneDotFiveRectangle, "1.5 Rectangle", false, true),
    item(GridType::GoldenRectangle, "Golden (Phi) Rectangle", false, true),
    item(GridType::RootPhiRectangle, "Root-Phi Rectangle", false, true),
    item(GridType::Root2Rectangle, "Root-2 Rectangle", false, true),
    item(GridType::Root3Rectangle, "Root-3 Rectangle", false, true),
    item(GridType::Root4Rectangle, "Root-4 Rectangle", false, true),
    item(GridType::Root5Rectangle, "Root-5 Rectangle", false, true),
    item(GridType::Armature14Line, "Armature (14 Line)", false, false),
];

impl GridModeItem {
    pub fn lookup(grid_type: GridType) -> Option<&'static GridModeItem> {
        GRID_MODES.iter().find(|m| m.grid_type == grid_type)
    }
}

impl GridType {
    /// Display title; `None` for `GridType::None`.
    pub fn title(self) -> Option<&'static str> {
        GridModeItem::lookup(self).map(|m| m.title)
    }

    pub fn is_flip_enabled(self) -> bool {
        GridModeItem::lookup(self).is_some_and(|m| m.flip_enabled)
    }

    pub fn is_rotate_enabled(self) -> bool {
        GridModeItem::lookup(self).is_some_and(|m| m.rotate_enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_grid_but_none_is_listed_once() {
        for g in GridType::ALL {
            let count = GRID_MODES.iter().filter(|m| m.grid_type == g).count();
            let expected = usize::from(g != GridType::None);
            assert_eq!(count, expected, "{g:?}");
        }
    }

    #[test]
    fn symmetric_grids_disable_commands() {
        assert!(!GridType::None.is_flip_enabled());
        assert!(!GridType::Thirds.is_rotate_enabled());
        assert!(GridType::GoldenSpiralZoomed.is_flip_enabled());
        assert!(!GridType::Root3Rectangle.is_flip_enabled());
        assert!(GridType::Root3Rectangle.is_rotate_enabled());
        assert_eq!(GridType::GoldenCircles.title(), Some("Golden Circles"));
    }
}
