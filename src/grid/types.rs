use serde::{Deserialize, Serialize};

/// Identifier of a composition grid construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridType {
    /// No grid lines.
    None,
    /// Short ticks at the edge midpoints and a small central cross.
    Crosshair,
    /// Rule of thirds.
    Thirds,
    /// Main anti-diagonal plus two parallels offset by one sixth.
    DiagonalOfThirds,
    /// Lines at 0.382 and 0.618 on both axes.
    GoldenRatio,
    /// Main diagonal with perpendiculars dropped from the other two corners.
    GoldenTriangle,
    /// Main diagonal with two diagonals to golden-section points (type 1).
    GoldenDiagonal1,
    /// Main diagonal with two diagonals to golden-section points (type 2).
    GoldenDiagonal2,
    FibonacciRectanglesZoomed,
    FibonacciRectanglesStretched,
    GoldenSpiralZoomed,
    GoldenSpiralStretched,
    /// Two pairs of circles on the horizontal midline.
    GoldenCircles,
    /// 1:1.5 (3:2) rectangle.
    OneDotFiveRectangle,
    /// 1:phi rectangle (Auron).
    GoldenRectangle,
    /// 1:sqrt(phi) rectangle (Penton).
    RootPhiRectangle,
    /// 1:sqrt(2) rectangle (Diagon).
    Root2Rectangle,
    Root3Rectangle,
    Root4Rectangle,
    Root5Rectangle,
    /// Selectable, but has no construction.
    Armature14Line,
}

impl GridType {
    pub const ALL: [GridType; 21] = [
        GridType::None,
        GridType::Crosshair,
        GridType::Thirds,
        GridType::DiagonalOfThirds,
        GridType::GoldenRatio,
        GridType::GoldenTriangle,
        GridType::GoldenDiagonal1,
        GridType::GoldenDiagonal2,
        GridType::FibonacciRectanglesZoomed,
        GridType::FibonacciRectanglesStretched,
        GridType::GoldenSpiralZoomed,
        GridType::GoldenSpiralStretched,
        GridType::GoldenCircles,
        GridType::OneDotFiveRectangle,
        GridType::GoldenRectangle,
        GridType::RootPhiRectangle,
        GridType::Root2Rectangle,
        GridType::Root3Rectangle,
        GridType::Root4Rectangle,
        GridType::Root5Rectangle,
        GridType::Armature14Line,
    ];

    /// Target width:height ratio for the aspect-locked rectangle families.
    pub fn locked_ratio(self) -> Option<f64> {
        use super::ratios::{root, root_phi, ONE_DOT_FIVE, PHI};
        match self {
            GridType::OneDotFiveRectangle => Some(ONE_DOT_FIVE),
            GridType::GoldenRectangle | GridType::GoldenCircles => Some(PHI),
            GridType::RootPhiRectangle => Some(root_phi()),
            GridType::Root2Rectangle => Some(root(2.0)),
            GridType::Root3Rectangle => Some(root(3.0)),
            GridType::Root4Rectangle => Some(root(4.0)),
            GridType::Root5Rectangle => Some(root(5.0)),
            _ => None,
        }
    }

    pub fn has_construction(self) -> bool {
        self != GridType::Armature14Line
    }
}
