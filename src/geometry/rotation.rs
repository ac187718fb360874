use serde::{Deserialize, Serialize};

/// Quarter-turn orientation of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_ordinal(ordinal: usize) -> Self {
        Self::ALL[ordinal % 4]
    }

    /// R0 -> R90 -> R180 -> R270 -> R0.
    #[inline]
    pub fn rotate_counter_clockwise(self) -> Self {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// Inverse of `rotate_counter_clockwise`.
    #[inline]
    pub fn rotate_clockwise(self) -> Self {
        Self::from_ordinal(self.ordinal() + 3)
    }

    /// Angle in radians: 0, pi/2, pi, 3pi/2.
    #[inline]
    pub fn angle(self) -> f64 {
        self.ordinal() as f64 * std::f64::consts::FRAC_PI_2
    }

    /// Quarter turns swap the canvas' width and height.
    #[inline]
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::R90 | Rotation::R270)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_clockwise_steps_return_home() {
        for r in Rotation::ALL {
            let mut cur = r;
            for _ in 0..4 {
                cur = cur.rotate_clockwise();
            }
            assert_eq!(cur, r);
        }
    }

    #[test]
    fn clockwise_and_counter_clockwise_are_inverse() {
        for r in Rotation::ALL {
            assert_eq!(r.rotate_clockwise().rotate_counter_clockwise(), r);
            assert_eq!(r.rotate_counter_clockwise().rotate_clockwise(), r);
        }
        assert_eq!(Rotation::R0.rotate_counter_clockwise(), Rotation::R90);
        assert_eq!(Rotation::R0.rotate_clockwise(), Rotation::R270);
    }

    #[test]
    fn angles() {
        assert_eq!(Rotation::R0.angle(), 0.0);
        assert!((Rotation::R270.angle() - 1.5 * std::f64::consts::PI).abs() < 1e-12);
        assert!(Rotation::R90.swaps_axes());
        assert!(!Rotation::R180.swaps_axes());
    }
}
