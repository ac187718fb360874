//! Ratios shared by the grid constructions.

/// Golden ratio, (1 + sqrt 5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// 1 / phi, about 0.618.
pub const PHI_5_8: f64 = 1.0 / PHI;

/// 1 - 1 / phi, about 0.382.
pub const PHI_3_8: f64 = 1.0 - PHI_5_8;

pub const HALF: f64 = 0.5;
pub const ONE_THIRD: f64 = 1.0 / 3.0;
pub const TWO_THIRDS: f64 = 2.0 / 3.0;
pub const ONE_SIXTH: f64 = 1.0 / 6.0;
pub const ONE_DOT_FIVE: f64 = 1.5;

pub fn root_phi() -> f64 {
    PHI.sqrt()
}

pub fn root(n: f64) -> f64 {
    n.sqrt()
}

/// Growth base of the golden spiral per radian, phi^(2/pi), about 1.3584.
pub fn golden_spiral_base() -> f64 {
    PHI.powf(2.0 / std::f64::consts::PI)
}
