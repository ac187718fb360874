use serde::{Deserialize, Serialize};

/// Knobs of the derivative-based bounds detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsParams {
    /// Shortest zero run (pixels) accepted as uniform background.
    pub min_segment_len: usize,
    /// Start of the sampled band, as a fraction of the stripe-crossing dimension.
    pub sample_from: f64,
    /// End (exclusive) of the sampled band, same units as `sample_from`.
    pub sample_to: f64,
}

impl Default for BoundsParams {
    fn default() -> Self {
        Self {
            min_segment_len: 8,
            sample_from: 0.25,
            sample_to: 0.75,
        }
    }
}

impl BoundsParams {
    /// Stripe indices to examine along a dimension of `extent` pixels: the
    /// middle one first, then every `min_segment_len`-th inside the band.
    pub fn sample_positions(&self, extent: usize) -> Vec<usize> {
        if extent == 0 {
            return Vec::new();
        }
        let from = (extent as f64 * self.sample_from.clamp(0.0, 1.0)) as usize;
        let to = ((extent as f64 * self.sample_to.clamp(0.0, 1.0)) as usize).min(extent);
        let step = self.min_segment_len.max(1);

        let mut positions = vec![extent / 2];
        positions.extend((from..to).step_by(step));
        positions
    }
}
