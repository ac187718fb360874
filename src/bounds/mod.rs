//! Inner-image bounds detection on captured window images.
//!
//! `BoundsDetector` assumes a single picture sitting inside a uniformly
//! colored frame. It differentiates rows and columns sampled across the
//! middle half of the capture, keeps the zero runs (flat stretches) common to
//! all sampled stripes and takes the widest gap between consecutive runs as
//! the picture's extent on that axis.
//!
//! The derivative works on packed pixel values, so a flat run means "exactly
//! the same packed color". The picture itself must not contain flat runs as
//! long as `min_segment_len` on every sampled stripe, or its own runs become
//! candidate background and the widest gap moves.
//!
//! `find_non_background_bounds` is the simpler scan used for viewers that
//! render on a known canvas color.

mod background;
mod detector;
mod params;

pub use background::find_non_background_bounds;
pub use detector::{derivative, BoundsDetector};
pub use params::BoundsParams;

#[cfg(test)]
mod tests;
