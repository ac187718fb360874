use super::params::BoundsParams;
use crate::diagnostics::{elapsed_ms, BoundsReport, TimingBreakdown};
use crate::geometry::Rectangle;
use crate::image::{Pixel, PixelBuffer};
use crate::segments::{find_zero_segments, intersect_all, max_gap_between, IntegerSegment};
use log::debug;
use std::time::Instant;

/// Discrete derivative of a stripe over packed pixel values.
///
/// `d[0]` is the first value itself; every later entry is the wrapping
/// difference of consecutive packed values. A zero therefore means "same
/// packed color as the previous pixel", nothing more: two visually close
/// colors can produce a large wrapped difference.
pub fn derivative(stripe: &[Pixel]) -> Vec<u32> {
    let mut previous = 0u32;
    stripe
        .iter()
        .map(|p| {
            let d = p.raw().wrapping_sub(previous);
            previous = p.raw();
            d
        })
        .collect()
}

/// Finds an inner image framed by uniform background.
#[derive(Clone, Debug, Default)]
pub struct BoundsDetector {
    params: BoundsParams,
}

impl BoundsDetector {
    pub fn new(params: BoundsParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BoundsParams {
        &self.params
    }

    /// Inner image rectangle, or `None` when either axis has fewer than two
    /// uniform runs.
    ///
    /// The widest gap `[a, b]` on each axis gives origin `a + 1` and length
    /// `b - a - 2`. A collapsed gap (length zero or less, e.g. two flat areas
    /// meeting at a single color step) also counts as not found, so a
    /// degenerate rectangle is never returned.
    pub fn detect(&self, image: &PixelBuffer) -> Option<Rectangle> {
        self.detect_with_report(image).bounds
    }

    pub fn detect_with_report(&self, image: &PixelBuffer) -> BoundsReport {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();
        let (width, height) = (image.width(), image.height());

        let sampled_rows = self.params.sample_positions(height);
        let sampled_columns = self.params.sample_positions(width);

        let horizontal_segments = timing.measure("rows", || {
            self.common_segments(&sampled_rows, |y| image.horizontal_stripe(y))
        });
        let vertical_segments = timing.measure("columns", || {
            self.common_segments(&sampled_columns, |x| image.vertical_stripe(x))
        });

        let horizontal_gap = max_gap_between(&horizontal_segments).ok();
        let vertical_gap = max_gap_between(&vertical_segments).ok();

        let bounds = match (horizontal_gap, vertical_gap) {
            (Some(gh), Some(gv)) => inner_span(gh)
                .zip(inner_span(gv))
                .map(|((x, w), (y, h))| Rectangle::new(x, y, w, h)),
            _ => None,
        };

        debug!(
            "BoundsDetector::detect {}x{} rows={} cols={} h_segments={} v_segments={} h_gap={:?} v_gap={:?} -> {:?}",
            width,
            height,
            sampled_rows.len(),
            sampled_columns.len(),
            horizontal_segments.len(),
            vertical_segments.len(),
            horizontal_gap,
            vertical_gap,
            bounds
        );

        timing.total_ms = elapsed_ms(total_start);
        BoundsReport {
            width,
            height,
            sampled_rows,
            sampled_columns,
            horizontal_segments,
            vertical_segments,
            horizontal_gap,
            vertical_gap,
            bounds,
            timing,
        }
    }

    /// Zero runs shared by the derivatives of every sampled stripe.
    fn common_segments<F>(&self, positions: &[usize], stripe: F) -> Vec<IntegerSegment>
    where
        F: Fn(usize) -> Vec<Pixel>,
    {
        let min_len = self.params.min_segment_len;
        intersect_all(
            positions
                .iter()
                .map(|&i| find_zero_segments(&derivative(&stripe(i)), min_len)),
        )
    }
}

/// Gap `[end_i, start_{i+1}]` shrunk by one transition pixel on each side,
/// as `(origin, length)`.
pub(super) fn inner_span(gap: IntegerSegment) -> Option<(f64, f64)> {
    let length = gap.end.checked_sub(gap.start + 2).filter(|&len| len > 0)?;
    Some(((gap.start + 1) as f64, length as f64))
}
