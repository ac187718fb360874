use super::timing::TimingBreakdown;
use crate::geometry::Rectangle;
use crate::segments::IntegerSegment;
use serde::Serialize;

/// Trace of one `BoundsDetector` run.
///
/// "Horizontal" refers to the row stripes, whose zero segments lie along X;
/// "vertical" to the column stripes, whose segments lie along Y.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsReport {
    pub width: usize,
    pub height: usize,
    pub sampled_rows: Vec<usize>,
    pub sampled_columns: Vec<usize>,
    pub horizontal_segments: Vec<IntegerSegment>,
    pub vertical_segments: Vec<IntegerSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_gap: Option<IntegerSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_gap: Option<IntegerSegment>,
    pub bounds: Option<Rectangle>,
    pub timing: TimingBreakdown,
}

impl BoundsReport {
    pub fn found(&self) -> bool {
        self.bounds.is_some()
    }
}
