//! Serializable reports produced next to the detection results.
//!
//! Detectors return plain `Option<Rectangle>` values; the `*_with_report`
//! variants additionally fill the structures defined here so the demo tools
//! can dump what each stage saw (segment lists, gaps, matched templates) and
//! how long it took.

pub mod bounds;
pub mod template;
pub mod timing;

pub use bounds::BoundsReport;
pub use template::{CornerMatch, TemplateReport};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
