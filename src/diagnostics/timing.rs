//! Millisecond timings attached to bounds and template reports.
//!
//! Stage names are short fixed labels: `rows` and `columns` for the bounds
//! scan; `top_left_corner`, `bottom_right_corner` and `inner_corners` for
//! template matching.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One timed step of a scan, e.g. the sampled-row pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: String,
    pub ms: f64,
}

/// Steps in execution order plus the wall time of the whole call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, stage: impl Into<String>, ms: f64) {
        self.stages.push(StageTiming {
            stage: stage.into(),
            ms,
        });
    }

    /// Run `f`, record its duration under `stage` and return its value.
    pub fn measure<T>(&mut self, stage: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = f();
        self.push(stage, elapsed_ms(start));
        value
    }

    /// Duration recorded for `stage`, if it ran.
    pub fn stage_ms(&self, stage: &str) -> Option<f64> {
        self.stages.iter().find(|s| s.stage == stage).map(|s| s.ms)
    }
}

#[inline]
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
