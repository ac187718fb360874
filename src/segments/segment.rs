use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed integer interval `[start, end]` with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntegerSegment {
    pub start: usize,
    pub end: usize,
}

impl IntegerSegment {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of indices covered, `end - start + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Closed intervals always cover at least one index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

impl fmt::Display for IntegerSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.start, self.end)
    }
}
