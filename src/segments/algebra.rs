use super::segment::IntegerSegment;
use crate::error::{Result, ScreenGridError};

/// Maximal runs of zeros in `values` that are at least `min_len` long.
///
/// Runs shorter than `min_len` are dropped, never merged with neighbours.
/// Output is ascending and non-overlapping. When `values` is shorter than
/// `min_len` the result is empty.
pub fn find_zero_segments(values: &[u32], min_len: usize) -> Vec<IntegerSegment> {
    let mut result = Vec::new();
    if values.len() < min_len {
        return result;
    }

    let mut run_start: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        if v == 0 {
            let start = *run_start.get_or_insert(i);
            if i == values.len() - 1 {
                push_if_long(&mut result, IntegerSegment::new(start, i), min_len);
            }
        } else if let Some(start) = run_start.take() {
            push_if_long(&mut result, IntegerSegment::new(start, i - 1), min_len);
        }
    }
    result
}

#[inline]
fn push_if_long(out: &mut Vec<IntegerSegment>, segment: IntegerSegment, min_len: usize) {
    if segment.len() >= min_len {
        out.push(segment);
    }
}

/// Overlap of two closed segments, or `None` when they are disjoint.
pub fn intersect(a: IntegerSegment, b: IntegerSegment) -> Option<IntegerSegment> {
    if a.start > b.end || b.start > a.end {
        return None;
    }
    Some(IntegerSegment::new(a.start.max(b.start), a.end.min(b.end)))
}

/// Index ranges present in every input list.
///
/// The accumulator starts as the first list; each following list replaces it
/// with all pairwise overlaps. Once the accumulator is empty the result is
/// empty regardless of the remaining lists.
pub fn intersect_all<I, L>(lists: I) -> Vec<IntegerSegment>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[IntegerSegment]>,
{
    let mut lists = lists.into_iter();
    let mut acc: Vec<IntegerSegment> = match lists.next() {
        Some(first) => first.as_ref().to_vec(),
        None => return Vec::new(),
    };

    for list in lists {
        if acc.is_empty() {
            break;
        }
        let list = list.as_ref();
        acc = acc
            .iter()
            .flat_map(|&a| list.iter().filter_map(move |&b| intersect(a, b)))
            .collect();
    }
    acc
}

/// Widest gap between consecutive segments of an ascending list.
///
/// Returns `[end_i, start_{i+1}]` for the pair with the largest
/// `start_{i+1} - end_i`; the first such pair wins ties. Fails with
/// `InvalidArgument` for fewer than two segments.
pub fn max_gap_between(segments: &[IntegerSegment]) -> Result<IntegerSegment> {
    if segments.len() < 2 {
        return Err(ScreenGridError::InvalidArgument(format!(
            "max_gap_between needs at least 2 segments, got {}",
            segments.len()
        )));
    }

    let mut best = IntegerSegment::new(0, 0);
    let mut best_gap = 0i64;
    for pair in segments.windows(2) {
        let gap = pair[1].start as i64 - pair[0].end as i64;
        if gap > best_gap {
            best = IntegerSegment::new(pair[0].end, pair[1].start);
            best_gap = gap;
        }
    }
    Ok(best)
}
