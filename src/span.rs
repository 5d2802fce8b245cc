// ============================================================
// Span counting via a monotonic index stack
// ============================================================

use crate::error::SeriesError;
use crate::util::validate_series;

/// Span of every element: how many consecutive values ending at `i`
/// (inclusive) are less than or equal to `values[i]`.
///
/// A stack of indices with strictly decreasing values survives each step;
/// popping everything at or below `values[i]` leaves the nearest strictly
/// greater value on top. Each index is pushed and popped once, so the pass
/// is O(n) even on sorted input. The first span is always 1.
///
/// Fails with [`SeriesError::EmptyInput`] on an empty series and
/// [`SeriesError::NonFinite`] on NaN or infinite input.
pub fn spans(values: &[f64]) -> Result<Vec<usize>, SeriesError> {
    validate_series(values)?;
    let n = values.len();
    let mut stack: Vec<usize> = Vec::new();
    let mut out = Vec::with_capacity(n);

    for i in 0..n {
        while let Some(&top) = stack.last() {
            if values[top] > values[i] {
                break;
            }
            stack.pop();
        }
        out.push(match stack.last() {
            Some(&top) => i - top,
            None => i + 1,
        });
        stack.push(i);
    }
    Ok(out)
}
