// ============================================================
// Sliding-window extrema via a monotonic index deque
// ============================================================

use std::collections::VecDeque;

use crate::error::SeriesError;
use crate::traits::{Extremum, Max, Min};
use crate::util::validate_series;

fn check(values: &[f64], window: usize) -> Result<(), SeriesError> {
    validate_series(values)?;
    if window < 1 || window > values.len() {
        return Err(SeriesError::InvalidWindow {
            window,
            len: values.len(),
        });
    }
    Ok(())
}

/// Advances one monotonic deque past element `i`.
///
/// The deque holds indices into `values`, oldest at the front, their values
/// strictly ordered under `E::beats`. After the call the front index is the
/// extremum of the window ending at `i`. Every index is pushed and popped at
/// most once, so a whole pass is O(n).
fn step<E: Extremum>(deque: &mut VecDeque<usize>, values: &[f64], window: usize, i: usize) {
    // The newest value retires every candidate it ties or beats.
    while let Some(&j) = deque.back() {
        if E::beats(values[j], values[i]) {
            break;
        }
        deque.pop_back();
    }
    deque.push_back(i);

    // Drop front indices older than i - window + 1.
    while let Some(&j) = deque.front() {
        if j + window > i {
            break;
        }
        deque.pop_front();
    }
}

fn scan<E: Extremum>(values: &[f64], window: usize) -> Vec<f64> {
    let n = values.len();
    let mut deque: VecDeque<usize> = VecDeque::with_capacity(window);
    let mut out = Vec::with_capacity(n - window + 1);

    for i in 0..n {
        step::<E>(&mut deque, values, window, i);
        if i + 1 >= window {
            let lead = deque.front().copied().expect("deque holds index i");
            out.push(values[lead]);
        }
    }
    out
}

/// Maximum of every `window` consecutive values, oldest window first.
///
/// The result has `values.len() - window + 1` entries; entry `i` covers
/// `values[i..i + window]`. Fails with [`SeriesError::EmptyInput`] on an
/// empty series, [`SeriesError::NonFinite`] on NaN or infinite input, and
/// [`SeriesError::InvalidWindow`] when `window` is zero or longer than the
/// series.
pub fn window_max(values: &[f64], window: usize) -> Result<Vec<f64>, SeriesError> {
    check(values, window)?;
    Ok(scan::<Max>(values, window))
}

/// Minimum of every `window` consecutive values. Same contract as
/// [`window_max`].
pub fn window_min(values: &[f64], window: usize) -> Result<Vec<f64>, SeriesError> {
    check(values, window)?;
    Ok(scan::<Min>(values, window))
}

/// Per-window `(minimum, maximum)` pairs in one pass advancing two deques.
pub fn window_minmax(values: &[f64], window: usize) -> Result<Vec<(f64, f64)>, SeriesError> {
    check(values, window)?;
    let n = values.len();
    let mut min_deque: VecDeque<usize> = VecDeque::with_capacity(window);
    let mut max_deque: VecDeque<usize> = VecDeque::with_capacity(window);
    let mut out = Vec::with_capacity(n - window + 1);

    for i in 0..n {
        step::<Min>(&mut min_deque, values, window, i);
        step::<Max>(&mut max_deque, values, window, i);
        if i + 1 >= window {
            let lo = min_deque.front().copied().expect("deque holds index i");
            let hi = max_deque.front().copied().expect("deque holds index i");
            out.push((values[lo], values[hi]));
        }
    }
    Ok(out)
}
