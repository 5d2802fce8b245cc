use crate::error::SeriesError;

/// Ceiling of log2(n). Requires n >= 1; returns 0 for n == 1.
#[inline]
pub fn ceil_log2(n: usize) -> u32 {
    debug_assert!(n >= 1);
    usize::BITS - (n - 1).leading_zeros()
}

/// Node slots needed by the recursive tree layout over `n` leaves.
///
/// With children of node `v` at `2v + 1` and `2v + 2` and ranges split at
/// `(start + end) / 2`, the deepest node lives on level `ceil_log2(n)`, so
/// `2^(ceil_log2(n) + 1) - 1` slots cover every reachable index exactly.
#[inline]
pub fn tree_capacity(n: usize) -> usize {
    debug_assert!(n >= 1);
    (1usize << (ceil_log2(n) + 1)) - 1
}

/// Shared input guard: the series must be non-empty and finite throughout.
pub(crate) fn validate_series(values: &[f64]) -> Result<(), SeriesError> {
    if values.is_empty() {
        return Err(SeriesError::EmptyInput);
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(SeriesError::NonFinite {
            index,
            value: values[index],
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_log2_cases() {
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(5), 3);
        assert_eq!(ceil_log2(8), 3);
        assert_eq!(ceil_log2(9), 4);
        assert_eq!(ceil_log2(1 << 20), 20);
        assert_eq!(ceil_log2((1 << 20) + 1), 21);
    }

    #[test]
    fn tree_capacity_cases() {
        assert_eq!(tree_capacity(1), 1);
        assert_eq!(tree_capacity(2), 3);
        assert_eq!(tree_capacity(3), 7);
        assert_eq!(tree_capacity(4), 7);
        assert_eq!(tree_capacity(5), 15);
        assert_eq!(tree_capacity(8), 15);
        assert_eq!(tree_capacity(9), 31);
    }

    #[test]
    fn validate_series_rejects_bad_input() {
        assert_eq!(validate_series(&[]), Err(SeriesError::EmptyInput));

        let err = validate_series(&[1.0, f64::NAN, 3.0]).unwrap_err();
        assert!(matches!(err, SeriesError::NonFinite { index: 1, .. }));

        let err = validate_series(&[f64::INFINITY]).unwrap_err();
        assert!(matches!(err, SeriesError::NonFinite { index: 0, .. }));

        assert_eq!(validate_series(&[1.0, -2.5, 0.0]), Ok(()));
    }
}
