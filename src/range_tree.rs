// ============================================================
// RangeTree: static segment tree for max/min/sum range queries
// ============================================================

use crate::error::SeriesError;
use crate::traits::{Aggregate, Max, Min, Sum};
use crate::util::{tree_capacity, validate_series};

/// Static segment tree over an `f64` series, answering maximum, minimum,
/// sum and mean over any inclusive index range in O(log n).
///
/// Node `v` covers `[start, end]`; its children at `2v + 1` and `2v + 2`
/// split the range at `(start + end) / 2`. One aggregate array per query
/// family shares this layout. Unreached slots hold the family's identity
/// element, which also answers pruned subtrees during descent; identities
/// are internal only and never returned to callers.
#[derive(Clone, Debug)]
pub struct RangeTree {
    /// The input series, as given.
    values: Vec<f64>,

    /// Per-node maxima, `tree_capacity(n)` slots.
    max_tree: Vec<f64>,

    /// Per-node minima, same layout.
    min_tree: Vec<f64>,

    /// Per-node sums, same layout.
    sum_tree: Vec<f64>,
}

fn build<A: Aggregate>(tree: &mut [f64], values: &[f64], node: usize, start: usize, end: usize) {
    if start == end {
        tree[node] = values[start];
    } else {
        let mid = (start + end) / 2;
        build::<A>(tree, values, 2 * node + 1, start, mid);
        build::<A>(tree, values, 2 * node + 2, mid + 1, end);
        tree[node] = A::combine(tree[2 * node + 1], tree[2 * node + 2]);
    }
}

/// Aggregate of `[lo, hi]` within the subtree at `node` covering
/// `[start, end]`. Disjoint subtrees prune to the identity, fully covered
/// ones answer from their precomputed slot, partial overlaps recurse.
fn descend<A: Aggregate>(
    tree: &[f64],
    node: usize,
    start: usize,
    end: usize,
    lo: usize,
    hi: usize,
) -> f64 {
    if hi < start || end < lo {
        return A::IDENTITY;
    }
    if lo <= start && end <= hi {
        return tree[node];
    }
    let mid = (start + end) / 2;
    let left = descend::<A>(tree, 2 * node + 1, start, mid, lo, hi);
    let right = descend::<A>(tree, 2 * node + 2, mid + 1, end, lo, hi);
    A::combine(left, right)
}

impl RangeTree {
    /// Builds the three aggregate trees over `values` in O(n).
    ///
    /// Fails with [`SeriesError::EmptyInput`] on an empty slice and
    /// [`SeriesError::NonFinite`] if any value is NaN or infinite.
    pub fn new(values: &[f64]) -> Result<Self, SeriesError> {
        validate_series(values)?;
        let n = values.len();
        let cap = tree_capacity(n);

        let mut max_tree = vec![Max::IDENTITY; cap];
        let mut min_tree = vec![Min::IDENTITY; cap];
        let mut sum_tree = vec![Sum::IDENTITY; cap];
        build::<Max>(&mut max_tree, values, 0, 0, n - 1);
        build::<Min>(&mut min_tree, values, 0, 0, n - 1);
        build::<Sum>(&mut sum_tree, values, 0, 0, n - 1);

        Ok(RangeTree {
            values: values.to_vec(),
            max_tree,
            min_tree,
            sum_tree,
        })
    }

    /// Number of elements in the series. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// The series the tree was built over.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn check_range(&self, lo: usize, hi: usize) -> Result<(), SeriesError> {
        let len = self.values.len();
        if lo > hi || hi >= len {
            return Err(SeriesError::InvalidRange { lo, hi, len });
        }
        Ok(())
    }

    #[inline]
    fn query<A: Aggregate>(&self, tree: &[f64], lo: usize, hi: usize) -> f64 {
        descend::<A>(tree, 0, 0, self.values.len() - 1, lo, hi)
    }

    /// Maximum of `values[lo..=hi]`.
    ///
    /// `query_max(i, i)` returns `values[i]` exactly. Fails with
    /// [`SeriesError::InvalidRange`] if `lo > hi` or `hi >= len`.
    pub fn query_max(&self, lo: usize, hi: usize) -> Result<f64, SeriesError> {
        self.check_range(lo, hi)?;
        Ok(self.query::<Max>(&self.max_tree, lo, hi))
    }

    /// Minimum of `values[lo..=hi]`. Same contract as [`Self::query_max`].
    pub fn query_min(&self, lo: usize, hi: usize) -> Result<f64, SeriesError> {
        self.check_range(lo, hi)?;
        Ok(self.query::<Min>(&self.min_tree, lo, hi))
    }

    /// Sum of `values[lo..=hi]`.
    ///
    /// Additions associate in tree shape, so results can differ from a
    /// left-to-right fold by normal f64 rounding. `query_sum(i, i)` is
    /// still `values[i]` exactly.
    pub fn query_sum(&self, lo: usize, hi: usize) -> Result<f64, SeriesError> {
        self.check_range(lo, hi)?;
        Ok(self.query::<Sum>(&self.sum_tree, lo, hi))
    }

    /// Arithmetic mean of `values[lo..=hi]`, as range sum over count.
    pub fn query_mean(&self, lo: usize, hi: usize) -> Result<f64, SeriesError> {
        let sum = self.query_sum(lo, hi)?;
        Ok(sum / (hi - lo + 1) as f64)
    }
}
