// ============================================================
// Aggregation strategies shared by the tree and window scans
// ============================================================

/// Folds two subtree results into their parent's value.
///
/// Implementors are zero-sized markers picked at the call site, so each
/// query family compiles down to a direct comparison or addition.
pub trait Aggregate: Clone + Default {
    /// Neutral element: `combine(IDENTITY, x) == x` for every finite `x`.
    /// Only pruned subtrees ever produce it; it never reaches callers.
    const IDENTITY: f64;

    fn combine(a: f64, b: f64) -> f64;
}

/// An [`Aggregate`] with a strict preference order, as required by the
/// monotonic window scan. `beats(a, b)` holds when `a` stays useful even
/// after `b` enters the window.
pub trait Extremum: Aggregate {
    fn beats(a: f64, b: f64) -> bool;
}

// -------- Maximum --------

#[derive(Clone, Copy, Default, Debug)]
pub struct Max;

impl Aggregate for Max {
    const IDENTITY: f64 = f64::NEG_INFINITY;

    #[inline]
    fn combine(a: f64, b: f64) -> f64 {
        // Non-strict on ties; equal values are interchangeable.
        if a >= b {
            a
        } else {
            b
        }
    }
}

impl Extremum for Max {
    #[inline]
    fn beats(a: f64, b: f64) -> bool {
        a > b
    }
}

// -------- Minimum --------

#[derive(Clone, Copy, Default, Debug)]
pub struct Min;

impl Aggregate for Min {
    const IDENTITY: f64 = f64::INFINITY;

    #[inline]
    fn combine(a: f64, b: f64) -> f64 {
        if a <= b {
            a
        } else {
            b
        }
    }
}

impl Extremum for Min {
    #[inline]
    fn beats(a: f64, b: f64) -> bool {
        a < b
    }
}

// -------- Sum --------

/// Range sum; also serves the mean query as sum over count.
#[derive(Clone, Copy, Default, Debug)]
pub struct Sum;

impl Aggregate for Sum {
    const IDENTITY: f64 = 0.0;

    #[inline]
    fn combine(a: f64, b: f64) -> f64 {
        a + b
    }
}
