use thiserror::Error;

/// Failures surfaced by the series structures.
///
/// Every variant is detected synchronously at the start of the offending
/// call, before any output is produced. The infinity identity elements used
/// inside the tree recursion never escape through this surface.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SeriesError {
    /// The input series has length zero.
    #[error("input series is empty")]
    EmptyInput,

    /// Query endpoints are reversed or fall outside `[0, len - 1]`.
    #[error("range [{lo}, {hi}] is not a valid query on {len} elements")]
    InvalidRange { lo: usize, hi: usize, len: usize },

    /// Window size is zero or exceeds the series length.
    #[error("window of {window} is not valid over {len} elements")]
    InvalidWindow { window: usize, len: usize },

    /// The series contains a NaN or infinity.
    #[error("non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },
}
