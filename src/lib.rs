//! Range, sliding-window and span query structures over numeric series.
//!
//! Three independent components share one input model (finite `f64`
//! values, `usize` indices):
//!
//! - [`range_tree::RangeTree`]: maximum, minimum, sum and mean over
//!   arbitrary inclusive index ranges in O(log n), after an O(n) build.
//! - [`sliding_window`]: extrema of every fixed-size window in one O(n)
//!   monotonic-deque pass.
//! - [`span::spans`]: per element, the count of consecutive predecessors
//!   (itself included) it meets or exceeds, in one O(n) stack pass.
//!
//! ```
//! use series_rq::range_tree::RangeTree;
//! use series_rq::sliding_window::window_max;
//! use series_rq::span::spans;
//!
//! let prices = [150.25, 152.30, 148.90, 155.75, 157.20];
//! let tree = RangeTree::new(&prices)?;
//! assert_eq!(tree.query_max(0, 3)?, 155.75);
//! assert_eq!(tree.query_min(1, 4)?, 148.90);
//!
//! let maxima = window_max(&prices, 2)?;
//! assert_eq!(maxima, vec![152.30, 152.30, 155.75, 157.20]);
//!
//! assert_eq!(spans(&[100.0, 80.0, 60.0, 70.0])?, vec![1, 1, 1, 2]);
//! # Ok::<(), series_rq::error::SeriesError>(())
//! ```

pub mod error;
pub mod range_tree;
pub mod sliding_window;
pub mod span;
pub mod traits;
pub mod util;
