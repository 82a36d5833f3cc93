//! Numeric range to regex compaction.
//!
//! - [`segment`] - group octet values into maximal contiguous runs
//! - [`range`] - turn one run into a compact regex alternation

mod range;
mod segment;

pub use range::{compact, compact_run};
pub use segment::segment;
