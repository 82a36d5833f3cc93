//! Splitting a set of octet values into contiguous runs.

use crate::models::ContiguousRun;
use itertools::Itertools;

/// Group `values` into maximal runs of consecutive integers.
///
/// Input order and duplicates do not matter. Runs come back in ascending
/// order, disjoint, and no two of them could be merged.
///
/// # Examples
/// ```
/// use cidr_compact_regex::compact::segment;
/// let runs = segment([5, 1, 2, 3, 9]);
/// assert_eq!(runs.iter().map(|r| r.to_string()).collect::<Vec<_>>(), ["1-3", "5", "9"]);
/// ```
pub fn segment<I>(values: I) -> Vec<ContiguousRun>
where
    I: IntoIterator<Item = u8>,
{
    values
        .into_iter()
        .sorted_unstable()
        .dedup()
        .map(ContiguousRun::single)
        .coalesce(|run, next| {
            if run.end.checked_add(1) == Some(next.start) {
                Ok(ContiguousRun::new(run.start, next.end))
            } else {
                Err((run, next))
            }
        })
        .collect()
}
