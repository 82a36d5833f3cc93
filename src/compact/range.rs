//! Compact regex for one contiguous run of octet values.
//!
//! The run is cut into digit-length tiers (units 0-9, tens 10-99, hundreds
//! 100-255) and every tier is written with character classes, so a run that
//! covers whole decades or a whole century collapses into a couple of classes
//! instead of an enumerated alternation:
//!
//! ```text
//!   0..=255  ->  [0-9]|[1-9][0-9]|1[0-9][0-9]|2[0-4][0-9]|25[0-5]
//!  12..=47   ->  1[2-9]|[2-3][0-9]|4[0-7]
//! ```

use crate::models::ContiguousRun;
use itertools::Itertools;

/// Regex alternation matching exactly the integers in `start..=end`.
///
/// A single value is returned as its decimal literal. Bounds given in reverse
/// order are swapped. The result is not wrapped in a group, callers joining
/// it with other alternatives have to scope it themselves.
///
/// # Examples
/// ```
/// use cidr_compact_regex::compact::compact;
/// assert_eq!(compact(7, 7), "7");
/// assert_eq!(compact(9, 10), "9|10");
/// assert_eq!(compact(100, 199), "1[0-9][0-9]");
/// ```
pub fn compact(start: u8, end: u8) -> String {
    let run = ContiguousRun::new(start, end);
    if run.is_single() {
        return run.start.to_string();
    }

    let hi = run.end as u16;
    let mut lo = run.start as u16;
    let mut patterns = Vec::new();

    if lo <= 9 {
        let top = hi.min(9);
        patterns.push(digit_class(lo, top));
        lo = top + 1;
    }
    if lo <= hi && lo <= 99 {
        let top = hi.min(99);
        patterns.extend(tens(lo, top, false));
        lo = top + 1;
    }
    if lo <= hi {
        patterns.extend(hundreds(lo, hi));
    }

    patterns.join("|")
}

/// [`compact`] for a [`ContiguousRun`].
pub fn compact_run(run: ContiguousRun) -> String {
    compact(run.start, run.end)
}

/// One tens-digit bucket of a range, before formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bucket {
    /// Tens digits `first..=last`, every unit digit present.
    Full(u16, u16),
    /// Part of a single tens bucket, `lo..=hi` are full numbers.
    Partial(u16, u16),
}

fn digit_class(lo: u16, hi: u16) -> String {
    if lo == hi {
        lo.to_string()
    } else {
        format!("[{lo}-{hi}]")
    }
}

/// Patterns for `lo..=hi` within 0..=99, one per tens bucket.
///
/// With `padded` every number is matched as exactly two digits (`05`,
/// `0[0-9]`), which is what a remainder after a hundreds digit needs.
fn tens(lo: u16, hi: u16, padded: bool) -> Vec<String> {
    (lo / 10..=hi / 10)
        .map(|tens| {
            let a = lo.max(tens * 10);
            let b = hi.min(tens * 10 + 9);
            if a % 10 == 0 && b % 10 == 9 {
                Bucket::Full(tens, tens)
            } else {
                Bucket::Partial(a, b)
            }
        })
        .coalesce(|prev, next| match (prev, next) {
            (Bucket::Full(first, last), Bucket::Full(f, l)) if f == last + 1 => {
                Ok(Bucket::Full(first, l))
            }
            _ => Err((prev, next)),
        })
        .map(|bucket| match bucket {
            Bucket::Full(first, last) => format!("{}[0-9]", digit_class(first, last)),
            Bucket::Partial(lo, hi) if lo == hi => {
                if padded {
                    format!("{lo:02}")
                } else {
                    lo.to_string()
                }
            }
            Bucket::Partial(lo, hi) => format!("{}[{}-{}]", lo / 10, lo % 10, hi % 10),
        })
        .collect()
}

/// Patterns for `lo..=hi` within 100..=255.
///
/// The hundreds digit is repeated in front of every two-digit tail rather
/// than factored out: a bucket has at most three tails, and `h(?:…)` costs
/// more characters than it saves at that size.
fn hundreds(lo: u16, hi: u16) -> Vec<String> {
    (lo / 100..=hi / 100)
        .flat_map(|h| {
            let a = lo.max(h * 100);
            let b = hi.min(h * 100 + 99);
            if a == b {
                vec![a.to_string()]
            } else {
                tens(a % 100, b % 100, true)
                    .into_iter()
                    .map(|tail| format!("{h}{tail}"))
                    .collect()
            }
        })
        .collect()
}
