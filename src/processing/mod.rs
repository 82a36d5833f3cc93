//! CIDR conversion logic.
//!
//! - [`group`] - grouping host last octets by 3-octet prefix
//! - [`builder`] - parsing, size limit and final regex assembly

mod builder;
mod group;

// Re-export public functions
pub use builder::{cidr_to_regex, CidrRegexBuilder};
pub use group::{group, single_address_regex, OctetGroups, PrefixGroup};
