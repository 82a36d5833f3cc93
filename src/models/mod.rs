//! Domain models for CIDR regex compaction.
//!
//! - [`Ipv4`] - IPv4 network in CIDR notation, with host enumeration
//! - [`ContiguousRun`] - a maximal run of consecutive octet values

mod ipv4;
mod run;

// Re-export public types
pub use ipv4::{get_cidr_mask, netmask_to_len, num_addresses, num_hosts, Ipv4, MAX_LENGTH};
pub use run::ContiguousRun;
