//! Error types for CIDR regex conversion

use thiserror::Error;

/// Result type alias for a single conversion
pub type Result<T> = std::result::Result<T, CidrRegexError>;

/// Per-input conversion failures. Neither is fatal to a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrRegexError {
    /// Input does not parse as an IPv4 network; carries the original text
    #[error("Invalid CIDR: {0}")]
    InvalidCidr(String),

    /// Network is over the size limit; carries its usable host count
    #[error("CIDR too large for compression ({0} IPs)")]
    TooLargeToCompact(u64),
}
