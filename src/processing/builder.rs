//! CIDR text to regex.
//!
//! Parses the network (non-strict), applies the size limit and joins the
//! per-prefix patterns into one capturing group.

use super::group::{group, single_address_regex, OctetGroups, PrefixGroup};
use crate::config::{Config, DEFAULT_MAX_ADDRESSES};
use crate::error::{CidrRegexError, Result};
use crate::models::Ipv4;
use itertools::Itertools;

/// Converts CIDR text into a compact regex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidrRegexBuilder {
    max_addresses: Option<u64>,
}

impl Default for CidrRegexBuilder {
    fn default() -> Self {
        CidrRegexBuilder::new(Some(DEFAULT_MAX_ADDRESSES))
    }
}

impl CidrRegexBuilder {
    /// `None` disables the size limit.
    pub fn new(max_addresses: Option<u64>) -> Self {
        CidrRegexBuilder { max_addresses }
    }

    pub fn from_config(config: &Config) -> Self {
        CidrRegexBuilder::new(config.max_addresses)
    }

    /// Build the regex for `cidr_text`.
    ///
    /// Host bits are masked off rather than rejected. A /32 becomes the
    /// escaped address itself; anything else becomes one alternative per
    /// 3-octet prefix, in ascending address order.
    ///
    /// # Examples
    /// ```
    /// use cidr_compact_regex::processing::CidrRegexBuilder;
    /// let builder = CidrRegexBuilder::default();
    /// assert_eq!(builder.build("10.0.0.5/32").unwrap(), r"(10\.0\.0\.5)");
    /// assert_eq!(
    ///     builder.build("garbage-text").unwrap_err().to_string(),
    ///     "Invalid CIDR: garbage-text"
    /// );
    /// ```
    pub fn build(&self, cidr_text: &str) -> Result<String> {
        let network = Ipv4::new(cidr_text)
            .map_err(|e| {
                log::warn!("Rejected {cidr_text:?}: {e}");
                CidrRegexError::InvalidCidr(cidr_text.to_string())
            })?
            .network();

        if let Some(limit) = self.max_addresses {
            if network.num_addresses() > limit {
                log::warn!(
                    "{network} has {} addresses, limit is {limit}",
                    network.num_addresses()
                );
                return Err(CidrRegexError::TooLargeToCompact(network.num_hosts()));
            }
        }

        let body = match group(&network) {
            OctetGroups::Single(addr) => single_address_regex(addr),
            OctetGroups::Prefixes(groups) => groups.iter().map(PrefixGroup::to_regex).join("|"),
        };
        log::debug!("{cidr_text} -> {} byte regex", body.len() + 2);

        Ok(format!("({body})"))
    }
}

/// Convert with the default size limit.
pub fn cidr_to_regex(cidr_text: &str) -> Result<String> {
    CidrRegexBuilder::default().build(cidr_text)
}
