//! Grouping host addresses by their first three octets.
//!
//! Every host of a network is split into a `a.b.c` prefix and its last octet.
//! The last octets of one prefix are then compacted into a single regex.

use crate::compact::{compact_run, segment};
use crate::models::Ipv4;
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};
use std::net::Ipv4Addr;

/// Last-octet values sharing one 3-octet prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixGroup {
    /// The first three octets.
    pub prefix: [u8; 3],
    /// Last-octet values present under `prefix`.
    pub octets: BTreeSet<u8>,
}

/// Result of grouping a network's hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OctetGroups {
    /// A /32: one address, matched literally.
    Single(Ipv4Addr),
    /// Groups in ascending order of their first address.
    Prefixes(Vec<PrefixGroup>),
}

impl PrefixGroup {
    /// Dotted prefix text, e.g. `192.168.1`.
    pub fn prefix_text(&self) -> String {
        self.prefix.iter().join(".")
    }

    /// Regex matching `<prefix>.<octet>` for every octet in the group.
    ///
    /// The prefix is escaped and the runs share one non-capturing group, so
    /// the alternation never escapes the last octet.
    pub fn to_regex(&self) -> String {
        let runs = segment(self.octets.iter().copied());
        log::trace!(
            "prefix {} runs: {}",
            self.prefix_text(),
            runs.iter().join(", ")
        );
        format!(
            r"{}\.(?:{})",
            regex::escape(&self.prefix_text()),
            runs.into_iter().map(compact_run).join("|")
        )
    }
}

/// Group the usable hosts of `network` by 3-octet prefix.
///
/// Host bits in `network` are ignored. There is no size limit here, callers
/// are expected to check [`Ipv4::num_addresses`] first.
pub fn group(network: &Ipv4) -> OctetGroups {
    let network = network.network();
    if network.mask == 32 {
        return OctetGroups::Single(network.addr);
    }

    let mut prefixes: BTreeMap<[u8; 3], BTreeSet<u8>> = BTreeMap::new();
    for host in network.hosts() {
        let [a, b, c, d] = host.octets();
        prefixes.entry([a, b, c]).or_default().insert(d);
    }
    log::debug!("{network} spans {} prefix group(s)", prefixes.len());

    OctetGroups::Prefixes(
        prefixes
            .into_iter()
            .map(|(prefix, octets)| PrefixGroup { prefix, octets })
            .collect(),
    )
}

/// Literal regex for a single address, dots escaped.
pub fn single_address_regex(addr: Ipv4Addr) -> String {
    regex::escape(&addr.to_string())
}
