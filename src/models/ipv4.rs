//! IPv4 address and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] struct for representing an IPv4 network in CIDR
//! notation, along with the mask arithmetic needed to enumerate its hosts.

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_compact_regex::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Total number of addresses in a network of the given prefix length.
pub fn num_addresses(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Number of usable host addresses for a prefix length.
///
/// Network and broadcast addresses are excluded, except for /31 (point to
/// point, both usable) and /32 (the single address itself).
pub fn num_hosts(len: u8) -> Result<u64, Box<dyn Error>> {
    let total = num_addresses(len)?;
    if len >= MAX_LENGTH - 1 {
        Ok(total)
    } else {
        Ok(total - 2)
    }
}

/// Parse a dotted netmask (e.g. `255.255.255.0`) into a prefix length.
///
/// Only contiguous masks are accepted.
pub fn netmask_to_len(mask: Ipv4Addr) -> Result<u8, Box<dyn Error>> {
    let bits = u32::from(mask);
    if bits.leading_ones() != bits.count_ones() {
        return Err(format!("Netmask {mask} is not contiguous").into());
    }
    Ok(bits.count_ones() as u8)
}

/// IPv4 network in CIDR notation.
///
/// `addr` is kept as given; use [`Ipv4::network`] to mask off host bits.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string.
    ///
    /// Accepts `10.0.0.0/24`, `10.0.0.0/255.255.255.0` and a bare `10.0.0.1`
    /// (a /32). Host bits are kept; see [`Ipv4::network`].
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() > 2 {
            return Err("Invalid address/mask".into());
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        let mask = match parts.get(1) {
            None => MAX_LENGTH,
            Some(m) if m.contains('.') => {
                let netmask: Ipv4Addr = m.parse().map_err(|_| format!("Invalid netmask {m}"))?;
                netmask_to_len(netmask)?
            }
            Some(m) => {
                // u8::from_str accepts a leading '+', a prefix length never has one
                if !m.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(format!("Invalid prefix length {m}").into());
                }
                m.parse().map_err(|_| format!("Invalid prefix length {m}"))?
            }
        };
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The same network with host bits masked off.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask_bits())
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits())
    }

    // a mask over MAX_LENGTH can only come from a hand built struct
    fn mask_bits(&self) -> u32 {
        get_cidr_mask(self.mask).unwrap_or(u32::MAX)
    }

    /// Total number of addresses covered by this network.
    pub fn num_addresses(&self) -> u64 {
        num_addresses(self.mask).unwrap_or(1)
    }

    /// Number of usable host addresses, see [`num_hosts`].
    pub fn num_hosts(&self) -> u64 {
        num_hosts(self.mask).unwrap_or(1)
    }

    /// Iterate over the usable host addresses in ascending order.
    pub fn hosts(&self) -> impl Iterator<Item = Ipv4Addr> {
        let lo = u32::from(self.lo());
        let hi = u32::from(self.hi());
        let (first, last) = match self.mask {
            m if m >= MAX_LENGTH - 1 => (lo, hi),
            _ => (lo + 1, hi - 1),
        };
        (first..=last).map(Ipv4Addr::from)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
