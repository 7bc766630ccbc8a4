//! Substring filtering of an enumerated address list.

use std::net::Ipv4Addr;

/// Retain addresses whose dotted-quad text contains `pattern`.
///
/// The pattern is trimmed first; an empty pattern retains everything.
pub fn filter_addresses(addrs: &[Ipv4Addr], pattern: &str) -> Vec<Ipv4Addr> {
    let pattern = pattern.trim();
    addrs
        .iter()
        .copied()
        .filter(|addr| addr.to_string().contains(pattern))
        .collect()
}
