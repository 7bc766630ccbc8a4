//! Subnet computation engine.
//!
//! Pure arithmetic: network and broadcast derivation, usable-range
//! computation, safety-bounded host enumeration, and the one-level
//! split into two child subnets.

use crate::models::{prefix_mask, Cidr, HostRange, SubnetError, SubnetReport, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Safety bound on how many addresses one compute call may materialize
/// into a list. Counts above it produce [`HostRange::TooMany`].
pub const GENERATION_LIMIT: u64 = 200_000;

/// Compute the full [`SubnetReport`] for an address and prefix.
///
/// Deterministic and side-effect free; the only failure mode is
/// [`SubnetError::InvalidPrefix`]. Host-space arithmetic runs in u64
/// since a /0 spans 2^32 addresses.
///
/// # Examples
/// ```
/// use subnet_explorer::processing::compute_subnet;
/// use std::net::Ipv4Addr;
/// let report = compute_subnet(Ipv4Addr::new(192, 168, 1, 10), 24).unwrap();
/// assert_eq!(report.network, Ipv4Addr::new(192, 168, 1, 0));
/// assert_eq!(report.broadcast, Ipv4Addr::new(192, 168, 1, 255));
/// assert_eq!(report.host_count, 254);
/// ```
pub fn compute_subnet(addr: Ipv4Addr, prefix: u8) -> Result<SubnetReport, SubnetError> {
    let mask = prefix_mask(prefix)?;

    let host_space = 1u64 << (MAX_LENGTH - prefix);
    let host_count = host_space.saturating_sub(2);

    let network = u32::from(addr) & mask;
    let broadcast = (network as u64 + host_space - 1) as u32;

    let (first_usable, last_usable) = if host_count > 0 {
        (Some(network + 1), Some(broadcast - 1))
    } else {
        // /31 and /32: no addresses left once network and broadcast
        // are reserved.
        (None, None)
    };

    let hosts = match (first_usable, last_usable) {
        (Some(first), Some(last)) if host_count <= GENERATION_LIMIT => {
            HostRange::Enumerated((first..=last).map(Ipv4Addr::from).collect())
        }
        (Some(_), Some(_)) => HostRange::TooMany { count: host_count },
        _ => HostRange::Enumerated(Vec::new()),
    };

    // A /31 splits into two /32 single addresses, which are not
    // independently meaningful subnets under this model.
    let children = if prefix < MAX_LENGTH - 1 {
        let half = (host_space / 2) as u32;
        vec![
            Cidr {
                addr: Ipv4Addr::from(network),
                prefix: prefix + 1,
            },
            Cidr {
                addr: Ipv4Addr::from(network + half),
                prefix: prefix + 1,
            },
        ]
    } else {
        Vec::new()
    };

    Ok(SubnetReport {
        cidr: Cidr { addr, prefix },
        mask: Ipv4Addr::from(mask),
        mask_octets: mask.to_be_bytes(),
        network: Ipv4Addr::from(network),
        broadcast: Ipv4Addr::from(broadcast),
        first_usable: first_usable.map(Ipv4Addr::from),
        last_usable: last_usable.map(Ipv4Addr::from),
        host_count,
        hosts,
        children,
    })
}
