//! Computed subnet report model.

use super::Cidr;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// The usable-address enumeration of a subnet, bounded by the
/// generation ceiling.
///
/// A list above the ceiling is never materialized; callers must branch
/// on the variant instead of probing the list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HostRange {
    /// Full ordered sequence from first to last usable, inclusive.
    /// Empty for /31 and /32.
    Enumerated(Vec<Ipv4Addr>),
    /// More usable hosts than the ceiling permits materializing; only
    /// the exact count is carried.
    TooMany { count: u64 },
}

impl HostRange {
    /// Number of usable hosts, whether or not the list was materialized.
    pub fn count(&self) -> u64 {
        match self {
            HostRange::Enumerated(addrs) => addrs.len() as u64,
            HostRange::TooMany { count } => *count,
        }
    }

    /// The materialized address list, if one was generated.
    pub fn addresses(&self) -> Option<&[Ipv4Addr]> {
        match self {
            HostRange::Enumerated(addrs) => Some(addrs),
            HostRange::TooMany { .. } => None,
        }
    }
}

/// Everything computed for one (address, prefix) pair.
///
/// A report is pure output: created on demand, never mutated, and
/// holding no state across invocations. Child subnets are descriptors
/// only; computing a child means another compute call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    /// The requested address and prefix.
    pub cidr: Cidr,
    /// Subnet mask in dotted-quad form.
    pub mask: Ipv4Addr,
    /// Subnet mask as four 8-bit groups.
    pub mask_octets: [u8; 4],
    /// Lowest address in the range (all host bits zero).
    pub network: Ipv4Addr,
    /// Highest address in the range (all host bits one).
    pub broadcast: Ipv4Addr,
    /// First usable address; None when the subnet has no usable hosts.
    pub first_usable: Option<Ipv4Addr>,
    /// Last usable address; None when the subnet has no usable hosts.
    pub last_usable: Option<Ipv4Addr>,
    /// Usable host count: total addresses minus network and broadcast,
    /// floored at zero.
    pub host_count: u64,
    /// The usable addresses, enumerated or counted.
    pub hosts: HostRange,
    /// The two half-size child subnets at prefix+1, ascending; empty
    /// for /31 and /32.
    pub children: Vec<Cidr>,
}
