//! IPv4 address and CIDR notation utilities.
//!
//! Provides dotted-quad parsing with typed errors, prefix-to-mask
//! derivation, and the [`Cidr`] address/prefix pair used throughout the
//! crate.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use thiserror::Error;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Input-validation failures.
///
/// All variants are detected before any subnet arithmetic runs; once
/// inputs validate, computation cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Dotted-quad text without exactly four `.`-separated segments.
    #[error("invalid address format {text:?}: expected four dot-separated octets")]
    InvalidFormat { text: String },
    /// A segment that is not an integer in 0-255.
    #[error("address octet {segment:?} is not an integer in 0-255")]
    OutOfRange { segment: String },
    /// Prefix length outside 0-32.
    #[error("invalid prefix length /{prefix}: expected 0-32")]
    InvalidPrefix { prefix: u8 },
}

/// Parse dotted-quad text into an [`Ipv4Addr`].
///
/// Fails with [`SubnetError::InvalidFormat`] unless the text has exactly
/// four segments, and with [`SubnetError::OutOfRange`] unless every
/// segment is a plain decimal integer in 0-255.
///
/// # Examples
/// ```
/// use subnet_explorer::models::parse_addr;
/// use std::net::Ipv4Addr;
/// assert_eq!(parse_addr("192.168.1.10").unwrap(), Ipv4Addr::new(192, 168, 1, 10));
/// ```
pub fn parse_addr(text: &str) -> Result<Ipv4Addr, SubnetError> {
    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() != 4 {
        return Err(SubnetError::InvalidFormat {
            text: text.to_string(),
        });
    }

    let mut octets = [0u8; 4];
    for (octet, segment) in octets.iter_mut().zip(segments.iter()) {
        // Digits only: rejects empty segments, signs, and whitespace.
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubnetError::OutOfRange {
                segment: segment.to_string(),
            });
        }
        let value: u32 = segment.parse().map_err(|_| SubnetError::OutOfRange {
            segment: segment.to_string(),
        })?;
        if value > u8::MAX as u32 {
            return Err(SubnetError::OutOfRange {
                segment: segment.to_string(),
            });
        }
        *octet = value as u8;
    }

    Ok(Ipv4Addr::from(octets))
}

/// Convert a prefix length to a subnet mask as u32.
///
/// The high `prefix` bits are set, the remaining bits are zero. The
/// shift runs through u64 so prefix 0 yields an exact all-zero mask.
///
/// # Examples
/// ```
/// use subnet_explorer::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(prefix: u8) -> Result<u32, SubnetError> {
    if prefix > MAX_LENGTH {
        Err(SubnetError::InvalidPrefix { prefix })
    } else {
        let host_bits = MAX_LENGTH - prefix;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> host_bits) << host_bits;

        Ok(mask as u32)
    }
}

/// The subnet mask for a prefix as four 8-bit groups.
pub fn mask_octets(prefix: u8) -> Result<[u8; 4], SubnetError> {
    Ok(prefix_mask(prefix)?.to_be_bytes())
}

/// The subnet mask for a prefix in dotted-quad form.
pub fn mask_addr(prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    Ok(Ipv4Addr::from(prefix_mask(prefix)?))
}

/// Per-octet 8-bit zero-padded binary rendering, dot-separated.
///
/// Display-only; consumed by the per-address detail output.
pub fn binary_octets(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

/// IPv4 address with a prefix length, in CIDR notation.
///
/// Also serves as the lightweight child-subnet descriptor: holding a
/// `Cidr` does not compute anything, a full report is produced on demand.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Cidr {
    /// Create a new [`Cidr`], rejecting prefixes longer than 32 bits.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Cidr, SubnetError> {
        if prefix > MAX_LENGTH {
            return Err(SubnetError::InvalidPrefix { prefix });
        }
        Ok(Cidr { addr, prefix })
    }
}

impl FromStr for Cidr {
    type Err = SubnetError;

    /// Parse CIDR text (e.g. "10.0.0.0/24").
    fn from_str(text: &str) -> Result<Cidr, SubnetError> {
        let text = text.trim();
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() != 2 {
            return Err(SubnetError::InvalidFormat {
                text: text.to_string(),
            });
        }
        let addr = parse_addr(parts[0])?;
        let prefix: u8 = parts[1].parse().map_err(|_| SubnetError::InvalidFormat {
            text: text.to_string(),
        })?;
        Cidr::new(addr, prefix)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::from_str(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s:?}: {e}")))
    }
}
