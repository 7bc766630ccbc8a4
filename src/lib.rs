//! IPv4 subnet exploration: range computation, bounded host
//! enumeration, pagination, filtering, and export.

pub mod models;
pub mod output;
pub mod processing;

pub use models::{Cidr, HostRange, SubnetError, SubnetReport};
pub use processing::{compute_subnet, GENERATION_LIMIT};

/// Parse dotted-quad text and compute the subnet report in one step.
///
/// Validation failures surface before any arithmetic; see
/// [`SubnetError`] for the taxonomy.
pub fn explore(address: &str, prefix: u8) -> Result<SubnetReport, SubnetError> {
    let addr = models::parse_addr(address)?;
    processing::compute_subnet(addr, prefix)
}
