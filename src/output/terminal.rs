//! Terminal output for subnet reports.
//!
//! Colored one-subnet summary, paged address tables, and the box
//! diagram of a small network.

use crate::models::{binary_octets, HostRange, SubnetError, SubnetReport};
use crate::processing::{compute_subnet, Page};
use colored::Colorize;
use itertools::Itertools;

/// Networks with more hosts than this render a notice instead of the
/// box diagram.
pub const DIAGRAM_LIMIT: u64 = 2_000;

/// Boxes per diagram row.
const DIAGRAM_COLUMNS: usize = 16;

/// Format a value as a quoted, right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print the summary of one computed subnet, with its two child
/// subnets previewed underneath.
///
/// Each child preview re-invokes the calculator on the child
/// descriptor.
pub fn print_report(report: &SubnetReport) -> Result<(), SubnetError> {
    log::info!("#Start print_report() {}", report.cidr);

    println!("{} {}", "Subnet:".bold(), report.cidr);
    println!(
        "{} {} ({})",
        "Mask:".bold(),
        report.mask,
        binary_octets(report.mask)
    );
    println!("{} {}", "Network:".bold(), report.network.to_string().green());
    println!(
        "{} {}",
        "Broadcast:".bold(),
        report.broadcast.to_string().red()
    );
    println!(
        "{} {}",
        "First usable:".bold(),
        report
            .first_usable
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "{} {}",
        "Last usable:".bold(),
        report
            .last_usable
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("{} {}", "Hosts:".bold(), report.host_count);
    if let HostRange::TooMany { count } = report.hosts {
        println!(
            "{}",
            format!("too many hosts: {count} - list not generated").yellow()
        );
    }

    if report.children.is_empty() {
        return Ok(());
    }
    println!("{}", "Child subnets:".bold());
    for child in &report.children {
        let sub = compute_subnet(child.addr, child.prefix)?;
        println!(
            "  {child}  network {network}  broadcast {broadcast}  hosts {hosts}",
            network = sub.network.to_string().green(),
            broadcast = sub.broadcast.to_string().red(),
            hosts = sub.host_count,
        );
    }

    Ok(())
}

/// Print one page of usable addresses as an aligned table.
///
/// With `show_binary`, each row carries the per-octet binary detail.
pub fn print_page(page: &Page, show_binary: bool) {
    log::info!(
        "#Start print_page() page {}/{} total {}",
        page.number,
        page.page_count,
        page.total
    );

    println!(
        "{}",
        format!(
            "page {number}/{count} - {total} address(es)",
            number = page.number,
            count = page.page_count,
            total = page.total
        )
        .bold()
    );

    if page.entries.is_empty() {
        println!("no addresses to display");
        return;
    }
    for addr in &page.entries {
        if show_binary {
            println!(
                "{addr}{binary}",
                addr = format_field(addr, 18),
                binary = format_field(binary_octets(*addr), 38)
            );
        } else {
            println!("{}", format_field(addr, 18));
        }
    }
}

/// Print the box diagram: network, usable hosts, and broadcast, one
/// colored cell per address showing its last octet.
///
/// Large networks print a notice instead; the caller should offer the
/// child subnets for drill-down.
pub fn print_diagram(report: &SubnetReport) {
    println!(
        "{} {} /{} - {} hosts",
        "Network:".bold(),
        report.network,
        report.cidr.prefix,
        report.host_count
    );

    if report.host_count > DIAGRAM_LIMIT {
        println!(
            "network too large to draw every cell ({} hosts); use the child subnets or a filter",
            report.host_count
        );
        return;
    }

    let mut cells: Vec<String> = Vec::new();
    cells.push(octet_cell(report.network.octets()[3]).on_green().to_string());
    if let HostRange::Enumerated(addrs) = &report.hosts {
        for addr in addrs {
            cells.push(octet_cell(addr.octets()[3]));
        }
    }
    // /32 collapses network and broadcast into the same address; one
    // cell is enough.
    if report.broadcast != report.network {
        cells.push(octet_cell(report.broadcast.octets()[3]).on_red().to_string());
    }

    for row in &cells.iter().chunks(DIAGRAM_COLUMNS) {
        println!("{}", row.into_iter().join(" "));
    }
}

fn octet_cell(octet: u8) -> String {
    format!("{octet:>3}")
}
