//! CSV and plain-text export of the usable-address list.

use std::net::Ipv4Addr;

/// Render the address list as CSV: a header row, then one counted row
/// per address.
pub fn export_csv(addrs: &[Ipv4Addr]) -> String {
    log::info!("#Start export_csv() {} address(es)", addrs.len());

    let mut out = String::from("cnt,address\n");
    for (i, addr) in addrs.iter().enumerate() {
        out.push_str(&format!(
            "{cnt},{address}\n",
            cnt = i + 1,
            address = escape_csv_field(&addr.to_string())
        ));
    }
    out
}

/// Render the address list as newline-separated plain text, one
/// address per line.
pub fn export_text(addrs: &[Ipv4Addr]) -> String {
    log::info!("#Start export_text() {} address(es)", addrs.len());

    let mut out = String::new();
    for addr in addrs {
        out.push_str(&addr.to_string());
        out.push('\n');
    }
    out
}

/// Quote a CSV field when it contains a comma or double quote,
/// doubling any embedded quotes.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}
