//! Output formatting for subnet reports.
//!
//! This module handles rendering and exporting computed results:
//! - [`csv`] - CSV and newline-separated plain-text export
//! - [`terminal`] - colored terminal summary, tables, and diagram

mod csv;
mod terminal;

pub use csv::{escape_csv_field, export_csv, export_text};
pub use terminal::{format_field, print_diagram, print_page, print_report, DIAGRAM_LIMIT};
