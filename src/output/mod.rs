//! Output formatting for rule rows.
//!
//! - [`csv`] - comma-separated lines on stdout

mod csv;

pub use csv::{format_rule_row, print_rule_rows};
