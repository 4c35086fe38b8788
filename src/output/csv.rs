//! CSV output for rule rows.

use crate::processing::RuleRow;

/// Render a single row as a comma-separated line.
///
/// No quoting, padding, or header; the fields appear exactly as
/// normalized upstream.
pub fn format_rule_row(row: &RuleRow) -> String {
    format!(
        "{id},{name},{direction},{from_port},{to_port},{cidr},{description}",
        id = row.group_id,
        name = row.group_name,
        direction = row.direction,
        from_port = row.from_port,
        to_port = row.to_port,
        cidr = row.cidr_ip,
        description = row.description,
    )
}

/// Print every row to stdout, one line each.
pub fn print_rule_rows(rows: &[RuleRow]) {
    log::info!("#Start print_rule_rows() with {count} rows", count = rows.len());
    for row in rows {
        println!("{}", format_rule_row(row));
    }
}
