//! Rule data processing logic.
//!
//! This module contains the business logic between fetch and print:
//! - [`filter`] - private address classification
//! - [`rows`] - flattening groups into printable rows

mod filter;
mod rows;

// Re-export public functions
pub use filter::{is_private_cidr, PRIVATE_IP_CIDRS};
pub use rows::{collect_rule_rows, RuleRow, EMPTY_DESCRIPTION, PORT_UNSET};
