//! Flattening security groups into printable rule rows.
//!
//! Applies the port and description normalization and the private-range
//! filter. API order is kept throughout: groups as returned, ingress
//! before egress per group, CIDR entries as listed on each rule. No
//! sorting or deduplication.

use super::filter::is_private_cidr;
use crate::models::{Direction, SecurityGroup, SecurityGroupSet, SgRule};
use std::error::Error;

/// Sentinel printed when a port bound is absent on a rule.
pub const PORT_UNSET: i32 = -1;

/// Fallback printed when a CIDR entry carries no usable description.
pub const EMPTY_DESCRIPTION: &str = "empty";

/// A fully-normalized output row for one (rule, CIDR-entry) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRow {
    /// Security group identifier.
    pub group_id: String,
    /// Security group name.
    pub group_name: String,
    /// Rule list the entry came from.
    pub direction: Direction,
    /// Lower port bound, [`PORT_UNSET`] when absent.
    pub from_port: i32,
    /// Upper port bound, [`PORT_UNSET`] when absent.
    pub to_port: i32,
    /// CIDR entry as returned by the API.
    pub cidr_ip: String,
    /// Entry description, [`EMPTY_DESCRIPTION`] when absent or blank.
    pub description: String,
}

/// Flatten every group's rules into output rows.
///
/// # Returns
/// * `Ok(Vec<RuleRow>)` - One row per non-private (rule, CIDR-entry) pair
/// * `Err` - The first unparsable CIDR entry aborts the whole collection
pub fn collect_rule_rows(set: &SecurityGroupSet) -> Result<Vec<RuleRow>, Box<dyn Error>> {
    let mut rows = Vec::new();
    for group in &set.groups {
        for rule in &group.ingress {
            append_rule_rows(&mut rows, group, rule, Direction::Ingress)?;
        }
        for rule in &group.egress {
            append_rule_rows(&mut rows, group, rule, Direction::Egress)?;
        }
    }
    log::info!("collected {count} printable rule rows", count = rows.len());
    Ok(rows)
}

/// Push one row per non-private CIDR entry of a single rule.
fn append_rule_rows(
    rows: &mut Vec<RuleRow>,
    group: &SecurityGroup,
    rule: &SgRule,
    direction: Direction,
) -> Result<(), Box<dyn Error>> {
    for entry in &rule.ip_ranges {
        if is_private_cidr(&entry.cidr_ip)? {
            log::debug!(
                "skip private {cidr} on {id}/{direction}",
                cidr = entry.cidr_ip,
                id = group.group_id
            );
            continue;
        }
        // The fallback fires for blank descriptions too, not only absent ones
        let description = entry
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(EMPTY_DESCRIPTION)
            .to_string();
        rows.push(RuleRow {
            group_id: group.group_id.clone(),
            group_name: group.group_name.clone(),
            direction,
            from_port: rule.from_port.unwrap_or(PORT_UNSET),
            to_port: rule.to_port.unwrap_or(PORT_UNSET),
            cidr_ip: entry.cidr_ip.clone(),
            description,
        });
    }
    Ok(())
}
