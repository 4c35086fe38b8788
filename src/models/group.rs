//! Security group data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One page of DescribeSecurityGroups results.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SecurityGroupSet {
    /// The groups in the order the API returned them.
    pub groups: Vec<SecurityGroup>,
    /// Continuation token returned by AWS. Carried for diagnostics only,
    /// further pages are never fetched.
    #[serde(default)]
    pub next_token: Option<String>,
    /// Number of groups on this page.
    #[serde(default)]
    pub count: i32,
}

/// An EC2 security group with its ingress and egress rule lists.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SecurityGroup {
    /// Group identifier, e.g. `sg-0a1b2c3d4e5f67890`.
    pub group_id: String,
    /// Group display name.
    pub group_name: String,
    /// Inbound permission entries.
    #[serde(default)]
    pub ingress: Vec<SgRule>,
    /// Outbound permission entries.
    #[serde(default)]
    pub egress: Vec<SgRule>,
}

/// A single permission entry on a group.
///
/// Port bounds stay `Option` so an absent bound is distinguishable from a
/// present port 0.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SgRule {
    #[serde(default)]
    pub from_port: Option<i32>,
    #[serde(default)]
    pub to_port: Option<i32>,
    #[serde(default)]
    pub ip_ranges: Vec<IpRange>,
}

/// An IPv4 CIDR entry on a rule.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IpRange {
    /// The range in CIDR notation, exactly as the API returned it.
    pub cidr_ip: String,
    /// Optional human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Traffic direction of a rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ingress,
    Egress,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ingress => write!(f, "ingress"),
            Direction::Egress => write!(f, "egress"),
        }
    }
}
