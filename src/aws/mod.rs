//! AWS EC2 interaction.
//!
//! This module handles all AWS-related operations:
//! - [`client`] - SDK configuration and client construction
//! - [`describe`] - the DescribeSecurityGroups call
//! - [`snapshot`] - offline snapshots of describe output

mod client;
mod describe;
mod snapshot;

// Re-export public types and functions
pub use client::{load_client, DEFAULT_REGION};
pub use describe::fetch_security_groups;
pub use snapshot::read_group_snapshot;
