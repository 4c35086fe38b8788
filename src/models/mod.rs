//! Domain models for the security group summary.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SecurityGroup`] and [`SecurityGroupSet`] - decoded security group data

mod group;
mod ipv4;

// Re-export public types
pub use group::{Direction, IpRange, SecurityGroup, SecurityGroupSet, SgRule};
pub use ipv4::{broadcast_addr, get_cidr_mask, network_addr, Ipv4, MAX_LENGTH};
