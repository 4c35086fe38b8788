//! The DescribeSecurityGroups call and response decoding.

use crate::models::{IpRange, SecurityGroup, SecurityGroupSet, SgRule};
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types;
use aws_sdk_ec2::Client;
use colored::Colorize;
use std::error::Error;

/// Fetch every security group in the account/region as a single page.
///
/// The request carries no filters. Any failure aborts the run, including
/// credential resolution problems the SDK reports at request time.
pub async fn fetch_security_groups(client: &Client) -> Result<SecurityGroupSet, Box<dyn Error>> {
    log::info!("#Start fetch_security_groups()");

    let resp = client.describe_security_groups().send().await.map_err(|e| {
        log::warn!(
            "{failed} to run DescribeSecurityGroups",
            failed = "failed".on_red()
        );
        format!("can not list security groups: {}", DisplayErrorContext(&e))
    })?;

    let groups: Vec<SecurityGroup> = resp.security_groups().iter().map(from_sdk_group).collect();
    let next_token = resp.next_token().map(str::to_string);
    if next_token.is_some() {
        log::warn!("DescribeSecurityGroups returned a continuation token, further pages are not fetched");
    }

    let count = groups.len() as i32;
    log::info!("got {count} security groups from DescribeSecurityGroups");

    Ok(SecurityGroupSet {
        groups,
        next_token,
        count,
    })
}

fn from_sdk_group(sg: &types::SecurityGroup) -> SecurityGroup {
    SecurityGroup {
        group_id: sg.group_id().unwrap_or_default().to_string(),
        group_name: sg.group_name().unwrap_or_default().to_string(),
        ingress: sg.ip_permissions().iter().map(from_sdk_permission).collect(),
        egress: sg
            .ip_permissions_egress()
            .iter()
            .map(from_sdk_permission)
            .collect(),
    }
}

fn from_sdk_permission(rule: &types::IpPermission) -> SgRule {
    SgRule {
        from_port: rule.from_port(),
        to_port: rule.to_port(),
        ip_ranges: rule
            .ip_ranges()
            .iter()
            .map(|entry| IpRange {
                cidr_ip: entry.cidr_ip().unwrap_or_default().to_string(),
                description: entry.description().map(str::to_string),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sdk_group() -> types::SecurityGroup {
        types::SecurityGroup::builder()
            .group_id("sg-0a1b2c3d4e5f67890")
            .group_name("web")
            .ip_permissions(
                types::IpPermission::builder()
                    .from_port(80)
                    .to_port(80)
                    .ip_ranges(types::IpRange::builder().cidr_ip("0.0.0.0/0").build())
                    .build(),
            )
            .ip_permissions_egress(
                types::IpPermission::builder()
                    .ip_ranges(
                        types::IpRange::builder()
                            .cidr_ip("10.0.0.0/16")
                            .description("internal")
                            .build(),
                    )
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_from_sdk_group() {
        let group = from_sdk_group(&sdk_group());
        assert_eq!(group.group_id, "sg-0a1b2c3d4e5f67890");
        assert_eq!(group.group_name, "web");
        assert_eq!(group.ingress.len(), 1);
        assert_eq!(group.egress.len(), 1);

        assert_eq!(group.ingress[0].from_port, Some(80));
        assert_eq!(group.ingress[0].to_port, Some(80));
        assert_eq!(group.ingress[0].ip_ranges[0].cidr_ip, "0.0.0.0/0");
        assert_eq!(group.ingress[0].ip_ranges[0].description, None);
    }

    #[test]
    fn test_from_sdk_permission_absent_ports() {
        // Egress rule built without ports must decode as None, not 0
        let group = from_sdk_group(&sdk_group());
        assert_eq!(group.egress[0].from_port, None);
        assert_eq!(group.egress[0].to_port, None);
        assert_eq!(
            group.egress[0].ip_ranges[0].description.as_deref(),
            Some("internal")
        );
    }
}
