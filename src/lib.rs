// cargo watch -x 'fmt' -x 'test'

pub mod aws;
pub mod models;
pub mod output;
pub mod processing;

use models::SecurityGroupSet;
use std::error::Error;

/// Env var naming a JSON snapshot to use instead of the live API call.
pub const SNAPSHOT_ENV: &str = "SG_SNAPSHOT";

/// Resolve the security group set.
///
/// Reads the snapshot named by `SG_SNAPSHOT` when set, otherwise builds
/// a client from ambient configuration and calls DescribeSecurityGroups.
pub async fn get_security_groups() -> Result<SecurityGroupSet, Box<dyn Error>> {
    match std::env::var(SNAPSHOT_ENV) {
        Ok(snapshot_file) => aws::read_group_snapshot(&snapshot_file),
        Err(_) => {
            let client = aws::load_client().await;
            aws::fetch_security_groups(&client).await
        }
    }
}

/// Count the (rule, CIDR-entry) pairs across all groups, before filtering.
pub fn count_rule_entries(set: &SecurityGroupSet) -> usize {
    set.groups
        .iter()
        .flat_map(|g| g.ingress.iter().chain(g.egress.iter()))
        .map(|rule| rule.ip_ranges.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws::read_group_snapshot;

    #[test]
    fn test_count_rule_entries() {
        let set = read_group_snapshot("src/tests/test_data/sg_snapshot_02.json")
            .expect("Error reading group snapshot");
        assert_eq!(count_rule_entries(&set), 9);
    }
}
