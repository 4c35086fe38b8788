//! Offline snapshots of DescribeSecurityGroups output.
//!
//! A snapshot is the JSON form of [`SecurityGroupSet`]. Snapshots are
//! read-only: the live path never writes one. The test fixtures under
//! `src/tests/test_data/` use the same format.

use crate::models::SecurityGroupSet;
use std::error::Error;
use std::path::Path;

/// Decode a [`SecurityGroupSet`] from a JSON snapshot file.
///
/// # Arguments
/// * `snapshot_file` - Path to the snapshot to read
///
/// # Returns
/// * `Ok(SecurityGroupSet)` - The decoded groups
/// * `Err` - If the file is missing, unreadable, or not valid snapshot JSON
pub fn read_group_snapshot(snapshot_file: &str) -> Result<SecurityGroupSet, Box<dyn Error>> {
    if !Path::new(snapshot_file).exists() {
        return Err(format!("Snapshot file does not exist: {snapshot_file}").into());
    }
    log::info!("Reading security groups from snapshot file: {snapshot_file}");

    let json = std::fs::read_to_string(snapshot_file)
        .map_err(|e| format!("Error reading snapshot file {snapshot_file}: {e}"))?;

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let set: SecurityGroupSet = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing snapshot JSON at {path}: {e}", path = e.path()))?;

    log::info!(
        "got {count} security groups from snapshot",
        count = set.groups.len()
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_group_snapshot() {
        let set = read_group_snapshot("src/tests/test_data/sg_snapshot_01.json")
            .expect("Error reading group snapshot");
        assert_eq!(set.groups.len(), 1, "Expected 1 group in test sample");
        assert_eq!(set.groups[0].group_id, "sg-1");
        assert_eq!(set.groups[0].group_name, "web");
        assert_eq!(set.count, 1);
        assert!(set.next_token.is_none());
    }

    #[test]
    fn test_read_group_snapshot_02() {
        let test_snapshot = "src/tests/test_data/sg_snapshot_02.json";
        let set = read_group_snapshot(test_snapshot).expect("Error reading group snapshot");
        assert_eq!(
            set.groups.len(),
            3,
            "Expected 3 groups in test sample {test_snapshot}"
        );
        assert_eq!(set.groups[0].group_name, "bastion");
        assert!(
            set.next_token.is_some(),
            "Test sample carries a continuation token"
        );
    }

    #[test]
    fn test_read_group_snapshot_missing() {
        let err = read_group_snapshot("src/tests/test_data/no_such_file.json").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
