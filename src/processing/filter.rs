//! Private address filtering.
//!
//! Classifies rule CIDR entries against the reserved private ranges. An
//! entry whose address lands in any of them is suppressed from output.

use crate::models::Ipv4;
use lazy_static::lazy_static;
use std::error::Error;

/// Reserved ranges that mark a CIDR entry as private.
pub const PRIVATE_IP_CIDRS: [&str; 3] = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"];

lazy_static! {
    // Parsed once, the table is fixed
    static ref PRIVATE_RANGES: Vec<Ipv4> = PRIVATE_IP_CIDRS
        .iter()
        .map(|cidr| Ipv4::new(cidr).expect("Invalid private range table"))
        .collect();
}

/// Test whether a CIDR entry's address falls inside a private range.
///
/// The address part is tested as written, it is not masked down to its
/// network address first.
///
/// # Returns
/// * `Ok(true)` - The entry is private and must not be printed
/// * `Ok(false)` - The entry is printable
/// * `Err` - The entry does not parse as CIDR notation (fatal upstream)
pub fn is_private_cidr(cidr_ip: &str) -> Result<bool, Box<dyn Error>> {
    let candidate =
        Ipv4::new(cidr_ip).map_err(|e| format!("unknown cidr subnet {cidr_ip}: {e}"))?;
    Ok(PRIVATE_RANGES
        .iter()
        .any(|range| range.contains(candidate.addr)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_10() {
        assert!(is_private_cidr("10.0.0.0/8").unwrap());
        assert!(is_private_cidr("10.0.0.0/16").unwrap());
        assert!(is_private_cidr("10.255.255.255/32").unwrap());
        assert!(!is_private_cidr("9.255.255.255/32").unwrap());
        assert!(!is_private_cidr("11.0.0.0/8").unwrap());
    }

    #[test]
    fn test_private_172() {
        assert!(is_private_cidr("172.16.0.0/12").unwrap());
        assert!(is_private_cidr("172.16.8.0/21").unwrap());
        assert!(is_private_cidr("172.31.255.255/32").unwrap());
        // 172.16.0.0/12 ends at 172.31.255.255
        assert!(!is_private_cidr("172.15.255.255/32").unwrap());
        assert!(!is_private_cidr("172.32.0.0/16").unwrap());
    }

    #[test]
    fn test_private_192() {
        assert!(is_private_cidr("192.168.0.0/16").unwrap());
        assert!(is_private_cidr("192.168.12.0/24").unwrap());
        assert!(!is_private_cidr("192.167.255.255/32").unwrap());
        assert!(!is_private_cidr("192.169.0.0/16").unwrap());
    }

    #[test]
    fn test_public() {
        assert!(!is_private_cidr("0.0.0.0/0").unwrap());
        assert!(!is_private_cidr("8.8.8.8/32").unwrap());
        assert!(!is_private_cidr("203.0.113.0/24").unwrap());
    }

    #[test]
    fn test_address_part_tested_as_written() {
        // A /0 whose address part sits inside 10/8 is still private,
        // even though its network address is 0.0.0.0
        assert!(is_private_cidr("10.1.2.3/0").unwrap());
    }

    #[test]
    fn test_unparsable() {
        assert!(is_private_cidr("not-a-cidr").is_err());
        assert!(is_private_cidr("10.0.0.0").is_err());
        let err = is_private_cidr("300.0.0.0/8").unwrap_err();
        assert!(err.to_string().contains("unknown cidr subnet"));
    }
}
