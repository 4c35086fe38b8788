//! AWS SDK configuration and EC2 client construction.
//!
//! Credentials and region come from the SDK default provider chain
//! (environment variables, shared config/credential files, instance role).
//! A credential problem is not visible here; it surfaces on the first
//! request and aborts the run there.

use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_ec2::config::Region;
use aws_sdk_ec2::Client;

/// Region used when the ambient chain resolves none.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Build an EC2 client from ambient configuration.
pub async fn load_client() -> Client {
    let region_provider =
        RegionProviderChain::default_provider().or_else(Region::new(DEFAULT_REGION));
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    log::info!(
        "Loaded AWS config, region={region}",
        region = config.region().map_or(DEFAULT_REGION, |r| r.as_ref())
    );

    Client::new(&config)
}
