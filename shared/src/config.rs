use aws_config::{meta::region::RegionProviderChain, BehaviorVersion, SdkConfig};
use std::env;

pub const DEFAULT_TABLE_NAME: &str = "Users";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Settings read from the environment once per cold start.
#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string()),
        }
    }
}

/// AWS config from the standard provider chain, pinned to us-east-1 when no
/// region is configured.
pub async fn load_aws_config() -> SdkConfig {
    let region = RegionProviderChain::default_provider().or_else(DEFAULT_REGION);
    aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await
}
