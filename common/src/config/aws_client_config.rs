use rusoto_core::region::{ParseRegionError, Region};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct AwsClientConfig {
    /// Current AWS region.
    aws_region: String,

    /// Only used for development. LocalStack endpoint
    #[serde(default)]
    pub localstack_test_mode_endpoint: Option<String>,
}

impl AwsClientConfig {
    pub fn new(aws_region: impl Into<String>) -> Self {
        Self {
            aws_region: aws_region.into(),
            localstack_test_mode_endpoint: None,
        }
    }

    pub fn region(&self) -> Result<Region, ParseRegionError> {
        if let Some(endpoint) = self.localstack_test_mode_endpoint.clone() {
            Ok(Region::Custom {
                name: self.aws_region.clone(),
                endpoint,
            })
        } else {
            Region::from_str(&self.aws_region)
        }
    }
}
