use anyhow::Context;
use rusoto_core::credential::DefaultCredentialsProvider;
use rusoto_core::request::HttpClient;
use rusoto_core::Region;

use crate::config::aws_client_config::AwsClientConfig;

pub mod autoscaling;
pub mod elb;
pub mod elbv2;

/// Dispatcher, credential chain and region shared by every client this
/// project builds. Credentials resolve through the default rusoto chain:
/// environment, profile file, container and instance metadata.
pub(crate) fn client_parts(
    config: &AwsClientConfig,
) -> anyhow::Result<(HttpClient, DefaultCredentialsProvider, Region)> {
    let region = config.region().context("Unable to parse AWS region")?;
    let request_dispatcher = HttpClient::new().context("Unable to build Rusoto HTTP Client")?;
    let credentials_provider =
        DefaultCredentialsProvider::new().context("Unable to build AWS credentials provider")?;

    Ok((request_dispatcher, credentials_provider, region))
}
