use crate::aws_clients::client_parts;
use crate::config::aws_client_config::AwsClientConfig;
use rusoto_elb::ElbClient;

/// Client for classic load balancers.
pub fn get_elb_client(config: &AwsClientConfig) -> anyhow::Result<ElbClient> {
    let (request_dispatcher, credentials_provider, region) = client_parts(config)?;

    Ok(ElbClient::new_with(
        request_dispatcher,
        credentials_provider,
        region,
    ))
}
