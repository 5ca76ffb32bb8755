use crate::aws_clients::client_parts;
use crate::config::aws_client_config::AwsClientConfig;
use rusoto_elbv2::ElbClient;

/// Client for application and network load balancers (target groups).
pub fn get_elbv2_client(config: &AwsClientConfig) -> anyhow::Result<ElbClient> {
    let (request_dispatcher, credentials_provider, region) = client_parts(config)?;

    Ok(ElbClient::new_with(
        request_dispatcher,
        credentials_provider,
        region,
    ))
}
