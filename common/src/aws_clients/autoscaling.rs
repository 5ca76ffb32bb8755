use crate::aws_clients::client_parts;
use crate::config::aws_client_config::AwsClientConfig;
use rusoto_autoscaling::AutoscalingClient;

pub fn get_autoscaling_client(config: &AwsClientConfig) -> anyhow::Result<AutoscalingClient> {
    let (request_dispatcher, credentials_provider, region) = client_parts(config)?;

    Ok(AutoscalingClient::new_with(
        request_dispatcher,
        credentials_provider,
        region,
    ))
}
