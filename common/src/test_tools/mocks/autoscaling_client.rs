use rusoto_autoscaling::AutoscalingClient;
use rusoto_core::{DispatchSignedRequest, Region};
use rusoto_mock::MockCredentialsProvider;

pub fn mock_autoscaling_client<D>(dispatcher: D) -> AutoscalingClient
where
    D: DispatchSignedRequest + Send + Sync + 'static,
{
    AutoscalingClient::new_with(dispatcher, MockCredentialsProvider, Region::UsEast1)
}
