use rusoto_elbv2::ElbClient;
use rusoto_core::{DispatchSignedRequest, Region};
use rusoto_mock::MockCredentialsProvider;

pub fn mock_elbv2_client<D>(dispatcher: D) -> ElbClient
where
    D: DispatchSignedRequest + Send + Sync + 'static,
{
    ElbClient::new_with(dispatcher, MockCredentialsProvider, Region::UsEast1)
}
