use rusoto_elb::ElbClient;
use rusoto_core::{DispatchSignedRequest, Region};
use rusoto_mock::MockCredentialsProvider;

pub fn mock_elb_client<D>(dispatcher: D) -> ElbClient
where
    D: DispatchSignedRequest + Send + Sync + 'static,
{
    ElbClient::new_with(dispatcher, MockCredentialsProvider, Region::UsEast1)
}
