use crate::errors::UnknownError;
use crate::load_balancing::input_builder::deregister_instance_input;
use crate::load_balancing::{ClassicLoadBalancerService, LoadBalancingServiceError};
use async_trait::async_trait;
use rusoto_elb::Elb;

pub struct ClassicLoadBalancerServiceImpl<E: Elb + Sync + Send> {
    elb_client: E,
}

impl<E: Elb + Sync + Send> ClassicLoadBalancerServiceImpl<E> {
    pub fn new(elb_client: E) -> Self {
        Self { elb_client }
    }
}

#[async_trait]
impl<E: Elb + Sync + Send> ClassicLoadBalancerService for ClassicLoadBalancerServiceImpl<E> {
    async fn deregister_instance(
        &self,
        load_balancer_name: String,
        instance_id: String,
    ) -> Result<(), LoadBalancingServiceError> {
        self.elb_client
            .deregister_instances_from_load_balancer(deregister_instance_input(
                load_balancer_name,
                instance_id,
            ))
            .await
            .map_err(|e| {
                LoadBalancingServiceError::unknown(
                    e,
                    Some("failed to DeregisterInstancesFromLoadBalancer"),
                )
            })?;

        Ok(())
    }
}
