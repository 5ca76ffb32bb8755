use crate::errors::UnknownError;
use crate::load_balancing::input_builder::deregister_target_input;
use crate::load_balancing::{LoadBalancingServiceError, TargetGroupService};
use async_trait::async_trait;
use rusoto_elbv2::Elb;

pub struct TargetGroupServiceImpl<E: Elb + Sync + Send> {
    elbv2_client: E,
}

impl<E: Elb + Sync + Send> TargetGroupServiceImpl<E> {
    pub fn new(elbv2_client: E) -> Self {
        Self { elbv2_client }
    }
}

#[async_trait]
impl<E: Elb + Sync + Send> TargetGroupService for TargetGroupServiceImpl<E> {
    async fn deregister_target(
        &self,
        target_group_arn: String,
        instance_id: String,
    ) -> Result<(), LoadBalancingServiceError> {
        self.elbv2_client
            .deregister_targets(deregister_target_input(target_group_arn, instance_id))
            .await
            .map_err(|e| LoadBalancingServiceError::unknown(e, Some("failed to DeregisterTargets")))?;

        Ok(())
    }
}
