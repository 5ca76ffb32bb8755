use crate::auto_scaling::input_builder::{
    complete_lifecycle_action_input, describe_scaling_group_input, scaling_group_from,
};
use crate::auto_scaling::{AutoScalingService, AutoScalingServiceError};
use crate::errors::UnknownError;
use async_trait::async_trait;
use model::lifecycle::LifecycleActionCompletion;
use model::scaling_group::ScalingGroup;
use rusoto_autoscaling::Autoscaling;

pub struct AutoScalingServiceImpl<A: Autoscaling + Sync + Send> {
    autoscaling_client: A,
}

impl<A: Autoscaling + Sync + Send> AutoScalingServiceImpl<A> {
    pub fn new(autoscaling_client: A) -> Self {
        Self { autoscaling_client }
    }
}

#[async_trait]
impl<A: Autoscaling + Sync + Send> AutoScalingService for AutoScalingServiceImpl<A> {
    async fn describe_scaling_groups(
        &self,
        group_name: String,
    ) -> Result<Vec<ScalingGroup>, AutoScalingServiceError> {
        tracing::debug!(
            auto_scaling_group_name = %group_name,
            "Describing auto scaling group {}",
            group_name
        );

        let output = self
            .autoscaling_client
            .describe_auto_scaling_groups(describe_scaling_group_input(group_name))
            .await
            .map_err(|e| {
                AutoScalingServiceError::unknown(e, Some("failed to DescribeAutoScalingGroups"))
            })?;

        Ok(output
            .auto_scaling_groups
            .into_iter()
            .map(scaling_group_from)
            .collect())
    }

    async fn complete_lifecycle_action(
        &self,
        completion: LifecycleActionCompletion,
    ) -> Result<(), AutoScalingServiceError> {
        tracing::debug!(
            auto_scaling_group_name = %completion.auto_scaling_group_name,
            instance_id = %completion.instance_id,
            lifecycle_hook_name = %completion.lifecycle_hook_name,
            result = %completion.result,
            "Completing lifecycle action"
        );

        self.autoscaling_client
            .complete_lifecycle_action(complete_lifecycle_action_input(completion))
            .await
            .map_err(|e| {
                AutoScalingServiceError::unknown(e, Some("failed to CompleteLifecycleAction"))
            })?;

        Ok(())
    }
}
