use crate::impl_unknown_error_trait;
use async_trait::async_trait;
use model::lifecycle::LifecycleActionCompletion;
use model::scaling_group::ScalingGroup;

#[cfg(feature = "test_mocks")]
use mockall::mock;

pub mod auto_scaling_service_impl;
pub mod input_builder;

#[derive(Debug, thiserror::Error)]
pub enum AutoScalingServiceError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
}

impl_unknown_error_trait!(AutoScalingServiceError);

#[async_trait]
pub trait AutoScalingService
where
    Self: Sync + Send,
{
    /// Describes the groups matching `group_name`. An unknown name yields an empty list.
    async fn describe_scaling_groups(
        &self,
        group_name: String,
    ) -> Result<Vec<ScalingGroup>, AutoScalingServiceError>;

    async fn complete_lifecycle_action(
        &self,
        completion: LifecycleActionCompletion,
    ) -> Result<(), AutoScalingServiceError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub AutoScalingService {}
    #[async_trait]
    impl AutoScalingService for AutoScalingService {
        async fn describe_scaling_groups(
            &self,
            group_name: String,
        ) -> Result<Vec<ScalingGroup>, AutoScalingServiceError>;

        async fn complete_lifecycle_action(
            &self,
            completion: LifecycleActionCompletion,
        ) -> Result<(), AutoScalingServiceError>;
    }
}
