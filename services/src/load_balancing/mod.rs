use crate::impl_unknown_error_trait;
use async_trait::async_trait;

#[cfg(feature = "test_mocks")]
use mockall::mock;

pub mod classic_load_balancer_service_impl;
pub mod input_builder;
pub mod target_group_service_impl;

#[derive(Debug, thiserror::Error)]
pub enum LoadBalancingServiceError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
}

impl_unknown_error_trait!(LoadBalancingServiceError);

/// Membership of instances in classic load balancers.
#[async_trait]
pub trait ClassicLoadBalancerService
where
    Self: Sync + Send,
{
    async fn deregister_instance(
        &self,
        load_balancer_name: String,
        instance_id: String,
    ) -> Result<(), LoadBalancingServiceError>;
}

/// Membership of instances in target groups of application and network load balancers.
#[async_trait]
pub trait TargetGroupService
where
    Self: Sync + Send,
{
    async fn deregister_target(
        &self,
        target_group_arn: String,
        instance_id: String,
    ) -> Result<(), LoadBalancingServiceError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub ClassicLoadBalancerService {}
    #[async_trait]
    impl ClassicLoadBalancerService for ClassicLoadBalancerService {
        async fn deregister_instance(
            &self,
            load_balancer_name: String,
            instance_id: String,
        ) -> Result<(), LoadBalancingServiceError>;
    }
}

#[cfg(feature = "test_mocks")]
mock! {
    pub TargetGroupService {}
    #[async_trait]
    impl TargetGroupService for TargetGroupService {
        async fn deregister_target(
            &self,
            target_group_arn: String,
            instance_id: String,
        ) -> Result<(), LoadBalancingServiceError>;
    }
}
