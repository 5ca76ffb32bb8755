use std::sync::Arc;

use anyhow::anyhow;
use common::aws_clients::autoscaling::get_autoscaling_client;
use common::aws_clients::elb::get_elb_client;
use common::aws_clients::elbv2::get_elbv2_client;
use common::config::aws_client_config::AwsClientConfig;
use common::config::ConfigLoader;
use model::lifecycle::{LifecycleActionResult, LifecycleEvent};
use serde::Serialize;
use services::auto_scaling::auto_scaling_service_impl::AutoScalingServiceImpl;
use services::auto_scaling::AutoScalingService;
use services::load_balancing::classic_load_balancer_service_impl::ClassicLoadBalancerServiceImpl;
use services::load_balancing::target_group_service_impl::TargetGroupServiceImpl;
use services::load_balancing::{ClassicLoadBalancerService, TargetGroupService};

use crate::result::error::DrainError;

type AutoScalingServiceObject = Arc<dyn AutoScalingService>;
type ClassicLoadBalancerServiceObject = Arc<dyn ClassicLoadBalancerService>;
type TargetGroupServiceObject = Arc<dyn TargetGroupService>;

/// AWS services a drain talks to. Built once per process and shared by every
/// invocation.
pub struct DrainContext {
    pub auto_scaling: AutoScalingServiceObject,
    pub classic_load_balancers: ClassicLoadBalancerServiceObject,
    pub target_groups: TargetGroupServiceObject,
}

impl DrainContext {
    pub fn from_config(config: &AwsClientConfig) -> anyhow::Result<Self> {
        Ok(Self {
            auto_scaling: Arc::new(AutoScalingServiceImpl::new(get_autoscaling_client(config)?)),
            classic_load_balancers: Arc::new(ClassicLoadBalancerServiceImpl::new(
                get_elb_client(config)?,
            )),
            target_groups: Arc::new(TargetGroupServiceImpl::new(get_elbv2_client(config)?)),
        })
    }

    /// Loads [`AwsClientConfig`] through the [`ConfigLoader`] and builds the clients from it.
    pub fn bootstrap() -> Result<Self, DrainError> {
        let config = ConfigLoader::load_default::<AwsClientConfig>().map_err(|e| {
            DrainError::Bootstrap(anyhow!(e).context("Could not load AWS client configuration"))
        })?;

        Self::from_config(&config).map_err(DrainError::Bootstrap)
    }
}

/// What a successful drain did, in the order the calls were issued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DrainReport {
    pub auto_scaling_group_name: String,
    pub instance_id: String,
    pub deregistered_load_balancers: Vec<String>,
    pub deregistered_target_groups: Vec<String>,
    pub lifecycle_action_completed: bool,
}

/// Takes a terminating instance out of every load balancer and target group of
/// its auto scaling group, then completes the lifecycle action with `CONTINUE`.
///
/// Calls are issued one after another and the first failure stops the drain.
/// Deregistrations that already went through are not rolled back, and the
/// lifecycle action is left pending so the hook's default result applies.
pub async fn drain_instance(
    event: &LifecycleEvent,
    context: &DrainContext,
) -> Result<DrainReport, DrainError> {
    let group_name = &event.auto_scaling_group_name;
    let instance_id = &event.instance_id;

    tracing::info!(
        auto_scaling_group_name = %group_name,
        instance_id = %instance_id,
        lifecycle_transition = %event.lifecycle_transition,
        notification_metadata = ?event.notification_metadata,
        "Starting lifecycle hook for instance {} of {}",
        instance_id,
        group_name
    );

    if !event.is_terminating() {
        return Err(DrainError::UnexpectedTransition(
            event.lifecycle_transition.clone(),
        ));
    }

    let groups = context
        .auto_scaling
        .describe_scaling_groups(group_name.clone())
        .await
        .map_err(DrainError::Lookup)?;

    if groups.is_empty() {
        return Err(DrainError::GroupNotFound(group_name.clone()));
    }

    let mut report = DrainReport {
        auto_scaling_group_name: group_name.clone(),
        instance_id: instance_id.clone(),
        ..Default::default()
    };

    for group in groups {
        if group.has_no_attachments() {
            tracing::info!(
                auto_scaling_group_name = %group.name,
                "No load balancers attached to {}",
                group.name
            );
        }

        for load_balancer_name in group.load_balancer_names {
            tracing::info!(
                instance_id = %instance_id,
                load_balancer_name = %load_balancer_name,
                "Deregistering instance {} from {}",
                instance_id,
                load_balancer_name
            );

            context
                .classic_load_balancers
                .deregister_instance(load_balancer_name.clone(), instance_id.clone())
                .await
                .map_err(|source| DrainError::Deregistration {
                    instance_id: instance_id.clone(),
                    target: load_balancer_name.clone(),
                    source,
                })?;

            report.deregistered_load_balancers.push(load_balancer_name);
        }

        for target_group_arn in group.target_group_arns {
            tracing::info!(
                instance_id = %instance_id,
                target_group_arn = %target_group_arn,
                "Deregistering target {} from {}",
                instance_id,
                target_group_arn
            );

            context
                .target_groups
                .deregister_target(target_group_arn.clone(), instance_id.clone())
                .await
                .map_err(|source| DrainError::Deregistration {
                    instance_id: instance_id.clone(),
                    target: target_group_arn.clone(),
                    source,
                })?;

            report.deregistered_target_groups.push(target_group_arn);
        }
    }

    report.lifecycle_action_completed = complete_lifecycle_action(event, context).await?;

    tracing::info!(
        auto_scaling_group_name = %group_name,
        instance_id = %instance_id,
        lifecycle_action_completed = report.lifecycle_action_completed,
        "Finished draining instance {}",
        instance_id
    );

    Ok(report)
}

/// Events built by hand have no token to hand back, so there is nothing to complete.
async fn complete_lifecycle_action(
    event: &LifecycleEvent,
    context: &DrainContext,
) -> Result<bool, DrainError> {
    let Some(completion) = event.completion(LifecycleActionResult::Continue) else {
        tracing::info!(instance_id = %event.instance_id, "skip complete");
        return Ok(false);
    };

    context
        .auto_scaling
        .complete_lifecycle_action(completion)
        .await
        .map_err(DrainError::Completion)?;

    Ok(true)
}
