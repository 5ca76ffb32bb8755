use rusoto_elb::{DeregisterEndPointsInput, Instance};
use rusoto_elbv2::{DeregisterTargetsInput, TargetDescription};

pub fn deregister_instance_input(
    load_balancer_name: String,
    instance_id: String,
) -> DeregisterEndPointsInput {
    DeregisterEndPointsInput {
        instances: vec![Instance {
            instance_id: Some(instance_id),
        }],
        load_balancer_name,
    }
}

/// Targets are registered by instance id, so no port or availability zone is sent.
pub fn deregister_target_input(
    target_group_arn: String,
    instance_id: String,
) -> DeregisterTargetsInput {
    DeregisterTargetsInput {
        target_group_arn,
        targets: vec![TargetDescription {
            id: instance_id,
            ..Default::default()
        }],
    }
}
