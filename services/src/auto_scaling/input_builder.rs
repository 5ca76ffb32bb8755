use model::lifecycle::LifecycleActionCompletion;
use model::scaling_group::ScalingGroup;
use rusoto_autoscaling::{AutoScalingGroup, AutoScalingGroupNamesType, CompleteLifecycleActionType};

pub fn describe_scaling_group_input(group_name: String) -> AutoScalingGroupNamesType {
    AutoScalingGroupNamesType {
        auto_scaling_group_names: Some(vec![group_name]),
        ..Default::default()
    }
}

pub fn complete_lifecycle_action_input(
    completion: LifecycleActionCompletion,
) -> CompleteLifecycleActionType {
    CompleteLifecycleActionType {
        auto_scaling_group_name: completion.auto_scaling_group_name,
        instance_id: Some(completion.instance_id),
        lifecycle_action_result: completion.result.as_str().to_owned(),
        lifecycle_action_token: Some(completion.lifecycle_action_token),
        lifecycle_hook_name: completion.lifecycle_hook_name,
    }
}

pub fn scaling_group_from(group: AutoScalingGroup) -> ScalingGroup {
    ScalingGroup::new(
        group.auto_scaling_group_name,
        group.load_balancer_names.unwrap_or_default(),
        group.target_group_ar_ns.unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::lifecycle::LifecycleActionResult;

    #[test]
    fn describe_input_filters_by_exact_name() {
        let input = describe_scaling_group_input("asg-1".to_owned());

        assert_eq!(input.auto_scaling_group_names, Some(vec!["asg-1".to_owned()]));
        assert_eq!(input.max_records, None);
        assert_eq!(input.next_token, None);
    }

    #[test]
    fn complete_input_carries_every_completion_value() {
        let input = complete_lifecycle_action_input(LifecycleActionCompletion {
            auto_scaling_group_name: "asg-1".to_owned(),
            instance_id: "i-123".to_owned(),
            lifecycle_hook_name: "hook-1".to_owned(),
            lifecycle_action_token: "tok-9".to_owned(),
            result: LifecycleActionResult::Continue,
        });

        assert_eq!(input.auto_scaling_group_name, "asg-1");
        assert_eq!(input.instance_id.as_deref(), Some("i-123"));
        assert_eq!(input.lifecycle_hook_name, "hook-1");
        assert_eq!(input.lifecycle_action_token.as_deref(), Some("tok-9"));
        assert_eq!(input.lifecycle_action_result, "CONTINUE");
    }

    #[test]
    fn group_without_attachments_maps_to_empty_lists() {
        let group = scaling_group_from(AutoScalingGroup {
            auto_scaling_group_name: "asg-1".to_owned(),
            ..Default::default()
        });

        assert_eq!(group, ScalingGroup::new("asg-1", vec![], vec![]));
    }

    #[test]
    fn group_attachments_are_kept_in_order() {
        let group = scaling_group_from(AutoScalingGroup {
            auto_scaling_group_name: "asg-1".to_owned(),
            load_balancer_names: Some(vec!["lb-a".to_owned(), "lb-b".to_owned()]),
            target_group_ar_ns: Some(vec!["tg-arn-1".to_owned()]),
            ..Default::default()
        });

        assert_eq!(group.load_balancer_names, vec!["lb-a", "lb-b"]);
        assert_eq!(group.target_group_arns, vec!["tg-arn-1"]);
    }
}
