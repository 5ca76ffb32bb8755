use std::fmt::{Display, Formatter};

use validator::Validate;

/// Transition emitted by a lifecycle hook placed on instance termination.
pub const TERMINATING_TRANSITION: &str = "autoscaling:EC2_INSTANCE_TERMINATING";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleActionResult {
    Continue,
    Abandon,
}

impl LifecycleActionResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "CONTINUE",
            Self::Abandon => "ABANDON",
        }
    }
}

impl Display for LifecycleActionResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle notification after decoding, one per hook invocation.
///
/// Events built by hand (from the command line) carry no action token, so the
/// lifecycle action is never completed for them.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct LifecycleEvent {
    #[validate(length(min = 1, message = "AutoScalingGroupName is required"))]
    pub auto_scaling_group_name: String,

    #[validate(length(min = 1, message = "EC2InstanceId is required"))]
    pub instance_id: String,

    pub lifecycle_transition: String,

    pub lifecycle_action_token: Option<String>,

    pub lifecycle_hook_name: Option<String>,

    pub notification_metadata: Option<String>,
}

impl LifecycleEvent {
    /// Event for an instance being terminated, without a pending hook action.
    pub fn terminating(
        auto_scaling_group_name: impl Into<String>,
        instance_id: impl Into<String>,
    ) -> Self {
        Self {
            auto_scaling_group_name: auto_scaling_group_name.into(),
            instance_id: instance_id.into(),
            lifecycle_transition: TERMINATING_TRANSITION.to_owned(),
            lifecycle_action_token: None,
            lifecycle_hook_name: None,
            notification_metadata: None,
        }
    }

    pub fn is_terminating(&self) -> bool {
        self.lifecycle_transition == TERMINATING_TRANSITION
    }

    /// Completion request for the pending hook action, if the event carries a token.
    /// The hook name is passed as received, empty when the event has none.
    pub fn completion(&self, result: LifecycleActionResult) -> Option<LifecycleActionCompletion> {
        let lifecycle_action_token = self.lifecycle_action_token.clone()?;

        Some(LifecycleActionCompletion {
            auto_scaling_group_name: self.auto_scaling_group_name.clone(),
            instance_id: self.instance_id.clone(),
            lifecycle_hook_name: self.lifecycle_hook_name.clone().unwrap_or_default(),
            lifecycle_action_token,
            result,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleActionCompletion {
    pub auto_scaling_group_name: String,
    pub instance_id: String,
    pub lifecycle_hook_name: String,
    pub lifecycle_action_token: String,
    pub result: LifecycleActionResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hooked_event() -> LifecycleEvent {
        LifecycleEvent {
            lifecycle_action_token: Some("tok-9".to_owned()),
            lifecycle_hook_name: Some("hook-1".to_owned()),
            ..LifecycleEvent::terminating("asg-1", "i-123")
        }
    }

    #[test]
    fn terminating_event_is_valid_and_has_no_completion() {
        let event = LifecycleEvent::terminating("asg-1", "i-123");

        assert!(event.validate().is_ok());
        assert!(event.is_terminating());
        assert_eq!(event.completion(LifecycleActionResult::Continue), None);
    }

    #[test]
    fn launching_transition_is_not_terminating() {
        let event = LifecycleEvent {
            lifecycle_transition: "autoscaling:EC2_INSTANCE_LAUNCHING".to_owned(),
            ..LifecycleEvent::terminating("asg-1", "i-123")
        };

        assert!(!event.is_terminating());
    }

    #[test]
    fn completion_copies_event_values() {
        let completion = hooked_event()
            .completion(LifecycleActionResult::Continue)
            .unwrap();

        assert_eq!(
            completion,
            LifecycleActionCompletion {
                auto_scaling_group_name: "asg-1".to_owned(),
                instance_id: "i-123".to_owned(),
                lifecycle_hook_name: "hook-1".to_owned(),
                lifecycle_action_token: "tok-9".to_owned(),
                result: LifecycleActionResult::Continue,
            }
        );
    }

    #[test]
    fn empty_required_fields_fail_validation() {
        let errors = LifecycleEvent::terminating("", "").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("auto_scaling_group_name"));
        assert!(fields.contains_key("instance_id"));
    }

    #[test]
    fn token_without_hook_name_is_valid_and_completes_with_empty_hook() {
        let event = LifecycleEvent {
            lifecycle_hook_name: None,
            ..hooked_event()
        };

        assert!(event.validate().is_ok());

        let completion = event.completion(LifecycleActionResult::Continue).unwrap();
        assert_eq!(completion.lifecycle_hook_name, "");
        assert_eq!(completion.lifecycle_action_token, "tok-9");
    }

    #[test]
    fn action_result_uses_aws_names() {
        assert_eq!(LifecycleActionResult::Continue.as_str(), "CONTINUE");
        assert_eq!(LifecycleActionResult::Abandon.to_string(), "ABANDON");
    }
}
