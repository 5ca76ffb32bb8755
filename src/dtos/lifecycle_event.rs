use std::collections::HashMap;

use model::lifecycle::LifecycleEvent;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::result::error::DrainError;

const AUTO_SCALING_GROUP_NAME: &str = "AutoScalingGroupName";
const EC2_INSTANCE_ID: &str = "EC2InstanceId";
const LIFECYCLE_TRANSITION: &str = "LifecycleTransition";
const LIFECYCLE_ACTION_TOKEN: &str = "LifecycleActionToken";
const LIFECYCLE_HOOK_NAME: &str = "LifecycleHookName";
const NOTIFICATION_METADATA: &str = "NotificationMetadata";

/// Auto scaling lifecycle action as delivered by EventBridge.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AutoScalingLifecycleEvent {
    pub version: Option<String>,

    pub id: Option<String>,

    #[serde(rename = "detail-type")]
    pub detail_type: Option<String>,

    pub source: Option<String>,

    pub account: Option<String>,

    pub time: Option<String>,

    pub region: Option<String>,

    #[serde(default)]
    pub resources: Vec<String>,

    #[serde(default)]
    pub detail: HashMap<String, Value>,
}

impl AutoScalingLifecycleEvent {
    fn detail_string(&self, key: &str) -> Option<String> {
        self.detail
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

/// Values that are not strings are read as absent. The group name and instance
/// id are required; a missing transition decodes as empty and is rejected later
/// as an unexpected transition.
impl TryFrom<AutoScalingLifecycleEvent> for LifecycleEvent {
    type Error = DrainError;

    fn try_from(event: AutoScalingLifecycleEvent) -> Result<Self, Self::Error> {
        let lifecycle_event = LifecycleEvent {
            auto_scaling_group_name: event
                .detail_string(AUTO_SCALING_GROUP_NAME)
                .unwrap_or_default(),
            instance_id: event.detail_string(EC2_INSTANCE_ID).unwrap_or_default(),
            lifecycle_transition: event
                .detail_string(LIFECYCLE_TRANSITION)
                .unwrap_or_default(),
            lifecycle_action_token: event
                .detail_string(LIFECYCLE_ACTION_TOKEN)
                .filter(|token| !token.is_empty()),
            lifecycle_hook_name: event.detail_string(LIFECYCLE_HOOK_NAME),
            notification_metadata: event.detail_string(NOTIFICATION_METADATA),
        };

        lifecycle_event.validate()?;

        Ok(lifecycle_event)
    }
}

#[cfg(test)]
mod tests {
    use model::lifecycle::{LifecycleEvent, TERMINATING_TRANSITION};
    use rstest::rstest;
    use serde_json::{json, Value};

    use super::AutoScalingLifecycleEvent;
    use crate::result::error::DrainError;

    fn decode(detail: Value) -> Result<LifecycleEvent, DrainError> {
        let event: AutoScalingLifecycleEvent = serde_json::from_value(json!({
            "version": "0",
            "id": "12345678-1234-1234-1234-123456789012",
            "detail-type": "EC2 Instance-terminate Lifecycle Action",
            "source": "aws.autoscaling",
            "account": "123456789012",
            "time": "2024-01-01T00:00:00Z",
            "region": "us-east-1",
            "resources": [
                "arn:aws:autoscaling:us-east-1:123456789012:autoScalingGroup:uuid:autoScalingGroupName/asg-1"
            ],
            "detail": detail
        }))
        .unwrap();

        LifecycleEvent::try_from(event)
    }

    #[test]
    fn decodes_event_from_lifecycle_hook() {
        let event = decode(json!({
            "LifecycleActionToken": "tok-9",
            "AutoScalingGroupName": "asg-1",
            "LifecycleHookName": "hook-1",
            "EC2InstanceId": "i-123",
            "LifecycleTransition": TERMINATING_TRANSITION,
            "NotificationMetadata": "drain"
        }))
        .unwrap();

        assert_eq!(
            event,
            LifecycleEvent {
                auto_scaling_group_name: "asg-1".to_owned(),
                instance_id: "i-123".to_owned(),
                lifecycle_transition: TERMINATING_TRANSITION.to_owned(),
                lifecycle_action_token: Some("tok-9".to_owned()),
                lifecycle_hook_name: Some("hook-1".to_owned()),
                notification_metadata: Some("drain".to_owned()),
            }
        );
    }

    #[test]
    fn decodes_event_without_token() {
        let event = decode(json!({
            "AutoScalingGroupName": "asg-1",
            "EC2InstanceId": "i-123",
            "LifecycleTransition": TERMINATING_TRANSITION
        }))
        .unwrap();

        assert_eq!(event, LifecycleEvent::terminating("asg-1", "i-123"));
    }

    #[test]
    fn missing_transition_decodes_as_empty() {
        let event = decode(json!({
            "AutoScalingGroupName": "asg-1",
            "EC2InstanceId": "i-123"
        }))
        .unwrap();

        assert_eq!(event.lifecycle_transition, "");
        assert!(!event.is_terminating());
    }

    #[rstest]
    #[case::token_is_number(json!(42))]
    #[case::token_is_null(Value::Null)]
    #[case::token_is_empty(json!(""))]
    fn unusable_token_is_treated_as_absent(#[case] token: Value) {
        let event = decode(json!({
            "AutoScalingGroupName": "asg-1",
            "EC2InstanceId": "i-123",
            "LifecycleTransition": TERMINATING_TRANSITION,
            "LifecycleActionToken": token
        }))
        .unwrap();

        assert_eq!(event.lifecycle_action_token, None);
    }

    #[rstest]
    #[case::missing_group(json!({ "EC2InstanceId": "i-123" }), "AutoScalingGroupName is required")]
    #[case::empty_group(json!({ "AutoScalingGroupName": "", "EC2InstanceId": "i-123" }), "AutoScalingGroupName is required")]
    #[case::missing_instance(json!({ "AutoScalingGroupName": "asg-1" }), "EC2InstanceId is required")]
    #[case::instance_is_number(json!({ "AutoScalingGroupName": "asg-1", "EC2InstanceId": 7 }), "EC2InstanceId is required")]
    fn missing_required_fields_are_rejected(#[case] detail: Value, #[case] message: &str) {
        let error = decode(detail).unwrap_err();

        assert!(matches!(error, DrainError::InvalidEvent(_)));
        assert!(error.to_string().contains(message));
    }

    #[test]
    fn every_missing_field_is_listed_by_message() {
        let error = decode(json!({ "LifecycleTransition": TERMINATING_TRANSITION })).unwrap_err();

        assert_eq!(
            error.to_string(),
            "invalid lifecycle event: AutoScalingGroupName is required; EC2InstanceId is required"
        );
    }

    #[test]
    fn token_without_hook_name_is_accepted() {
        let event = decode(json!({
            "AutoScalingGroupName": "asg-1",
            "EC2InstanceId": "i-123",
            "LifecycleTransition": TERMINATING_TRANSITION,
            "LifecycleActionToken": "tok-9"
        }))
        .unwrap();

        assert_eq!(event.lifecycle_action_token.as_deref(), Some("tok-9"));
        assert_eq!(event.lifecycle_hook_name, None);
    }

    #[test]
    fn envelope_without_detail_is_rejected() {
        let event: AutoScalingLifecycleEvent = serde_json::from_value(json!({})).unwrap();

        assert!(LifecycleEvent::try_from(event).is_err());
    }
}
