//! DrainError is the error every step of the drain flow can fail with.
//! Service errors are kept as sources so the failing AWS operation stays visible.

use services::auto_scaling::AutoScalingServiceError;
use services::load_balancing::LoadBalancingServiceError;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, DrainError>;

#[derive(Debug, thiserror::Error)]
pub enum DrainError {
    #[error("invalid lifecycle event: {0}")]
    InvalidEvent(String),

    #[error("unexpected transition: {0}")]
    UnexpectedTransition(String),

    #[error("not found AutoScalingGroup name: {0}")]
    GroupNotFound(String),

    #[error("{0}")]
    Lookup(#[source] AutoScalingServiceError),

    #[error("deregistering {instance_id} from {target}: {source}")]
    Deregistration {
        instance_id: String,
        target: String,
        #[source]
        source: LoadBalancingServiceError,
    },

    #[error("{0}")]
    Completion(#[source] AutoScalingServiceError),

    #[error("{0:#}")]
    Bootstrap(#[source] anyhow::Error),
}

/// Keeps only the validation messages, sorted so the text is stable.
impl From<ValidationErrors> for DrainError {
    fn from(e: ValidationErrors) -> Self {
        let mut messages: Vec<String> = e
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
            })
            .collect();
        messages.sort();

        DrainError::InvalidEvent(messages.join("; "))
    }
}
