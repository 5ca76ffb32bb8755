pub const AWS_EXECUTION_ENV: &str = "AWS_EXECUTION_ENV";
pub const AWS_LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

const LAMBDA_EXECUTION_ENV_PREFIX: &str = "AWS_Lambda";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    Lambda,
    CommandLine,
}

impl InvocationMode {
    /// Inspects the variables the Lambda runtime sets for every function.
    pub fn detect() -> Self {
        let execution_env = std::env::var(AWS_EXECUTION_ENV).ok();
        let runtime_api = std::env::var(AWS_LAMBDA_RUNTIME_API).ok();

        Self::from_env_values(execution_env.as_deref(), runtime_api.as_deref())
    }

    pub fn from_env_values(execution_env: Option<&str>, runtime_api: Option<&str>) -> Self {
        let lambda_execution_env = execution_env
            .map(|value| value.starts_with(LAMBDA_EXECUTION_ENV_PREFIX))
            .unwrap_or(false);
        let runtime_api_set = runtime_api.map(|value| !value.is_empty()).unwrap_or(false);

        if lambda_execution_env || runtime_api_set {
            Self::Lambda
        } else {
            Self::CommandLine
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InvocationMode;
    use rstest::rstest;

    #[rstest]
    #[case::provided_runtime(Some("AWS_Lambda_rust"), None, InvocationMode::Lambda)]
    #[case::runtime_api_only(None, Some("127.0.0.1:9001"), InvocationMode::Lambda)]
    #[case::both(Some("AWS_Lambda_provided.al2"), Some("127.0.0.1:9001"), InvocationMode::Lambda)]
    #[case::nothing_set(None, None, InvocationMode::CommandLine)]
    #[case::empty_runtime_api(None, Some(""), InvocationMode::CommandLine)]
    #[case::other_execution_env(Some("AWS_ECS_FARGATE"), None, InvocationMode::CommandLine)]
    #[case::prefix_is_case_sensitive(Some("aws_lambda_rust"), None, InvocationMode::CommandLine)]
    fn detects_mode_from_environment(
        #[case] execution_env: Option<&str>,
        #[case] runtime_api: Option<&str>,
        #[case] expected: InvocationMode,
    ) {
        assert_eq!(
            InvocationMode::from_env_values(execution_env, runtime_api),
            expected
        );
    }
}
