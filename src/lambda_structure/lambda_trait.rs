use async_trait::async_trait;
use common::config::ConfigLoader;
use lambda_runtime::{Error, LambdaEvent};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::LoggingConfig;
use crate::logging::init_lambda_tracing;

#[async_trait]
pub trait Lambda {
    type PersistedMemory: Sync + Send;
    type InputBody: DeserializeOwned + Send + Sync + std::fmt::Debug;
    type Output: Serialize + Send + Sync;
    type Error: Into<Error> + std::error::Error + Sync + Send + 'static;

    /// Returns the clients and state kept alive between invocations of a warm lambda.
    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error>;

    /// Business logic of the lambda, called once per event.
    async fn run(
        payload: Self::InputBody,
        connections: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error>;

    /// Sets up logging, bootstraps the persisted memory and hands control to the
    /// lambda runtime. Call this from the binary when running inside Lambda.
    async fn main() -> Result<(), Error> {
        let logging_config = ConfigLoader::load_default::<LoggingConfig>()?;
        let _guard = init_lambda_tracing(logging_config.log_level)?;

        // Get a reference to avoid moving the original connections into the below closure.
        let persisted = &Self::bootstrap().await.map_err(|e| {
            tracing::error!(error = %e, "Bootstrap failed");
            e
        })?;

        let service = move |event: LambdaEvent<Self::InputBody>| async move {
            Self::service(event, persisted).await
        };

        lambda_runtime::run(lambda_runtime::service_fn(service)).await
    }

    /// Called for every event. Failures are logged here and returned to the
    /// runtime unchanged, which reports them to the invoker.
    async fn service(
        event: LambdaEvent<Self::InputBody>,
        connections: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        let LambdaEvent { payload, context } = event;

        tracing::info!(payload = ?payload, request_id = %context.request_id, "Execution started");

        Self::run(payload, connections).await.map_err(|e| {
            tracing::error!(error = %e, request_id = %context.request_id, "Execution failed");
            e
        })
    }
}
