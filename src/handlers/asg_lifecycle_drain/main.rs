use std::process::ExitCode;

use asg_lifecycle_drain::cli::{self, CliArgs};
use asg_lifecycle_drain::drain::{drain_instance, DrainContext, DrainReport};
use asg_lifecycle_drain::dtos::lifecycle_event::AutoScalingLifecycleEvent;
use asg_lifecycle_drain::invocation_mode::InvocationMode;
use asg_lifecycle_drain::lambda_structure::lambda_trait::Lambda;
use asg_lifecycle_drain::result::error::{DrainError, Result};
use async_trait::async_trait;
use clap::Parser;
use lambda_runtime::Error;
use model::lifecycle::LifecycleEvent;

pub struct AsgLifecycleDrain;

#[async_trait]
impl Lambda for AsgLifecycleDrain {
    type PersistedMemory = DrainContext;
    type InputBody = AutoScalingLifecycleEvent;
    type Output = DrainReport;
    type Error = DrainError;

    async fn bootstrap() -> Result<Self::PersistedMemory> {
        DrainContext::bootstrap()
    }

    async fn run(request: Self::InputBody, context: &Self::PersistedMemory) -> Result<Self::Output> {
        let event = LifecycleEvent::try_from(request)?;

        drain_instance(&event, context).await
    }
}

#[tokio::main]
async fn main() -> std::result::Result<ExitCode, Error> {
    match InvocationMode::detect() {
        InvocationMode::Lambda => {
            AsgLifecycleDrain::main().await?;
            Ok(ExitCode::SUCCESS)
        }
        InvocationMode::CommandLine => Ok(cli::run(CliArgs::parse()).await),
    }
}
