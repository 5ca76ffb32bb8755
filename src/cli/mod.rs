use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use common::config::ConfigLoader;
use model::lifecycle::LifecycleEvent;

use crate::config::LoggingConfig;
use crate::drain::{drain_instance, DrainContext};
use crate::logging::init_cli_tracing;

#[derive(Debug, Parser)]
#[command(
    name = "asg_lifecycle_drain",
    about = "Deregisters an instance from the load balancers of its auto scaling group"
)]
pub struct CliArgs {
    /// AutoScalingGroupName
    #[arg(long, default_value = "")]
    pub asg_name: String,

    /// EC2InstanceId
    #[arg(long, default_value = "")]
    pub instance_id: String,
}

impl CliArgs {
    /// Event equivalent to a terminating lifecycle notification, without an
    /// action token. `None` while either option is missing.
    pub fn lifecycle_event(&self) -> Option<LifecycleEvent> {
        if self.asg_name.is_empty() || self.instance_id.is_empty() {
            return None;
        }

        Some(LifecycleEvent::terminating(&self.asg_name, &self.instance_id))
    }
}

/// Help text printed when an option is missing.
pub fn usage() -> String {
    CliArgs::command().render_help().to_string()
}

pub async fn run(args: CliArgs) -> ExitCode {
    let Some(event) = args.lifecycle_event() else {
        eprint!("{}", usage());
        return ExitCode::SUCCESS;
    };

    let log_level = match ConfigLoader::load_default::<LoggingConfig>() {
        Ok(config) => config.log_level,
        Err(e) => {
            eprintln!("Could not load logging configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_cli_tracing(log_level) {
        eprintln!("Could not initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    let result = match DrainContext::bootstrap() {
        Ok(context) => drain_instance(&event, &context).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => {
            tracing::info!(report = ?report, "Drain finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Drain failed");
            ExitCode::FAILURE
        }
    }
}
