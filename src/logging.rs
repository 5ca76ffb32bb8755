use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

fn app_name() -> String {
    concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_owned()
}

/// Bunyan JSON records on stdout, picked up by CloudWatch.
///
/// Records are written from a background worker; keep the returned guard alive
/// for as long as the runtime runs or buffered records are lost.
pub fn init_lambda_tracing(level: LevelFilter) -> Result<WorkerGuard, lambda_runtime::Error> {
    LogTracer::init()?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name(), non_blocking_writer);

    tracing_subscriber::registry()
        .with(level)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    Ok(guard)
}

/// Human readable records on stderr, so stdout stays free for the report.
pub fn init_cli_tracing(level: LevelFilter) -> anyhow::Result<()> {
    LogTracer::init()?;

    tracing_subscriber::registry()
        .with(level)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
