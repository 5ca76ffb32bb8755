use common::deserializers::level_filter::level_filter;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Maximum level emitted by the subscriber, `LOG_LEVEL` in the environment.
    #[serde(deserialize_with = "level_filter", default = "default_log_level")]
    pub log_level: LevelFilter,
}

fn default_log_level() -> LevelFilter {
    LevelFilter::INFO
}
