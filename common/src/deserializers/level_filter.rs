use serde::de::Visitor;
use serde::{de, Deserializer};
use std::fmt;
use tracing::level_filters::LevelFilter;

struct LevelFilterVisitor;

impl<'de> Visitor<'de> for LevelFilterVisitor {
    type Value = LevelFilter;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of off, error, warn, info, debug or trace")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        s.parse::<LevelFilter>()
            .map_err(|_| de::Error::custom(format!("Invalid log level: {s}")))
    }
}

pub fn level_filter<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(LevelFilterVisitor)
}

#[cfg(test)]
mod tests {
    use super::level_filter;
    use serde::Deserialize;
    use serde_json::json;
    use tracing::level_filters::LevelFilter;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "level_filter")]
        level: LevelFilter,
    }

    #[test]
    fn parses_level_names_case_insensitively() {
        let probe: Probe = serde_json::from_value(json!({ "level": "DEBUG" })).unwrap();
        assert_eq!(probe.level, LevelFilter::DEBUG);
    }

    #[test]
    fn rejects_unknown_level() {
        let error = serde_json::from_value::<Probe>(json!({ "level": "loud" }))
            .err()
            .unwrap();
        assert!(error.to_string().contains("Invalid log level: loud"));
    }
}
