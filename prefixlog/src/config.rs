// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Declarative logger configuration.
//!
//! ```json
//! {
//!     "level": "info",
//!     "name": "app",
//!     "prefix": {
//!         "template": "{{time}} {{level}} {{app}}: ",
//!         "tokens": { "app": "demo" }
//!     }
//! }
//! ```
//!
//! Tokens given here are literals. Computed resolvers can only be set in code.

use crate::error::Error;
use crate::{level, LoggerOptions, PrefixOptions};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default = "default_level")]
    pub level: String,
    pub name: String,
    #[serde(default)]
    pub prefix: PrefixConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrefixConfig {
    pub template: Option<String>,
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,
}

fn default_level() -> String {
    "warn".to_owned()
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl TryFrom<LoggerConfig> for LoggerOptions {
    type Error = Error;

    fn try_from(config: LoggerConfig) -> Result<Self, Self::Error> {
        let LoggerConfig {
            level,
            name,
            prefix,
        } = config;

        let mut options = PrefixOptions::new();
        if let Some(template) = prefix.template {
            options = options.template(template);
        }
        for (token, value) in prefix.tokens {
            options = options.token(token, value);
        }

        Ok(LoggerOptions::new(name)
            .level(level::parse_filter(&level)?)
            .prefix(options))
    }
}

#[cfg(test)]
mod test {
    use super::LoggerConfig;
    use crate::error::Error;
    use crate::{Logger, LoggerOptions};
    use log::LevelFilter;

    #[test]
    fn full() {
        let config = LoggerConfig::from_json(
            r#"{
                "level": "silent",
                "name": "app",
                "prefix": {
                    "template": "{{app}}/{{name}} {{level}} ",
                    "tokens": { "app": "demo" }
                }
            }"#,
        )
        .unwrap();
        let options = LoggerOptions::try_from(config).unwrap();
        assert_eq!(options.level, LevelFilter::Off);

        let logger = Logger::new(options);
        assert_eq!(logger.factory().interpolate("warn"), "demo/app [warn] ");
    }

    #[test]
    fn defaults() {
        let config = LoggerConfig::from_json(r#"{ "name": "app" }"#).unwrap();
        assert_eq!(config.level, "warn");
        let logger = Logger::new(config.try_into().unwrap());
        assert_eq!(logger.level(), LevelFilter::Warn);
        assert_eq!(logger.factory().template(), crate::prefix::DEFAULT_TEMPLATE);
    }

    #[test]
    fn literal_overrides_builtin_token() {
        let config =
            LoggerConfig::from_json(r#"{ "name": "app", "prefix": { "tokens": { "time": "T" } } }"#)
                .unwrap();
        let logger = Logger::new(config.try_into().unwrap());
        assert_eq!(logger.factory().interpolate("info"), "T [info] ");
    }

    #[test]
    fn invalid() {
        assert!(matches!(
            LoggerConfig::from_json(r#"{ "level": "info" }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            LoggerConfig::from_json(r#"{ "name": "app", "colour": true }"#),
            Err(Error::Config(_))
        ));

        let config = LoggerConfig::from_json(r#"{ "name": "app", "level": "loud" }"#).unwrap();
        assert!(matches!(
            LoggerOptions::try_from(config),
            Err(Error::InvalidLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            LoggerConfig::from_file("/nonexistent/prefixlog.json"),
            Err(Error::Io(_))
        ));
    }
}
