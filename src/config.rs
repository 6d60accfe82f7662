use dioxus_logger::tracing::Level;

use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let log_level = match std::env::var("LOG_LEVEL") {
            Ok(value) => parse_log_level(&value)?,
            Err(_) => Level::INFO,
        };

        Ok(Self {
            database_url,
            log_level,
        })
    }
}

/// Parses a `LOG_LEVEL` value such as `debug` or `WARN`.
fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    value
        .trim()
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "LOG_LEVEL".to_string(),
            value: value.to_string(),
        })
}
