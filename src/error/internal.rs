use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a stored Discord snowflake from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// The global tracing subscriber could not be installed
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),
}
