//! Error types for the catalog core.
//!
//! `AppError` is the error every service operation returns. Its variants keep the
//! three failure kinds callers must tell apart: a lookup of a song that does not
//! exist, a bookmark pointing at a song that does not exist, and a failure of the
//! underlying storage. The command layer maps each kind to its own user message.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Stored data could not be converted into a domain model.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// A guild preference blob could not be read as a song filter.
    #[error("Invalid guild preference: {0}")]
    PreferenceErr(#[from] serde_json::Error),

    /// Storage failure reported by SeaORM.
    ///
    /// Covers connection loss, constraint failures and query errors. A failed read
    /// may be retried by the caller; nothing inside the core retries on its behalf.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// No catalog entry exists for the link.
    ///
    /// Raised by lookups regardless of whether the link is excluded, since exclusion
    /// affects availability and not existence.
    ///
    /// # Fields
    /// - The vlink that was looked up
    #[error("No song exists with link '{0}'")]
    SongNotFound(String),

    /// A bookmark referenced a link that is not in the catalog.
    ///
    /// # Fields
    /// - The vlink the bookmark pointed at
    #[error("Cannot bookmark '{0}': no song exists with that link")]
    InvalidReference(String),
}

impl AppError {
    /// Whether the error came from the storage layer rather than from bad input.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::DbErr(_))
    }
}
