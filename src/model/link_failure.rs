//! Link failure domain models.
//!
//! A catalog link can fail in two independent ways: the ingestion job has not yet
//! produced a playable asset for it, or the asset is confirmed permanently
//! unplayable. Presence in either class excludes the link from availability.

use chrono::{DateTime, Utc};

/// Link confirmed permanently unplayable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadLink {
    /// The dead video link.
    pub vlink: String,
    /// Free-text diagnosis recorded by the ingestion job, last write wins.
    pub reason: Option<String>,
    /// When the link was first declared dead.
    pub created_at: DateTime<Utc>,
}

impl DeadLink {
    /// Converts an entity model to a dead link domain model at the repository boundary.
    pub fn from_entity(entity: entity::dead_link::Model) -> Self {
        Self {
            vlink: entity.vlink,
            reason: entity.reason,
            created_at: entity.created_at,
        }
    }
}

/// A single failure record held for a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkFailure {
    /// Ingestion has not produced a playable asset yet.
    NotDownloaded { vlink: String },
    /// The asset is permanently unplayable.
    Dead(DeadLink),
}

impl LinkFailure {
    /// The link this failure is recorded against.
    pub fn vlink(&self) -> &str {
        match self {
            Self::NotDownloaded { vlink } => vlink,
            Self::Dead(dead) => &dead.vlink,
        }
    }
}

/// Row counts of both failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkFailureCounts {
    pub not_downloaded: u64,
    pub dead: u64,
}
