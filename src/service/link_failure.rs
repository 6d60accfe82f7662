use std::collections::HashSet;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::link_failure::LinkFailureRepository,
    error::AppError,
    model::link_failure::{DeadLink, LinkFailure, LinkFailureCounts},
};

/// Tracks links that cannot currently be served.
///
/// A link is excluded from availability while it is present in either failure class.
/// Reads are not serialized against concurrent writes; callers about to start playback
/// should re-check `is_excluded` for the chosen link.
pub struct LinkFailureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LinkFailureService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that ingestion has no playable asset for a link yet. Idempotent.
    pub async fn record_not_downloaded(&self, vlink: &str) -> Result<(), AppError> {
        let repo = LinkFailureRepository::new(self.db);

        repo.insert_not_downloaded(vlink).await?;

        tracing::debug!("Recorded {} as not downloaded", vlink);

        Ok(())
    }

    /// Records a link as permanently dead; a later call replaces the reason.
    pub async fn record_dead(
        &self,
        vlink: &str,
        reason: Option<String>,
    ) -> Result<DeadLink, AppError> {
        let repo = LinkFailureRepository::new(self.db);

        let dead = repo.upsert_dead(vlink, reason).await?;

        tracing::info!(
            "Recorded {} as dead: {}",
            vlink,
            dead.reason.as_deref().unwrap_or("no reason given")
        );

        Ok(dead)
    }

    /// Removes a link from both failure classes. No-op if the link has no record.
    pub async fn clear(&self, vlink: &str) -> Result<(), AppError> {
        let repo = LinkFailureRepository::new(self.db);

        let removed = repo.delete(vlink).await?;

        if removed > 0 {
            tracing::info!("Cleared link failures for {}", vlink);
        }

        Ok(())
    }

    /// Whether the link is present in either failure class.
    pub async fn is_excluded(&self, vlink: &str) -> Result<bool, AppError> {
        let repo = LinkFailureRepository::new(self.db);

        Ok(!repo.get_failures(vlink).await?.is_empty())
    }

    /// Snapshot of every excluded link, for bulk filtering.
    ///
    /// The snapshot may be stale by the time it is used.
    pub async fn list_excluded(&self) -> Result<HashSet<String>, AppError> {
        let repo = LinkFailureRepository::new(self.db);

        Ok(repo.get_excluded().await?)
    }

    /// Replaces the whole not-downloaded set after an ingestion pass.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of links now recorded as not downloaded
    /// - `Err(AppError::DbErr)` - Storage failure; the previous set is kept
    pub async fn replace_not_downloaded(&self, vlinks: Vec<String>) -> Result<u64, AppError> {
        let repo = LinkFailureRepository::new(self.db);

        let count = repo.replace_not_downloaded(vlinks).await?;

        tracing::info!("Replaced not downloaded set with {} links", count);

        Ok(count)
    }

    /// Moves a link from not-downloaded to dead atomically.
    pub async fn promote_to_dead(
        &self,
        vlink: &str,
        reason: Option<String>,
    ) -> Result<DeadLink, AppError> {
        let repo = LinkFailureRepository::new(self.db);

        let dead = repo.promote_to_dead(vlink, reason).await?;

        tracing::info!("Promoted {} from not downloaded to dead", vlink);

        Ok(dead)
    }

    /// Every failure record currently held for a link.
    pub async fn failures_for(&self, vlink: &str) -> Result<Vec<LinkFailure>, AppError> {
        let repo = LinkFailureRepository::new(self.db);

        Ok(repo.get_failures(vlink).await?)
    }

    /// Dead links with their reasons, most recently declared first.
    pub async fn list_dead(&self) -> Result<Vec<DeadLink>, AppError> {
        let repo = LinkFailureRepository::new(self.db);

        Ok(repo.get_all_dead().await?)
    }

    pub async fn counts(&self) -> Result<LinkFailureCounts, AppError> {
        let repo = LinkFailureRepository::new(self.db);

        Ok(repo.count().await?)
    }
}
