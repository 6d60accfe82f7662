use sea_orm::DatabaseConnection;

use crate::{
    data::song::SongRepository,
    error::AppError,
    model::song::{Song, SongFilter},
};

/// Read access to the song catalog.
///
/// Exclusion is applied at read time instead of deleting rows: not-downloaded songs may
/// become playable later and dead links keep their recorded reason for diagnosis.
pub struct SongCatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SongCatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the full catalog without availability filtering.
    pub async fn all(&self) -> Result<Vec<Song>, AppError> {
        let repo = SongRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets every song whose link is not excluded and that matches the filter.
    ///
    /// The excluded set is read once, inside the same query as the catalog rows.
    ///
    /// # Arguments
    /// - `filter` - Metadata narrowing; pass `SongFilter::default()` for none
    ///
    /// # Returns
    /// - `Ok(Vec<Song>)` - Available songs, most viewed first
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn available(&self, filter: &SongFilter) -> Result<Vec<Song>, AppError> {
        let repo = SongRepository::new(self.db);

        Ok(repo.get_available(filter).await?)
    }

    /// Gets a song by link whether or not the link is excluded.
    ///
    /// # Returns
    /// - `Ok(Song)` - The catalog entry
    /// - `Err(AppError::SongNotFound)` - No catalog entry has this link
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn lookup(&self, vlink: &str) -> Result<Song, AppError> {
        let repo = SongRepository::new(self.db);

        repo.find_by_vlink(vlink)
            .await?
            .ok_or_else(|| AppError::SongNotFound(vlink.to_string()))
    }

    /// Whether a catalog entry exists for the link, regardless of exclusion.
    pub async fn exists(&self, vlink: &str) -> Result<bool, AppError> {
        let repo = SongRepository::new(self.db);

        Ok(repo.exists(vlink).await?)
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        let repo = SongRepository::new(self.db);

        Ok(repo.count().await?)
    }

    pub async fn count_available(&self) -> Result<u64, AppError> {
        let repo = SongRepository::new(self.db);

        Ok(repo.count_available().await?)
    }
}
