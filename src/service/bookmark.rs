use std::collections::HashSet;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::{bookmark::BookmarkRepository, song::SongRepository},
    error::AppError,
    model::bookmark::{BookmarkEntry, PaginatedBookmarks, UpsertBookmarkParam},
};

/// Per-user ledger of bookmarked songs.
pub struct BookmarkLedgerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookmarkLedgerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bookmarks a song for a user, refreshing the time if already bookmarked.
    ///
    /// Only existence in the catalog is checked; a user may bookmark a song whose link
    /// is currently excluded.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `vlink` - Link of the song to bookmark
    /// - `at` - Bookmark time
    ///
    /// # Returns
    /// - `Ok(BookmarkEntry)` - The stored bookmark
    /// - `Err(AppError::InvalidReference)` - No catalog entry has this link
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn bookmark(
        &self,
        user_id: u64,
        vlink: &str,
        at: DateTime<Utc>,
    ) -> Result<BookmarkEntry, AppError> {
        let song_repo = SongRepository::new(self.db);

        if !song_repo.exists(vlink).await? {
            return Err(AppError::InvalidReference(vlink.to_string()));
        }

        let repo = BookmarkRepository::new(self.db);
        let entry = repo
            .upsert(UpsertBookmarkParam {
                user_id,
                vlink: vlink.to_string(),
                bookmarked_at: at,
            })
            .await?;

        tracing::debug!("User {} bookmarked song {}", user_id, vlink);

        Ok(entry)
    }

    /// Bookmarks many songs at once, writing all of them or none.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of bookmarks written
    /// - `Err(AppError::InvalidReference)` - First link without a catalog entry; nothing
    ///   is written
    /// - `Err(AppError::DbErr)` - Storage failure; nothing is written
    pub async fn bookmark_many(&self, params: Vec<UpsertBookmarkParam>) -> Result<usize, AppError> {
        if params.is_empty() {
            return Ok(0);
        }

        let song_repo = SongRepository::new(self.db);
        let vlinks: Vec<String> = params.iter().map(|param| param.vlink.clone()).collect();

        if let Some(missing) = song_repo.missing_vlinks(&vlinks).await?.into_iter().next() {
            return Err(AppError::InvalidReference(missing));
        }

        let repo = BookmarkRepository::new(self.db);
        let count = repo.upsert_many(params).await?;

        tracing::info!("Stored {} bookmarks", count);

        Ok(count)
    }

    /// Bookmarks many songs at once, skipping links that left the catalog.
    ///
    /// Skipped links are logged; the remaining bookmarks are written together or not
    /// at all.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of bookmarks written
    /// - `Err(AppError::DbErr)` - Storage failure; nothing is written
    pub async fn bookmark_existing(
        &self,
        params: Vec<UpsertBookmarkParam>,
    ) -> Result<usize, AppError> {
        if params.is_empty() {
            return Ok(0);
        }

        let song_repo = SongRepository::new(self.db);
        let vlinks: Vec<String> = params.iter().map(|param| param.vlink.clone()).collect();
        let missing: HashSet<String> = song_repo
            .missing_vlinks(&vlinks)
            .await?
            .into_iter()
            .collect();

        let (params, skipped): (Vec<_>, Vec<_>) = params
            .into_iter()
            .partition(|param| !missing.contains(&param.vlink));

        for param in &skipped {
            tracing::warn!(
                "Skipping bookmark of user {} for missing song {}",
                param.user_id,
                param.vlink
            );
        }

        let repo = BookmarkRepository::new(self.db);
        let count = repo.upsert_many(params).await?;

        tracing::info!("Stored {} bookmarks", count);

        Ok(count)
    }

    /// Removes a bookmark. No-op if the user never bookmarked the song.
    pub async fn unbookmark(&self, user_id: u64, vlink: &str) -> Result<(), AppError> {
        let repo = BookmarkRepository::new(self.db);

        if repo.delete(user_id, vlink).await? {
            tracing::debug!("User {} removed bookmark for {}", user_id, vlink);
        }

        Ok(())
    }

    /// Gets a user's bookmarks, newest first with equal times ordered by link.
    pub async fn list_for_user(&self, user_id: u64) -> Result<Vec<BookmarkEntry>, AppError> {
        let repo = BookmarkRepository::new(self.db);

        repo.get_by_user(user_id).await
    }

    /// Gets one page of a user's bookmarks in the same order as `list_for_user`.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `page` - Zero-based page index; past the end yields an empty page
    /// - `per_page` - Bookmarks per page, at least 1
    ///
    /// # Returns
    /// - `Ok(PaginatedBookmarks)` - The page plus paging totals
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn list_for_user_paginated(
        &self,
        user_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBookmarks, AppError> {
        let per_page = per_page.max(1);

        let repo = BookmarkRepository::new(self.db);
        let (bookmarks, total) = repo.get_by_user_paginated(user_id, page, per_page).await?;

        Ok(PaginatedBookmarks {
            bookmarks,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }
}
