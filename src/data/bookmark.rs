//! Bookmark data repository for database operations.
//!
//! This module provides the `BookmarkRepository` for the `bookmarked_songs` table.
//! Rows are keyed by `(user_id, vlink)`; upserts resolve conflicts in the database so
//! concurrent bookmarks of the same pair end with exactly one row holding the last
//! written timestamp.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    error::AppError,
    model::bookmark::{BookmarkEntry, UpsertBookmarkParam},
};

/// Repository providing database operations for user bookmarks.
pub struct BookmarkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookmarkRepository<'a> {
    /// Creates a new BookmarkRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookmarkRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or refreshes a bookmark.
    ///
    /// # Arguments
    /// - `param` - User, song link and bookmark time
    ///
    /// # Returns
    /// - `Ok(BookmarkEntry)` - The stored bookmark
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertBookmarkParam) -> Result<BookmarkEntry, AppError> {
        let entity = upsert_on(self.db, param).await?;

        BookmarkEntry::from_entity(entity)
    }

    /// Creates or refreshes many bookmarks in one transaction.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of bookmarks written
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn upsert_many(&self, params: Vec<UpsertBookmarkParam>) -> Result<usize, DbErr> {
        let count = params.len();
        let txn = self.db.begin().await?;

        for param in params {
            upsert_on(&txn, param).await?;
        }

        txn.commit().await?;

        Ok(count)
    }

    /// Deletes a bookmark.
    ///
    /// # Returns
    /// - `Ok(true)` - Bookmark existed and was removed
    /// - `Ok(false)` - No bookmark for this pair
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: u64, vlink: &str) -> Result<bool, DbErr> {
        let result =
            entity::prelude::BookmarkedSong::delete_by_id((user_id.to_string(), vlink.to_string()))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a single bookmark.
    pub async fn get(&self, user_id: u64, vlink: &str) -> Result<Option<BookmarkEntry>, AppError> {
        let entity =
            entity::prelude::BookmarkedSong::find_by_id((user_id.to_string(), vlink.to_string()))
                .one(self.db)
                .await?;

        entity.map(BookmarkEntry::from_entity).transpose()
    }

    /// Gets all bookmarks of a user, newest first with ties ordered by link.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Ok(Vec<BookmarkEntry>)` - The user's bookmarks (empty if none)
    /// - `Err(AppError)` - Database error or unparsable stored user ID
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<BookmarkEntry>, AppError> {
        let entities = entity::prelude::BookmarkedSong::find()
            .filter(entity::bookmarked_song::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(entity::bookmarked_song::Column::BookmarkedAt)
            .order_by_asc(entity::bookmarked_song::Column::Vlink)
            .all(self.db)
            .await?;

        entities.into_iter().map(BookmarkEntry::from_entity).collect()
    }

    /// Gets one page of a user's bookmarks in the same order as `get_by_user`.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `page` - Zero-based page index
    /// - `per_page` - Number of bookmarks per page
    ///
    /// # Returns
    /// - `Ok((Vec<BookmarkEntry>, u64))` - The page and the user's total bookmark count
    /// - `Err(AppError)` - Database error or unparsable stored user ID
    pub async fn get_by_user_paginated(
        &self,
        user_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<BookmarkEntry>, u64), AppError> {
        let paginator = entity::prelude::BookmarkedSong::find()
            .filter(entity::bookmarked_song::Column::UserId.eq(user_id.to_string()))
            .order_by_desc(entity::bookmarked_song::Column::BookmarkedAt)
            .order_by_asc(entity::bookmarked_song::Column::Vlink)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let bookmarks = entities
            .into_iter()
            .map(BookmarkEntry::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((bookmarks, total))
    }
}

async fn upsert_on<C: ConnectionTrait>(
    conn: &C,
    param: UpsertBookmarkParam,
) -> Result<entity::bookmarked_song::Model, DbErr> {
    entity::prelude::BookmarkedSong::insert(entity::bookmarked_song::ActiveModel {
        user_id: ActiveValue::Set(param.user_id.to_string()),
        vlink: ActiveValue::Set(param.vlink),
        bookmarked_at: ActiveValue::Set(param.bookmarked_at),
    })
    .on_conflict(
        OnConflict::columns([
            entity::bookmarked_song::Column::UserId,
            entity::bookmarked_song::Column::Vlink,
        ])
        .update_column(entity::bookmarked_song::Column::BookmarkedAt)
        .to_owned(),
    )
    .exec_with_returning(conn)
    .await
}
