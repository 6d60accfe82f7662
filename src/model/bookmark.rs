//! Bookmark ledger domain models.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A user's saved reference to a catalog entry.
///
/// Identity is `(user_id, vlink)`; bookmarking the same song again refreshes
/// `bookmarked_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkEntry {
    /// Discord ID of the user who bookmarked the song.
    pub user_id: u64,
    /// Link of the bookmarked song.
    pub vlink: String,
    /// When the user bookmarked the song.
    pub bookmarked_at: DateTime<Utc>,
}

impl BookmarkEntry {
    /// Converts an entity model to a bookmark domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(BookmarkEntry)` - The converted bookmark
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user ID is not a u64
    pub fn from_entity(entity: entity::bookmarked_song::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            vlink: entity.vlink,
            bookmarked_at: entity.bookmarked_at,
        })
    }
}

/// Parameters for upserting a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertBookmarkParam {
    /// Discord ID of the user.
    pub user_id: u64,
    /// Link of the song to bookmark.
    pub vlink: String,
    /// Bookmark time; replaces any earlier time for the same pair.
    pub bookmarked_at: DateTime<Utc>,
}

/// One page of a user's bookmarks with paging metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedBookmarks {
    /// Bookmarks for this page.
    pub bookmarks: Vec<BookmarkEntry>,
    /// Total number of bookmarks across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of bookmarks per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

/// Narrowing applied when a user searches their bookmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSearch {
    /// Case-insensitive substring of the English or Korean song name.
    pub song_name: Option<String>,
    /// Only songs by this artist.
    pub artist_id: Option<i32>,
}
