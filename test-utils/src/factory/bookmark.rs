//! Bookmark factory for seeding the bookmark ledger in the test database.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a bookmark row bookmarked now.
///
/// No catalog entry is required; the ledger holds no foreign key to songs.
pub async fn create_bookmark(
    db: &DatabaseConnection,
    user_id: u64,
    vlink: impl Into<String>,
) -> Result<entity::bookmarked_song::Model, DbErr> {
    create_bookmark_at(db, user_id, vlink, Utc::now()).await
}

/// Creates a bookmark row with an explicit bookmark time.
pub async fn create_bookmark_at(
    db: &DatabaseConnection,
    user_id: u64,
    vlink: impl Into<String>,
    bookmarked_at: DateTime<Utc>,
) -> Result<entity::bookmarked_song::Model, DbErr> {
    entity::bookmarked_song::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        vlink: ActiveValue::Set(vlink.into()),
        bookmarked_at: ActiveValue::Set(bookmarked_at),
    }
    .insert(db)
    .await
}
