//! Link failure factories for marking links unavailable in the test database.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records a link in the `not_downloaded` table.
pub async fn mark_not_downloaded(
    db: &DatabaseConnection,
    vlink: impl Into<String>,
) -> Result<entity::not_downloaded::Model, DbErr> {
    entity::not_downloaded::ActiveModel {
        vlink: ActiveValue::Set(vlink.into()),
    }
    .insert(db)
    .await
}

/// Records a link in the `dead_links` table, declared dead now.
pub async fn mark_dead(
    db: &DatabaseConnection,
    vlink: impl Into<String>,
    reason: Option<&str>,
) -> Result<entity::dead_link::Model, DbErr> {
    mark_dead_at(db, vlink, reason, Utc::now()).await
}

/// Records a link in the `dead_links` table with an explicit declaration time.
pub async fn mark_dead_at(
    db: &DatabaseConnection,
    vlink: impl Into<String>,
    reason: Option<&str>,
    created_at: DateTime<Utc>,
) -> Result<entity::dead_link::Model, DbErr> {
    entity::dead_link::ActiveModel {
        vlink: ActiveValue::Set(vlink.into()),
        reason: ActiveValue::Set(reason.map(str::to_string)),
        created_at: ActiveValue::Set(created_at),
    }
    .insert(db)
    .await
}
