//! Link failure data repository for database operations.
//!
//! This module provides the `LinkFailureRepository` for the two failure tables:
//! `not_downloaded`, holding links the ingestion job has no playable asset for yet,
//! and `dead_links`, holding links confirmed permanently unplayable along with the
//! reason and the time they were first declared dead. The tables are independent;
//! operations touching both run in a single transaction.

use std::collections::HashSet;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect, TransactionTrait,
};

use crate::model::link_failure::{DeadLink, LinkFailure, LinkFailureCounts};

/// Rows per multi-row insert, kept well under SQLite's bound parameter limit.
const INSERT_CHUNK_SIZE: usize = 500;

/// Repository providing database operations for link failure tracking.
pub struct LinkFailureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LinkFailureRepository<'a> {
    /// Creates a new LinkFailureRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LinkFailureRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a link as not downloaded.
    ///
    /// Inserting a link that is already recorded leaves the table unchanged.
    ///
    /// # Arguments
    /// - `vlink` - Video link without a playable asset
    ///
    /// # Returns
    /// - `Ok(())` - Link is recorded
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_not_downloaded(&self, vlink: &str) -> Result<(), DbErr> {
        insert_not_downloaded_on(self.db, vec![vlink.to_string()]).await?;

        Ok(())
    }

    /// Creates or updates the dead link record for a link.
    ///
    /// On conflict only the reason is replaced, so `created_at` keeps the time the
    /// link was first declared dead.
    ///
    /// # Arguments
    /// - `vlink` - Video link confirmed unplayable
    /// - `reason` - Optional diagnosis, replaces any earlier reason
    ///
    /// # Returns
    /// - `Ok(DeadLink)` - The stored dead link record
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_dead(&self, vlink: &str, reason: Option<String>) -> Result<DeadLink, DbErr> {
        upsert_dead_on(self.db, vlink, reason).await
    }

    /// Removes a link from both failure tables in one transaction.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed across both tables (0 when absent)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, vlink: &str) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        let not_downloaded = entity::prelude::NotDownloaded::delete_by_id(vlink.to_string())
            .exec(&txn)
            .await?;
        let dead = entity::prelude::DeadLink::delete_by_id(vlink.to_string())
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(not_downloaded.rows_affected + dead.rows_affected)
    }

    /// Replaces the whole `not_downloaded` table with the given links.
    ///
    /// Runs in one transaction so readers see either the previous set or the new one.
    /// Duplicate links in the input are stored once.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of links now recorded as not downloaded
    /// - `Err(DbErr)` - Database error; the previous set is kept
    pub async fn replace_not_downloaded(&self, vlinks: Vec<String>) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::NotDownloaded::delete_many()
            .exec(&txn)
            .await?;

        for chunk in vlinks.chunks(INSERT_CHUNK_SIZE) {
            insert_not_downloaded_on(&txn, chunk.to_vec()).await?;
        }

        let count = entity::prelude::NotDownloaded::find().count(&txn).await?;

        txn.commit().await?;

        Ok(count)
    }

    /// Moves a link from `not_downloaded` to `dead_links` in one transaction.
    ///
    /// # Returns
    /// - `Ok(DeadLink)` - The stored dead link record
    /// - `Err(DbErr)` - Database error; neither table is changed
    pub async fn promote_to_dead(
        &self,
        vlink: &str,
        reason: Option<String>,
    ) -> Result<DeadLink, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::NotDownloaded::delete_by_id(vlink.to_string())
            .exec(&txn)
            .await?;
        let dead = upsert_dead_on(&txn, vlink, reason).await?;

        txn.commit().await?;

        Ok(dead)
    }

    /// Checks whether a link is recorded as not downloaded.
    pub async fn is_not_downloaded(&self, vlink: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::NotDownloaded::find_by_id(vlink.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the dead link record for a link.
    ///
    /// # Returns
    /// - `Ok(Some(DeadLink))` - Link is recorded as dead
    /// - `Ok(None)` - Link is not recorded as dead
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_dead(&self, vlink: &str) -> Result<Option<DeadLink>, DbErr> {
        let entity = entity::prelude::DeadLink::find_by_id(vlink.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(DeadLink::from_entity))
    }

    /// Gets every dead link record, most recently declared first.
    pub async fn get_all_dead(&self) -> Result<Vec<DeadLink>, DbErr> {
        let entities = entity::prelude::DeadLink::find()
            .order_by_desc(entity::dead_link::Column::CreatedAt)
            .order_by_asc(entity::dead_link::Column::Vlink)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(DeadLink::from_entity).collect())
    }

    /// Gets every failure record held for a link, not-downloaded first.
    pub async fn get_failures(&self, vlink: &str) -> Result<Vec<LinkFailure>, DbErr> {
        let mut failures = Vec::new();

        if self.is_not_downloaded(vlink).await? {
            failures.push(LinkFailure::NotDownloaded {
                vlink: vlink.to_string(),
            });
        }

        if let Some(dead) = self.get_dead(vlink).await? {
            failures.push(LinkFailure::Dead(dead));
        }

        Ok(failures)
    }

    /// Gets the union of links in both failure tables.
    pub async fn get_excluded(&self) -> Result<HashSet<String>, DbErr> {
        let mut excluded: HashSet<String> = entity::prelude::NotDownloaded::find()
            .select_only()
            .column(entity::not_downloaded::Column::Vlink)
            .into_tuple::<String>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let dead = entity::prelude::DeadLink::find()
            .select_only()
            .column(entity::dead_link::Column::Vlink)
            .into_tuple::<String>()
            .all(self.db)
            .await?;

        excluded.extend(dead);

        Ok(excluded)
    }

    /// Counts the rows of both failure tables.
    pub async fn count(&self) -> Result<LinkFailureCounts, DbErr> {
        let not_downloaded = entity::prelude::NotDownloaded::find().count(self.db).await?;
        let dead = entity::prelude::DeadLink::find().count(self.db).await?;

        Ok(LinkFailureCounts {
            not_downloaded,
            dead,
        })
    }
}

/// Inserts links into `not_downloaded`, skipping links already present.
async fn insert_not_downloaded_on<C: ConnectionTrait>(
    conn: &C,
    vlinks: Vec<String>,
) -> Result<u64, DbErr> {
    if vlinks.is_empty() {
        return Ok(0);
    }

    let models = vlinks
        .into_iter()
        .map(|vlink| entity::not_downloaded::ActiveModel {
            vlink: ActiveValue::Set(vlink),
        });

    entity::prelude::NotDownloaded::insert_many(models)
        .on_conflict(
            OnConflict::column(entity::not_downloaded::Column::Vlink)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await
}

/// Upserts a dead link, replacing only the reason on conflict.
async fn upsert_dead_on<C: ConnectionTrait>(
    conn: &C,
    vlink: &str,
    reason: Option<String>,
) -> Result<DeadLink, DbErr> {
    let entity = entity::prelude::DeadLink::insert(entity::dead_link::ActiveModel {
        vlink: ActiveValue::Set(vlink.to_string()),
        reason: ActiveValue::Set(reason),
        created_at: ActiveValue::Set(Utc::now()),
    })
    .on_conflict(
        OnConflict::column(entity::dead_link::Column::Vlink)
            .update_column(entity::dead_link::Column::Reason)
            .to_owned(),
    )
    .exec_with_returning(conn)
    .await?;

    Ok(DeadLink::from_entity(entity))
}
