//! Song catalog data repository for database operations.
//!
//! This module provides the `SongRepository` for reading catalog entries. The catalog
//! is written by the ingestion pipeline, so the repository only reads. Availability
//! queries exclude every link present in `not_downloaded` or `dead_links` inside the
//! same SQL statement, which gives each query a single consistent snapshot of the
//! failure tables.

use std::collections::HashSet;

use sea_orm::{
    sea_query::LikeExpr, ActiveEnum, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::model::song::{Song, SongFilter};

/// Repository providing database operations for the song catalog.
pub struct SongRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SongRepository<'a> {
    /// Creates a new SongRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SongRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every catalog entry regardless of link failures, ordered by link.
    ///
    /// # Returns
    /// - `Ok(Vec<Song>)` - The full catalog
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Song>, DbErr> {
        let entities = entity::prelude::Song::find()
            .order_by_asc(entity::song::Column::Link)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Song::from_entity).collect())
    }

    /// Gets catalog entries whose link has no failure record and that match the filter.
    ///
    /// Results are ordered by views descending, then link ascending.
    ///
    /// # Arguments
    /// - `filter` - Metadata narrowing; the empty filter matches everything available
    ///
    /// # Returns
    /// - `Ok(Vec<Song>)` - Available songs matching the filter
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_available(&self, filter: &SongFilter) -> Result<Vec<Song>, DbErr> {
        let entities = entity::prelude::Song::find()
            .filter(available_condition(filter))
            .order_by_desc(entity::song::Column::Views)
            .order_by_asc(entity::song::Column::Link)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Song::from_entity).collect())
    }

    /// Counts catalog entries whose link has no failure record.
    pub async fn count_available(&self) -> Result<u64, DbErr> {
        entity::prelude::Song::find()
            .filter(available_condition(&SongFilter::default()))
            .count(self.db)
            .await
    }

    /// Counts every catalog entry.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Song::find().count(self.db).await
    }

    /// Finds a catalog entry by link, ignoring link failures.
    ///
    /// # Arguments
    /// - `vlink` - Video link of the song
    ///
    /// # Returns
    /// - `Ok(Some(Song))` - Catalog entry found
    /// - `Ok(None)` - No catalog entry has this link
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_vlink(&self, vlink: &str) -> Result<Option<Song>, DbErr> {
        let entity = entity::prelude::Song::find_by_id(vlink.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Song::from_entity))
    }

    /// Finds every catalog entry whose link is in the given list.
    ///
    /// Links without a catalog entry are simply absent from the result.
    pub async fn find_by_vlinks(&self, vlinks: &[String]) -> Result<Vec<Song>, DbErr> {
        if vlinks.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Song::find()
            .filter(entity::song::Column::Link.is_in(vlinks.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Song::from_entity).collect())
    }

    /// Checks whether a catalog entry exists for the link.
    pub async fn exists(&self, vlink: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Song::find_by_id(vlink.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the links from the list that have no catalog entry, in input order.
    pub async fn missing_vlinks(&self, vlinks: &[String]) -> Result<Vec<String>, DbErr> {
        if vlinks.is_empty() {
            return Ok(Vec::new());
        }

        let existing: HashSet<String> = entity::prelude::Song::find()
            .select_only()
            .column(entity::song::Column::Link)
            .filter(entity::song::Column::Link.is_in(vlinks.iter().cloned()))
            .into_tuple::<String>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(vlinks
            .iter()
            .filter(|vlink| !existing.contains(*vlink))
            .cloned()
            .collect())
    }
}

/// Builds the availability condition: no failure record in either table, plus the filter.
fn available_condition(filter: &SongFilter) -> Condition {
    let not_downloaded = entity::prelude::NotDownloaded::find()
        .select_only()
        .column(entity::not_downloaded::Column::Vlink)
        .into_query();
    let dead_links = entity::prelude::DeadLink::find()
        .select_only()
        .column(entity::dead_link::Column::Vlink)
        .into_query();

    Condition::all()
        .add(entity::song::Column::Link.not_in_subquery(not_downloaded))
        .add(entity::song::Column::Link.not_in_subquery(dead_links))
        .add(filter_condition(filter))
}

/// Translates a song filter into a SQL condition over the songs table.
fn filter_condition(filter: &SongFilter) -> Condition {
    use entity::song::Column;

    let mut condition = Condition::all();

    if filter.is_empty() {
        return condition;
    }

    if !filter.include_artist_ids.is_empty() {
        condition = condition.add(Column::IdArtist.is_in(filter.include_artist_ids.clone()));
    }

    if !filter.exclude_artist_ids.is_empty() {
        condition = condition.add(Column::IdArtist.is_not_in(filter.exclude_artist_ids.clone()));
    }

    if !filter.genders.is_empty() {
        let genders = filter
            .genders
            .iter()
            .map(|gender| entity::song::Gender::from(*gender).to_value());
        condition = condition.add(Column::Members.is_in(genders));
    }

    if let Some(after) = filter.published_after {
        condition = condition.add(Column::PublishDate.gte(after));
    }

    if let Some(before) = filter.published_before {
        condition = condition.add(Column::PublishDate.lte(before));
    }

    if let Some(min_views) = filter.min_views {
        condition = condition.add(Column::Views.gte(min_views));
    }

    if let Some(max_views) = filter.max_views {
        condition = condition.add(Column::Views.lte(max_views));
    }

    if let Some(video_type) = filter.video_type {
        condition =
            condition.add(Column::Vtype.eq(entity::song::VideoType::from(video_type).to_value()));
    }

    for tag in &filter.exclude_tags {
        condition = condition.add(
            Condition::any()
                .add(Column::Tags.is_null())
                .add(Column::Tags.not_like(like_contains(&tag.to_string()))),
        );
    }

    if let Some(name) = filter.song_name.as_deref().filter(|name| !name.is_empty()) {
        condition = condition.add(
            Condition::any()
                .add(Column::SongNameEn.like(like_contains(name)))
                .add(Column::SongNameKo.like(like_contains(name))),
        );
    }

    condition
}

/// Builds a LIKE pattern matching `text` literally anywhere in the value.
fn like_contains(text: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}
