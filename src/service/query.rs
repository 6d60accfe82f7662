use std::collections::HashMap;

use dioxus_logger::tracing;
use rand::seq::SliceRandom;
use sea_orm::DatabaseConnection;

use crate::{
    data::song::SongRepository,
    error::AppError,
    model::{
        bookmark::BookmarkSearch,
        queried_song::{
            CandidateSongs, QueriedSong, QueriedSongWithBookmarkDate, SessionCriteria, ShuffleType,
        },
        song::{Song, SongFilter},
    },
    service::{bookmark::BookmarkLedgerService, catalog::SongCatalogService},
};

/// Composes the catalog, link failures and bookmarks into query results.
pub struct SongQueryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SongQueryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the available songs matching a filter as neutral-weight candidates.
    pub async fn candidates_for_session(
        &self,
        filter: &SongFilter,
    ) -> Result<Vec<QueriedSong>, AppError> {
        let catalog = SongCatalogService::new(self.db);

        let songs = catalog.available(filter).await?;

        Ok(songs.into_iter().map(QueriedSong::new).collect())
    }

    /// Gets candidates using the filter stored in a guild's preference blob.
    ///
    /// # Returns
    /// - `Ok(Vec<QueriedSong>)` - Available songs matching the guild's game options
    /// - `Err(AppError::PreferenceErr)` - Game options have an unexpected shape
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn candidates_for_guild(
        &self,
        guild_preference: &serde_json::Value,
    ) -> Result<Vec<QueriedSong>, AppError> {
        let filter = SongFilter::from_guild_preference(guild_preference)?;

        self.candidates_for_session(&filter).await
    }

    /// Picks a session's candidate songs with limit window and selection weights.
    ///
    /// Candidates are taken in popularity order, cut to `[limit_start, limit_end)` and
    /// split into equal buckets that receive the shuffle type's weights in order.
    /// `Random` shuffles the result afterwards.
    pub async fn select_candidates(
        &self,
        criteria: &SessionCriteria,
    ) -> Result<CandidateSongs, AppError> {
        let catalog = SongCatalogService::new(self.db);

        let songs = catalog.available(&criteria.filter).await?;
        let count_before_limit = songs.len();

        let mut selected = weigh_candidates(
            limit_window(songs, criteria.limit_start, criteria.limit_end),
            criteria.shuffle.weights(),
        );

        if criteria.shuffle == ShuffleType::Random {
            selected.shuffle(&mut rand::rng());
        }

        tracing::debug!(
            "Selected {} of {} candidate songs",
            selected.len(),
            count_before_limit
        );

        Ok(CandidateSongs {
            songs: selected,
            count_before_limit,
        })
    }

    /// Gets a user's bookmarked songs, newest bookmark first.
    ///
    /// Bookmarks whose link no longer resolves in the catalog are skipped with a
    /// warning instead of failing the listing. Excluded links are still returned.
    pub async fn bookmarked_songs_for_user(
        &self,
        user_id: u64,
    ) -> Result<Vec<QueriedSongWithBookmarkDate>, AppError> {
        let ledger = BookmarkLedgerService::new(self.db);
        let song_repo = SongRepository::new(self.db);

        let entries = ledger.list_for_user(user_id).await?;
        let vlinks: Vec<String> = entries.iter().map(|entry| entry.vlink.clone()).collect();

        let mut songs: HashMap<String, Song> = song_repo
            .find_by_vlinks(&vlinks)
            .await?
            .into_iter()
            .map(|song| (song.vlink.clone(), song))
            .collect();

        let mut bookmarked = Vec::with_capacity(entries.len());
        for entry in entries {
            match songs.remove(&entry.vlink) {
                Some(song) => bookmarked.push(QueriedSongWithBookmarkDate::new(
                    QueriedSong::new(song),
                    entry.bookmarked_at,
                )),
                None => tracing::warn!(
                    "Skipping bookmark of user {} for missing song {}",
                    user_id,
                    entry.vlink
                ),
            }
        }

        Ok(bookmarked)
    }

    /// Searches a user's bookmarked songs by name and artist.
    ///
    /// Without a name the order is the bookmark order. With a name, shorter English
    /// song names come first so the closest match leads, and bookmark order breaks ties.
    pub async fn search_bookmarks(
        &self,
        user_id: u64,
        search: &BookmarkSearch,
    ) -> Result<Vec<QueriedSongWithBookmarkDate>, AppError> {
        let mut bookmarked = self.bookmarked_songs_for_user(user_id).await?;

        if let Some(artist_id) = search.artist_id {
            bookmarked.retain(|entry| entry.song().artist_id == artist_id);
        }

        if let Some(name) = search.song_name.as_deref().filter(|name| !name.is_empty()) {
            let needle = name.to_lowercase();
            bookmarked.retain(|entry| song_name_matches(entry.song(), &needle));
            bookmarked.sort_by_key(|entry| entry.song().song_name.chars().count());
        }

        Ok(bookmarked)
    }
}

/// Keeps the `[start, end)` window of the candidates, clamped to their length.
fn limit_window(songs: Vec<Song>, start: usize, end: Option<usize>) -> Vec<Song> {
    let end = end.unwrap_or(songs.len()).min(songs.len());
    let start = start.min(end);

    songs.into_iter().skip(start).take(end - start).collect()
}

/// Assigns `weights[floor(index / len * weights.len())]` to each candidate.
fn weigh_candidates(songs: Vec<Song>, weights: &[u32]) -> Vec<QueriedSong> {
    let len = songs.len();

    songs
        .into_iter()
        .enumerate()
        .map(|(index, song)| QueriedSong {
            song,
            selection_weight: weights[index * weights.len() / len],
        })
        .collect()
}

fn song_name_matches(song: &Song, needle: &str) -> bool {
    song.song_name.to_lowercase().contains(needle)
        || song
            .hangul_song_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle))
}
