//! In-session bookmark buffer.
//!
//! During a game session players bookmark songs by pressing the bookmark button on a
//! round message, possibly long after that round ended. The session keeps the song
//! each round message showed and the bookmarks made so far, and persists them to the
//! ledger once when the session ends.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use serenity::all::{MessageId, UserId};

use crate::{
    error::AppError,
    model::{
        bookmark::UpsertBookmarkParam,
        queried_song::{QueriedSong, QueriedSongWithBookmarkDate},
    },
    service::bookmark::BookmarkLedgerService,
};

/// Bookmarks made during a single game session, not yet persisted.
#[derive(Debug, Default)]
pub struct SessionBookmarks {
    /// Song shown by each round message, for resolving bookmark button presses.
    round_songs: HashMap<MessageId, QueriedSong>,
    /// Bookmarks per user keyed by link; a repeat bookmark replaces the earlier one.
    bookmarks: HashMap<UserId, HashMap<String, QueriedSongWithBookmarkDate>>,
}

impl SessionBookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers which song a round message showed.
    pub fn record_round_message(&mut self, message_id: MessageId, song: QueriedSong) {
        self.round_songs.insert(message_id, song);
    }

    /// Bookmarks a song for a user, refreshing the time if already bookmarked this session.
    pub fn bookmark(&mut self, user_id: UserId, song: QueriedSong, at: DateTime<Utc>) {
        tracing::info!("User {} bookmarked song {}", user_id, song.vlink());

        self.bookmarks
            .entry(user_id)
            .or_default()
            .insert(
                song.vlink().to_string(),
                QueriedSongWithBookmarkDate::new(song, at),
            );
    }

    /// Bookmarks the song a round message showed.
    ///
    /// # Returns
    /// - `Some(&QueriedSong)` - The bookmarked song
    /// - `None` - The message is not a round message of this session
    pub fn bookmark_from_message(
        &mut self,
        user_id: UserId,
        message_id: MessageId,
        at: DateTime<Utc>,
    ) -> Option<&QueriedSong> {
        let Some(song) = self.round_songs.get(&message_id).cloned() else {
            tracing::warn!(
                "User {} tried to bookmark unknown round message {}",
                user_id,
                message_id
            );
            return None;
        };

        self.bookmark(user_id, song, at);

        self.round_songs.get(&message_id)
    }

    /// Bookmarks a user made this session, newest first.
    pub fn bookmarks_for(&self, user_id: UserId) -> Vec<&QueriedSongWithBookmarkDate> {
        let mut bookmarks: Vec<_> = self
            .bookmarks
            .get(&user_id)
            .map(|songs| songs.values().collect())
            .unwrap_or_default();

        bookmarks.sort_by(|a, b| {
            b.bookmarked_at
                .cmp(&a.bookmarked_at)
                .then_with(|| a.vlink().cmp(b.vlink()))
        });

        bookmarks
    }

    /// Number of players with at least one bookmark.
    pub fn player_count(&self) -> usize {
        self.bookmarks.values().filter(|songs| !songs.is_empty()).count()
    }

    /// Total bookmarks across all players.
    pub fn song_count(&self) -> usize {
        self.bookmarks.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.song_count() == 0
    }

    /// Persists the buffered bookmarks to the ledger and clears the buffer.
    ///
    /// Songs removed from the catalog since they were bookmarked are skipped. The rest
    /// are stored together; on a storage error the buffer is kept so the caller may
    /// retry.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of bookmarks stored
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn flush(&mut self, ledger: &BookmarkLedgerService<'_>) -> Result<usize, AppError> {
        if self.is_empty() {
            return Ok(0);
        }

        let mut params: Vec<UpsertBookmarkParam> = self
            .bookmarks
            .iter()
            .flat_map(|(user_id, songs)| {
                songs.values().map(move |bookmarked| UpsertBookmarkParam {
                    user_id: user_id.get(),
                    vlink: bookmarked.vlink().to_string(),
                    bookmarked_at: bookmarked.bookmarked_at,
                })
            })
            .collect();
        params.sort_by(|a, b| a.user_id.cmp(&b.user_id).then_with(|| a.vlink.cmp(&b.vlink)));

        let count = ledger.bookmark_existing(params).await?;

        tracing::info!(
            "Persisted {} bookmarks from {} players",
            count,
            self.player_count()
        );

        self.bookmarks.clear();

        Ok(count)
    }
}
