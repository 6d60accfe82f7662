//! Songs enriched with query context.
//!
//! These values are built per request by the query layer and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::song::{LocaleType, Song, SongFilter};

/// Selection weights per popularity bucket for hard games, most viewed bucket first.
pub const SELECTION_WEIGHT_VALUES_HARD: [u32; 5] = [1, 2, 4, 8, 16];

/// Selection weights per popularity bucket for easy games, most viewed bucket first.
pub const SELECTION_WEIGHT_VALUES_EASY: [u32; 5] = [16, 8, 4, 2, 1];

/// A song selected for a session along with how strongly it should be favoured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueriedSong {
    #[serde(flatten)]
    pub song: Song,
    /// Relative weight used when picking the next song to play.
    pub selection_weight: u32,
}

impl QueriedSong {
    /// Wraps a song with the neutral selection weight.
    pub fn new(song: Song) -> Self {
        Self {
            song,
            selection_weight: 1,
        }
    }

    pub fn vlink(&self) -> &str {
        &self.song.vlink
    }

    pub fn localized_song_name(&self, locale: LocaleType) -> &str {
        self.song.localized_song_name(locale)
    }

    pub fn localized_artist_name(&self, locale: LocaleType) -> &str {
        self.song.localized_artist_name(locale)
    }
}

/// A queried song reached through a user's bookmark.
///
/// Only built when joining bookmarks with the catalog, so `bookmarked_at` is always
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueriedSongWithBookmarkDate {
    #[serde(flatten)]
    pub queried: QueriedSong,
    pub bookmarked_at: DateTime<Utc>,
}

impl QueriedSongWithBookmarkDate {
    pub fn new(queried: QueriedSong, bookmarked_at: DateTime<Utc>) -> Self {
        Self {
            queried,
            bookmarked_at,
        }
    }

    pub fn song(&self) -> &Song {
        &self.queried.song
    }

    pub fn vlink(&self) -> &str {
        self.queried.vlink()
    }
}

/// How a session orders and weights its candidate songs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleType {
    /// Uniform weights, shuffled.
    #[default]
    Random,
    /// Uniform weights, most viewed first.
    Popularity,
    /// Favours popular songs.
    WeightedEasy,
    /// Favours obscure songs.
    WeightedHard,
}

impl ShuffleType {
    /// Weight buckets assigned across the popularity-ordered candidate list.
    pub fn weights(&self) -> &'static [u32] {
        match self {
            Self::WeightedEasy => &SELECTION_WEIGHT_VALUES_EASY,
            Self::WeightedHard => &SELECTION_WEIGHT_VALUES_HARD,
            Self::Random | Self::Popularity => &[1],
        }
    }
}

/// Everything a session needs to pick its candidate songs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionCriteria {
    pub filter: SongFilter,
    /// Index of the first candidate kept, in popularity order.
    pub limit_start: usize,
    /// Index one past the last candidate kept; `None` keeps everything.
    pub limit_end: Option<usize>,
    pub shuffle: ShuffleType,
}

/// Candidate songs for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSongs {
    pub songs: Vec<QueriedSong>,
    /// Matching songs before the limit window was applied.
    pub count_before_limit: usize,
}
