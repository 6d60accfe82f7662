//! Song catalog domain models.
//!
//! Defines the immutable `Song` record served to game sessions, the metadata enums
//! stored alongside it, and `SongFilter`, the metadata narrowing applied on top of
//! availability when a session asks for candidate songs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Performer lineup of an artist, used by gender game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Coed,
    Alternating,
}

impl From<entity::song::Gender> for Gender {
    fn from(value: entity::song::Gender) -> Self {
        match value {
            entity::song::Gender::Male => Self::Male,
            entity::song::Gender::Female => Self::Female,
            entity::song::Gender::Coed => Self::Coed,
            entity::song::Gender::Alternating => Self::Alternating,
        }
    }
}

impl From<Gender> for entity::song::Gender {
    fn from(value: Gender) -> Self {
        match value {
            Gender::Male => Self::Male,
            Gender::Female => Self::Female,
            Gender::Coed => Self::Coed,
            Gender::Alternating => Self::Alternating,
        }
    }
}

/// Kind of video backing a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    /// Official music video.
    Main,
    /// Audio-only upload.
    Audio,
}

impl From<entity::song::VideoType> for VideoType {
    fn from(value: entity::song::VideoType) -> Self {
        match value {
            entity::song::VideoType::Main => Self::Main,
            entity::song::VideoType::Audio => Self::Audio,
        }
    }
}

impl From<VideoType> for entity::song::VideoType {
    fn from(value: VideoType) -> Self {
        match value {
            VideoType::Main => Self::Main,
            VideoType::Audio => Self::Audio,
        }
    }
}

/// Guild display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocaleType {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "es-ES")]
    Es,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "zh-CN")]
    Zh,
    #[serde(rename = "nl")]
    Nl,
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "pt-BR")]
    Pt,
    #[serde(rename = "ru")]
    Ru,
    #[serde(rename = "de")]
    De,
}

/// Immutable catalog entry identified by its video link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Stable video link identifier.
    pub vlink: String,
    /// English song name.
    pub song_name: String,
    /// Korean song name, `None` when the catalog has no Hangul spelling.
    pub hangul_song_name: Option<String>,
    /// English artist name.
    pub artist_name: String,
    /// Korean artist name, `None` when the catalog has no Hangul spelling.
    pub hangul_artist_name: Option<String>,
    /// Catalog artist identifier.
    pub artist_id: i32,
    /// Release date of the video.
    pub publish_date: NaiveDate,
    /// Performer lineup.
    pub members: Gender,
    /// Whether the artist is a soloist.
    pub is_solo: bool,
    /// View count at last ingestion.
    pub views: i64,
    /// One character per tag, e.g. `o` for OST.
    pub tags: Option<String>,
    /// Kind of video.
    pub video_type: VideoType,
    /// Alternate higher quality audio source, if any.
    pub better_audio_link: Option<String>,
}

impl Song {
    /// Converts an entity model to a song domain model at the repository boundary.
    ///
    /// Empty Hangul names are normalized to `None`.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Song` - The converted song domain model
    pub fn from_entity(entity: entity::song::Model) -> Self {
        Self {
            vlink: entity.link,
            song_name: entity.song_name_en,
            hangul_song_name: entity.song_name_ko.filter(|name| !name.is_empty()),
            artist_name: entity.artist_name_en,
            hangul_artist_name: entity.artist_name_ko.filter(|name| !name.is_empty()),
            artist_id: entity.id_artist,
            publish_date: entity.publish_date,
            members: entity.members.into(),
            is_solo: entity.is_solo,
            views: entity.views,
            tags: entity.tags,
            video_type: entity.vtype.into(),
            better_audio_link: entity.better_audio_link,
        }
    }

    /// Song name to display for a locale; Korean prefers the Hangul name.
    pub fn localized_song_name(&self, locale: LocaleType) -> &str {
        match (locale, &self.hangul_song_name) {
            (LocaleType::Ko, Some(hangul)) => hangul,
            _ => &self.song_name,
        }
    }

    /// Artist name to display for a locale; Korean prefers the Hangul name.
    pub fn localized_artist_name(&self, locale: LocaleType) -> &str {
        match (locale, &self.hangul_artist_name) {
            (LocaleType::Ko, Some(hangul)) => hangul,
            _ => &self.artist_name,
        }
    }
}

/// Metadata narrowing applied on top of availability.
///
/// Every field is optional; an empty filter matches the whole available catalog.
/// Deserializes from the camelCase keys a guild stores in its preference blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SongFilter {
    /// Only songs by these artists, when non-empty.
    pub include_artist_ids: Vec<i32>,
    /// Never songs by these artists.
    pub exclude_artist_ids: Vec<i32>,
    /// Only these lineups, when non-empty.
    pub genders: Vec<Gender>,
    /// Inclusive lower bound on publish date.
    pub published_after: Option<NaiveDate>,
    /// Inclusive upper bound on publish date.
    pub published_before: Option<NaiveDate>,
    /// Inclusive lower bound on views.
    pub min_views: Option<i64>,
    /// Inclusive upper bound on views.
    pub max_views: Option<i64>,
    /// Only this kind of video.
    pub video_type: Option<VideoType>,
    /// Songs whose tags contain any of these characters are dropped.
    pub exclude_tags: Vec<char>,
    /// Case-insensitive substring of the English or Korean song name.
    pub song_name: Option<String>,
}

impl SongFilter {
    /// Reads the filter stored under `gameOptions` in a guild preference blob.
    ///
    /// Unknown keys are ignored so the blob can carry unrelated game options. A blob
    /// without `gameOptions` yields the empty filter.
    ///
    /// # Arguments
    /// - `preference` - The guild's opaque preference JSON
    ///
    /// # Returns
    /// - `Ok(SongFilter)` - Filter built from the stored options
    /// - `Err(serde_json::Error)` - A known key holds a value of the wrong shape
    pub fn from_guild_preference(preference: &serde_json::Value) -> Result<Self, serde_json::Error> {
        match preference.get("gameOptions") {
            Some(options) => Self::deserialize(options),
            None => Ok(Self::default()),
        }
    }

    /// Whether the filter narrows nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
