//! Song fixtures for creating in-memory catalog entries.

use chrono::NaiveDate;
use entity::song::{self, Gender, VideoType};

/// Default test song link.
pub const DEFAULT_LINK: &str = "dQw4w9WgXcQ";

/// Default English song name.
pub const DEFAULT_SONG_NAME: &str = "Test Song";

/// Default English artist name.
pub const DEFAULT_ARTIST_NAME: &str = "Test Artist";

/// Default catalog artist ID.
pub const DEFAULT_ARTIST_ID: i32 = 1;

/// Default view count.
pub const DEFAULT_VIEWS: i64 = 1_000_000;

/// Creates a song entity model with default values.
///
/// # Default Values
/// - link: `"dQw4w9WgXcQ"`
/// - song_name_en: `"Test Song"`, no Korean name
/// - artist_name_en: `"Test Artist"`, no Korean name
/// - id_artist: `1`
/// - publish_date: `2020-01-01`
/// - members: `Gender::Female`
/// - views: `1_000_000`
/// - vtype: `VideoType::Main`
///
/// # Returns
/// - `song::Model` - In-memory song entity
pub fn entity() -> song::Model {
    entity_builder().build()
}

/// Creates a default song entity model with the given link.
pub fn entity_with_link(link: &str) -> song::Model {
    entity_builder().link(link).build()
}

/// Creates a song entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let song = fixture::song::entity_builder()
///     .link("abc")
///     .artist_id(42)
///     .members(Gender::Male)
///     .build();
/// ```
pub fn entity_builder() -> SongEntityBuilder {
    SongEntityBuilder::default()
}

/// Builder for customized song entity models.
pub struct SongEntityBuilder {
    model: song::Model,
}

impl Default for SongEntityBuilder {
    fn default() -> Self {
        Self {
            model: song::Model {
                link: DEFAULT_LINK.to_string(),
                song_name_en: DEFAULT_SONG_NAME.to_string(),
                song_name_ko: None,
                artist_name_en: DEFAULT_ARTIST_NAME.to_string(),
                artist_name_ko: None,
                id_artist: DEFAULT_ARTIST_ID,
                publish_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                members: Gender::Female,
                is_solo: false,
                views: DEFAULT_VIEWS,
                tags: None,
                vtype: VideoType::Main,
                better_audio_link: None,
            },
        }
    }
}

impl SongEntityBuilder {
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.model.link = link.into();
        self
    }

    pub fn song_name(mut self, name: impl Into<String>) -> Self {
        self.model.song_name_en = name.into();
        self
    }

    pub fn hangul_song_name(mut self, name: impl Into<String>) -> Self {
        self.model.song_name_ko = Some(name.into());
        self
    }

    pub fn artist_name(mut self, name: impl Into<String>) -> Self {
        self.model.artist_name_en = name.into();
        self
    }

    pub fn hangul_artist_name(mut self, name: impl Into<String>) -> Self {
        self.model.artist_name_ko = Some(name.into());
        self
    }

    pub fn artist_id(mut self, artist_id: i32) -> Self {
        self.model.id_artist = artist_id;
        self
    }

    pub fn publish_date(mut self, date: NaiveDate) -> Self {
        self.model.publish_date = date;
        self
    }

    pub fn members(mut self, members: Gender) -> Self {
        self.model.members = members;
        self
    }

    pub fn solo(mut self, is_solo: bool) -> Self {
        self.model.is_solo = is_solo;
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.model.views = views;
        self
    }

    /// Sets the tag string, one character per tag.
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.model.tags = Some(tags.into());
        self
    }

    pub fn video_type(mut self, vtype: VideoType) -> Self {
        self.model.vtype = vtype;
        self
    }

    pub fn better_audio_link(mut self, link: impl Into<String>) -> Self {
        self.model.better_audio_link = Some(link.into());
        self
    }

    /// Builds the song entity model.
    pub fn build(self) -> song::Model {
        self.model
    }
}
