//! Song factory for creating catalog entries in the test database.

use chrono::NaiveDate;
use entity::song::{Gender, VideoType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{
    factory::helpers::next_id,
    fixture::song::{entity_builder, SongEntityBuilder},
};

/// Factory for creating test songs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::song::SongFactory;
///
/// let song = SongFactory::new(&db)
///     .link("abc")
///     .views(5_000)
///     .build()
///     .await?;
/// ```
pub struct SongFactory<'a> {
    db: &'a DatabaseConnection,
    song: SongEntityBuilder,
}

impl<'a> SongFactory<'a> {
    /// Creates a new SongFactory with fixture defaults and a unique link.
    ///
    /// Defaults:
    /// - link: `"song_{id}"` where id is auto-incremented
    /// - song_name_en: `"Song {id}"`
    /// - everything else from `fixture::song::entity()`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            song: entity_builder()
                .link(format!("song_{}", id))
                .song_name(format!("Song {}", id)),
        }
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.song = self.song.link(link);
        self
    }

    pub fn song_name(mut self, name: impl Into<String>) -> Self {
        self.song = self.song.song_name(name);
        self
    }

    pub fn hangul_song_name(mut self, name: impl Into<String>) -> Self {
        self.song = self.song.hangul_song_name(name);
        self
    }

    pub fn artist_id(mut self, artist_id: i32) -> Self {
        self.song = self.song.artist_id(artist_id);
        self
    }

    pub fn publish_date(mut self, date: NaiveDate) -> Self {
        self.song = self.song.publish_date(date);
        self
    }

    pub fn members(mut self, members: Gender) -> Self {
        self.song = self.song.members(members);
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.song = self.song.views(views);
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.song = self.song.tags(tags);
        self
    }

    pub fn video_type(mut self, vtype: VideoType) -> Self {
        self.song = self.song.video_type(vtype);
        self
    }

    /// Builds and inserts the song entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::song::Model)` - Created song entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::song::Model, DbErr> {
        let song = self.song.build();

        entity::song::ActiveModel {
            link: ActiveValue::Set(song.link),
            song_name_en: ActiveValue::Set(song.song_name_en),
            song_name_ko: ActiveValue::Set(song.song_name_ko),
            artist_name_en: ActiveValue::Set(song.artist_name_en),
            artist_name_ko: ActiveValue::Set(song.artist_name_ko),
            id_artist: ActiveValue::Set(song.id_artist),
            publish_date: ActiveValue::Set(song.publish_date),
            members: ActiveValue::Set(song.members),
            is_solo: ActiveValue::Set(song.is_solo),
            views: ActiveValue::Set(song.views),
            tags: ActiveValue::Set(song.tags),
            vtype: ActiveValue::Set(song.vtype),
            better_audio_link: ActiveValue::Set(song.better_audio_link),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a song with default values.
///
/// Shorthand for `SongFactory::new(db).build().await`.
pub async fn create_song(db: &DatabaseConnection) -> Result<entity::song::Model, DbErr> {
    SongFactory::new(db).build().await
}

/// Creates a song with a specific link and view count.
pub async fn create_song_with_views(
    db: &DatabaseConnection,
    link: impl Into<String>,
    views: i64,
) -> Result<entity::song::Model, DbErr> {
    SongFactory::new(db).link(link).views(views).build().await
}
