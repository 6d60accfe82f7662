use sea_orm::entity::prelude::*;

/// Catalog entry keyed by its video link.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "songs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub link: String,
    pub song_name_en: String,
    pub song_name_ko: Option<String>,
    pub artist_name_en: String,
    pub artist_name_ko: Option<String>,
    pub id_artist: i32,
    pub publish_date: Date,
    pub members: Gender,
    pub is_solo: bool,
    pub views: i64,
    pub tags: Option<String>,
    pub vtype: VideoType,
    pub better_audio_link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
    #[sea_orm(string_value = "coed")]
    Coed,
    #[sea_orm(string_value = "alternating")]
    Alternating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum VideoType {
    #[sea_orm(string_value = "main")]
    Main,
    #[sea_orm(string_value = "audio")]
    Audio,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
