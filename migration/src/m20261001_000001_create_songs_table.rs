use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Songs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Songs::Link)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string(Songs::SongNameEn))
                    .col(string_null(Songs::SongNameKo))
                    .col(string(Songs::ArtistNameEn))
                    .col(string_null(Songs::ArtistNameKo))
                    .col(integer(Songs::IdArtist))
                    .col(date(Songs::PublishDate))
                    .col(string(Songs::Members))
                    .col(boolean(Songs::IsSolo).default(false))
                    .col(big_integer(Songs::Views).default(0))
                    .col(string_null(Songs::Tags))
                    .col(string(Songs::Vtype))
                    .col(string_null(Songs::BetterAudioLink))
                    .to_owned(),
            )
            .await?;

        // Artist id lookups from game option filters
        manager
            .create_index(
                Index::create()
                    .name("idx_songs_id_artist")
                    .table(Songs::Table)
                    .col(Songs::IdArtist)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_songs_id_artist")
                    .table(Songs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Songs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Songs {
    Table,
    Link,
    SongNameEn,
    SongNameKo,
    ArtistNameEn,
    ArtistNameKo,
    IdArtist,
    PublishDate,
    Members,
    IsSolo,
    Views,
    Tags,
    Vtype,
    BetterAudioLink,
}
