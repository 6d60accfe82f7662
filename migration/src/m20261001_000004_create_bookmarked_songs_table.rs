use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookmarkedSongs::Table)
                    .if_not_exists()
                    .col(string(BookmarkedSongs::UserId))
                    .col(string(BookmarkedSongs::Vlink))
                    .col(timestamp(BookmarkedSongs::BookmarkedAt))
                    .primary_key(
                        Index::create()
                            .col(BookmarkedSongs::UserId)
                            .col(BookmarkedSongs::Vlink),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is always per user, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_bookmarked_songs_user_id_bookmarked_at")
                    .table(BookmarkedSongs::Table)
                    .col(BookmarkedSongs::UserId)
                    .col(BookmarkedSongs::BookmarkedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_bookmarked_songs_user_id_bookmarked_at")
                    .table(BookmarkedSongs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BookmarkedSongs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookmarkedSongs {
    Table,
    UserId,
    Vlink,
    BookmarkedAt,
}
