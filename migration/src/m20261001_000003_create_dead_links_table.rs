use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeadLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeadLinks::Vlink)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_null(DeadLinks::Reason))
                    .col(timestamp(DeadLinks::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeadLinks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeadLinks {
    Table,
    Vlink,
    Reason,
    CreatedAt,
}
