pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_songs_table;
mod m20261001_000002_create_not_downloaded_table;
mod m20261001_000003_create_dead_links_table;
mod m20261001_000004_create_bookmarked_songs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_songs_table::Migration),
            Box::new(m20261001_000002_create_not_downloaded_table::Migration),
            Box::new(m20261001_000003_create_dead_links_table::Migration),
            Box::new(m20261001_000004_create_bookmarked_songs_table::Migration),
        ]
    }
}
