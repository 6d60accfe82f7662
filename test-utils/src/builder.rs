use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the table group helpers, then call
/// `build()` to create an in-memory SQLite database holding those tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Song, NotDownloaded};
///
/// let test = TestBuilder::new()
///     .with_table(Song)
///     .with_table(NotDownloaded)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. The
    /// table is created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables availability queries read:
    /// - Song
    /// - NotDownloaded
    /// - DeadLink
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Song)
            .with_table(NotDownloaded)
            .with_table(DeadLink)
    }

    /// Adds the catalog tables plus the bookmark ledger.
    ///
    /// Use this when testing bookmarks or queries that join bookmarks with the catalog.
    pub fn with_bookmark_tables(self) -> Self {
        self.with_catalog_tables().with_table(BookmarkedSong)
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
