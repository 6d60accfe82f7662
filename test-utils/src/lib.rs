//! Songboard Test Utils
//!
//! Shared testing utilities for the songboard crates: a builder for test contexts
//! backed by in-memory SQLite databases, factories that insert catalog, link failure
//! and bookmark rows, and fixtures that build entity models without touching the
//! database.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_catalog_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_catalog_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     factory::create_song(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
