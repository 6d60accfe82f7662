//! Factory methods for creating test data.
//!
//! Each table has a factory module: a `Factory` builder for customization where the
//! row has many fields, and plain `create_*`/`mark_*` functions for quick creation.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let song = factory::create_song(&db).await?;
//! factory::mark_dead(&db, &song.link, Some("removed")).await?;
//! factory::create_bookmark(&db, 42, &song.link).await?;
//! ```

pub mod bookmark;
pub mod helpers;
pub mod link_failure;
pub mod song;

pub use bookmark::{create_bookmark, create_bookmark_at};
pub use link_failure::{mark_dead, mark_dead_at, mark_not_downloaded};
pub use song::{create_song, create_song_with_views};
