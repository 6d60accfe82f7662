//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models for unit tests and serve as the defaults
//! factories insert. Unlike factories, fixtures do NOT touch the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let song = fixture::song::entity();
//!
//! let popular = fixture::song::entity_builder()
//!     .link("popular")
//!     .views(50_000_000)
//!     .build();
//! ```

pub mod song;

pub use song::{entity as song_entity, entity_builder as song_entity_builder};
