//! SeaORM entity definitions for the song catalog, link failure and bookmark tables.

pub mod prelude;

pub mod bookmarked_song;
pub mod dead_link;
pub mod not_downloaded;
pub mod song;
