pub use super::bookmarked_song::Entity as BookmarkedSong;
pub use super::dead_link::Entity as DeadLink;
pub use super::not_downloaded::Entity as NotDownloaded;
pub use super::song::Entity as Song;
