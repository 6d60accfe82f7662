//! Service layer for the catalog core.
//!
//! Services own the operations callers invoke: recording and clearing link failures,
//! reading the catalog, maintaining the bookmark ledger and composing those into the
//! query results served to game sessions. Each service borrows the database
//! connection, delegates storage to the repositories in `data` and maps failures into
//! `AppError` so callers can tell missing songs, bad bookmark references and storage
//! failures apart.

pub mod bookmark;
pub mod catalog;
pub mod link_failure;
pub mod query;
pub mod session_bookmark;

pub use bookmark::BookmarkLedgerService;
pub use catalog::SongCatalogService;
pub use link_failure::LinkFailureService;
pub use query::SongQueryService;
pub use session_bookmark::SessionBookmarks;
