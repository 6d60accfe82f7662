//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data layer
//! boundary so services never handle entity models directly.

pub mod bookmark;
pub mod link_failure;
pub mod queried_song;
pub mod song;
