//! Database repository layer for the catalog core.
//!
//! This module contains repository structs that handle database operations for the
//! song catalog, the link failure tables and the bookmark ledger. Repositories use
//! SeaORM entity models internally and return domain models to keep the data layer
//! separate from the services built on top of it.

pub mod bookmark;
pub mod link_failure;
pub mod song;

#[cfg(test)]
mod test;
