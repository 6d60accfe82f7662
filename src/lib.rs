//! Song catalog and link availability tracking for a music guessing game bot.
//!
//! The crate answers one question for game sessions: which songs can be played right
//! now. It keeps the immutable song catalog, two independent classes of link failure
//! that exclude songs from play, and a per-user bookmark ledger, and composes them
//! into the query results sessions consume.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
