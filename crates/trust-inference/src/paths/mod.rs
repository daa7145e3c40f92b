//! Path records, their arena, and the ordering used by both priority queues.

pub mod rank;
pub mod store;

pub use rank::PathRank;
pub use store::{Path, PathId, PathStore};
