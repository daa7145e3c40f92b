//! Data structures shared across crates.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet, SmallVec8};
