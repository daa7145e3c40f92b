//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec optimized for path edge lists (most trust chains are short).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
