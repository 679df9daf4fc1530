//! Indexed candidate store
//!
//! [`WordIndex`] filters a word list against a [`crate::core::ConstraintState`] through
//! presence, absence and position tables, and memoizes candidate counts in a
//! [`PartitionCache`] shared across scoring workers.

mod cache;
mod word_index;

pub use cache::{CacheStats, CandidateIds, DEFAULT_CACHE_CAPACITY, PartitionCache, WordId};
pub use word_index::WordIndex;
