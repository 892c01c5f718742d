//! Suggestion cache.
//!
//! [`SuggestionCache`] keeps a bounded, insertion-ordered mapping of
//! `(language, word)` keys to suggestion lists in memory and mirrors it to a
//! [`SuggestionStorage`] backend.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lipika::cache::{MemoryStorage, SuggestionCache};
//!
//! let cache = SuggestionCache::new(Arc::new(MemoryStorage::new()), 100);
//! cache.put("mr", "ram", vec!["राम".to_string()]);
//! assert_eq!(cache.get("mr", " Ram "), Some(vec!["राम".to_string()]));
//! ```

mod key;
mod storage;
mod store;
mod traits;

pub use key::{normalize, InvalidKey, SuggestionKey};
pub use storage::{default_cache_dir, FileStorage, MemoryStorage};
pub use store::{SuggestionCache, DEFAULT_CACHE_CAPACITY, STORAGE_KEY};
pub use traits::{StorageError, SuggestionStorage};
