//! Bounded suggestion cache mirrored to durable storage.
//!
//! The in-memory mirror answers every lookup. The durable copy is a single
//! JSON object (`"lang:word"` → array of strings) under [`STORAGE_KEY`],
//! read once on first access and rewritten in full on every insert.
//!
//! # Eviction
//!
//! Entries are kept in insertion order. When an insert pushes the mapping
//! past capacity, the oldest entries are dropped first-in-first-out before
//! the mapping is serialized. Overwriting an existing key keeps its original
//! position.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::key::SuggestionKey;
use super::traits::{StorageError, SuggestionStorage};

/// Durable storage key holding the serialized mapping.
pub const STORAGE_KEY: &str = "lipika-transliteration-cache";

/// Default maximum number of cached keys.
pub const DEFAULT_CACHE_CAPACITY: usize = 5000;

/// Insertion-ordered mapping of keys to suggestion lists.
#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<SuggestionKey, Vec<String>>,
    order: VecDeque<SuggestionKey>,
}

impl CacheState {
    fn insert(&mut self, key: SuggestionKey, suggestions: Vec<String>) {
        if self.entries.insert(key.clone(), suggestions).is_none() {
            self.order.push_back(key);
        }
    }

    /// Drop oldest entries until at most `capacity` remain.
    fn evict_to(&mut self, capacity: usize) -> usize {
        let mut evicted = 0;
        while self.order.len() > capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                evicted += 1;
            }
        }
        evicted
    }

    fn to_json(&self) -> Result<String, StorageError> {
        let mut document = Map::with_capacity(self.order.len());
        for key in &self.order {
            if let Some(suggestions) = self.entries.get(key) {
                document.insert(key.to_string(), Value::from(suggestions.clone()));
            }
        }
        Ok(serde_json::to_string(&document)?)
    }

    /// Parse a stored document, skipping entries that don't fit the schema.
    fn from_json(contents: &str) -> Self {
        let mut state = Self::default();

        let document = match serde_json::from_str::<Value>(contents) {
            Ok(Value::Object(document)) => document,
            Ok(_) => {
                warn!("Stored suggestion cache is not a JSON object, starting empty");
                return state;
            }
            Err(e) => {
                warn!(error = %e, "Stored suggestion cache is malformed, starting empty");
                return state;
            }
        };

        for (raw_key, value) in document {
            let Ok(key) = raw_key.parse::<SuggestionKey>() else {
                debug!(key = %raw_key, "Skipping invalid cache key");
                continue;
            };
            let Some(suggestions) = string_array(&value) else {
                debug!(key = %raw_key, "Skipping cache entry with invalid suggestions");
                continue;
            };
            if suggestions.is_empty() {
                debug!(key = %raw_key, "Skipping cache entry with no suggestions");
                continue;
            }
            state.insert(key, suggestions);
        }

        state
    }
}

fn string_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

/// Suggestion cache backed by a [`SuggestionStorage`].
///
/// Hydration happens lazily on the first `get`, `put`, or `len` call.
///
/// # Thread Safety
///
/// A single mutex guards the mirror; `put` serializes and writes while
/// holding it, so the durable copy always reflects one consistent snapshot.
pub struct SuggestionCache {
    storage: Arc<dyn SuggestionStorage>,
    capacity: usize,
    state: Mutex<Option<CacheState>>,
}

impl SuggestionCache {
    /// Create a cache over `storage` holding at most `capacity` keys.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(storage: Arc<dyn SuggestionStorage>, capacity: usize) -> Self {
        Self {
            storage,
            capacity: capacity.max(1),
            state: Mutex::new(None),
        }
    }

    /// Look up cached suggestions.
    ///
    /// `language` and `word` are normalized the same way as on insert.
    pub fn get(&self, language: &str, word: &str) -> Option<Vec<String>> {
        let key = SuggestionKey::new(language, word)?;
        self.state().entries.get(&key).cloned()
    }

    /// Insert or overwrite an entry, then persist the whole mapping.
    ///
    /// Storage failures are logged and ignored; the in-memory entry stays.
    pub fn put(&self, language: &str, word: &str, suggestions: Vec<String>) {
        let Some(key) = SuggestionKey::new(language, word) else {
            return;
        };

        let mut state = self.state();
        state.insert(key, suggestions);

        let evicted = state.evict_to(self.capacity);
        if evicted > 0 {
            debug!(evicted, capacity = self.capacity, "Evicted oldest cache entries");
        }

        if let Err(e) = state
            .to_json()
            .and_then(|json| self.storage.write(STORAGE_KEY, &json))
        {
            warn!(error = %e, "Failed to persist suggestion cache");
        }
    }

    /// Load durable storage into the mirror if not already loaded.
    ///
    /// Missing or malformed storage yields an empty mapping.
    pub fn hydrate(&self) {
        drop(self.state());
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.state().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn state(&self) -> MappedMutexGuard<'_, CacheState> {
        MutexGuard::map(self.state.lock(), |state| {
            state.get_or_insert_with(|| self.load())
        })
    }

    fn load(&self) -> CacheState {
        let mut state = match self.storage.read(STORAGE_KEY) {
            Ok(Some(contents)) => CacheState::from_json(&contents),
            Ok(None) => CacheState::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read suggestion cache, starting empty");
                CacheState::default()
            }
        };
        state.evict_to(self.capacity);
        debug!(entries = state.order.len(), "Suggestion cache hydrated");
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStorage;

    fn suggestions(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn stored_document(storage: &MemoryStorage) -> Map<String, Value> {
        let raw = storage.value(STORAGE_KEY).expect("document persisted");
        match serde_json::from_str(&raw).unwrap() {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_get_missing() {
        let cache = SuggestionCache::new(Arc::new(MemoryStorage::new()), 10);
        assert!(cache.get("mr", "ram").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_and_get_normalized() {
        let storage = Arc::new(MemoryStorage::new());
        let cache = SuggestionCache::new(storage.clone(), 10);

        cache.put("mr", "Ram", suggestions(&["राम", "रम"]));

        assert_eq!(cache.get("mr", "  ram "), Some(suggestions(&["राम", "रम"])));
        assert_eq!(
            storage.value(STORAGE_KEY).as_deref(),
            Some(r#"{"mr:ram":["राम","रम"]}"#)
        );
    }

    #[test]
    fn test_put_empty_word_ignored() {
        let storage = Arc::new(MemoryStorage::new());
        let cache = SuggestionCache::new(storage.clone(), 10);

        cache.put("mr", "   ", suggestions(&["x"]));
        assert!(cache.is_empty());
        assert!(storage.value(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest_first() {
        let storage = Arc::new(MemoryStorage::new());
        let cache = SuggestionCache::new(storage.clone(), 3);

        for word in ["a", "b", "c", "d", "e"] {
            cache.put("hi", word, suggestions(&[word]));
        }

        assert_eq!(cache.len(), 3);
        assert!(cache.get("hi", "a").is_none());
        assert!(cache.get("hi", "b").is_none());
        for word in ["c", "d", "e"] {
            assert_eq!(cache.get("hi", word), Some(suggestions(&[word])));
        }

        let document = stored_document(&storage);
        let keys: Vec<_> = document.keys().cloned().collect();
        assert_eq!(keys, vec!["hi:c", "hi:d", "hi:e"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let storage = Arc::new(MemoryStorage::new());
        let cache = SuggestionCache::new(storage.clone(), 2);

        cache.put("hi", "a", suggestions(&["1"]));
        cache.put("hi", "b", suggestions(&["2"]));
        cache.put("hi", "a", suggestions(&["3"]));
        cache.put("hi", "c", suggestions(&["4"]));

        assert!(cache.get("hi", "a").is_none());
        assert_eq!(cache.get("hi", "b"), Some(suggestions(&["2"])));
        assert_eq!(cache.get("hi", "c"), Some(suggestions(&["4"])));
    }

    #[test]
    fn test_round_trip_through_fresh_hydrate() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let cache = SuggestionCache::new(storage.clone(), 10);
            cache.put("mr", "ram", suggestions(&["राम", "रम", "रामा"]));
            cache.put("ta", "amma", suggestions(&["அம்மா"]));
        }

        let reloaded = SuggestionCache::new(storage, 10);
        assert_eq!(
            reloaded.get("mr", "ram"),
            Some(suggestions(&["राम", "रम", "रामा"]))
        );
        assert_eq!(reloaded.get("ta", "amma"), Some(suggestions(&["அம்மா"])));
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn test_hydrate_malformed_is_empty() {
        for contents in ["not json", "[1,2,3]", "42"] {
            let storage = Arc::new(MemoryStorage::with_value(STORAGE_KEY, contents));
            let cache = SuggestionCache::new(storage, 10);
            cache.hydrate();
            assert!(cache.is_empty(), "contents: {}", contents);
        }
    }

    #[test]
    fn test_hydrate_skips_invalid_entries() {
        let storage = Arc::new(MemoryStorage::with_value(
            STORAGE_KEY,
            r#"{"mr:ram":["राम"],"nokey":["x"],"hi:bad":[1,2],"hi:also":"bad","hi:ok":[]}"#,
        ));
        let cache = SuggestionCache::new(storage, 10);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("mr", "ram"), Some(suggestions(&["राम"])));
        assert_eq!(cache.get("hi", "ok"), None);
    }

    #[test]
    fn test_hydrate_truncates_to_newest() {
        let storage = Arc::new(MemoryStorage::with_value(
            STORAGE_KEY,
            r#"{"hi:a":["1"],"hi:b":["2"],"hi:c":["3"]}"#,
        ));
        let cache = SuggestionCache::new(storage, 2);

        assert_eq!(cache.len(), 2);
        assert!(cache.get("hi", "a").is_none());
        assert!(cache.get("hi", "c").is_some());
    }

    #[test]
    fn test_storage_failure_keeps_memory_entry() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_fail_writes(true);
        let cache = SuggestionCache::new(storage.clone(), 10);

        cache.put("mr", "ram", suggestions(&["राम"]));

        assert_eq!(cache.get("mr", "ram"), Some(suggestions(&["राम"])));
        assert!(storage.value(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_zero_capacity_raised_to_one() {
        let cache = SuggestionCache::new(Arc::new(MemoryStorage::new()), 0);
        assert_eq!(cache.capacity(), 1);
        cache.put("hi", "a", suggestions(&["1"]));
        assert_eq!(cache.len(), 1);
    }
}
