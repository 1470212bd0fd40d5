//! Query Cache
//!
//! Type-erased map from [`QueryKey`] to the last value a query produced.
//! Entries are either fresh or stale; invalidation marks stale, removal evicts.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::key::QueryKey;

type AnyValue = Arc<dyn Any + Send + Sync>;

struct Entry {
    value: AnyValue,
    stale: bool,
}

/// Process-wide store of last-known query results
#[derive(Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fresh value, replacing whatever was cached under `key`
    pub fn insert<T>(&mut self, key: QueryKey, value: T)
    where
        T: Send + Sync + 'static,
    {
        self.entries.insert(key, Entry { value: Arc::new(value), stale: false });
    }

    /// Fresh value under `key`. Stale entries and type mismatches read as a miss.
    pub fn get<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + 'static,
    {
        self.entries
            .get(key)
            .filter(|entry| !entry.stale)
            .and_then(|entry| entry.value.downcast_ref::<T>())
            .cloned()
    }

    /// Value under `key` whether or not it has been invalidated
    pub fn get_stale<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + 'static,
    {
        self.entries
            .get(key)
            .and_then(|entry| entry.value.downcast_ref::<T>())
            .cloned()
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    /// `None` when nothing is cached under `key`
    pub fn is_stale(&self, key: &QueryKey) -> Option<bool> {
        self.entries.get(key).map(|entry| entry.stale)
    }

    /// Mark every entry under `prefix` stale. Returns how many were marked.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> usize {
        let mut count = 0;
        for (key, entry) in self.entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.stale = true;
                count += 1;
            }
        }
        count
    }

    /// Evict every entry under `prefix`. Returns how many were removed.
    pub fn remove(&mut self, prefix: &QueryKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, entry)| (key.to_string(), entry.stale)))
            .finish()
    }
}
