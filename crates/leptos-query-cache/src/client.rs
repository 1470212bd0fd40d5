//! Query Client
//!
//! Reactive handle over the shared [`QueryCache`]. Invalidation bumps an
//! epoch signal that every mounted query reads, so queries under an
//! invalidated prefix refetch while fresh ones answer from the cache.

use leptos::prelude::*;

use crate::cache::QueryCache;
use crate::key::QueryKey;

#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache>,
    epoch: RwSignal<u64>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            cache: StoredValue::new(QueryCache::new()),
            epoch: RwSignal::new(0),
        }
    }

    /// Subscribe the current reactive scope to invalidations
    pub fn track(&self) -> u64 {
        self.epoch.get()
    }

    pub fn epoch_untracked(&self) -> u64 {
        self.epoch.get_untracked()
    }

    /// Fresh cached value for `key`, if any
    pub fn cached<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.cache.with_value(|cache| cache.get::<T>(key))
    }

    /// Cached value for `key` even if it has been invalidated
    pub fn cached_stale<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        self.cache.with_value(|cache| cache.get_stale::<T>(key))
    }

    pub fn is_stale(&self, key: &QueryKey) -> Option<bool> {
        self.cache.with_value(|cache| cache.is_stale(key))
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.cache.with_value(|cache| cache.contains(key))
    }

    /// Record a query result. Does not notify subscribers.
    pub fn set_query_data<T>(&self, key: QueryKey, value: T)
    where
        T: Send + Sync + 'static,
    {
        tracing::debug!(key = %key, "cache store");
        self.cache.update_value(|cache| cache.insert(key, value));
    }

    /// Mark everything under `prefix` stale and wake every mounted query
    pub fn invalidate_queries(&self, prefix: &QueryKey) {
        let marked = self
            .cache
            .try_update_value(|cache| cache.invalidate(prefix))
            .unwrap_or_default();
        tracing::debug!(prefix = %prefix, marked, "cache invalidate");
        self.epoch.update(|epoch| *epoch += 1);
    }

    /// Evict everything under `prefix` without waking queries
    pub fn remove_queries(&self, prefix: &QueryKey) {
        let removed = self
            .cache
            .try_update_value(|cache| cache.remove(prefix))
            .unwrap_or_default();
        tracing::debug!(prefix = %prefix, removed, "cache evict");
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a client and provide it to the component tree
pub fn provide_query_client() -> QueryClient {
    let client = QueryClient::new();
    provide_context(client);
    client
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_key;

    #[test]
    fn test_invalidate_bumps_epoch_and_marks_stale() {
        let owner = Owner::new();
        owner.set();

        let client = QueryClient::new();
        let detail = query_key!["items", "demo", "detail", 4i64];
        client.set_query_data(detail.clone(), 42u64);
        assert_eq!(client.cached::<u64>(&detail), Some(42));

        let before = client.epoch_untracked();
        client.invalidate_queries(&query_key!["items", "demo"]);
        assert_eq!(client.epoch_untracked(), before + 1);
        assert_eq!(client.cached::<u64>(&detail), None);
        assert_eq!(client.cached_stale::<u64>(&detail), Some(42));
    }

    #[test]
    fn test_remove_does_not_bump_epoch() {
        let owner = Owner::new();
        owner.set();

        let client = QueryClient::new();
        let detail = query_key!["items", "demo", "detail", 4i64];
        client.set_query_data(detail.clone(), 42u64);

        let before = client.epoch_untracked();
        client.remove_queries(&detail);
        assert_eq!(client.epoch_untracked(), before);
        assert!(!client.contains(&detail));
    }
}
