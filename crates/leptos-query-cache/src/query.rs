//! Queries
//!
//! `use_query` wraps a fetcher in a `LocalResource` keyed by a [`QueryKey`].

use std::future::Future;

use leptos::prelude::*;

use crate::client::QueryClient;
use crate::key::QueryKey;

/// Key plus enabled flag, recomputed reactively
#[derive(Clone, Debug, PartialEq)]
pub struct QueryOptions {
    pub key: QueryKey,
    pub enabled: bool,
}

impl QueryOptions {
    pub fn new(key: QueryKey) -> Self {
        Self { key, enabled: true }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Render-facing view of a query
#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T, E> {
    /// Disabled, nothing to fetch
    Idle,
    Loading,
    Ready(T),
    Failed(E),
}

impl<T, E> QueryState<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(self) -> Option<T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(self) -> Option<E> {
        match self {
            QueryState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

enum Plan<T, Fut> {
    Disabled,
    Cached(T),
    Fetch(QueryKey, Fut),
}

pub struct Query<T: 'static, E: 'static> {
    resource: LocalResource<Option<Result<T, E>>>,
}

impl<T: 'static, E: 'static> Clone for Query<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, E: 'static> Copy for Query<T, E> {}

impl<T, E> Query<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    /// Current state; tracked, so reading it inside a view re-renders on change
    pub fn state(&self) -> QueryState<T, E> {
        match self.resource.get() {
            None => QueryState::Loading,
            Some(None) => QueryState::Idle,
            Some(Some(Ok(data))) => QueryState::Ready(data),
            Some(Some(Err(err))) => QueryState::Failed(err),
        }
    }

    pub fn refetch(&self) {
        self.resource.refetch();
    }
}

/// Run `fetcher` for the key produced by `options`.
///
/// The query re-runs when any signal read by `options` or `fetcher` changes,
/// and on every invalidation. A fresh cache entry short-circuits the fetch.
pub fn use_query<T, E, O, F, Fut>(client: QueryClient, options: O, fetcher: F) -> Query<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + 'static,
    O: Fn() -> QueryOptions + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let resource = LocalResource::new(move || {
        let QueryOptions { key, enabled } = options();
        client.track();

        let plan = if !enabled {
            Plan::Disabled
        } else if let Some(data) = client.cached::<T>(&key) {
            Plan::Cached(data)
        } else {
            Plan::Fetch(key, fetcher())
        };

        async move {
            match plan {
                Plan::Disabled => None,
                Plan::Cached(data) => Some(Ok(data)),
                Plan::Fetch(key, request) => {
                    tracing::debug!(key = %key, "query fetch");
                    let result = request.await;
                    if let Ok(data) = &result {
                        client.set_query_data(key, data.clone());
                    }
                    Some(result)
                }
            }
        }
    });

    Query { resource }
}
