//! Leptos Query Cache
//!
//! Small declarative data-fetching layer for Leptos CSR apps:
//! hierarchical keys, a shared cache, prefix invalidation and eviction,
//! plus query and mutation hooks on top of `LocalResource` and `Action`.

mod cache;
mod client;
mod key;
mod mutation;
mod query;

pub use cache::QueryCache;
pub use client::{provide_query_client, use_query_client, QueryClient};
pub use key::{KeyPart, QueryKey};
pub use mutation::{use_mutation, use_stateless_mutation, Mutation};
pub use query::{use_query, Query, QueryOptions, QueryState};
