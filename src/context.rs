//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_query_cache::QueryClient;

use crate::api::ItemsApi;
use crate::config::Config;
use crate::route::Route;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Tenant every request is scoped to
    tenant: StoredValue<String>,
    /// Fixed list page size
    pub page_size: u32,
    api: StoredValue<ItemsApi, LocalStorage>,
    /// Shared query cache
    pub queries: QueryClient,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(config: &Config, api: ItemsApi, queries: QueryClient, initial_route: Route) -> Self {
        let (route, set_route) = signal(initial_route);
        Self {
            tenant: StoredValue::new(config.tenant_id.clone()),
            page_size: config.page_size,
            api: StoredValue::new_local(api),
            queries,
            route,
            set_route,
        }
    }

    pub fn tenant(&self) -> String {
        self.tenant.get_value()
    }

    pub fn api(&self) -> ItemsApi {
        self.api.get_value()
    }

    /// Navigate to `route`, keeping the location hash in sync
    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.href());
        }
        self.set_route.set(route);
    }

    /// Re-read the route after the user edits the URL or uses history
    pub fn sync_route(&self, hash: &str) {
        let route = Route::from_hash(hash);
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
