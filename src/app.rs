//! Todo Board App
//!
//! Root component: provides context and switches pages on the hash route.

use leptos::ev;
use leptos::prelude::*;
use leptos_query_cache::provide_query_client;

use crate::api::ItemsApi;
use crate::components::{ItemDetailPage, ItemListPage, Layout};
use crate::config::Config;
use crate::context::AppContext;
use crate::route::Route;

fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

#[component]
pub fn App(config: Config, api: ItemsApi) -> impl IntoView {
    let queries = provide_query_client();

    let ctx = AppContext::new(&config, api, queries, Route::from_hash(&current_hash()));
    provide_context(ctx);

    // Back/forward and hand-edited URLs
    let _ = window_event_listener(ev::hashchange, move |_| ctx.sync_route(&current_hash()));

    view! {
        <Layout>
            {move || match ctx.route.get() {
                Route::List => view! { <ItemListPage /> }.into_any(),
                Route::Item(id) => view! { <ItemDetailPage id=id /> }.into_any(),
                Route::BadItemId => view! { <p class="status error">"Invalid item"</p> }.into_any(),
            }}
        </Layout>
    }
}
