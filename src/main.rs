//! Todo Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dialog;
mod error;
mod logging;
mod models;
mod queries;
mod route;
mod schema;

use std::rc::Rc;

use app::App;
use leptos::prelude::*;

use crate::api::{HttpClient, ItemsApi, ReqwestTransport};
use crate::config::Config;

fn main() {
    console_error_panic_hook::set_once();

    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    let config = Config::from_env().with_origin(&origin);
    logging::init(config.log_level);
    tracing::info!(tenant = %config.tenant_id, api = %config.api_base_url, "starting");

    let http = HttpClient::new(config.api_base_url.clone(), Rc::new(ReqwestTransport::new()));
    let api = ItemsApi::new(http);

    mount_to_body(move || view! { <App config=config.clone() api=api.clone() /> });
}
