//! Layout Shell
//!
//! Header with the logo link back to the list, and the page body.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <a
                    class="logo"
                    href=Route::List.href()
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::List);
                    }
                >
                    <img src="public/logo.svg" alt="do it" class="logo-wide" />
                    <img src="public/logo-small.svg" alt="do it" class="logo-narrow" />
                </a>
            </header>
            <main class="main-content">{children()}</main>
        </div>
    }
}
