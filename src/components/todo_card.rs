//! Todo Card Component
//!
//! One list entry: completion toggle plus a link to the detail page.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{ItemId, ListEntry};
use crate::route::Route;

#[component]
pub fn TodoCard(
    entry: ListEntry,
    /// Called with the id and the requested completion state
    #[prop(into)] on_toggle: Callback<(ItemId, bool)>,
) -> impl IntoView {
    let ctx = use_app_context();

    let id = entry.id;
    let completed = entry.is_completed;
    let route = Route::Item(id);

    view! {
        <div class=if completed { "todo-card completed" } else { "todo-card" }>
            <button
                type="button"
                class="check-btn"
                aria-label=if completed { "Mark as not done" } else { "Mark as done" }
                on:click=move |_| on_toggle.run((id, !completed))
            >
                <img src=if completed { "public/check.svg" } else { "public/empty-check.svg" } alt="" />
            </button>
            <a
                class="todo-name"
                href=route.href()
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(route);
                }
            >
                {entry.name}
            </a>
        </div>
    }
}
