//! Item List Page
//!
//! One fetched list, split into "To do" and "Done" sections.

use leptos::prelude::*;
use leptos_query_cache::QueryState;

use crate::components::{NewItemForm, TodoCard};
use crate::context::use_app_context;
use crate::dialog;
use crate::models::{partition_by_completion, ItemId, ListEntry, UpdateItemDto};
use crate::queries::{use_items, use_update_item, UpdateItem};

/// First page only; there is no pagination UI
const FIRST_PAGE: u32 = 1;

#[component]
pub fn ItemListPage() -> impl IntoView {
    let ctx = use_app_context();
    let items = use_items(FIRST_PAGE, ctx.page_size);
    let update = use_update_item();

    Effect::new(move |_| {
        if let Some(Err(err)) = update.value() {
            tracing::warn!(error = %err, "toggle failed");
            dialog::alert(&err.to_string());
        }
    });

    let on_toggle = Callback::new(move |(id, is_completed): (ItemId, bool)| {
        update.dispatch(UpdateItem { id, dto: UpdateItemDto::completion(is_completed) });
    });

    view! {
        <NewItemForm />
        {move || match items.state() {
            QueryState::Idle | QueryState::Loading => view! { <p class="status">"Loading…"</p> }.into_any(),
            QueryState::Failed(err) => {
                view! { <p class="status error">"Error: " {err.to_string()}</p> }.into_any()
            }
            QueryState::Ready(entries) => {
                let (todo, done) = partition_by_completion(&entries);
                view! {
                    <section class="item-sections">
                        <ItemSection title="TO DO" section_class="section-todo" entries=todo on_toggle=on_toggle />
                        <ItemSection title="DONE" section_class="section-done" entries=done on_toggle=on_toggle />
                    </section>
                }
                .into_any()
            }
        }}
    }
}

#[component]
fn ItemSection(
    title: &'static str,
    section_class: &'static str,
    entries: Vec<ListEntry>,
    on_toggle: Callback<(ItemId, bool)>,
) -> impl IntoView {
    let empty = entries.is_empty();

    view! {
        <div class=format!("item-section {}", section_class)>
            <h2 class="section-title">{title}</h2>
            {empty.then(|| view! { <p class="section-empty">"Nothing here yet"</p> })}
            {entries
                .into_iter()
                .map(|entry| view! { <TodoCard entry=entry on_toggle=on_toggle /> })
                .collect_view()}
        </div>
    }
}
