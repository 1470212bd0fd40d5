//! Item Detail Page
//!
//! Edit form for one item: completion, name, image, memo; save and delete.

use leptos::prelude::*;
use leptos_query_cache::QueryState;

use crate::components::{DeleteConfirmButton, ImagePanel};
use crate::context::use_app_context;
use crate::dialog;
use crate::models::{Item, ItemDraft, ItemId};
use crate::queries::{use_delete_item, use_item, use_update_item, UpdateItem};
use crate::route::Route;

/// Local edits of the fetched item, not authoritative until saved.
///
/// Seeded once per item id; later emissions of the same item (refetch after
/// an invalidation) leave the edits alone.
fn use_item_draft(
    fetched: impl Fn() -> Option<Item> + 'static,
) -> (RwSignal<ItemDraft>, ReadSignal<Option<Item>>) {
    let draft = RwSignal::new(ItemDraft::default());
    let (loaded, set_loaded) = signal::<Option<Item>>(None);

    Effect::new(move |_| {
        let Some(item) = fetched() else { return };
        let seeded =
            loaded.with_untracked(|current| current.as_ref().is_some_and(|c| c.id == item.id));
        if !seeded {
            draft.set(ItemDraft::from(&item));
            set_loaded.set(Some(item));
        }
    });

    (draft, loaded)
}

#[component]
pub fn ItemDetailPage(id: ItemId) -> impl IntoView {
    let ctx = use_app_context();
    let item = use_item(Signal::stored(Some(id)));
    let update = use_update_item();
    let delete = use_delete_item();

    let (draft, loaded) = use_item_draft(move || item.state().data());

    Effect::new(move |_| match update.value() {
        Some(Ok(_)) => {
            dialog::alert("Saved");
            ctx.navigate(Route::List);
        }
        Some(Err(err)) => {
            tracing::warn!(id, error = %err, "save failed");
            dialog::alert(&err.to_string());
        }
        None => {}
    });

    Effect::new(move |_| match delete.value() {
        Some(Ok(())) => {
            dialog::alert("Deleted");
            ctx.navigate(Route::List);
        }
        Some(Err(err)) => {
            tracing::warn!(id, error = %err, "delete failed");
            dialog::alert(&err.to_string());
        }
        None => {}
    });

    let save = move |_| {
        let Some(original) = loaded.get_untracked() else { return };
        let dto = draft.with_untracked(|d| d.changes(&original));
        if dto.is_empty() {
            ctx.navigate(Route::List);
            return;
        }
        update.dispatch(UpdateItem { id, dto });
    };

    let is_completed = move || draft.with(|d| d.is_completed);

    let form = move || {
        view! {
            <div class="item-detail">
                <div class=move || if is_completed() { "detail-title completed" } else { "detail-title" }>
                    <button
                        type="button"
                        class="check-btn"
                        aria-label=move || if is_completed() { "Mark as not done" } else { "Mark as done" }
                        on:click=move |_| draft.update(|d| d.is_completed = !d.is_completed)
                    >
                        <img
                            src=move || if is_completed() { "public/check.svg" } else { "public/empty-check.svg" }
                            alt=""
                        />
                    </button>
                    <input
                        type="text"
                        class="detail-name"
                        placeholder="Item name"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.name = value);
                        }
                    />
                </div>

                <ImagePanel
                    image_url=Signal::derive(move || draft.with(|d| d.image_url.clone()))
                    on_uploaded=move |url: String| draft.update(|d| d.image_url = Some(url))
                />

                <div class="memo-panel">
                    <div class="memo-header">"Memo"</div>
                    <textarea
                        class="memo-textarea"
                        placeholder="Write a memo"
                        prop:value=move || draft.with(|d| d.memo.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.memo = value);
                        }
                    ></textarea>
                </div>

                <div class="detail-actions">
                    <button
                        type="button"
                        class="action-btn"
                        disabled=move || update.pending()
                        on:click=save
                    >
                        {move || if update.pending() { "Saving…" } else { "Save" }}
                    </button>
                    <DeleteConfirmButton
                        label="Delete"
                        pending=Signal::derive(move || delete.pending())
                        on_confirm=move |_| delete.dispatch(id)
                    />
                </div>
            </div>
        }
    };

    view! {
        {move || match item.state() {
            QueryState::Loading => view! { <p class="status">"Loading…"</p> }.into_any(),
            QueryState::Idle => view! { <p class="status">"No data"</p> }.into_any(),
            QueryState::Failed(err) => {
                view! { <p class="status error">"Error: " {err.to_string()}</p> }.into_any()
            }
            QueryState::Ready(_) => form().into_any(),
        }}
    }
}
