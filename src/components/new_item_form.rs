//! New Item Form Component
//!
//! Text input plus "+" button for creating items.

use leptos::prelude::*;

use crate::dialog;
use crate::models::CreateItemDto;
use crate::queries::use_create_item;

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let create = use_create_item();
    let (new_name, set_new_name) = signal(String::new());

    // React to each completed create
    Effect::new(move |_| match create.value() {
        Some(Ok(_)) => {
            set_new_name.set(String::new());
            dialog::alert("Item added");
        }
        Some(Err(err)) => {
            tracing::warn!(error = %err, "create failed");
            dialog::alert(&err.to_string());
        }
        None => {}
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        create.dispatch(CreateItemDto::new(name));
    };

    view! {
        <form class="new-item-form" on:submit=submit>
            <input
                type="text"
                class="new-item-input"
                placeholder="What needs doing?"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn" disabled=move || create.pending()>
                "+"
            </button>
        </form>
    }
}
