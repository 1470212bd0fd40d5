//! Image Panel Component
//!
//! Shows the item's image and uploads a replacement picked from disk.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::dialog;
use crate::models::ImageFile;
use crate::queries::use_upload_image;
use crate::schema;

/// Read a picked file into memory
async fn read_image(file: web_sys::File) -> Result<ImageFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Could not read file: {:?}", e))?;
    Ok(ImageFile {
        name: file.name(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn ImagePanel(
    #[prop(into)] image_url: Signal<Option<String>>,
    /// Receives the stored URL after a successful upload
    #[prop(into)] on_uploaded: Callback<String>,
) -> impl IntoView {
    let upload = use_upload_image();
    let input_ref = NodeRef::<html::Input>::new();

    let reset_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    Effect::new(move |_| match upload.value() {
        Some(Ok(url)) => on_uploaded.run(url),
        Some(Err(err)) => {
            tracing::warn!(error = %err, "upload failed");
            dialog::alert(&err.to_string());
            reset_input();
        }
        None => {}
    });

    let on_change = move |_| {
        let Some(input) = input_ref.get_untracked() else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };

        // Skip reading files that would be rejected anyway
        if let Err(rejection) = schema::validate_image_meta(&file.name(), file.size() as u64) {
            dialog::alert(&rejection.to_string());
            reset_input();
            return;
        }
        spawn_local(async move {
            match read_image(file).await {
                Ok(image) => upload.dispatch(image),
                Err(err) => {
                    dialog::alert(&err);
                    reset_input();
                }
            }
        });
    };

    let pick = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    view! {
        <div class="image-panel">
            {move || match image_url.get() {
                Some(url) => view! { <img class="item-image" src=url alt="Item image" /> }.into_any(),
                None => view! {
                    <div class="image-placeholder">
                        <span class="image-placeholder-icon">"🖼️"</span>
                        <p>{move || if upload.pending() { "Uploading…" } else { "Upload an image" }}</p>
                    </div>
                }
                .into_any(),
            }}
            <button
                type="button"
                class="image-pick-btn"
                title="Add image"
                disabled=move || upload.pending()
                on:click=pick
            >
                "+"
            </button>
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                class="hidden"
                on:change=on_change
            />
        </div>
    }
}
