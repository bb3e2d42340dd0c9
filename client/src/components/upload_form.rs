//! File picker, upload button, and error line.

use leptos::prelude::*;

use crate::state::effects;
use crate::state::gallery::GalleryAction;
use crate::state::store::GalleryHandle;
use crate::util::messages::{Message, text};

#[component]
pub fn UploadForm(handle: GalleryHandle) -> impl IntoView {
    let locale = handle.config().locale;
    let state = handle.state;
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Clear the picker once the candidate is consumed or refused.
    #[cfg(feature = "hydrate")]
    Effect::new(move |previous: Option<u32>| {
        let resets = state.with(|s| s.picker_resets);
        if previous.is_some_and(|seen| seen != resets) {
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
        resets
    });

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::state::effects::GalleryStore as _;

            let file = crate::util::file_input::selected_file(&ev);
            let max_bytes = handle.config().max_upload_bytes;
            leptos::task::spawn_local(async move {
                let action = crate::util::file_input::selection_action(file, max_bytes).await;
                handle.dispatch(action);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_upload = move |_| {
        let api = handle.api();
        leptos::task::spawn_local(async move {
            effects::run(&api, &handle, GalleryAction::UploadRequested).await;
        });
    };

    view! {
        <div class="upload-form">
            <input
                class="upload-form__input"
                type="file"
                accept="image/*"
                node_ref=input_ref
                on:change=on_change
            />
            <button
                class="btn btn--primary upload-form__submit"
                type="button"
                on:click=on_upload
                disabled=move || state.with(|s| s.is_uploading)
            >
                <Show
                    when=move || state.with(|s| s.is_uploading)
                    fallback=move || text(locale, Message::UploadButton)
                >
                    <span class="spinner" role="status" aria-label=text(locale, Message::Uploading)></span>
                </Show>
            </button>
            <Show when=move || state.with(|s| s.error_message.is_some())>
                <p class="upload-form__error">
                    {move || state.with(|s| s.error_message.clone().unwrap_or_default())}
                </p>
            </Show>
        </div>
    }
}
