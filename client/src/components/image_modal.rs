//! Full-screen overlay showing one enlarged image.

use leptos::prelude::*;

/// Clicking anywhere on the overlay, image included, closes it.
#[component]
pub fn ImageModal(url: String, alt: &'static str, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="image-modal" role="dialog" aria-modal="true" on:click=move |_| on_close.run(())>
            <img class="image-modal__image" src=url alt=alt />
        </div>
    }
}
