//! Thumbnail grid for the loaded images.

use leptos::prelude::*;

use crate::net::types::ImageRecord;
use crate::state::gallery::GalleryState;
use crate::util::messages::{Locale, Message, text};

/// Rows for the keyed grid, keyed by `(position, id)` since ids may repeat.
pub fn grid_rows(images: &[ImageRecord]) -> Vec<((usize, String), ImageRecord)> {
    images.iter().enumerate().map(|(index, image)| ((index, image.id.clone()), image.clone())).collect()
}

/// One thumbnail per record, in list order. Clicking a thumbnail reports its
/// image id through `on_open`.
#[component]
pub fn ImageGrid(state: RwSignal<GalleryState>, locale: Locale, on_open: Callback<String>) -> impl IntoView {
    let alt = text(locale, Message::ThumbnailAlt);

    view! {
        <Show
            when=move || state.with(|s| !s.image_list.is_empty())
            fallback=move || view! { <p class="image-grid__empty">{text(locale, Message::EmptyGallery)}</p> }
        >
            <div class="image-grid">
                <For
                    each=move || state.with(|s| grid_rows(&s.image_list))
                    key=|(key, _)| key.clone()
                    children=move |(_, image)| {
                        let id = image.id.clone();
                        let src = image.thumbnail().unwrap_or_default().to_owned();
                        view! {
                            <img
                                class="image-grid__thumb"
                                src=src
                                alt=alt
                                loading="lazy"
                                on:click=move |_| on_open.run(id.clone())
                            />
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
#[path = "image_grid_test.rs"]
mod image_grid_test;
