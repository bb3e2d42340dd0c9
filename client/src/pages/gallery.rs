//! Gallery page: upload control, thumbnail grid, and enlarge overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It owns the `GalleryHandle`, fires the list fetch
//! once on mount, and withholds the grid until that fetch resolves.

use leptos::prelude::*;

use crate::components::image_grid::ImageGrid;
use crate::components::image_modal::ImageModal;
use crate::components::upload_form::UploadForm;
use crate::config::GalleryConfig;
use crate::state::effects::GalleryStore;
use crate::state::gallery::GalleryAction;
use crate::state::store::GalleryHandle;
use crate::util::messages::{Message, text};

#[component]
pub fn GalleryPage() -> impl IntoView {
    let config = expect_context::<StoredValue<GalleryConfig>>().get_value();
    let locale = config.locale;
    let handle = GalleryHandle::new(config);
    let state = handle.state;

    // Load on mount.
    #[cfg(feature = "hydrate")]
    {
        let api = handle.api();
        leptos::task::spawn_local(async move {
            crate::state::effects::load_images(&api, &handle).await;
        });
    }

    let on_open = Callback::new(move |id: String| {
        handle.dispatch(GalleryAction::ThumbnailClicked(id));
    });
    let on_close = Callback::new(move |()| {
        handle.dispatch(GalleryAction::OverlayDismissed);
    });

    view! {
        <div class="gallery-page">
            <header class="gallery-page__header">
                <h1>{text(locale, Message::Title)}</h1>
            </header>
            <UploadForm handle=handle />
            <Show
                when=move || !state.with(|s| s.is_initial_loading)
                fallback=move || view! { <p class="gallery-page__loading">{text(locale, Message::Loading)}</p> }
            >
                <ImageGrid state=state locale=locale on_open=on_open />
            </Show>
            {move || {
                state
                    .with(|s| s.enlarged_image_url.clone())
                    .map(|url| view! {
                        <ImageModal url=url alt=text(locale, Message::EnlargedAlt) on_close=on_close />
                    })
            }}
        </div>
    }
}
