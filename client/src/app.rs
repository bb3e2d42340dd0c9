//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::GalleryConfig;
use crate::pages::gallery::GalleryPage;
use crate::util::messages::{Message, text};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves the build-time gallery config and provides it to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = GalleryConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("gallery config rejected, using defaults: {e}");
        GalleryConfig::default()
    });
    let title = text(config.locale, Message::Title);
    provide_context(StoredValue::new(config));

    view! {
        <Stylesheet id="leptos" href="/pkg/gallery.css"/>
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GalleryPage/>
            </Routes>
        </Router>
    }
}
