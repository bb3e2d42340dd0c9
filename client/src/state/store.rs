//! Reactive handle binding `GalleryState` to Leptos signals.

use leptos::prelude::*;

use crate::config::GalleryConfig;
use crate::net::api::HttpImageApi;
use crate::state::effects::GalleryStore;
use crate::state::gallery::{Followup, GalleryAction, GalleryState};

/// Copyable bundle of everything gallery components need: the state signal,
/// the config, and the HTTP client built from it.
#[derive(Clone, Copy)]
pub struct GalleryHandle {
    pub state: RwSignal<GalleryState>,
    config: StoredValue<GalleryConfig>,
    api: StoredValue<HttpImageApi>,
}

impl GalleryHandle {
    pub fn new(config: GalleryConfig) -> Self {
        let api = HttpImageApi::new(&config);
        Self {
            state: RwSignal::new(GalleryState::default()),
            config: StoredValue::new(config),
            api: StoredValue::new(api),
        }
    }

    pub fn config(&self) -> GalleryConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> HttpImageApi {
        self.api.get_value()
    }
}

impl GalleryStore for GalleryHandle {
    fn dispatch(&self, action: GalleryAction) -> Option<Followup> {
        self.config
            .try_with_value(|config| self.state.try_update(|state| state.apply(action, config)))
            .flatten()
            .flatten()
    }
}
