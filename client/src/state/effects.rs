//! Async effect runner connecting the gallery reducer to an [`ImageApi`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Components dispatch actions through [`run`]. Any [`Followup`] returned by
//! the reducer is executed here and its outcome fed back as a new action,
//! until the reducer asks for nothing more. Every network error ends up as an
//! action, so nothing escapes to the caller.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::net::api::ImageApi;
use crate::state::gallery::{Followup, GalleryAction};

/// Something that owns a `GalleryState` and can apply actions to it.
pub trait GalleryStore {
    /// Apply `action` and return the reducer's followup, if any.
    fn dispatch(&self, action: GalleryAction) -> Option<Followup>;
}

/// Dispatch `action` and drive every resulting followup to completion.
pub async fn run<A, S>(api: &A, store: &S, action: GalleryAction)
where
    A: ImageApi + ?Sized,
    S: GalleryStore + ?Sized,
{
    let next = store.dispatch(action);
    drive(api, store, next).await;
}

/// Initial list fetch performed when the gallery mounts.
pub async fn load_images<A, S>(api: &A, store: &S)
where
    A: ImageApi + ?Sized,
    S: GalleryStore + ?Sized,
{
    drive(api, store, Some(Followup::FetchList)).await;
}

async fn drive<A, S>(api: &A, store: &S, mut next: Option<Followup>)
where
    A: ImageApi + ?Sized,
    S: GalleryStore + ?Sized,
{
    while let Some(followup) = next {
        let outcome = perform(api, followup).await;
        next = store.dispatch(outcome);
    }
}

async fn perform<A>(api: &A, followup: Followup) -> GalleryAction
where
    A: ImageApi + ?Sized,
{
    match followup {
        Followup::FetchList => match api.list_images().await {
            Ok(body) => GalleryAction::ListLoaded(body),
            Err(e) => GalleryAction::ListFailed(e.to_string()),
        },
        Followup::Upload(candidate) => match api.upload_image(&candidate).await {
            Ok(body) => GalleryAction::UploadSucceeded(body),
            Err(e) => GalleryAction::UploadFailed(e.to_string()),
        },
    }
}
