//! Browser file-picker helpers.
//!
//! Turns an `<input type="file">` change event into a [`GalleryAction`].
//! Bytes are only read when the declared type and size already pass
//! [`check_candidate`], so oversized files never get loaded into memory.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::state::gallery::{GalleryAction, UploadCandidate, check_candidate};

/// First file of the input that fired `ev`, if any.
pub fn selected_file(ev: &leptos::ev::Event) -> Option<File> {
    ev.target()?.dyn_into::<HtmlInputElement>().ok()?.files()?.get(0)
}

/// Build the selection action for `file`, reading its bytes when acceptable.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub async fn selection_action(file: Option<File>, max_bytes: u64) -> GalleryAction {
    let Some(file) = file else {
        return GalleryAction::FileSelected(None);
    };

    let mut candidate = UploadCandidate {
        file_name: file.name(),
        mime_type: file.type_(),
        size_bytes: file.size() as u64,
        bytes: Vec::new(),
    };
    if check_candidate(&candidate, max_bytes).is_err() {
        return GalleryAction::FileSelected(Some(candidate));
    }

    match read_bytes(&file).await {
        Ok(bytes) => {
            candidate.bytes = bytes;
            GalleryAction::FileSelected(Some(candidate))
        }
        Err(e) => GalleryAction::FileReadFailed(e),
    }
}

async fn read_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
