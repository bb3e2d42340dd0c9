//! HTTP helpers for the remote image API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! gallery only talks to the image API from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Both calls return the raw JSON body on success. Shape validation happens
//! in the reducer so a malformed body degrades the view instead of failing
//! the request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use crate::config::GalleryConfig;
use crate::state::gallery::UploadCandidate;

/// Multipart field name the upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "file";

/// Errors produced by image API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("unexpected status: {status}")]
    Status { status: u16 },

    /// The response body was not JSON.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("image api not available on server")]
    Unavailable,
}

/// Async access to the image API. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait ImageApi {
    /// Fetch the image collection.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is not JSON.
    async fn list_images(&self) -> Result<Value, ApiError>;

    /// Upload `candidate` as multipart field [`UPLOAD_FIELD`].
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body is not JSON.
    async fn upload_image(&self, candidate: &UploadCandidate) -> Result<Value, ApiError>;
}

/// [`ImageApi`] backed by `fetch` through `gloo-net`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpImageApi {
    list_url: String,
    upload_url: String,
}

impl HttpImageApi {
    pub fn new(config: &GalleryConfig) -> Self {
        Self { list_url: config.list_url(), upload_url: config.upload_url() }
    }
}

#[async_trait::async_trait(?Send)]
impl ImageApi for HttpImageApi {
    async fn list_images(&self) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.list_url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn upload_image(&self, candidate: &UploadCandidate) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = multipart_form(candidate)?;
            let resp = gloo_net::http::Request::post(&self.upload_url)
                .body(form)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = candidate;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json(resp: gloo_net::http::Response) -> Result<Value, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }
    resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Build a `FormData` body holding the candidate bytes as a named blob.
/// The browser supplies the multipart boundary header.
#[cfg(feature = "hydrate")]
fn multipart_form(candidate: &UploadCandidate) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));

    let bytes = js_sys::Uint8Array::from(candidate.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&candidate.mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;

    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &candidate.file_name)
        .map_err(js_err)?;
    Ok(form)
}
