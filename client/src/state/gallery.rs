//! Gallery view state and its reducer.
//!
//! DESIGN
//! ======
//! All view state lives in one plain struct mutated only through
//! [`GalleryState::apply`]. The reducer never performs I/O; when an action
//! needs the network it hands back a [`Followup`] for the effect runner in
//! `state::effects` to execute.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use serde_json::Value;

use crate::config::{GalleryConfig, MalformedUploadPolicy, UploadMerge};
use crate::net::types::{ImageRecord, parse_image_listing, parse_uploaded_record};
use crate::util::messages::{Message, text};

/// A user-selected file awaiting upload.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub file_name: String,
    pub mime_type: String,
    /// Size declared by the file picker.
    pub size_bytes: u64,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadCandidate")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.size_bytes)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Why a selection was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    NotAnImage,
    TooLarge,
}

impl Rejection {
    fn message(self) -> Message {
        match self {
            Self::NotAnImage => Message::NotAnImage,
            Self::TooLarge => Message::FileTooLarge,
        }
    }
}

/// Check a candidate against the client-side upload constraints.
///
/// # Errors
///
/// Returns the first [`Rejection`] that applies.
pub fn check_candidate(candidate: &UploadCandidate, max_bytes: u64) -> Result<(), Rejection> {
    if !candidate.mime_type.starts_with("image/") {
        return Err(Rejection::NotAnImage);
    }
    if candidate.size_bytes > max_bytes {
        return Err(Rejection::TooLarge);
    }
    Ok(())
}

/// Events the gallery reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryAction {
    /// List endpoint answered; body is the raw JSON.
    ListLoaded(Value),
    /// List request failed.
    ListFailed(String),
    /// File picker changed; `None` when the selection was cleared.
    FileSelected(Option<UploadCandidate>),
    /// The picked file could not be read into memory.
    FileReadFailed(String),
    /// Upload button pressed.
    UploadRequested,
    /// Upload endpoint answered; body is the raw JSON.
    UploadSucceeded(Value),
    /// Upload request failed.
    UploadFailed(String),
    /// Thumbnail with this image id was clicked.
    ThumbnailClicked(String),
    /// Enlarge overlay was clicked.
    OverlayDismissed,
}

/// Network work requested by the reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum Followup {
    /// Send this candidate to the upload endpoint.
    Upload(UploadCandidate),
    /// Replace the list from the list endpoint.
    FetchList,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub image_list: Vec<ImageRecord>,
    pub pending_upload: Option<UploadCandidate>,
    pub error_message: Option<String>,
    pub is_uploading: bool,
    pub is_initial_loading: bool,
    pub enlarged_image_url: Option<String>,
    /// Bumped whenever the file picker should be emptied.
    pub picker_resets: u32,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            image_list: Vec::new(),
            pending_upload: None,
            error_message: None,
            is_uploading: false,
            is_initial_loading: true,
            enlarged_image_url: None,
            picker_resets: 0,
        }
    }
}

impl GalleryState {
    /// Apply one action and return any network work it requires.
    pub fn apply(&mut self, action: GalleryAction, config: &GalleryConfig) -> Option<Followup> {
        match action {
            GalleryAction::ListLoaded(body) => {
                self.is_initial_loading = false;
                let listing = parse_image_listing(&body);
                if listing.shape.is_none() {
                    log::warn!("image list response has no images array; showing empty gallery");
                }
                if listing.skipped > 0 {
                    log::warn!("skipped {} malformed image records", listing.skipped);
                }
                self.image_list = listing.images;
                None
            }
            GalleryAction::ListFailed(cause) => {
                self.is_initial_loading = false;
                log::error!("image list request failed: {cause}");
                self.set_error(config, Message::ListFailed);
                None
            }
            GalleryAction::FileSelected(selection) => {
                let Some(candidate) = selection else {
                    self.set_error(config, Message::NoFileChosen);
                    self.reset_picker();
                    return None;
                };
                match check_candidate(&candidate, config.max_upload_bytes) {
                    Ok(()) => {
                        self.error_message = None;
                        self.pending_upload = Some(candidate);
                    }
                    Err(rejection) => {
                        self.set_error(config, rejection.message());
                        self.reset_picker();
                    }
                }
                None
            }
            GalleryAction::FileReadFailed(cause) => {
                log::error!("reading selected file failed: {cause}");
                self.set_error(config, Message::FileUnreadable);
                self.reset_picker();
                None
            }
            GalleryAction::UploadRequested => {
                let Some(candidate) = self.pending_upload.take() else {
                    self.set_error(config, Message::SelectFileFirst);
                    return None;
                };
                self.is_uploading = true;
                Some(Followup::Upload(candidate))
            }
            GalleryAction::UploadSucceeded(body) => {
                self.finish_upload();
                self.error_message = None;
                self.merge_upload(&body, config)
            }
            GalleryAction::UploadFailed(cause) => {
                self.finish_upload();
                log::error!("image upload failed: {cause}");
                self.set_error(config, Message::UploadFailed);
                None
            }
            GalleryAction::ThumbnailClicked(id) => {
                let url = self
                    .image_list
                    .iter()
                    .find(|record| record.id == id)
                    .and_then(|record| config.enlarge_variant.pick(&record.variants));
                match url {
                    Some(url) => self.enlarged_image_url = Some(url.to_owned()),
                    None => log::warn!("thumbnail click for unknown image {id}"),
                }
                None
            }
            GalleryAction::OverlayDismissed => {
                self.enlarged_image_url = None;
                None
            }
        }
    }

    fn merge_upload(&mut self, body: &Value, config: &GalleryConfig) -> Option<Followup> {
        if config.after_upload == UploadMerge::Refetch {
            return Some(Followup::FetchList);
        }
        if let Some(record) = parse_uploaded_record(body) {
            self.image_list.push(record);
            return None;
        }
        log::warn!("upload response has no usable result record");
        match config.malformed_upload {
            MalformedUploadPolicy::Ignore => None,
            MalformedUploadPolicy::Refetch => Some(Followup::FetchList),
            MalformedUploadPolicy::Report => {
                self.set_error(config, Message::UploadUnrecognized);
                None
            }
        }
    }

    /// A selection made while the upload was in flight stays pending.
    fn finish_upload(&mut self) {
        self.is_uploading = false;
        if self.pending_upload.is_none() {
            self.reset_picker();
        }
    }

    fn reset_picker(&mut self) {
        self.picker_resets = self.picker_resets.wrapping_add(1);
    }

    fn set_error(&mut self, config: &GalleryConfig, message: Message) {
        self.error_message = Some(text(config.locale, message).to_owned());
    }
}
