//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the gallery surfaces and push user input into the
//! shared `GalleryHandle` owned by the page.

pub mod image_grid;
pub mod image_modal;
pub mod upload_form;
