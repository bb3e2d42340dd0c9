//! Networking modules for the remote image API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` decodes their JSON bodies.

pub mod api;
pub mod types;
