//! Client-side gallery state.
//!
//! DESIGN
//! ======
//! `gallery` holds the framework-free state and reducer, `effects` runs the
//! network work the reducer asks for, and `store` adapts both to Leptos
//! signals.

pub mod effects;
pub mod gallery;
pub mod store;
