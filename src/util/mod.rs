//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, DOM,
//! styling) from controller logic to improve reuse and testability.

#[cfg(feature = "browser")]
pub mod dom;
pub mod page_effects;
pub mod preference_store;
pub mod theme_surface;
pub mod theme_visual;
