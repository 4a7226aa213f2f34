//! Page-level controllers.
//!
//! ARCHITECTURE
//! ============
//! Controllers compose `state` policies with `util` storage and DOM seams.
//! They are generic over those seams so the same code runs in the browser
//! and in native tests.

pub mod theme;
