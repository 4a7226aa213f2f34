//! Client-side state models.
//!
//! DESIGN
//! ======
//! State types here are plain values with no browser dependency so the
//! policies they encode can be tested natively.

pub mod theme;
