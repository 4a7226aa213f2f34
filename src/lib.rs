//! # bytetalk-ui
//!
//! WASM behavior layer for the ByteTalk blog pages. Attaches to
//! server-rendered HTML and provides the persisted light/dark theme toggle,
//! flash/button/link animations, and delete confirmation.
//!
//! Everything except the `browser` feature's DOM wiring builds and tests
//! natively.

pub mod app;
pub mod config;
pub mod controller;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::start();
}
