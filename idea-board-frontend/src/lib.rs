//! Browser view of the idea board.
//!
//! The view itself ([`IdeaBoardApp`] and the [`components`]) is plain egui
//! and builds on every target. The WASM entry point, which wires it to the
//! eframe web runner and the gloo-net transport, only exists on `wasm32`.

pub mod app;
pub mod components;

#[cfg(target_arch = "wasm32")]
mod web;

pub use app::IdeaBoardApp;
