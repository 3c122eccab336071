//! Browser client for single-player Pong
//!
//! Draws with the canvas 2D API and drives the game from
//! `requestAnimationFrame`. Everything except the `web` module is plain
//! Rust so it can be tested off the browser.

pub mod driver;
pub mod input;
mod logger;
pub mod renderer;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod web;

pub use driver::{FrameDriver, SharedGame};
pub use renderer::draw_frame;
pub use surface::DrawSurface;

#[cfg(target_arch = "wasm32")]
pub use web::{init_panic_hook, start};
