//! Map Engine WASM Module
//!
//! Core of a symbol-based cartographic map editor: the map model, versioned
//! document marshalling and a renderer-agnostic shape pipeline, exposed to
//! the browser UI through `api`.

pub mod xml;
pub mod models;
pub mod converters;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use converters::{load, save, save_to_string, MapperError};
pub use models::Map;
pub use renderers::{render_map, DisplayList, RenderContext, Shape};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    init_logger();

    log::info!("Map engine WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("Logger already installed: {}", e);
    }
}
