//! Map Engine WASM API
//!
//! This module provides the JavaScript-facing API consumed by the map UI
//! adapter.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, id parsing and error conversion
//! - `map`: the loaded-map slot plus load, save, render and preview entry points

pub mod helpers;
pub mod map;

pub use map::{
    display_list, instance_shapes, live_object_shapes, live_path_shapes, load_map_text, save_map_text,
    selection_overlay, MapSummary,
};
