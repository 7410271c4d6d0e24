//! Rendering pipeline
//!
//! Pure transforms from the map model to [`Shape`] records. Nothing here
//! mutates the map; colours are resolved against the map's colour stack for
//! both value and z-index at render time.

pub mod bezier;
pub mod context;
pub mod dash;
pub mod decorations;
pub mod display_list;
pub mod errors;
pub mod instances;
pub mod live;
pub mod map_objects;
pub mod palette;
pub mod selection;
pub mod shapes;
pub mod symbols;

use crate::models::{Map, Symbol};

// Re-export commonly used types
pub use context::RenderContext;
pub use dash::dash_array;
pub use display_list::{DisplayItem, DisplayList};
pub use errors::RenderError;
pub use instances::render_instance;
pub use live::{live_render_objects, live_render_path};
pub use map_objects::{render_map_object, render_map_objects};
pub use selection::{selection_box, selection_handles};
pub use shapes::{Area, Ellipse, Line, Path, Rectangle, Shape, ShapeSegment, Text};
pub use symbols::render_symbol;

/// Every instance of the map with the symbol it was drawn with
pub fn render_map(map: &Map) -> errors::Result<Vec<(&Symbol, Vec<Shape>)>> {
    let mut rendered = Vec::with_capacity(map.instances.len());
    for instance in map.instances.iter() {
        let symbol = map.symbols.get(instance.symbol_id).ok_or(RenderError::UnresolvedSymbol {
            instance: instance.id,
            symbol: instance.symbol_id,
        })?;
        rendered.push((symbol, render_instance(map, instance)?));
    }
    log::info!("Rendered {} instances of '{}'", rendered.len(), map.title);
    Ok(rendered)
}
