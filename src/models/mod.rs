//! Map data model
//!
//! The map aggregate owns three ordered stores: colours (the print-order
//! stack), symbols (style definitions) and instances (placements). Entities
//! reference each other by id only and are resolved through store lookups.

pub mod colour;
pub mod errors;
pub mod font;
pub mod geometry;
pub mod instances;
pub mod map;
pub mod map_objects;
pub mod paths;
pub mod stores;
pub mod styles;
pub mod symbols;

// Re-export commonly used types
pub use colour::{Colour, TRANSPARENT_ID};
pub use errors::ModelError;
pub use font::{Font, FontStyle, HorizontalAlignment, VerticalAlignment};
pub use geometry::{BoundingBox, Vec2};
pub use instances::{Instance, InstanceKind, PointInstance, TextInstance};
pub use map::Map;
pub use map_objects::{AreaObject, LineObject, MapObject, MapObjectKind, PointObject, TextObject};
pub use paths::{BezierPoint, PathCollection, PathSegment};
pub use stores::{ColourStore, InstanceStore, Layer, StoreChange, SymbolStore, DEFAULT_LAYER};
pub use styles::{DashStyle, Fill, MidStyle, ObjectFill, PathStyle};
pub use symbols::{AreaSymbol, LineSymbol, PointSymbol, Symbol, SymbolKind, SymbolNumber, SymbolType, TextSymbol};
