//! Version 1 document format
//!
//! ```text
//! <?meta version="1"?>
//! <Map title="...">
//!   <Colours>   <Colour id name hex/> ...
//!   <Symbols>   <PointSymbol|LineSymbol|AreaSymbol id name description number isUncrossable isHelper> ...
//!   <Instances> <PointInstance|LineInstance|AreaInstance id layer [opacity] [rotation]> ...
//!   <Layers>    <Layer name index/> ...          (only when not the default layer set)
//! </Map>
//! ```

mod load;
mod save;

pub use load::load_map;
pub use save::save_map;

pub const VERSION: &str = "1";
