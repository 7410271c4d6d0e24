//! Symbol → style template shapes
//!
//! Point symbols render as their objects about the origin. Line and area
//! symbols render as empty [`Path`]s carrying only stroke and fill; instance
//! rendering fills in the geometry.

use super::errors::{RenderError, Result};
use super::map_objects::render_map_objects;
use super::palette::resolve;
use super::shapes::{Path, Shape};
use crate::models::{AreaSymbol, ColourStore, Fill, LineSymbol, Symbol, SymbolKind};

pub fn render_symbol(symbol: &Symbol, colours: &ColourStore) -> Result<Vec<Shape>> {
    match &symbol.kind {
        SymbolKind::Point(point) => render_map_objects(&point.map_objects, colours),
        SymbolKind::Line(line) => render_line_symbol(line, colours),
        SymbolKind::Area(area) => render_area_symbol(area, colours),
        SymbolKind::Text(_) => Err(RenderError::NotImplemented("text symbols")),
    }
}

fn render_line_symbol(line: &LineSymbol, colours: &ColourStore) -> Result<Vec<Shape>> {
    let (border_colour, z_index) = resolve(colours, line.colour)?;

    Ok(vec![Shape::Path(Path {
        border_width: line.style.width,
        border_colour,
        is_closed: false,
        z_index,
        ..Path::default()
    })])
}

/// Border stroke first, then the fill
fn render_area_symbol(area: &AreaSymbol, colours: &ColourStore) -> Result<Vec<Shape>> {
    let (border_colour, border_z) = resolve(colours, area.border_colour)?;

    let border = Shape::Path(Path {
        border_width: area.style.width,
        border_colour,
        z_index: border_z,
        ..Path::default()
    });

    match &area.fill {
        Fill::Solid { colour } => {
            let (fill, fill_z) = resolve(colours, *colour)?;
            let fill = Shape::Path(Path {
                fill,
                z_index: fill_z,
                ..Path::default()
            });
            Ok(vec![border, fill])
        }
        Fill::Object(_) => Err(RenderError::NotImplemented("object fills")),
    }
}
