//! Live rendering
//!
//! Previews for geometry that has not been committed to the map yet: a path
//! symbol following the pointer, or a point symbol's objects hovering at a
//! position. Same rules as instance rendering, drawn at the context's
//! draw opacity.

use super::context::RenderContext;
use super::dash::dash_array;
use super::decorations::mid_style_shapes;
use super::errors::{RenderError, Result};
use super::map_objects::{place_at, render_map_objects};
use super::palette::resolve;
use super::shapes::{Area, Line, Shape};
use crate::models::geometry::polyline_length;
use crate::models::{ColourStore, Fill, MapObject, Symbol, SymbolKind, Vec2};

/// A line or area symbol drawn along an in-progress point sequence
pub fn live_render_path(
    symbol: &Symbol,
    points: &[Vec2],
    colours: &ColourStore,
    ctx: &RenderContext,
) -> Result<Vec<Shape>> {
    let style = symbol
        .path_style()
        .ok_or(RenderError::NotImplemented("live rendering of point and text symbols"))?;

    let dash = style
        .dash_style
        .as_ref()
        .map(|dash| dash_array(polyline_length(points), dash, style.width))
        .unwrap_or_default();

    let mut shapes = match &symbol.kind {
        SymbolKind::Line(line) => {
            let (colour, z_index) = resolve(colours, line.colour)?;
            vec![Shape::Line(Line {
                points: points.to_vec(),
                width: style.width,
                colour,
                z_index,
                dash_array: dash,
                ..Line::default()
            })]
        }
        SymbolKind::Area(area) => {
            let (border_colour, border_z) = resolve(colours, area.border_colour)?;
            let border = Shape::Line(Line {
                points: points.to_vec(),
                width: style.width,
                colour: border_colour,
                z_index: border_z,
                dash_array: dash,
                ..Line::default()
            });

            let Fill::Solid { colour } = &area.fill else {
                return Err(RenderError::NotImplemented("object fills"));
            };
            let (fill, fill_z) = resolve(colours, *colour)?;
            let fill = Shape::Area(Area {
                points: points.to_vec(),
                fill,
                z_index: fill_z,
                ..Area::default()
            });

            vec![border, fill]
        }
        SymbolKind::Point(_) | SymbolKind::Text(_) => {
            return Err(RenderError::NotImplemented("live rendering of point and text symbols"))
        }
    };

    if let Some(mid) = &style.mid_style {
        shapes.extend(mid_style_shapes(points, mid, colours)?);
    }

    for shape in shapes.iter_mut() {
        shape.set_opacity(ctx.draw_opacity);
    }

    Ok(shapes)
}

/// Map objects previewed about `centre`
pub fn live_render_objects(
    objects: &[MapObject],
    centre: Vec2,
    colours: &ColourStore,
    ctx: &RenderContext,
) -> Result<Vec<Shape>> {
    let mut shapes = render_map_objects(objects, colours)?;
    place_at(&mut shapes, centre);
    for shape in shapes.iter_mut() {
        shape.set_opacity(ctx.draw_opacity);
    }
    Ok(shapes)
}
