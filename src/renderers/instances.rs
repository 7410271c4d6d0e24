//! Instance → positioned shapes

use super::bezier::shape_segments;
use super::dash::dash_array;
use super::decorations::mid_style_shapes;
use super::errors::{RenderError, Result};
use super::map_objects::{place_at, render_map_objects};
use super::shapes::Shape;
use super::symbols::render_symbol;
use crate::models::paths::FLATTEN_STEPS;
use crate::models::{Instance, InstanceKind, Map, MapObject, PathCollection, PointInstance, PointSymbol, Symbol, SymbolKind};

/// Shapes for one placement, with the instance's opacity applied
pub fn render_instance(map: &Map, instance: &Instance) -> Result<Vec<Shape>> {
    let symbol = map
        .symbols
        .get(instance.symbol_id)
        .ok_or(RenderError::UnresolvedSymbol {
            instance: instance.id,
            symbol: instance.symbol_id,
        })?;

    let mut shapes = match (&instance.kind, &symbol.kind) {
        (InstanceKind::Point(point), SymbolKind::Point(template)) => render_point_instance(map, template, point)?,
        (InstanceKind::Line(path), SymbolKind::Line(_)) | (InstanceKind::Area(path), SymbolKind::Area(_)) => {
            render_path_instance(map, symbol, path)?
        }
        (InstanceKind::Text(_), _) => return Err(RenderError::NotImplemented("text instances")),
        _ => {
            return Err(RenderError::SymbolKindMismatch {
                instance: instance.id,
                symbol: symbol.id,
            })
        }
    };

    for shape in shapes.iter_mut() {
        shape.set_opacity(shape.opacity() * instance.opacity);
    }

    Ok(shapes)
}

/// The symbol's objects, rotated if the symbol allows it, around the centre
fn render_point_instance(map: &Map, template: &PointSymbol, point: &PointInstance) -> Result<Vec<Shape>> {
    let rotation = if template.is_rotatable { point.rotation } else { 0.0 };
    let objects: Vec<MapObject> = template.map_objects.iter().map(|o| o.rotated(rotation)).collect();

    let mut shapes = render_map_objects(&objects, &map.colours)?;
    place_at(&mut shapes, point.centre);
    Ok(shapes)
}

/// The symbol's style template filled with the instance's geometry
fn render_path_instance(map: &Map, symbol: &Symbol, path: &PathCollection) -> Result<Vec<Shape>> {
    let mut shapes = render_symbol(symbol, &map.colours)?;
    let segments = shape_segments(path);

    let style = symbol.path_style();
    let dash = style
        .and_then(|s| s.dash_style.as_ref().map(|dash| dash_array(path.length(), dash, s.width)))
        .unwrap_or_default();

    for shape in shapes.iter_mut() {
        if let Shape::Path(p) = shape {
            p.segments = segments.clone();
            if p.border_width > 0.0 {
                p.dash_array = dash.clone();
            }
        }
    }

    if let Some(mid) = style.and_then(|s| s.mid_style.as_ref()) {
        let polyline: Vec<_> = path.segments().iter().flat_map(|s| s.flatten(FLATTEN_STEPS)).collect();
        shapes.extend(mid_style_shapes(&polyline, mid, &map.colours)?);
    }

    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Colour, DashStyle, Fill, LineSymbol, AreaSymbol, MidStyle, PathStyle, PointSymbol, SymbolNumber, Vec2,
    };

    fn map_with_black() -> (Map, Colour) {
        let mut map = Map::new("Test");
        let black = Colour::new("Black", 0xff000000);
        map.add_colour(black.clone()).unwrap();
        (map, black)
    }

    #[test]
    fn test_point_instance_is_centred() {
        let (mut map, black) = map_with_black();
        let symbol = Symbol::new(
            "Boulder",
            SymbolNumber::new(2, 0, 4),
            SymbolKind::Point(PointSymbol {
                map_objects: vec![MapObject::point(black.id, black.id, 2.0, 1.0)],
                is_rotatable: false,
            }),
        );
        let symbol_id = symbol.id;
        map.add_symbol(symbol).unwrap();

        let mut instance = Instance::point(0, symbol_id, Vec2::new(50.0, 40.0), 0.0);
        instance.opacity = 0.5;

        let shapes = render_instance(&map, &instance).unwrap();
        assert_eq!(shapes[0].top_left(), Vec2::new(48.0, 38.0));
        assert_eq!(shapes[1].top_left(), Vec2::new(47.0, 37.0));
        assert!(shapes.iter().all(|s| s.opacity() == 0.5));
    }

    #[test]
    fn test_rotation_ignored_for_fixed_symbols() {
        let (mut map, black) = map_with_black();
        let line = MapObject::line(vec![Vec2::new(0.0, -1.0)], 0.1, black.id);
        let fixed = Symbol::new(
            "Fixed",
            SymbolNumber::new(1, 0, 0),
            SymbolKind::Point(PointSymbol {
                map_objects: vec![line.clone()],
                is_rotatable: false,
            }),
        );
        let rotatable = Symbol::new(
            "Rotatable",
            SymbolNumber::new(1, 0, 1),
            SymbolKind::Point(PointSymbol {
                map_objects: vec![line],
                is_rotatable: true,
            }),
        );
        let (fixed_id, rotatable_id) = (fixed.id, rotatable.id);
        map.add_symbol(fixed).unwrap();
        map.add_symbol(rotatable).unwrap();

        let first_point = |shapes: Vec<Shape>| match &shapes[0] {
            Shape::Line(l) => l.points[0],
            _ => panic!("expected a line"),
        };

        let fixed_shapes = render_instance(&map, &Instance::point(0, fixed_id, Vec2::ZERO, 90.0)).unwrap();
        assert_eq!(first_point(fixed_shapes), Vec2::new(0.0, -1.0));

        let turned = first_point(render_instance(&map, &Instance::point(0, rotatable_id, Vec2::ZERO, 90.0)).unwrap());
        assert!((turned.x - 1.0).abs() < 1e-6);
        assert!(turned.y.abs() < 1e-6);
    }

    #[test]
    fn test_dashed_line_instance() {
        let (mut map, black) = map_with_black();
        let symbol = Symbol::new(
            "Track",
            SymbolNumber::new(5, 0, 6),
            SymbolKind::Line(LineSymbol {
                colour: black.id,
                style: PathStyle::solid(1.0)
                    .with_dash(DashStyle::new(4.0, 2.0))
                    .with_mid(MidStyle::default()),
            }),
        );
        let symbol_id = symbol.id;
        map.add_symbol(symbol).unwrap();

        let path = PathCollection::linear(vec![Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0)]);
        let shapes = render_instance(&map, &Instance::line(0, symbol_id, path)).unwrap();

        assert_eq!(shapes.len(), 1);
        let Shape::Path(p) = &shapes[0] else { panic!("expected a path") };
        assert_eq!(p.segments.len(), 1);
        assert_eq!(p.dash_array.len(), 2);
        assert_eq!(p.dash_array[1], 2.0);
    }

    #[test]
    fn test_area_fill_is_never_dashed() {
        let (mut map, black) = map_with_black();
        let symbol = Symbol::new(
            "Marsh",
            SymbolNumber::new(3, 0, 8),
            SymbolKind::Area(AreaSymbol {
                fill: Fill::solid(black.id),
                border_colour: black.id,
                style: PathStyle::solid(1.0).with_dash(DashStyle::new(4.0, 2.0)),
            }),
        );
        let symbol_id = symbol.id;
        map.add_symbol(symbol).unwrap();

        let path = PathCollection::linear(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(20.0, 20.0),
        ]);
        let shapes = render_instance(&map, &Instance::area(0, symbol_id, path)).unwrap();

        assert_eq!(shapes.len(), 2);
        assert!(!shapes[0].dash_array().is_empty());
        assert!(shapes[1].dash_array().is_empty());
    }

    #[test]
    fn test_missing_symbol() {
        let (map, _) = map_with_black();
        let instance = Instance::point(0, uuid::Uuid::new_v4(), Vec2::ZERO, 0.0);
        assert!(matches!(
            render_instance(&map, &instance),
            Err(RenderError::UnresolvedSymbol { .. })
        ));
    }
}
