//! Map object → shapes
//!
//! Shapes come out anchored at the origin; placing them is the caller's job
//! (see [`place_at`]).

use super::errors::{RenderError, Result};
use super::palette::resolve;
use super::shapes::{Area, Ellipse, Line, Shape};
use crate::models::{AreaObject, ColourStore, Fill, LineObject, MapObject, MapObjectKind, PointObject, Vec2};

pub fn render_map_objects(objects: &[MapObject], colours: &ColourStore) -> Result<Vec<Shape>> {
    let mut shapes = Vec::new();
    for object in objects {
        shapes.extend(render_map_object(object, colours)?);
    }
    Ok(shapes)
}

pub fn render_map_object(object: &MapObject, colours: &ColourStore) -> Result<Vec<Shape>> {
    match &object.kind {
        MapObjectKind::Point(point) => render_point_object(point, colours),
        MapObjectKind::Line(line) => render_line_object(line, colours),
        MapObjectKind::Area(area) => render_area_object(area, colours),
        MapObjectKind::Text(_) => Err(RenderError::NotImplemented("text objects")),
    }
}

/// Disc of the inner radius plus a ring stroked out to inner + outer
fn render_point_object(point: &PointObject, colours: &ColourStore) -> Result<Vec<Shape>> {
    let (inner_colour, inner_z) = resolve(colours, point.inner_colour)?;
    let (outer_colour, outer_z) = resolve(colours, point.outer_colour)?;

    let inner_diameter = 2.0 * point.inner_radius;
    let outer_diameter = 2.0 * (point.inner_radius + point.outer_radius);

    let inner = Ellipse {
        size: Vec2::new(inner_diameter, inner_diameter),
        fill: inner_colour,
        border_width: 0.0,
        z_index: inner_z,
        ..Ellipse::default()
    };

    let outer = Ellipse {
        size: Vec2::new(outer_diameter, outer_diameter),
        border_width: point.outer_radius,
        border_colour: outer_colour,
        z_index: outer_z,
        ..Ellipse::default()
    };

    Ok(vec![Shape::Ellipse(inner), Shape::Ellipse(outer)])
}

fn render_line_object(line: &LineObject, colours: &ColourStore) -> Result<Vec<Shape>> {
    let (colour, z_index) = resolve(colours, line.colour)?;

    Ok(vec![Shape::Line(Line {
        points: line.points.clone(),
        width: line.width,
        colour,
        z_index,
        ..Line::default()
    })])
}

fn render_area_object(area: &AreaObject, colours: &ColourStore) -> Result<Vec<Shape>> {
    let (border_colour, border_z) = resolve(colours, area.border_colour)?;

    let border = Shape::Line(Line {
        points: area.points.clone(),
        width: area.width,
        colour: border_colour,
        z_index: border_z,
        ..Line::default()
    });

    match &area.fill {
        Fill::Solid { colour } => {
            let (fill, fill_z) = resolve(colours, *colour)?;
            let fill = Shape::Area(Area {
                points: area.points.clone(),
                fill,
                z_index: fill_z,
                ..Area::default()
            });
            Ok(vec![border, fill])
        }
        Fill::Object(_) => Err(RenderError::NotImplemented("object fills")),
    }
}

/// Position origin-anchored shapes about `centre`
///
/// Ellipses are centred on the point; every other shape is anchored at it.
pub fn place_at(shapes: &mut [Shape], centre: Vec2) {
    for shape in shapes.iter_mut() {
        let top_left = match shape {
            Shape::Ellipse(ellipse) => centre - ellipse.size * 0.5,
            _ => centre,
        };
        shape.set_top_left(top_left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Colour, ObjectFill};

    fn two_colours() -> (ColourStore, Colour, Colour) {
        let black = Colour::new("Black", 0xff000000);
        let brown = Colour::new("Brown", 0xff1a5ab4);
        let mut colours = ColourStore::new();
        colours.add(black.clone()).unwrap();
        colours.add(brown.clone()).unwrap();
        (colours, black, brown)
    }

    #[test]
    fn test_point_object_renders_two_ellipses() {
        let (colours, black, brown) = two_colours();
        let object = MapObject::point(brown.id, black.id, 2.0, 1.0);

        let shapes = render_map_object(&object, &colours).unwrap();
        assert_eq!(shapes.len(), 2);

        let Shape::Ellipse(inner) = &shapes[0] else { panic!("expected ellipse") };
        let Shape::Ellipse(outer) = &shapes[1] else { panic!("expected ellipse") };

        assert_eq!(inner.size, Vec2::new(4.0, 4.0));
        assert_eq!(inner.border_width, 0.0);
        assert_eq!(inner.fill, brown.value);
        assert_eq!(inner.z_index, 0);

        assert_eq!(outer.size, Vec2::new(6.0, 6.0));
        assert_eq!(outer.border_width, 1.0);
        assert_eq!(outer.border_colour, black.value);
        assert_eq!(outer.z_index, 1);
    }

    #[test]
    fn test_area_object_border_and_fill() {
        let (colours, black, brown) = two_colours();
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let object = MapObject::area(points.clone(), 0.1, black.id, Fill::solid(brown.id));

        let shapes = render_map_object(&object, &colours).unwrap();
        assert!(matches!(&shapes[0], Shape::Line(l) if l.points == points && l.z_index == 1));
        assert!(matches!(&shapes[1], Shape::Area(a) if a.fill == brown.value && a.z_index == 0));
    }

    #[test]
    fn test_object_fill_not_implemented() {
        let (colours, black, _) = two_colours();
        let object = MapObject::area(Vec::new(), 0.1, black.id, Fill::Object(ObjectFill::default()));
        assert_eq!(
            render_map_object(&object, &colours),
            Err(RenderError::NotImplemented("object fills"))
        );
    }

    #[test]
    fn test_unknown_colour() {
        let (colours, _, _) = two_colours();
        let stray = Colour::new("Stray", 1);
        let object = MapObject::line(Vec::new(), 0.1, stray.id);
        assert_eq!(
            render_map_object(&object, &colours),
            Err(RenderError::UnresolvedColour(stray.id))
        );
    }

    #[test]
    fn test_place_centres_ellipses() {
        let (colours, black, brown) = two_colours();
        let mut shapes = render_map_object(&MapObject::point(brown.id, black.id, 2.0, 1.0), &colours).unwrap();
        place_at(&mut shapes, Vec2::new(10.0, 20.0));

        assert_eq!(shapes[0].top_left(), Vec2::new(8.0, 18.0));
        assert_eq!(shapes[1].top_left(), Vec2::new(7.0, 17.0));
    }
}
