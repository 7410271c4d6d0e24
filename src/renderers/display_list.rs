//! Display List for Map Rendering
//!
//! This module defines the output structure handed to JavaScript. The
//! DisplayList carries every instance's shapes, already positioned, coloured
//! and z-ordered, so the UI adapter only has to draw them.

use super::errors::{RenderError, Result};
use super::instances::render_instance;
use super::shapes::Shape;
use crate::models::Map;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-level display list for one map
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    /// Map title
    pub title: String,

    /// One entry per drawable instance, in instance store order
    pub items: Vec<DisplayItem>,

    /// Instances left out because they use an unsupported feature
    pub skipped: Vec<Uuid>,
}

/// Shapes for a single instance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayItem {
    pub instance_id: Uuid,
    pub symbol_id: Uuid,
    pub layer: i32,
    pub shapes: Vec<Shape>,
}

impl DisplayList {
    /// Render every instance of `map`
    ///
    /// Instances that hit a NotImplemented feature are logged and listed in
    /// `skipped`; any other error aborts the build.
    pub fn build(map: &Map) -> Result<Self> {
        let mut list = DisplayList {
            title: map.title.clone(),
            ..DisplayList::default()
        };

        for instance in map.instances.iter() {
            match render_instance(map, instance) {
                Ok(shapes) => list.items.push(DisplayItem {
                    instance_id: instance.id,
                    symbol_id: instance.symbol_id,
                    layer: instance.layer,
                    shapes,
                }),
                Err(RenderError::NotImplemented(what)) => {
                    log::warn!("Skipping instance {}: {} not implemented", instance.id, what);
                    list.skipped.push(instance.id);
                }
                Err(e) => return Err(e),
            }
        }

        log::info!(
            "Built display list for '{}': {} items, {} shapes, {} skipped",
            list.title,
            list.items.len(),
            list.shape_count(),
            list.skipped.len()
        );

        Ok(list)
    }

    pub fn shape_count(&self) -> usize {
        self.items.iter().map(|item| item.shapes.len()).sum()
    }

    /// Every shape, lowest z-index first; ties keep instance order
    pub fn shapes_in_paint_order(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.items.iter().flat_map(|item| item.shapes.iter()).collect();
        shapes.sort_by_key(|shape| shape.z_index());
        shapes
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Colour, Fill, Instance, LineSymbol, MapObject, ObjectFill, AreaSymbol, PathCollection, PathStyle,
        PointSymbol, Symbol, SymbolKind, SymbolNumber, Vec2,
    };

    fn sample_map() -> Map {
        let mut map = Map::new("Sprint");
        let black = Colour::new("Black", 0xff000000);
        let brown = Colour::new("Brown", 0xff1a5ab4);
        map.add_colour(black.clone()).unwrap();
        map.add_colour(brown.clone()).unwrap();

        let knoll = Symbol::new(
            "Knoll",
            SymbolNumber::new(1, 1, 2),
            SymbolKind::Point(PointSymbol {
                map_objects: vec![MapObject::point(brown.id, brown.id, 0.5, 0.1)],
                is_rotatable: false,
            }),
        );
        let path = Symbol::new(
            "Path",
            SymbolNumber::new(5, 0, 7),
            SymbolKind::Line(LineSymbol {
                colour: black.id,
                style: PathStyle::solid(0.35),
            }),
        );
        let (knoll_id, path_id) = (knoll.id, path.id);
        map.add_symbol(knoll).unwrap();
        map.add_symbol(path).unwrap();

        map.add_instance(Instance::point(0, knoll_id, Vec2::new(5.0, 5.0), 0.0)).unwrap();
        map.add_instance(Instance::line(
            0,
            path_id,
            PathCollection::linear(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)]),
        ))
        .unwrap();
        map
    }

    #[test]
    fn test_build_in_instance_order() {
        let map = sample_map();
        let list = DisplayList::build(&map).unwrap();

        assert_eq!(list.title, "Sprint");
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].shapes.len(), 2);
        assert_eq!(list.items[1].shapes.len(), 1);
        assert_eq!(list.shape_count(), 3);

        let order: Vec<i32> = list.shapes_in_paint_order().iter().map(|s| s.z_index()).collect();
        assert_eq!(order, vec![0, 0, 1]);
    }

    #[test]
    fn test_unsupported_instances_are_skipped() {
        let mut map = sample_map();
        let black = map.colours.get_at(0).unwrap().id;
        let forest = Symbol::new(
            "Forest",
            SymbolNumber::new(4, 0, 5),
            SymbolKind::Area(AreaSymbol {
                fill: Fill::Object(ObjectFill::default()),
                border_colour: black,
                style: PathStyle::solid(0.1),
            }),
        );
        let forest_id = forest.id;
        map.add_symbol(forest).unwrap();
        let area = Instance::area(0, forest_id, PathCollection::linear(vec![Vec2::ZERO, Vec2::new(1.0, 1.0)]));
        let area_id = area.id;
        map.add_instance(area).unwrap();

        let list = DisplayList::build(&map).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.skipped, vec![area_id]);
    }

    #[test]
    fn test_json_is_tagged() {
        let list = DisplayList::build(&sample_map()).unwrap();
        let json = list.to_json().unwrap();
        assert!(json.contains(r#""type":"Ellipse""#));
        assert!(json.contains(r#""kind":"PolyLine""#));
    }
}
