//! Map objects: the drawing primitives that make up point symbols,
//! mid-style markers and object fills
//!
//! Object coordinates are relative to the placement centre. Colours are
//! held by id and resolved against the owning map's colour store.

use super::geometry::{BoundingBox, Vec2};
use super::styles::Fill;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Concentric disc and ring
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PointObject {
    pub inner_colour: Uuid,
    pub outer_colour: Uuid,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineObject {
    pub points: Vec<Vec2>,
    pub width: f32,
    pub colour: Uuid,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AreaObject {
    pub points: Vec<Vec2>,
    pub width: f32,
    pub border_colour: Uuid,
    pub fill: Fill,
}

/// Placeholder for text primitives; unsupported by the marshaller and renderers
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TextObject {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum MapObjectKind {
    Point(PointObject),
    Line(LineObject),
    Area(AreaObject),
    Text(TextObject),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MapObject {
    pub id: Uuid,
    pub kind: MapObjectKind,
}

impl MapObject {
    pub fn new(kind: MapObjectKind) -> Self {
        Self::with_id(Uuid::new_v4(), kind)
    }

    pub fn with_id(id: Uuid, kind: MapObjectKind) -> Self {
        Self { id, kind }
    }

    pub fn point(inner_colour: Uuid, outer_colour: Uuid, inner_radius: f32, outer_radius: f32) -> Self {
        Self::new(MapObjectKind::Point(PointObject {
            inner_colour,
            outer_colour,
            inner_radius,
            outer_radius,
        }))
    }

    pub fn line(points: Vec<Vec2>, width: f32, colour: Uuid) -> Self {
        Self::new(MapObjectKind::Line(LineObject { points, width, colour }))
    }

    pub fn area(points: Vec<Vec2>, width: f32, border_colour: Uuid, fill: Fill) -> Self {
        Self::new(MapObjectKind::Area(AreaObject {
            points,
            width,
            border_colour,
            fill,
        }))
    }

    /// Bounds relative to the object's origin
    ///
    /// A point object spans its combined radius in every direction; line and
    /// area objects span their points. Empty and text objects have no bounds.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match &self.kind {
            MapObjectKind::Point(p) => {
                let r = p.inner_radius + p.outer_radius;
                Some(BoundingBox::new(Vec2::new(-r, -r), Vec2::new(r, r)))
            }
            MapObjectKind::Line(l) => BoundingBox::from_points(l.points.iter().copied()),
            MapObjectKind::Area(a) => BoundingBox::from_points(a.points.iter().copied()),
            MapObjectKind::Text(_) => None,
        }
    }

    /// Every colour the object paints with, in paint order
    pub fn colour_ids(&self) -> Vec<Uuid> {
        match &self.kind {
            MapObjectKind::Point(p) => vec![p.inner_colour, p.outer_colour],
            MapObjectKind::Line(l) => vec![l.colour],
            MapObjectKind::Area(a) => {
                let mut ids = vec![a.border_colour];
                ids.extend(a.fill.colour_ids());
                ids
            }
            MapObjectKind::Text(_) => Vec::new(),
        }
    }

    /// Copy rotated about the origin; point objects are rotation-invariant
    pub fn rotated(&self, degrees: f32) -> MapObject {
        let mut out = self.clone();
        if degrees == 0.0 {
            return out;
        }
        match &mut out.kind {
            MapObjectKind::Line(l) => {
                l.points.iter_mut().for_each(|p| *p = p.rotated(degrees));
            }
            MapObjectKind::Area(a) => {
                a.points.iter_mut().for_each(|p| *p = p.rotated(degrees));
            }
            MapObjectKind::Point(_) | MapObjectKind::Text(_) => {}
        }
        out
    }
}
