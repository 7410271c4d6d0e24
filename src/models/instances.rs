//! Instances: placements of a symbol at concrete geometry

use super::font::{HorizontalAlignment, VerticalAlignment};
use super::geometry::{BoundingBox, Vec2};
use super::paths::PathCollection;
use super::stores::SymbolStore;
use super::symbols::{SymbolKind, SymbolType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PointInstance {
    pub centre: Vec2,
    /// Degrees; only honoured when the symbol is rotatable
    pub rotation: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextInstance {
    pub text: String,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum InstanceKind {
    Point(PointInstance),
    Line(PathCollection),
    Area(PathCollection),
    Text(TextInstance),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Instance {
    pub id: Uuid,
    pub layer: i32,
    pub opacity: f32,
    pub symbol_id: Uuid,
    pub kind: InstanceKind,
}

impl Instance {
    pub fn new(layer: i32, symbol_id: Uuid, kind: InstanceKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            layer,
            opacity: 1.0,
            symbol_id,
            kind,
        }
    }

    pub fn point(layer: i32, symbol_id: Uuid, centre: Vec2, rotation: f32) -> Self {
        Self::new(layer, symbol_id, InstanceKind::Point(PointInstance { centre, rotation }))
    }

    pub fn line(layer: i32, symbol_id: Uuid, segments: PathCollection) -> Self {
        Self::new(layer, symbol_id, InstanceKind::Line(segments))
    }

    pub fn area(layer: i32, symbol_id: Uuid, segments: PathCollection) -> Self {
        Self::new(layer, symbol_id, InstanceKind::Area(segments))
    }

    /// Path geometry for line and area placements
    pub fn segments(&self) -> Option<&PathCollection> {
        match &self.kind {
            InstanceKind::Line(segments) | InstanceKind::Area(segments) => Some(segments),
            InstanceKind::Point(_) | InstanceKind::Text(_) => None,
        }
    }

    /// The symbol variant this placement must reference
    pub fn required_symbol_type(&self) -> SymbolType {
        match self.kind {
            InstanceKind::Point(_) => SymbolType::Point,
            InstanceKind::Line(_) => SymbolType::Line,
            InstanceKind::Area(_) => SymbolType::Area,
            InstanceKind::Text(_) => SymbolType::Text,
        }
    }

    /// Map-space bounds
    ///
    /// Point placements take the union of their symbol's object bounds offset
    /// by the centre; path placements sample their geometry. `None` when the
    /// symbol cannot be resolved or there is no geometry.
    pub fn bounding_box(&self, symbols: &SymbolStore) -> Option<BoundingBox> {
        match &self.kind {
            InstanceKind::Point(point) => match &symbols.get(self.symbol_id)?.kind {
                SymbolKind::Point(symbol) => symbol.bounding_box().map(|b| b.offset(point.centre)),
                _ => None,
            },
            InstanceKind::Line(segments) | InstanceKind::Area(segments) => segments.bounding_box(),
            InstanceKind::Text(_) => None,
        }
    }
}
