//! Stroke and fill styles for path symbols and map objects

use super::colour::TRANSPARENT_ID;
use super::geometry::Vec2;
use super::map_objects::MapObject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dash tiling parameters
///
/// A `group_size` above 1 clusters dashes into groups separated by
/// `group_gap_length` instead of `gap_length`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct DashStyle {
    pub dash_length: f32,
    pub gap_length: f32,
    pub group_size: i32,
    pub group_gap_length: f32,
}

impl DashStyle {
    pub fn new(dash_length: f32, gap_length: f32) -> Self {
        Self {
            dash_length,
            gap_length,
            group_size: 0,
            group_gap_length: 0.0,
        }
    }

    pub fn grouped(dash_length: f32, gap_length: f32, group_size: i32, group_gap_length: f32) -> Self {
        Self {
            dash_length,
            gap_length,
            group_size,
            group_gap_length,
        }
    }

    pub fn is_grouped(&self) -> bool {
        self.group_size > 1
    }
}

/// Marker objects repeated along a path
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MidStyle {
    pub map_objects: Vec<MapObject>,
    pub gap_length: f32,
    pub require_mid: bool,
    pub initial_offset: f32,
    pub end_offset: f32,
}

/// The capability shared by line and area symbols
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PathStyle {
    pub width: f32,
    pub dash_style: Option<DashStyle>,
    pub mid_style: Option<MidStyle>,
}

impl PathStyle {
    pub fn solid(width: f32) -> Self {
        Self {
            width,
            dash_style: None,
            mid_style: None,
        }
    }

    pub fn with_dash(mut self, dash: DashStyle) -> Self {
        self.dash_style = Some(dash);
        self
    }

    pub fn with_mid(mut self, mid: MidStyle) -> Self {
        self.mid_style = Some(mid);
        self
    }

    /// Colours referenced by mid-style marker objects
    pub fn colour_ids(&self) -> Vec<Uuid> {
        self.mid_style
            .iter()
            .flat_map(|mid| mid.map_objects.iter())
            .flat_map(MapObject::colour_ids)
            .collect()
    }
}

/// Map objects tiled across an area
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ObjectFill {
    pub objects: Vec<MapObject>,
    pub spacing: Vec2,
    pub offset: Vec2,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Fill {
    Solid { colour: Uuid },
    Object(ObjectFill),
}

impl Fill {
    pub fn solid(colour: Uuid) -> Self {
        Fill::Solid { colour }
    }

    pub fn transparent() -> Self {
        Fill::Solid { colour: TRANSPARENT_ID }
    }

    /// Every colour this fill paints with
    pub fn colour_ids(&self) -> Vec<Uuid> {
        match self {
            Fill::Solid { colour } => vec![*colour],
            Fill::Object(fill) => fill.objects.iter().flat_map(MapObject::colour_ids).collect(),
        }
    }
}

impl Default for Fill {
    fn default() -> Self {
        Fill::transparent()
    }
}
