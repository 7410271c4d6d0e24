//! Renderer-agnostic shape records
//!
//! These are the pipeline's output: plain data the UI adapter turns into
//! whatever its toolkit draws with. Colours are packed values (see
//! [`crate::models::Colour`]), with 0 meaning transparent / no paint.
//! Dash arrays are on/off lengths in multiples of the stroke width; an
//! empty array draws a solid stroke.

use crate::models::{Font, HorizontalAlignment, Vec2, VerticalAlignment};
use serde::{Deserialize, Serialize};

/// Ellipse sized by its bounding box
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ellipse {
    pub top_left: Vec2,
    pub opacity: f32,
    pub z_index: i32,
    pub dash_array: Vec<f64>,

    /// Width and height of the bounding box
    pub size: Vec2,

    pub fill: u32,
    pub border_width: f32,
    pub border_colour: u32,
}

/// Open polyline
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Line {
    pub top_left: Vec2,
    pub opacity: f32,
    pub z_index: i32,
    pub dash_array: Vec<f64>,

    /// Points relative to `top_left`
    pub points: Vec<Vec2>,

    pub width: f32,
    pub colour: u32,
}

/// Filled polygon
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Area {
    pub top_left: Vec2,
    pub opacity: f32,
    pub z_index: i32,
    pub dash_array: Vec<f64>,

    /// Points relative to `top_left`
    pub points: Vec<Vec2>,

    pub fill: u32,
    pub is_closed: bool,
    pub border_width: f32,
    pub border_colour: u32,
}

/// One figure of a [`Path`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind")]
pub enum ShapeSegment {
    /// Straight runs between the given points
    PolyLine { start: Vec2, points: Vec<Vec2> },

    /// A Bezier run already flattened into straight runs
    FlattenedBezier { start: Vec2, points: Vec<Vec2> },
}

impl ShapeSegment {
    /// Every point of the figure, starting point first
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        let (start, points) = match self {
            ShapeSegment::PolyLine { start, points } | ShapeSegment::FlattenedBezier { start, points } => {
                (start, points)
            }
        };
        std::iter::once(*start).chain(points.iter().copied())
    }
}

/// Sequence of figures with a shared stroke and fill
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Path {
    pub top_left: Vec2,
    pub opacity: f32,
    pub z_index: i32,
    pub dash_array: Vec<f64>,

    pub segments: Vec<ShapeSegment>,

    pub fill: u32,
    pub is_closed: bool,
    pub border_width: f32,
    pub border_colour: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub top_left: Vec2,
    pub opacity: f32,
    pub z_index: i32,
    pub dash_array: Vec<f64>,

    pub size: Vec2,

    pub fill: u32,
    pub border_width: f32,
    pub border_colour: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Text {
    pub top_left: Vec2,
    pub opacity: f32,
    pub z_index: i32,
    pub dash_array: Vec<f64>,

    pub content: String,
    pub font: Font,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub fill: u32,
    pub border_colour: u32,
    pub border_width: f32,
    pub framing_colour: u32,
    pub framing_width: f32,
}

impl Default for Ellipse {
    fn default() -> Self {
        Self {
            top_left: Vec2::ZERO,
            opacity: 1.0,
            z_index: 0,
            dash_array: Vec::new(),
            size: Vec2::ZERO,
            fill: 0,
            border_width: 0.0,
            border_colour: 0,
        }
    }
}

impl Default for Line {
    fn default() -> Self {
        Self {
            top_left: Vec2::ZERO,
            opacity: 1.0,
            z_index: 0,
            dash_array: Vec::new(),
            points: Vec::new(),
            width: 0.0,
            colour: 0,
        }
    }
}

impl Default for Area {
    fn default() -> Self {
        Self {
            top_left: Vec2::ZERO,
            opacity: 1.0,
            z_index: 0,
            dash_array: Vec::new(),
            points: Vec::new(),
            fill: 0,
            is_closed: true,
            border_width: 0.0,
            border_colour: 0,
        }
    }
}

impl Default for Path {
    fn default() -> Self {
        Self {
            top_left: Vec2::ZERO,
            opacity: 1.0,
            z_index: 0,
            dash_array: Vec::new(),
            segments: Vec::new(),
            fill: 0,
            is_closed: true,
            border_width: 0.0,
            border_colour: 0,
        }
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            top_left: Vec2::ZERO,
            opacity: 1.0,
            z_index: 0,
            dash_array: Vec::new(),
            size: Vec2::ZERO,
            fill: 0,
            border_width: 0.0,
            border_colour: 0,
        }
    }
}

/// Any drawable record
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Shape {
    Ellipse(Ellipse),
    Line(Line),
    Area(Area),
    Path(Path),
    Rectangle(Rectangle),
    Text(Text),
}

macro_rules! common_field {
    ($self:ident, $field:ident) => {
        match $self {
            Shape::Ellipse(s) => &s.$field,
            Shape::Line(s) => &s.$field,
            Shape::Area(s) => &s.$field,
            Shape::Path(s) => &s.$field,
            Shape::Rectangle(s) => &s.$field,
            Shape::Text(s) => &s.$field,
        }
    };
}

macro_rules! common_field_mut {
    ($self:ident, $field:ident) => {
        match $self {
            Shape::Ellipse(s) => &mut s.$field,
            Shape::Line(s) => &mut s.$field,
            Shape::Area(s) => &mut s.$field,
            Shape::Path(s) => &mut s.$field,
            Shape::Rectangle(s) => &mut s.$field,
            Shape::Text(s) => &mut s.$field,
        }
    };
}

impl Shape {
    pub fn top_left(&self) -> Vec2 {
        *common_field!(self, top_left)
    }

    pub fn set_top_left(&mut self, top_left: Vec2) {
        *common_field_mut!(self, top_left) = top_left;
    }

    pub fn opacity(&self) -> f32 {
        *common_field!(self, opacity)
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        *common_field_mut!(self, opacity) = opacity;
    }

    pub fn z_index(&self) -> i32 {
        *common_field!(self, z_index)
    }

    pub fn dash_array(&self) -> &[f64] {
        common_field!(self, dash_array)
    }

    pub fn set_dash_array(&mut self, dash_array: Vec<f64>) {
        *common_field_mut!(self, dash_array) = dash_array;
    }
}
