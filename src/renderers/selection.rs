//! Selection overlays
//!
//! A dashed rectangle around the selection and a handle on each path point.
//! Overlays paint above the whole colour stack, so callers pass the number
//! of colours in the map.

use super::context::{
    RenderContext, ANCHOR_HANDLE_COLOUR, BOUNDING_BOX_COLOUR, BOUNDING_BOX_DASH, BOUNDING_BOX_Z_OFFSET,
    CONTROL_HANDLE_COLOUR, HANDLE_Z_OFFSET,
};
use super::shapes::{Ellipse, Rectangle, Shape};
use crate::models::{BoundingBox, Vec2};

/// Padded rectangle around `bounds`, never smaller than the minimum box
pub fn selection_box(bounds: BoundingBox, colour_count: usize, ctx: &RenderContext) -> Shape {
    let centre = bounds.centre();
    let half = ctx.bounding_box_min_half();
    let minimum = BoundingBox::new(centre - Vec2::new(half, half), centre + Vec2::new(half, half));
    let outline = bounds.union(minimum).inflate(ctx.bounding_box_offset());

    Shape::Rectangle(Rectangle {
        top_left: outline.top_left,
        size: outline.size(),
        border_width: ctx.bounding_box_width(),
        border_colour: BOUNDING_BOX_COLOUR,
        z_index: colour_count as i32 + BOUNDING_BOX_Z_OFFSET,
        dash_array: BOUNDING_BOX_DASH.to_vec(),
        ..Rectangle::default()
    })
}

/// Handles for a path's anchors and control points
pub fn selection_handles(anchors: &[Vec2], controls: &[Vec2], colour_count: usize, ctx: &RenderContext) -> Vec<Shape> {
    let anchors = anchors.iter().map(|p| handle(*p, ANCHOR_HANDLE_COLOUR, colour_count, ctx));
    let controls = controls.iter().map(|p| handle(*p, CONTROL_HANDLE_COLOUR, colour_count, ctx));
    anchors.chain(controls).collect()
}

fn handle(centre: Vec2, colour: u32, colour_count: usize, ctx: &RenderContext) -> Shape {
    let radius = ctx.handle_radius();
    let size = Vec2::new(2.0 * radius, 2.0 * radius);

    Shape::Ellipse(Ellipse {
        top_left: centre - size * 0.5,
        size,
        border_width: ctx.handle_width(),
        border_colour: colour,
        z_index: colour_count as i32 + HANDLE_Z_OFFSET,
        ..Ellipse::default()
    })
}
