//! Path geometry to shape figures

use super::shapes::ShapeSegment;
use crate::models::paths::{sample_bezier, FLATTEN_STEPS};
use crate::models::{PathCollection, PathSegment};

/// One figure per segment; segments with no points are skipped
pub fn shape_segments(path: &PathCollection) -> Vec<ShapeSegment> {
    path.segments().iter().filter_map(shape_segment).collect()
}

fn shape_segment(segment: &PathSegment) -> Option<ShapeSegment> {
    match segment {
        PathSegment::Linear(points) => {
            let (start, rest) = points.split_first()?;
            Some(ShapeSegment::PolyLine {
                start: *start,
                points: rest.to_vec(),
            })
        }
        PathSegment::Bezier(points) => {
            let flat = sample_bezier(points, FLATTEN_STEPS);
            let (start, rest) = flat.split_first()?;
            Some(ShapeSegment::FlattenedBezier {
                start: *start,
                points: rest.to_vec(),
            })
        }
    }
}
