//! Path geometry: linear and cubic Bezier segments
//!
//! A Bezier segment between consecutive [`BezierPoint`]s `a` and `b` is the
//! cubic with control polygon `a.anchor, a.late_control, b.early_control,
//! b.anchor`. Curves are approximated by sampling at fixed parameter steps;
//! every sampler includes `t = 1` exactly so runs end on their last anchor.

use super::geometry::{polyline_length, BoundingBox, Vec2};
use serde::{Deserialize, Serialize};

/// Samples per curve when estimating bounds (step 0.01)
pub const BOUNDS_STEPS: usize = 100;

/// Samples per curve when flattening and measuring (step 0.05)
pub const FLATTEN_STEPS: usize = 20;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct BezierPoint {
    pub anchor: Vec2,
    pub early_control: Vec2,
    pub late_control: Vec2,
}

impl BezierPoint {
    pub fn new(anchor: Vec2, early_control: Vec2, late_control: Vec2) -> Self {
        Self {
            anchor,
            early_control,
            late_control,
        }
    }

    /// A point with both controls on the anchor
    pub fn corner(anchor: Vec2) -> Self {
        Self::new(anchor, anchor, anchor)
    }
}

/// Point on the cubic between `a` and `b` at parameter `t` (de Casteljau)
pub fn bezier_lerp(a: &BezierPoint, b: &BezierPoint, t: f32) -> Vec2 {
    let p0 = Vec2::lerp(a.anchor, a.late_control, t);
    let p1 = Vec2::lerp(a.late_control, b.early_control, t);
    let p2 = Vec2::lerp(b.early_control, b.anchor, t);

    let d = Vec2::lerp(p0, p1, t);
    let e = Vec2::lerp(p1, p2, t);

    Vec2::lerp(d, e, t)
}

/// Sample a run of Bezier points into a polyline
///
/// Each curve contributes `steps + 1` samples from `t = 0` through `t = 1`;
/// the shared anchor between consecutive curves is emitted once.
pub fn sample_bezier(points: &[BezierPoint], steps: usize) -> Vec<Vec2> {
    let steps = steps.max(1);
    let mut out = Vec::with_capacity(points.len().saturating_sub(1) * steps + 1);

    for (n, pair) in points.windows(2).enumerate() {
        let start = if n == 0 { 0 } else { 1 };
        for i in start..=steps {
            let t = i as f32 / steps as f32;
            out.push(bezier_lerp(&pair[0], &pair[1], t));
        }
    }

    if out.is_empty() {
        if let Some(only) = points.first() {
            out.push(only.anchor);
        }
    }

    out
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum PathSegment {
    Linear(Vec<Vec2>),
    Bezier(Vec<BezierPoint>),
}

impl PathSegment {
    /// Anchors and, for Bezier runs, controls in early/anchor/late order
    pub fn all_points(&self) -> Vec<Vec2> {
        match self {
            PathSegment::Linear(points) => points.clone(),
            PathSegment::Bezier(points) => points
                .iter()
                .flat_map(|p| [p.early_control, p.anchor, p.late_control])
                .collect(),
        }
    }

    pub fn anchor_points(&self) -> Vec<Vec2> {
        match self {
            PathSegment::Linear(points) => points.clone(),
            PathSegment::Bezier(points) => points.iter().map(|p| p.anchor).collect(),
        }
    }

    pub fn control_points(&self) -> Vec<Vec2> {
        match self {
            PathSegment::Linear(_) => Vec::new(),
            PathSegment::Bezier(points) => points
                .iter()
                .flat_map(|p| [p.early_control, p.late_control])
                .collect(),
        }
    }

    /// Polyline approximation at the given curve resolution
    pub fn flatten(&self, steps: usize) -> Vec<Vec2> {
        match self {
            PathSegment::Linear(points) => points.clone(),
            PathSegment::Bezier(points) => sample_bezier(points, steps),
        }
    }

    pub fn length(&self) -> f32 {
        polyline_length(&self.flatten(FLATTEN_STEPS))
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.flatten(BOUNDS_STEPS))
    }
}

/// Ordered segments making up one path instance
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PathCollection(pub Vec<PathSegment>);

impl PathCollection {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    /// Single linear segment through `points`
    pub fn linear(points: Vec<Vec2>) -> Self {
        Self(vec![PathSegment::Linear(points)])
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn all_points(&self) -> Vec<Vec2> {
        self.0.iter().flat_map(PathSegment::all_points).collect()
    }

    pub fn anchor_points(&self) -> Vec<Vec2> {
        self.0.iter().flat_map(PathSegment::anchor_points).collect()
    }

    pub fn control_points(&self) -> Vec<Vec2> {
        self.0.iter().flat_map(PathSegment::control_points).collect()
    }

    /// Total length, summed per segment
    pub fn length(&self) -> f32 {
        self.0.iter().map(PathSegment::length).sum()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.0
            .iter()
            .filter_map(PathSegment::bounding_box)
            .fold(None, BoundingBox::merge)
    }
}
