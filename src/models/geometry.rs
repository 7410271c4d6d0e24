//! 2D geometry value types shared by the model and the renderers

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point or offset in map space
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between `a` and `b`
    ///
    /// Written as `a·(1−t) + b·t` so that `t = 0` and `t = 1` return the
    /// endpoints exactly.
    pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
        Vec2::new(a.x * (1.0 - t) + b.x * t, a.y * (1.0 - t) + b.y * t)
    }

    /// Euclidean distance between two points
    pub fn distance(a: Vec2, b: Vec2) -> f32 {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Rotate about the origin, clockwise on screen (y grows downward)
    pub fn rotated(self, degrees: f32) -> Vec2 {
        if degrees == 0.0 {
            return self;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vec2::new(x, y)
    }
}

/// Total length of an open polyline
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| Vec2::distance(w[0], w[1])).sum()
}

/// Axis-aligned bounding box (top-left, bottom-right)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub top_left: Vec2,
    pub bottom_right: Vec2,
}

impl BoundingBox {
    pub fn new(top_left: Vec2, bottom_right: Vec2) -> Self {
        Self { top_left, bottom_right }
    }

    /// Smallest box containing every point, `None` for an empty set
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox::new(first, first);
        for p in iter {
            bbox.include(p);
        }
        Some(bbox)
    }

    /// Grow to contain `p`
    pub fn include(&mut self, p: Vec2) {
        self.top_left = self.top_left.min(p);
        self.bottom_right = self.bottom_right.max(p);
    }

    pub fn union(self, other: BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.top_left.min(other.top_left),
            self.bottom_right.max(other.bottom_right),
        )
    }

    /// Union of an optional accumulator and a new box
    pub fn merge(acc: Option<BoundingBox>, next: BoundingBox) -> Option<BoundingBox> {
        Some(match acc {
            Some(bbox) => bbox.union(next),
            None => next,
        })
    }

    pub fn offset(self, by: Vec2) -> BoundingBox {
        BoundingBox::new(self.top_left + by, self.bottom_right + by)
    }

    /// Expand outward by `amount` on every side
    pub fn inflate(self, amount: f32) -> BoundingBox {
        let d = Vec2::new(amount, amount);
        BoundingBox::new(self.top_left - d, self.bottom_right + d)
    }

    pub fn size(&self) -> Vec2 {
        self.bottom_right - self.top_left
    }

    pub fn centre(&self) -> Vec2 {
        self.top_left + self.size() * 0.5
    }
}
