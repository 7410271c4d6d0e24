//! Font description for text symbols

use serde::{Deserialize, Serialize};

const MM_PER_POINT: f32 = 0.352777778;
const POINTS_PER_MM: f32 = 2.83464567;

/// Style flags applied on top of the font family
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Font {
    pub name: String,
    pub family: String,
    /// Size in millimetres
    pub size: f32,
    pub line_spacing: f32,
    pub paragraph_spacing: f32,
    pub character_spacing: f32,
    pub style: FontStyle,
}

impl Font {
    pub fn new(name: impl Into<String>, family: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            family: family.into(),
            size,
            line_spacing: 1.0,
            paragraph_spacing: 0.0,
            character_spacing: 0.0,
            style: FontStyle::default(),
        }
    }

    /// Size in typographic points
    pub fn size_in_points(&self) -> f32 {
        millimetres_to_points(self.size)
    }
}

pub fn points_to_millimetres(points: f32) -> f32 {
    points * MM_PER_POINT
}

pub fn millimetres_to_points(millimetres: f32) -> f32 {
    millimetres * POINTS_PER_MM
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Centre,
    Right,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Centre,
    Bottom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_conversion() {
        assert!((points_to_millimetres(72.0) - 25.4).abs() < 1e-4);
        assert!((millimetres_to_points(25.4) - 72.0).abs() < 1e-4);

        let font = Font::new("Label", "Arial", 3.0);
        assert!((font.size_in_points() - 8.503937).abs() < 1e-4);
    }
}
