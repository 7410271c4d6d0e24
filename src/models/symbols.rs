//! Symbols: reusable style definitions that instances place on the map

use super::errors::ModelError;
use super::font::Font;
use super::geometry::BoundingBox;
use super::map_objects::MapObject;
use super::styles::{Fill, PathStyle};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Three-part classification number, written "a-b-c"
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SymbolNumber {
    pub first: u8,
    pub second: u8,
    pub third: u8,
}

impl SymbolNumber {
    pub const fn new(first: u8, second: u8, third: u8) -> Self {
        Self { first, second, third }
    }
}

impl fmt::Display for SymbolNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.first, self.second, self.third)
    }
}

impl FromStr for SymbolNumber {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidSymbolNumber(s.to_string());

        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let part = |p: &str| p.trim().parse::<u8>().map_err(|_| invalid());
        Ok(Self::new(part(parts[0])?, part(parts[1])?, part(parts[2])?))
    }
}

/// Discriminant of [`SymbolKind`], used in mismatch errors
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolType {
    Point,
    Line,
    Area,
    Text,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PointSymbol {
    pub map_objects: Vec<MapObject>,
    /// Instances may carry their own rotation only when set
    pub is_rotatable: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineSymbol {
    pub colour: Uuid,
    pub style: PathStyle,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AreaSymbol {
    pub fill: Fill,
    pub border_colour: Uuid,
    pub style: PathStyle,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextSymbol {
    pub font: Font,
    pub colour: Uuid,
    pub is_rotatable: bool,
    pub fill_colour: Uuid,
    pub border_colour: Uuid,
    pub border_width: f32,
    pub framing_colour: Uuid,
    pub framing_width: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum SymbolKind {
    Point(PointSymbol),
    Line(LineSymbol),
    Area(AreaSymbol),
    Text(TextSymbol),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Symbol {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub number: SymbolNumber,
    pub is_uncrossable: bool,
    pub is_helper_symbol: bool,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(name: impl Into<String>, number: SymbolNumber, kind: SymbolKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            number,
            is_uncrossable: false,
            is_helper_symbol: false,
            kind,
        }
    }

    pub fn symbol_type(&self) -> SymbolType {
        match self.kind {
            SymbolKind::Point(_) => SymbolType::Point,
            SymbolKind::Line(_) => SymbolType::Line,
            SymbolKind::Area(_) => SymbolType::Area,
            SymbolKind::Text(_) => SymbolType::Text,
        }
    }

    /// Width, dash and mid style for line and area symbols
    pub fn path_style(&self) -> Option<&PathStyle> {
        match &self.kind {
            SymbolKind::Line(line) => Some(&line.style),
            SymbolKind::Area(area) => Some(&area.style),
            SymbolKind::Point(_) | SymbolKind::Text(_) => None,
        }
    }

    /// Every colour the symbol references
    pub fn colour_ids(&self) -> Vec<Uuid> {
        match &self.kind {
            SymbolKind::Point(point) => point.map_objects.iter().flat_map(MapObject::colour_ids).collect(),
            SymbolKind::Line(line) => {
                let mut ids = vec![line.colour];
                ids.extend(line.style.colour_ids());
                ids
            }
            SymbolKind::Area(area) => {
                let mut ids = vec![area.border_colour];
                ids.extend(area.fill.colour_ids());
                ids.extend(area.style.colour_ids());
                ids
            }
            SymbolKind::Text(text) => vec![
                text.colour,
                text.fill_colour,
                text.border_colour,
                text.framing_colour,
            ],
        }
    }
}

impl PointSymbol {
    /// Union of the template's object bounds around the origin
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.map_objects
            .iter()
            .filter_map(MapObject::bounding_box)
            .fold(None, BoundingBox::merge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_number_display_and_parse() {
        let number = SymbolNumber::new(4, 1, 0);
        assert_eq!(number.to_string(), "4-1-0");
        assert_eq!("4-1-0".parse::<SymbolNumber>().unwrap(), number);
    }

    #[test]
    fn test_symbol_number_rejects_garbage() {
        assert!(matches!(
            "4-1".parse::<SymbolNumber>(),
            Err(ModelError::InvalidSymbolNumber(_))
        ));
        assert!("4-x-0".parse::<SymbolNumber>().is_err());
        assert!("300-0-0".parse::<SymbolNumber>().is_err());
    }

    #[test]
    fn test_path_style_only_for_path_symbols() {
        let line = Symbol::new(
            "Path",
            SymbolNumber::new(5, 0, 5),
            SymbolKind::Line(LineSymbol {
                colour: Uuid::new_v4(),
                style: PathStyle::solid(0.35),
            }),
        );
        assert_eq!(line.path_style().map(|s| s.width), Some(0.35));
        assert_eq!(line.symbol_type(), SymbolType::Line);

        let point = Symbol::new("Boulder", SymbolNumber::new(2, 0, 4), SymbolKind::Point(PointSymbol::default()));
        assert!(point.path_style().is_none());
    }
}
