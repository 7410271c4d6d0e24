//! Mid-style markers along a path

use super::errors::{RenderError, Result};
use super::map_objects::{place_at, render_map_objects};
use super::shapes::Shape;
use crate::models::{ColourStore, MidStyle, Vec2};

/// Marker positions along a polyline
pub fn mid_points(_points: &[Vec2], _mid: &MidStyle) -> Result<Vec<Vec2>> {
    // TODO: space markers by gap_length between initial_offset and end_offset
    Err(RenderError::NotImplemented("mid-style markers"))
}

/// Marker shapes for a path, or none while placement is unsupported
pub fn mid_style_shapes(points: &[Vec2], mid: &MidStyle, colours: &ColourStore) -> Result<Vec<Shape>> {
    let positions = match mid_points(points, mid) {
        Ok(positions) => positions,
        Err(RenderError::NotImplemented(what)) => {
            log::warn!("Skipping {}: not implemented", what);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let template = render_map_objects(&mid.map_objects, colours)?;
    let mut shapes = Vec::with_capacity(template.len() * positions.len());
    for centre in positions {
        let mut marker = template.clone();
        place_at(&mut marker, centre);
        shapes.extend(marker);
    }
    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_skipped() {
        let colours = ColourStore::new();
        let shapes = mid_style_shapes(&[Vec2::ZERO, Vec2::new(10.0, 0.0)], &MidStyle::default(), &colours).unwrap();
        assert!(shapes.is_empty());
        assert!(matches!(
            mid_points(&[], &MidStyle::default()),
            Err(RenderError::NotImplemented(_))
        ));
    }
}
