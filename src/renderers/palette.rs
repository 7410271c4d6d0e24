//! Colour lookups against the map's colour stack

use super::errors::{RenderError, Result};
use crate::models::{ColourStore, TRANSPARENT_ID};
use uuid::Uuid;

/// Draw order for a colour reference
///
/// Earlier colours in the stack paint above later ones; Transparent is -1.
pub fn z_index(colours: &ColourStore, id: Uuid) -> Result<i32> {
    colours.z_index(id).ok_or(RenderError::UnresolvedColour(id))
}

/// Packed colour value for a colour reference, 0 for Transparent
pub fn colour_value(colours: &ColourStore, id: Uuid) -> Result<u32> {
    if id == TRANSPARENT_ID {
        return Ok(0);
    }
    colours
        .get(id)
        .map(|colour| colour.value)
        .ok_or(RenderError::UnresolvedColour(id))
}

/// Value and z-index together
pub fn resolve(colours: &ColourStore, id: Uuid) -> Result<(u32, i32)> {
    Ok((colour_value(colours, id)?, z_index(colours, id)?))
}
