//! Colours and the packed colour value layout
//!
//! A colour value is a `u32` composed as `b + (g << 8) + (r << 16) + (a << 24)`
//! by the RGB/CMYK constructors, while the `to_*` conversions read red from
//! the low byte and blue from bits 16..24. Stored files depend on both
//! directions exactly as written, so neither side is "corrected".

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known id of the Transparent sentinel colour
pub const TRANSPARENT_ID: Uuid = Uuid::nil();

/// A named entry in the map's colour stack
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Colour {
    pub id: Uuid,
    pub name: String,
    /// Packed colour value, written to documents as a decimal integer
    pub value: u32,
}

impl Colour {
    /// New colour with a fresh random id
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self::with_id(Uuid::new_v4(), name, value)
    }

    pub fn with_id(id: Uuid, name: impl Into<String>, value: u32) -> Self {
        Self {
            id,
            name: name.into(),
            value,
        }
    }

    pub fn from_rgb(name: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        let value = b as u32 + ((g as u32) << 8) + ((r as u32) << 16);
        Self::new(name, value)
    }

    /// Build from CMYK percentages (0..=100) and an alpha byte
    pub fn from_cmyk(name: impl Into<String>, c: u8, m: u8, y: u8, k: u8, alpha: u8) -> Self {
        let c = c as f32 / 100.0;
        let m = m as f32 / 100.0;
        let y = y as f32 / 100.0;
        let k = k as f32 / 100.0;

        let r = (255.0 * (1.0 - c) * (1.0 - k)) as u8;
        let g = (255.0 * (1.0 - m) * (1.0 - k)) as u8;
        let b = (255.0 * (1.0 - y) * (1.0 - k)) as u8;

        let value = b as u32 + ((g as u32) << 8) + ((r as u32) << 16) + ((alpha as u32) << 24);
        Self::new(name, value)
    }

    /// The Transparent sentinel; never stored in a colour store
    pub fn transparent() -> Self {
        Self::with_id(TRANSPARENT_ID, "Transparent", 0)
    }

    pub fn is_transparent(&self) -> bool {
        self.id == TRANSPARENT_ID
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let r = (self.value & 0x0000ff) as u8;
        let g = ((self.value & 0x00ff00) >> 8) as u8;
        let b = ((self.value & 0xff0000) >> 16) as u8;
        (r, g, b)
    }

    pub fn to_rgba(&self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb();
        let a = ((self.value & 0xff00_0000) >> 24) as u8;
        (r, g, b, a)
    }

    /// CMYK percentages derived from [`Colour::to_rgb`]
    pub fn to_cmyk(&self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb();
        let rd = r as f32 / 255.0;
        let gd = g as f32 / 255.0;
        let bd = b as f32 / 255.0;

        let k = 1.0 - rd.max(gd).max(bd);
        if k >= 1.0 {
            return (0, 0, 0, 100);
        }

        let percent = |v: f32| (v * 100.0).round() as u8;
        let c = (1.0 - rd - k) / (1.0 - k);
        let m = (1.0 - gd - k) / (1.0 - k);
        let y = (1.0 - bd - k) / (1.0 - k);

        (percent(c), percent(m), percent(y), percent(k))
    }
}
