//! Render context
//!
//! Viewport state threaded into the zoom-dependent parts of the pipeline:
//! selection handle sizes, bounding-box padding and preview opacity. The UI
//! adapter owns the value and passes it in; nothing here is global.

use serde::{Deserialize, Serialize};

/// Smallest zoom the viewport may reach
pub const MIN_ZOOM: f32 = 0.01;

/// Zoom step as a fraction of the current zoom
pub const ZOOM_STEP: f32 = 0.1;

/// Floor for the derived zoom factor so sizes stay finite at low zoom
const MIN_ZOOM_FACTOR: f32 = 0.01;

pub const ANCHOR_HANDLE_COLOUR: u32 = 0x000000;
pub const CONTROL_HANDLE_COLOUR: u32 = 0xffa600;
pub const BOUNDING_BOX_COLOUR: u32 = 0xffa600;
pub const BOUNDING_BOX_DASH: [f64; 2] = [6.0, 1.0];

/// Overlay z-indices sit this far above the colour stack
pub const HANDLE_Z_OFFSET: i32 = 11;
pub const BOUNDING_BOX_Z_OFFSET: i32 = 12;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct RenderContext {
    pub zoom: f32,

    /// Opacity for shapes drawn while the user is still placing them
    pub draw_opacity: f32,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            draw_opacity: 0.5,
        }
    }
}

impl RenderContext {
    pub fn with_zoom(zoom: f32) -> Self {
        Self {
            zoom: zoom.max(MIN_ZOOM),
            ..Self::default()
        }
    }

    /// Linear map from zoom to on-screen scale for overlay sizes
    pub fn zoom_factor(&self) -> f32 {
        (0.2475 * self.zoom - 0.2375).max(MIN_ZOOM_FACTOR)
    }

    pub fn handle_radius(&self) -> f32 {
        1.0 / self.zoom_factor()
    }

    pub fn handle_width(&self) -> f32 {
        0.3 * self.handle_radius()
    }

    /// Padding between a selection and its bounding rectangle
    pub fn bounding_box_offset(&self) -> f32 {
        2.0 / self.zoom_factor()
    }

    pub fn bounding_box_width(&self) -> f32 {
        0.5 / self.zoom_factor()
    }

    /// Half-extent of the smallest bounding rectangle drawn
    pub fn bounding_box_min_half(&self) -> f32 {
        2.0 / self.zoom_factor()
    }

    pub fn zoom_in(&mut self) {
        self.zoom += ZOOM_STEP * self.zoom;
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP * self.zoom).max(MIN_ZOOM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = RenderContext::default();
        assert_eq!(ctx.zoom, 1.0);
        assert_eq!(ctx.draw_opacity, 0.5);
        assert!((ctx.zoom_factor() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_handle_sizes_shrink_with_zoom() {
        let near = RenderContext::with_zoom(5.0);
        let far = RenderContext::with_zoom(2.0);

        // 0.2475 * 5 - 0.2375 = 1.0
        assert!((near.handle_radius() - 1.0).abs() < 1e-5);
        assert!((near.handle_width() - 0.3).abs() < 1e-5);
        assert!(far.handle_radius() > near.handle_radius());
        assert!((near.bounding_box_offset() - 2.0).abs() < 1e-5);
        assert!((near.bounding_box_width() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_zoom_steps() {
        let mut ctx = RenderContext::with_zoom(2.0);
        ctx.zoom_in();
        assert!((ctx.zoom - 2.2).abs() < 1e-5);
        ctx.zoom_out();
        assert!((ctx.zoom - 1.98).abs() < 1e-5);

        let mut tiny = RenderContext::with_zoom(0.01);
        tiny.zoom_out();
        assert_eq!(tiny.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_partial_json() {
        let ctx: RenderContext = serde_json::from_str(r#"{"zoom": 3.0}"#).unwrap();
        assert_eq!(ctx.zoom, 3.0);
        assert_eq!(ctx.draw_opacity, 0.5);
    }
}
