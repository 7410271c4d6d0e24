//! WASM API for map documents
//!
//! The loaded map lives in a process-wide slot owned by this module; the UI
//! adapter loads text into it, asks for shapes, and saves it back out. Every
//! exported function has a plain-Rust counterpart that takes the map
//! explicitly and reports errors as `String`.

use super::helpers::{deserialize, deserialize_or_default, into_js, parse_id, to_js_error};
use crate::converters;
use crate::models::{Layer, Map, StoreChange, SymbolKind, Vec2};
use crate::renderers::{
    live_render_objects, live_render_path, render_instance, selection_box, selection_handles, DisplayList,
    RenderContext, Shape,
};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

// WASM-owned map storage (canonical source of truth)
lazy_static! {
    static ref MAP: Mutex<Option<Map>> = Mutex::new(None);
}

/// Counts handed back after a load
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MapSummary {
    pub title: String,
    pub colours: usize,
    pub symbols: usize,
    pub instances: usize,
    pub layers: Vec<Layer>,
}

impl MapSummary {
    pub fn of(map: &Map) -> Self {
        Self {
            title: map.title.clone(),
            colours: map.colours.len(),
            symbols: map.symbols.len(),
            instances: map.instances.len(),
            layers: map.instances.layers().to_vec(),
        }
    }
}

// ============================================================================
// Map slot
// ============================================================================

/// Replace the loaded map
pub fn set_map(map: Map) -> Result<(), String> {
    let mut slot = MAP.lock().map_err(|e| format!("Map lock poisoned: {}", e))?;
    *slot = Some(map);
    Ok(())
}

/// Run `f` against the loaded map
pub fn with_map<T>(f: impl FnOnce(&Map) -> Result<T, String>) -> Result<T, String> {
    let slot = MAP.lock().map_err(|e| format!("Map lock poisoned: {}", e))?;
    let map = slot.as_ref().ok_or_else(|| "No map loaded".to_string())?;
    f(map)
}

pub fn with_map_mut<T>(f: impl FnOnce(&mut Map) -> Result<T, String>) -> Result<T, String> {
    let mut slot = MAP.lock().map_err(|e| format!("Map lock poisoned: {}", e))?;
    let map = slot.as_mut().ok_or_else(|| "No map loaded".to_string())?;
    f(map)
}

// ============================================================================
// Plain-Rust operations
// ============================================================================

pub fn load_map_text(text: &str) -> Result<MapSummary, String> {
    let map = converters::load(text).map_err(|e| format!("Failed to load map: {}", e))?;
    let summary = MapSummary::of(&map);
    set_map(map)?;
    Ok(summary)
}

pub fn save_map_text(map: &Map) -> Result<String, String> {
    converters::save_to_string(map).map_err(|e| format!("Failed to save map: {}", e))
}

pub fn display_list(map: &Map) -> Result<DisplayList, String> {
    DisplayList::build(map).map_err(|e| format!("Failed to render map: {}", e))
}

pub fn instance_shapes(map: &Map, instance_id: &str) -> Result<Vec<Shape>, String> {
    let id = parse_id(instance_id, "instance")?;
    let instance = map
        .instances
        .get(id)
        .ok_or_else(|| format!("Instance {} not found", id))?;
    render_instance(map, instance).map_err(|e| format!("Failed to render instance {}: {}", id, e))
}

/// Preview a line or area symbol along points the user is still drawing
pub fn live_path_shapes(map: &Map, symbol_id: &str, points: &[Vec2], ctx: &RenderContext) -> Result<Vec<Shape>, String> {
    let id = parse_id(symbol_id, "symbol")?;
    let symbol = map.symbols.get(id).ok_or_else(|| format!("Symbol {} not found", id))?;
    live_render_path(symbol, points, &map.colours, ctx).map_err(|e| format!("Failed to preview symbol {}: {}", id, e))
}

/// Preview a point symbol at `centre`
pub fn live_object_shapes(map: &Map, symbol_id: &str, centre: Vec2, ctx: &RenderContext) -> Result<Vec<Shape>, String> {
    let id = parse_id(symbol_id, "symbol")?;
    let symbol = map.symbols.get(id).ok_or_else(|| format!("Symbol {} not found", id))?;
    let SymbolKind::Point(point) = &symbol.kind else {
        return Err(format!("Symbol {} is not a point symbol", id));
    };
    live_render_objects(&point.map_objects, centre, &map.colours, ctx)
        .map_err(|e| format!("Failed to preview symbol {}: {}", id, e))
}

/// Bounding rectangle plus point handles for a selected instance
pub fn selection_overlay(map: &Map, instance_id: &str, ctx: &RenderContext) -> Result<Vec<Shape>, String> {
    let id = parse_id(instance_id, "instance")?;
    let instance = map
        .instances
        .get(id)
        .ok_or_else(|| format!("Instance {} not found", id))?;

    let colour_count = map.colours.len();
    let mut shapes = Vec::new();
    if let Some(bounds) = instance.bounding_box(&map.symbols) {
        shapes.push(selection_box(bounds, colour_count, ctx));
    }
    if let Some(path) = instance.segments() {
        shapes.extend(selection_handles(
            &path.anchor_points(),
            &path.control_points(),
            colour_count,
            ctx,
        ));
    }
    Ok(shapes)
}

// ============================================================================
// Exported functions
// ============================================================================

/// Load document text and make it the current map
#[wasm_bindgen(js_name = loadMap)]
pub fn load_map(text: &str) -> Result<JsValue, JsValue> {
    log::info!("loadMap called: {} bytes", text.len());
    into_js(load_map_text(text), "Map summary")
}

/// Current map as document text
#[wasm_bindgen(js_name = saveMap)]
pub fn save_map() -> Result<String, JsValue> {
    with_map(save_map_text).map_err(to_js_error)
}

#[wasm_bindgen(js_name = renderMap)]
pub fn render_map() -> Result<JsValue, JsValue> {
    into_js(with_map(display_list), "Display list")
}

#[wasm_bindgen(js_name = renderInstance)]
pub fn render_instance_js(instance_id: &str) -> Result<JsValue, JsValue> {
    into_js(with_map(|map| instance_shapes(map, instance_id)), "Instance shapes")
}

/// `points` is an array of `{x, y}`; `ctx` may be omitted
#[wasm_bindgen(js_name = liveRenderPath)]
pub fn live_render_path_js(symbol_id: &str, points: JsValue, ctx: JsValue) -> Result<JsValue, JsValue> {
    let points: Vec<Vec2> = deserialize(points, "Invalid points")?;
    let ctx: RenderContext = deserialize_or_default(ctx, "Invalid render context")?;
    into_js(
        with_map(|map| live_path_shapes(map, symbol_id, &points, &ctx)),
        "Preview shapes",
    )
}

#[wasm_bindgen(js_name = liveRenderObjects)]
pub fn live_render_objects_js(symbol_id: &str, x: f32, y: f32, ctx: JsValue) -> Result<JsValue, JsValue> {
    let ctx: RenderContext = deserialize_or_default(ctx, "Invalid render context")?;
    into_js(
        with_map(|map| live_object_shapes(map, symbol_id, Vec2::new(x, y), &ctx)),
        "Preview shapes",
    )
}

#[wasm_bindgen(js_name = selectionOverlay)]
pub fn selection_overlay_js(instance_id: &str, ctx: JsValue) -> Result<JsValue, JsValue> {
    let ctx: RenderContext = deserialize_or_default(ctx, "Invalid render context")?;
    into_js(
        with_map(|map| selection_overlay(map, instance_id, &ctx)),
        "Selection shapes",
    )
}

#[wasm_bindgen(js_name = swapLayers)]
pub fn swap_layers(a: i32, b: i32) -> Result<JsValue, JsValue> {
    let changes: Result<Vec<StoreChange>, String> = with_map_mut(|map| Ok(map.instances.swap_layers(a, b)));
    into_js(changes, "Store changes")
}

#[wasm_bindgen(js_name = setLayerOpacity)]
pub fn set_layer_opacity(layer: i32, opacity: f32) -> Result<JsValue, JsValue> {
    let changes: Result<Vec<StoreChange>, String> =
        with_map_mut(|map| Ok(map.instances.set_layer_opacity(layer, opacity)));
    into_js(changes, "Store changes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Colour, Instance, LineSymbol, MapObject, PathCollection, PathStyle, PointSymbol, Symbol, SymbolNumber};

    fn sample_map() -> (Map, Symbol, Symbol) {
        let mut map = Map::new("Park");
        let green = Colour::from_rgb("Green", 0, 160, 60);
        map.add_colour(green.clone()).unwrap();

        let tree = Symbol::new(
            "Tree",
            SymbolNumber::new(4, 1, 7),
            SymbolKind::Point(PointSymbol {
                map_objects: vec![MapObject::point(green.id, green.id, 1.0, 0.2)],
                is_rotatable: false,
            }),
        );
        let hedge = Symbol::new(
            "Hedge",
            SymbolNumber::new(4, 1, 9),
            SymbolKind::Line(LineSymbol {
                colour: green.id,
                style: PathStyle::solid(0.5),
            }),
        );
        map.add_symbol(tree.clone()).unwrap();
        map.add_symbol(hedge.clone()).unwrap();
        (map, tree, hedge)
    }

    #[test]
    fn test_instance_shapes_by_id() {
        let (mut map, tree, _) = sample_map();
        let instance = Instance::point(0, tree.id, Vec2::new(4.0, 4.0), 0.0);
        let id = instance.id.to_string();
        map.add_instance(instance).unwrap();

        assert_eq!(instance_shapes(&map, &id).unwrap().len(), 2);
        assert!(instance_shapes(&map, &uuid::Uuid::new_v4().to_string())
            .unwrap_err()
            .contains("not found"));
    }

    #[test]
    fn test_live_objects_need_point_symbol() {
        let (map, tree, hedge) = sample_map();
        let ctx = RenderContext::default();

        let shapes = live_object_shapes(&map, &tree.id.to_string(), Vec2::new(1.0, 1.0), &ctx).unwrap();
        assert_eq!(shapes.len(), 2);

        let err = live_object_shapes(&map, &hedge.id.to_string(), Vec2::ZERO, &ctx).unwrap_err();
        assert!(err.contains("not a point symbol"));
    }

    #[test]
    fn test_selection_overlay_for_path() {
        let (mut map, _, hedge) = sample_map();
        let instance = Instance::line(
            0,
            hedge.id,
            PathCollection::linear(vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)]),
        );
        let id = instance.id.to_string();
        map.add_instance(instance).unwrap();

        let shapes = selection_overlay(&map, &id, &RenderContext::with_zoom(5.0)).unwrap();
        // one rectangle, three anchor handles
        assert_eq!(shapes.len(), 4);
        assert!(matches!(shapes[0], Shape::Rectangle(_)));
    }

    #[test]
    fn test_map_slot_round_trip() {
        let (map, _, _) = sample_map();
        let text = save_map_text(&map).unwrap();

        let summary = load_map_text(&text).unwrap();
        assert_eq!(summary.title, "Park");
        assert_eq!(summary.colours, 1);
        assert_eq!(summary.symbols, 2);
        assert_eq!(summary.layers.len(), 1);

        let reloaded = with_map(|loaded| Ok(loaded.clone())).unwrap();
        assert_eq!(reloaded, map);

        assert!(load_map_text("<Map").unwrap_err().starts_with("Failed to load map"));
    }
}
