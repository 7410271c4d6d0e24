//! WASM build test
//!
//! Drives the exported API through the JavaScript boundary. Run with
//! `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use mapper_wasm::api::map::{load_map, render_map, render_instance_js, save_map};
use mapper_wasm::models::{Colour, Instance, Map, MapObject, PointSymbol, Symbol, SymbolKind, SymbolNumber, Vec2};
use mapper_wasm::renderers::DisplayList;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn knoll_map() -> (Map, Instance) {
    let mut map = Map::new("Browser");
    let brown = Colour::from_rgb("Brown", 180, 90, 26);
    map.add_colour(brown.clone()).unwrap();

    let knoll = Symbol::new(
        "Knoll",
        SymbolNumber::new(1, 1, 2),
        SymbolKind::Point(PointSymbol {
            map_objects: vec![MapObject::point(brown.id, brown.id, 0.5, 0.1)],
            is_rotatable: false,
        }),
    );
    let instance = Instance::point(0, knoll.id, Vec2::new(3.0, 4.0), 0.0);
    map.add_symbol(knoll).unwrap();
    map.add_instance(instance.clone()).unwrap();
    (map, instance)
}

#[wasm_bindgen_test]
fn test_load_render_save() {
    let (map, instance) = knoll_map();
    let text = mapper_wasm::save_to_string(&map).unwrap();

    assert!(load_map(&text).is_ok());

    let list: DisplayList = serde_wasm_bindgen::from_value(render_map().unwrap()).unwrap();
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].shapes.len(), 2);

    let shapes = render_instance_js(&instance.id.to_string()).unwrap();
    assert!(shapes.is_object());

    assert_eq!(mapper_wasm::load(&save_map().unwrap()).unwrap(), map);
}

#[wasm_bindgen_test]
fn test_load_rejects_bad_text() {
    assert!(load_map("<Map").is_err());
}
