// Version-1 documents: round trips, version handling and reference checks

use mapper_wasm::converters::{load, save, save_to_string, MapperError};
use mapper_wasm::models::{
    AreaSymbol, BezierPoint, Colour, DashStyle, Fill, Font, Instance, LineSymbol, Map, MapObject, MidStyle,
    ModelError, ObjectFill, PathCollection, PathSegment, PathStyle, PointSymbol, Symbol, SymbolKind, SymbolNumber,
    TextSymbol, Vec2, TRANSPARENT_ID,
};
use std::fs;
use tempfile::TempDir;

/// A map touching every version-1 construct
fn orienteering_map() -> Map {
    let mut map = Map::new("Forest Sprint");

    let black = Colour::new("Black", 0xff000000);
    let brown = Colour::from_rgb("Brown", 180, 90, 26);
    let yellow = Colour::from_cmyk("Yellow", 0, 27, 79, 0, 255);
    for colour in [black.clone(), brown.clone(), yellow.clone()] {
        map.add_colour(colour).expect("colour should be added");
    }

    let mut boulder = Symbol::new(
        "Boulder",
        SymbolNumber::new(2, 0, 4),
        SymbolKind::Point(PointSymbol {
            map_objects: vec![
                MapObject::point(black.id, TRANSPARENT_ID, 0.4, 0.0),
                MapObject::line(vec![Vec2::new(0.0, -0.5), Vec2::new(0.0, 0.5)], 0.1, black.id),
            ],
            is_rotatable: true,
        }),
    );
    boulder.description = "Small distinct boulder".to_string();

    let mut contour = Symbol::new(
        "Form line",
        SymbolNumber::new(1, 0, 3),
        SymbolKind::Line(LineSymbol {
            colour: brown.id,
            style: PathStyle::solid(0.14)
                .with_dash(DashStyle::grouped(2.5, 0.25, 2, 0.5))
                .with_mid(MidStyle {
                    map_objects: vec![MapObject::line(vec![Vec2::ZERO, Vec2::new(0.0, 0.6)], 0.14, brown.id)],
                    gap_length: 10.0,
                    require_mid: true,
                    initial_offset: 1.0,
                    end_offset: 1.0,
                }),
        }),
    );
    contour.is_uncrossable = false;

    let mut field = Symbol::new(
        "Open land",
        SymbolNumber::new(4, 0, 1),
        SymbolKind::Area(AreaSymbol {
            fill: Fill::solid(yellow.id),
            border_colour: TRANSPARENT_ID,
            style: PathStyle::solid(0.0),
        }),
    );
    field.is_helper_symbol = true;

    let thicket = Symbol::new(
        "Undergrowth",
        SymbolNumber::new(4, 0, 7),
        SymbolKind::Area(AreaSymbol {
            fill: Fill::Object(ObjectFill {
                objects: vec![MapObject::point(black.id, black.id, 0.1, 0.05)],
                spacing: Vec2::new(1.5, 1.5),
                offset: Vec2::new(0.25, 0.0),
            }),
            border_colour: black.id,
            style: PathStyle::solid(0.1).with_dash(DashStyle::new(1.0, 0.5)),
        }),
    );

    let ids = [boulder.id, contour.id, field.id, thicket.id];
    for symbol in [boulder, contour, field, thicket] {
        map.add_symbol(symbol).expect("symbol should be added");
    }

    let upper = map.instances.add_layer("Contours");

    let mut rock = Instance::point(0, ids[0], Vec2::new(12.5, -3.25), 45.0);
    rock.opacity = 0.75;
    map.add_instance(rock).expect("point instance");

    let curve = PathCollection::new(vec![
        PathSegment::Linear(vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 1.0)]),
        PathSegment::Bezier(vec![
            BezierPoint::new(Vec2::new(4.0, 1.0), Vec2::new(3.0, 0.5), Vec2::new(5.0, 1.5)),
            BezierPoint::new(Vec2::new(9.0, 0.0), Vec2::new(8.0, 2.0), Vec2::new(10.0, -2.0)),
        ]),
    ]);
    map.add_instance(Instance::line(upper, ids[1], curve)).expect("line instance");

    let square = PathCollection::linear(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(20.0, 0.0),
        Vec2::new(20.0, 20.0),
        Vec2::new(0.0, 20.0),
    ]);
    map.add_instance(Instance::area(0, ids[2], square.clone())).expect("area instance");
    map.add_instance(Instance::area(0, ids[3], square)).expect("area instance");

    map
}

#[test]
fn test_round_trip_preserves_everything() {
    let map = orienteering_map();
    let text = save_to_string(&map).expect("save should succeed");
    let loaded = load(&text).expect("load should succeed");

    assert_eq!(loaded, map, "reloaded map should equal the original");
}

#[test]
fn test_round_trip_keeps_line_breaks_in_text() {
    let mut map = orienteering_map();
    map.title = "Two\nlines".to_string();
    let boulder = map.symbols.get_by_name("Boulder").unwrap().id;
    map.symbols.get_mut(boulder).unwrap().description = "Runnable path.\n\tCrossable.".to_string();

    let loaded = load(&save_to_string(&map).unwrap()).unwrap();
    assert_eq!(loaded.title, "Two\nlines");
    assert_eq!(loaded.symbols.get(boulder).unwrap().description, "Runnable path.\n\tCrossable.");
    assert_eq!(loaded, map);
}

#[test]
fn test_round_trip_preserves_print_order() {
    let mut map = orienteering_map();
    let yellow = map.colours.get_by_name("Yellow").expect("yellow").id;
    map.colours.move_to(yellow, 0).expect("reorder");

    let loaded = load(&save_to_string(&map).unwrap()).unwrap();
    let names: Vec<&str> = loaded.colours.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Yellow", "Black", "Brown"]);

    let symbols: Vec<&str> = loaded.symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(symbols, vec!["Boulder", "Form line", "Open land", "Undergrowth"]);

    let instance_ids: Vec<_> = loaded.instances.iter().map(|i| i.id).collect();
    let original_ids: Vec<_> = map.instances.iter().map(|i| i.id).collect();
    assert_eq!(instance_ids, original_ids);
}

#[test]
fn test_saved_document_shape() {
    let doc = save(&orienteering_map()).unwrap();
    assert_eq!(doc.metadata.get("version"), Some("1"));
    assert_eq!(doc.root.name, "Map");

    let text = doc.to_xml_string().unwrap();
    assert!(text.contains("<Layers>"));
    assert!(text.contains("isRotatable=\"True\""));
    assert!(text.contains("<ObjectFill"));
    assert!(text.contains("<BezierPath>"));
    assert!(text.contains("Transparent"));
}

#[test]
fn test_missing_symbol_reference_fails_whole_load() {
    let map = orienteering_map();
    let text = save_to_string(&map).unwrap();

    let boulder = map.symbols.get_by_name("Boulder").unwrap().id;
    let stray = uuid::Uuid::new_v4();
    let broken = text.replace(
        &format!("<Symbol>{}</Symbol>", boulder),
        &format!("<Symbol>{}</Symbol>", stray),
    );
    assert_ne!(broken, text, "the instance's symbol reference should have been rewritten");

    match load(&broken) {
        Err(MapperError::Reference(ModelError::UnresolvedSymbol { symbol, .. })) => assert_eq!(symbol, stray),
        other => panic!("expected a reference error, got {:?}", other),
    }
}

#[test]
fn test_missing_colour_reference_fails() {
    let map = orienteering_map();
    let text = save_to_string(&map).unwrap();

    let yellow = map.colours.get_by_name("Yellow").unwrap();
    // Re-key the colour definition so the symbol painting with it dangles
    let without = text.replace(&format!("id=\"{}\"", yellow.id), &format!("id=\"{}\"", uuid::Uuid::new_v4()));

    assert!(matches!(load(&without), Err(MapperError::Reference(_))));
}

#[test]
fn test_instance_on_wrong_symbol_kind_fails_load() {
    let map = orienteering_map();
    let text = save_to_string(&map).unwrap();

    // Point the form line's line instance at the boulder point symbol
    let boulder = map.symbols.get_by_name("Boulder").unwrap().id;
    let contour = map.symbols.get_by_name("Form line").unwrap().id;
    let broken = text.replace(
        &format!("<Symbol>{}</Symbol>", contour),
        &format!("<Symbol>{}</Symbol>", boulder),
    );
    assert_ne!(broken, text);

    match load(&broken) {
        Err(MapperError::Reference(ModelError::SymbolKindMismatch { symbol, .. })) => assert_eq!(symbol, boulder),
        other => panic!("expected a symbol kind mismatch, got {:?}", other),
    }
}

#[test]
fn test_text_symbols_are_not_loaded() {
    let text = r#"<?meta version="1"?>
<Map title="Labels">
  <Colours>
    <Colour id="6f1c2a3e-1111-4e2b-9c1d-0a0b0c0d0e0f" name="Black" hex="4278190080"/>
  </Colours>
  <Symbols>
    <TextSymbol id="6f1c2a3e-3333-4e2b-9c1d-0a0b0c0d0e0f" name="Place name" description="" number="15-0-0" isUncrossable="False" isHelper="False"/>
  </Symbols>
  <Instances/>
</Map>"#;

    assert_eq!(load(text), Err(MapperError::NotImplemented("text symbols")));
}

#[test]
fn test_text_symbols_are_not_saved() {
    let mut map = orienteering_map();
    let black = map.colours.get_by_name("Black").unwrap().id;
    let label = Symbol::new(
        "Place name",
        SymbolNumber::new(15, 0, 0),
        SymbolKind::Text(TextSymbol {
            font: Font::new("Label", "Arial", 3.0),
            colour: black,
            is_rotatable: false,
            fill_colour: TRANSPARENT_ID,
            border_colour: TRANSPARENT_ID,
            border_width: 0.0,
            framing_colour: TRANSPARENT_ID,
            framing_width: 0.0,
        }),
    );
    map.add_symbol(label).unwrap();

    assert!(matches!(save(&map), Err(MapperError::NotImplemented("text symbols"))));
    assert_eq!(save_to_string(&map), Err(MapperError::NotImplemented("text symbols")));
}

#[test]
fn test_version_errors() {
    let body = "<Map title=\"x\"><Colours/><Symbols/><Instances/></Map>";

    assert_eq!(load(body), Err(MapperError::MissingVersion));
    assert_eq!(
        load(&format!("<?meta version=\"2\"?>{}", body)),
        Err(MapperError::UnsupportedVersion("2".to_string()))
    );
    assert!(load(&format!("<?meta version=\"1\"?>{}", body)).is_ok());
}

#[test]
fn test_legacy_locked_attribute() {
    let text = r#"<?meta version="1"?>
<Map title="Legacy">
  <Colours>
    <Colour id="6f1c2a3e-1111-4e2b-9c1d-0a0b0c0d0e0f" name="Black" hex="4278190080"/>
  </Colours>
  <Symbols>
    <PointSymbol id="6f1c2a3e-2222-4e2b-9c1d-0a0b0c0d0e0f" name="Cairn" description="" number="1-1-5" isUncrossable="False" isHelper="False" isLocked="True">
      <MapObjects/>
    </PointSymbol>
  </Symbols>
  <Instances/>
</Map>"#;

    let map = load(text).expect("legacy document should load");
    let symbol = map.symbols.get_by_name("Cairn").unwrap();
    match &symbol.kind {
        SymbolKind::Point(point) => assert!(!point.is_rotatable),
        other => panic!("expected a point symbol, got {:?}", other),
    }
}

#[test]
fn test_save_and_load_through_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("sprint.map");

    let map = orienteering_map();
    fs::write(&path, save_to_string(&map).unwrap()).expect("write map file");

    let text = fs::read_to_string(&path).expect("read map file");
    assert_eq!(load(&text).unwrap(), map);
}
