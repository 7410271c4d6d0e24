//! Version 1 reader
//!
//! The map is built in stages so that every reference is checked against
//! what has already been loaded: colours first, then symbols (which refer to
//! colours), then instances (which refer to symbols).

use crate::converters::errors::{MapperError, Result};
use crate::converters::values::{
    attr, attr_or, bool_attr, child_colour_ref, child_point, child_text, child_uuid, colour_ref, point, uuid_attr,
};
use crate::models::{
    AreaObject, AreaSymbol, BezierPoint, Colour, DashStyle, Fill, Instance, InstanceKind, Layer, LineObject, LineSymbol, Map, MapObject,
    MapObjectKind, MidStyle, ObjectFill, PathCollection, PathSegment, PathStyle, PointInstance, PointObject,
    PointSymbol, Symbol, SymbolKind, SymbolNumber, Vec2,
};
use crate::xml::{XmlError, XmlNode};

pub fn load_map(root: &XmlNode) -> Result<Map> {
    if root.name != "Map" {
        return Err(MapperError::malformed(&root.name, "root element must be <Map>"));
    }

    let mut map = Map::new(root.require_attribute("title")?);

    for node in root.require_child("Colours")?.children() {
        map.add_colour(load_colour(node)?)?;
    }
    log::debug!("Loaded {} colours", map.colours.len());

    for node in root.require_child("Symbols")?.children() {
        map.add_symbol(load_symbol(node)?)?;
    }
    log::debug!("Loaded {} symbols", map.symbols.len());

    for node in root.require_child("Instances")?.children() {
        map.add_instance(load_instance(node)?)?;
    }
    log::debug!("Loaded {} instances", map.instances.len());

    if let Some(layers) = root.children().get("Layers") {
        map.instances.set_layers(load_layers(layers)?);
    }

    Ok(map)
}

fn load_colour(node: &XmlNode) -> Result<Colour> {
    expect_name(node, "Colour")?;
    Ok(Colour::with_id(
        uuid_attr(node, "id")?,
        node.require_attribute("name")?,
        attr::<u32>(node, "hex")?,
    ))
}

// ============================================================================
// Symbols
// ============================================================================

fn load_symbol(node: &XmlNode) -> Result<Symbol> {
    let kind = match node.name.as_str() {
        "PointSymbol" => SymbolKind::Point(load_point_symbol(node)?),
        "LineSymbol" => SymbolKind::Line(load_line_symbol(node)?),
        "AreaSymbol" => SymbolKind::Area(load_area_symbol(node)?),
        "TextSymbol" => return Err(MapperError::NotImplemented("text symbols")),
        other => return Err(MapperError::malformed(other, "unknown symbol type")),
    };

    let number = node.require_attribute("number")?;
    let number = number
        .parse::<SymbolNumber>()
        .map_err(|e| MapperError::malformed(&node.name, e.to_string()))?;

    Ok(Symbol {
        id: uuid_attr(node, "id")?,
        name: node.require_attribute("name")?.to_string(),
        description: node.require_attribute("description")?.to_string(),
        number,
        is_uncrossable: bool_attr(node, "isUncrossable")?,
        is_helper_symbol: bool_attr(node, "isHelper")?,
        kind,
    })
}

fn load_point_symbol(node: &XmlNode) -> Result<PointSymbol> {
    // Older files carry the inverse `isLocked` flag
    let is_rotatable = if node.attributes().exists("isRotatable") {
        bool_attr(node, "isRotatable")?
    } else if node.attributes().exists("isLocked") {
        !bool_attr(node, "isLocked")?
    } else {
        return Err(XmlError::MissingAttribute {
            element: node.name.clone(),
            attribute: "isRotatable".to_string(),
        }
        .into());
    };

    Ok(PointSymbol {
        map_objects: load_map_objects(node.require_child("MapObjects")?)?,
        is_rotatable,
    })
}

fn load_line_symbol(node: &XmlNode) -> Result<LineSymbol> {
    let style = node.require_child("Style")?;

    Ok(LineSymbol {
        colour: child_colour_ref(style, "Colour")?,
        style: load_path_style(style, child_text(style, "Width")?)?,
    })
}

fn load_area_symbol(node: &XmlNode) -> Result<AreaSymbol> {
    let style = node.require_child("Style")?;
    let border = style.require_child("Border")?;

    Ok(AreaSymbol {
        fill: load_fill(style)?,
        border_colour: child_colour_ref(border, "Colour")?,
        style: load_path_style(style, child_text(border, "Width")?)?,
    })
}

fn load_path_style(style: &XmlNode, width: f32) -> Result<PathStyle> {
    let mut path_style = PathStyle::solid(width);

    if let Some(dash) = style.children().get("DashStyle") {
        path_style.dash_style = Some(DashStyle {
            dash_length: attr(dash, "dashLength")?,
            gap_length: attr(dash, "gapLength")?,
            group_size: attr(dash, "groupSize")?,
            group_gap_length: attr(dash, "groupGapLength")?,
        });
    }

    if let Some(mid) = style.children().get("MidStyle") {
        path_style.mid_style = Some(MidStyle {
            map_objects: load_map_objects(mid.require_child("MapObjects")?)?,
            gap_length: attr(mid, "gapLength")?,
            require_mid: bool_attr(mid, "requireMid")?,
            initial_offset: attr(mid, "initialOffset")?,
            end_offset: attr(mid, "endOffset")?,
        });
    }

    Ok(path_style)
}

/// The fill is the first child of a style block
fn load_fill(style: &XmlNode) -> Result<Fill> {
    let node = style
        .children()
        .first()
        .ok_or_else(|| MapperError::malformed(&style.name, "missing fill"))?;

    match node.name.as_str() {
        "SolidFill" => Ok(Fill::solid(colour_ref(node)?)),
        "ObjectFill" => Ok(Fill::Object(ObjectFill {
            objects: load_map_objects(node.require_child("MapObjects")?)?,
            spacing: Vec2::new(attr(node, "spacingX")?, attr(node, "spacingY")?),
            offset: Vec2::new(attr(node, "offsetX")?, attr(node, "offsetY")?),
        })),
        other => Err(MapperError::malformed(other, "unknown fill type")),
    }
}

// ============================================================================
// Map objects
// ============================================================================

fn load_map_objects(node: &XmlNode) -> Result<Vec<MapObject>> {
    node.children().iter().map(load_map_object).collect()
}

fn load_map_object(node: &XmlNode) -> Result<MapObject> {
    let kind = match node.name.as_str() {
        "PointObject" => {
            let style = node.require_child("Style")?;
            let inner = style.require_child("Inner")?;
            let outer = style.require_child("Outer")?;

            MapObjectKind::Point(PointObject {
                inner_colour: child_colour_ref(inner, "Colour")?,
                outer_colour: child_colour_ref(outer, "Colour")?,
                inner_radius: child_text(inner, "Width")?,
                outer_radius: child_text(outer, "Width")?,
            })
        }
        "LineObject" => {
            let style = node.require_child("Style")?;

            MapObjectKind::Line(LineObject {
                points: load_points(node.require_child("Points")?)?,
                width: child_text(style, "Width")?,
                colour: child_colour_ref(style, "Colour")?,
            })
        }
        "AreaObject" => {
            let style = node.require_child("Style")?;
            let border = style.require_child("Border")?;

            MapObjectKind::Area(AreaObject {
                points: load_points(node.require_child("Points")?)?,
                width: child_text(border, "Width")?,
                border_colour: child_colour_ref(border, "Colour")?,
                fill: load_fill(style)?,
            })
        }
        "TextObject" => return Err(MapperError::NotImplemented("text objects")),
        other => return Err(MapperError::malformed(other, "unknown map object type")),
    };

    Ok(MapObject::with_id(uuid_attr(node, "id")?, kind))
}

fn load_points(node: &XmlNode) -> Result<Vec<Vec2>> {
    node.children().iter().map(point).collect()
}

// ============================================================================
// Instances
// ============================================================================

fn load_instance(node: &XmlNode) -> Result<Instance> {
    let kind = match node.name.as_str() {
        "PointInstance" => InstanceKind::Point(PointInstance {
            centre: child_point(node, "Centre")?,
            rotation: attr_or(node, "rotation", 0.0)?,
        }),
        "LineInstance" => InstanceKind::Line(load_segments(node.require_child("Segments")?)?),
        "AreaInstance" => InstanceKind::Area(load_segments(node.require_child("Segments")?)?),
        "TextInstance" => return Err(MapperError::NotImplemented("text instances")),
        other => return Err(MapperError::malformed(other, "unknown instance type")),
    };

    Ok(Instance {
        id: uuid_attr(node, "id")?,
        layer: attr(node, "layer")?,
        opacity: attr_or(node, "opacity", 1.0)?,
        symbol_id: child_uuid(node, "Symbol")?,
        kind,
    })
}

fn load_segments(node: &XmlNode) -> Result<PathCollection> {
    let mut segments = PathCollection::default();

    for segment in node.children() {
        match segment.name.as_str() {
            "LinearPath" => segments.push(PathSegment::Linear(load_points(segment)?)),
            "BezierPath" => {
                let points = segment
                    .children()
                    .iter()
                    .map(|p| -> Result<BezierPoint> {
                        Ok(BezierPoint {
                            early_control: child_point(p, "EarlyControl")?,
                            anchor: child_point(p, "Anchor")?,
                            late_control: child_point(p, "LateControl")?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                segments.push(PathSegment::Bezier(points));
            }
            other => return Err(MapperError::malformed(other, "unknown path segment type")),
        }
    }

    Ok(segments)
}

fn load_layers(node: &XmlNode) -> Result<Vec<Layer>> {
    node.children()
        .iter()
        .map(|layer| -> Result<Layer> {
            Ok(Layer {
                name: layer.require_attribute("name")?.to_string(),
                index: attr(layer, "index")?,
            })
        })
        .collect()
}

fn expect_name(node: &XmlNode, name: &str) -> Result<()> {
    if node.name != name {
        return Err(MapperError::malformed(&node.name, format!("expected <{}>", name)));
    }
    Ok(())
}
