//! Version 1 writer

use crate::converters::errors::{MapperError, Result};
use crate::converters::values::{format_bool, format_colour_ref, format_f32};
use crate::models::{
    BezierPoint, Colour, DashStyle, Fill, Instance, InstanceKind, InstanceStore, Map, MapObject, MapObjectKind,
    MidStyle, PathCollection, PathSegment, PathStyle, Symbol, SymbolKind, Vec2, DEFAULT_LAYER,
};
use crate::xml::XmlNode;
use uuid::Uuid;

pub fn save_map(map: &Map) -> Result<XmlNode> {
    let mut node = XmlNode::new("Map");
    node.add_attribute("title", map.title.as_str())?;

    let mut colours = XmlNode::new("Colours");
    for colour in map.colours.iter() {
        colours.add_child(save_colour(colour)?)?;
    }

    let mut symbols = XmlNode::new("Symbols");
    for symbol in map.symbols.iter() {
        symbols.add_child(save_symbol(symbol)?)?;
    }

    let mut instances = XmlNode::new("Instances");
    for instance in map.instances.iter() {
        instances.add_child(save_instance(instance)?)?;
    }

    node.add_child(colours)?;
    node.add_child(symbols)?;
    node.add_child(instances)?;

    if has_custom_layers(&map.instances) {
        node.add_child(save_layers(&map.instances)?)?;
    }

    Ok(node)
}

fn save_colour(colour: &Colour) -> Result<XmlNode> {
    let mut node = XmlNode::new("Colour");
    node.add_attribute("id", colour.id.to_string())?;
    node.add_attribute("name", colour.name.as_str())?;
    node.add_attribute("hex", colour.value.to_string())?;
    Ok(node)
}

fn colour_leaf(name: &str, id: Uuid) -> XmlNode {
    XmlNode::with_text(name, format_colour_ref(id))
}

fn width_leaf(width: f32) -> XmlNode {
    XmlNode::with_text("Width", format_f32(width))
}

// ============================================================================
// Symbols
// ============================================================================

fn save_symbol(symbol: &Symbol) -> Result<XmlNode> {
    match &symbol.kind {
        SymbolKind::Point(point) => {
            let mut node = symbol_header("PointSymbol", symbol)?;
            node.add_attribute("isRotatable", format_bool(point.is_rotatable))?;
            node.add_child(save_map_objects(&point.map_objects)?)?;
            Ok(node)
        }
        SymbolKind::Line(line) => {
            let mut style = XmlNode::new("Style");
            style.add_child(colour_leaf("Colour", line.colour))?;
            style.add_child(width_leaf(line.style.width))?;
            save_path_style(&mut style, &line.style)?;

            let mut node = symbol_header("LineSymbol", symbol)?;
            node.add_child(style)?;
            Ok(node)
        }
        SymbolKind::Area(area) => {
            let mut border = XmlNode::new("Border");
            border.add_child(colour_leaf("Colour", area.border_colour))?;
            border.add_child(width_leaf(area.style.width))?;

            let mut style = XmlNode::new("Style");
            style.add_child(save_fill(&area.fill)?)?;
            style.add_child(border)?;
            save_path_style(&mut style, &area.style)?;

            let mut node = symbol_header("AreaSymbol", symbol)?;
            node.add_child(style)?;
            Ok(node)
        }
        SymbolKind::Text(_) => Err(MapperError::NotImplemented("text symbols")),
    }
}

/// Element carrying the attributes shared by every symbol kind
fn symbol_header(name: &str, symbol: &Symbol) -> Result<XmlNode> {
    let mut node = XmlNode::new(name);
    node.add_attribute("id", symbol.id.to_string())?;
    node.add_attribute("name", symbol.name.as_str())?;
    node.add_attribute("description", symbol.description.as_str())?;
    node.add_attribute("number", symbol.number.to_string())?;
    node.add_attribute("isUncrossable", format_bool(symbol.is_uncrossable))?;
    node.add_attribute("isHelper", format_bool(symbol.is_helper_symbol))?;
    Ok(node)
}

fn save_path_style(style: &mut XmlNode, path_style: &PathStyle) -> Result<()> {
    if let Some(dash) = &path_style.dash_style {
        style.add_child(save_dash_style(dash)?)?;
    }
    if let Some(mid) = &path_style.mid_style {
        style.add_child(save_mid_style(mid)?)?;
    }
    Ok(())
}

fn save_dash_style(dash: &DashStyle) -> Result<XmlNode> {
    let mut node = XmlNode::new("DashStyle");
    node.add_attribute("dashLength", format_f32(dash.dash_length))?;
    node.add_attribute("gapLength", format_f32(dash.gap_length))?;
    node.add_attribute("groupSize", dash.group_size.to_string())?;
    node.add_attribute("groupGapLength", format_f32(dash.group_gap_length))?;
    Ok(node)
}

fn save_mid_style(mid: &MidStyle) -> Result<XmlNode> {
    let mut node = XmlNode::new("MidStyle");
    node.add_attribute("gapLength", format_f32(mid.gap_length))?;
    node.add_attribute("requireMid", format_bool(mid.require_mid))?;
    node.add_attribute("initialOffset", format_f32(mid.initial_offset))?;
    node.add_attribute("endOffset", format_f32(mid.end_offset))?;
    node.add_child(save_map_objects(&mid.map_objects)?)?;
    Ok(node)
}

fn save_fill(fill: &Fill) -> Result<XmlNode> {
    match fill {
        Fill::Solid { colour } => Ok(colour_leaf("SolidFill", *colour)),
        Fill::Object(object_fill) => {
            let mut node = XmlNode::new("ObjectFill");
            node.add_attribute("spacingX", format_f32(object_fill.spacing.x))?;
            node.add_attribute("spacingY", format_f32(object_fill.spacing.y))?;
            node.add_attribute("offsetX", format_f32(object_fill.offset.x))?;
            node.add_attribute("offsetY", format_f32(object_fill.offset.y))?;
            node.add_child(save_map_objects(&object_fill.objects)?)?;
            Ok(node)
        }
    }
}

// ============================================================================
// Map objects
// ============================================================================

fn save_map_objects(objects: &[MapObject]) -> Result<XmlNode> {
    let mut node = XmlNode::new("MapObjects");
    for object in objects {
        node.add_child(save_map_object(object)?)?;
    }
    Ok(node)
}

fn save_map_object(object: &MapObject) -> Result<XmlNode> {
    let mut style = XmlNode::new("Style");

    let node = match &object.kind {
        MapObjectKind::Point(point) => {
            let mut inner = XmlNode::new("Inner");
            inner.add_child(colour_leaf("Colour", point.inner_colour))?;
            inner.add_child(width_leaf(point.inner_radius))?;

            let mut outer = XmlNode::new("Outer");
            outer.add_child(colour_leaf("Colour", point.outer_colour))?;
            outer.add_child(width_leaf(point.outer_radius))?;

            style.add_child(inner)?;
            style.add_child(outer)?;

            let mut node = XmlNode::new("PointObject");
            node.add_attribute("id", object.id.to_string())?;
            node.add_child(style)?;
            node
        }
        MapObjectKind::Line(line) => {
            style.add_child(colour_leaf("Colour", line.colour))?;
            style.add_child(width_leaf(line.width))?;

            let mut node = XmlNode::new("LineObject");
            node.add_attribute("id", object.id.to_string())?;
            node.add_child(style)?;
            node.add_child(save_points("Points", &line.points)?)?;
            node
        }
        MapObjectKind::Area(area) => {
            let mut border = XmlNode::new("Border");
            border.add_child(colour_leaf("Colour", area.border_colour))?;
            border.add_child(width_leaf(area.width))?;

            style.add_child(save_fill(&area.fill)?)?;
            style.add_child(border)?;

            let mut node = XmlNode::new("AreaObject");
            node.add_attribute("id", object.id.to_string())?;
            node.add_child(style)?;
            node.add_child(save_points("Points", &area.points)?)?;
            node
        }
        MapObjectKind::Text(_) => return Err(MapperError::NotImplemented("text objects")),
    };

    Ok(node)
}

fn save_point(name: &str, p: Vec2) -> Result<XmlNode> {
    let mut node = XmlNode::new(name);
    node.add_attribute("x", format_f32(p.x))?;
    node.add_attribute("y", format_f32(p.y))?;
    Ok(node)
}

fn save_points(name: &str, points: &[Vec2]) -> Result<XmlNode> {
    let mut node = XmlNode::new(name);
    for p in points {
        node.add_child(save_point("Point", *p)?)?;
    }
    Ok(node)
}

// ============================================================================
// Instances
// ============================================================================

fn save_instance(instance: &Instance) -> Result<XmlNode> {
    match &instance.kind {
        InstanceKind::Point(point) => {
            let mut node = instance_header("PointInstance", instance)?;
            if point.rotation != 0.0 {
                node.add_attribute("rotation", format_f32(point.rotation))?;
            }
            node.add_child(save_point("Centre", point.centre)?)?;
            Ok(node)
        }
        InstanceKind::Line(segments) => {
            let mut node = instance_header("LineInstance", instance)?;
            node.add_child(save_segments(segments)?)?;
            Ok(node)
        }
        InstanceKind::Area(segments) => {
            let mut node = instance_header("AreaInstance", instance)?;
            node.add_child(save_segments(segments)?)?;
            Ok(node)
        }
        InstanceKind::Text(_) => Err(MapperError::NotImplemented("text instances")),
    }
}

fn instance_header(name: &str, instance: &Instance) -> Result<XmlNode> {
    let mut node = XmlNode::new(name);
    node.add_attribute("id", instance.id.to_string())?;
    node.add_attribute("layer", instance.layer.to_string())?;
    if instance.opacity != 1.0 {
        node.add_attribute("opacity", format_f32(instance.opacity))?;
    }
    node.add_child(XmlNode::with_text("Symbol", instance.symbol_id.to_string()))?;
    Ok(node)
}

fn save_segments(segments: &PathCollection) -> Result<XmlNode> {
    let mut node = XmlNode::new("Segments");
    for segment in segments.segments() {
        let child = match segment {
            PathSegment::Linear(points) => save_points("LinearPath", points)?,
            PathSegment::Bezier(points) => {
                let mut bezier = XmlNode::new("BezierPath");
                for p in points {
                    bezier.add_child(save_bezier_point(p)?)?;
                }
                bezier
            }
        };
        node.add_child(child)?;
    }
    Ok(node)
}

fn save_bezier_point(p: &BezierPoint) -> Result<XmlNode> {
    let mut node = XmlNode::new("BezierPoint");
    node.add_child(save_point("EarlyControl", p.early_control)?)?;
    node.add_child(save_point("Anchor", p.anchor)?)?;
    node.add_child(save_point("LateControl", p.late_control)?)?;
    Ok(node)
}

// ============================================================================
// Layers
// ============================================================================

fn has_custom_layers(instances: &InstanceStore) -> bool {
    match instances.layers() {
        [only] => only.name != DEFAULT_LAYER || only.index != 0,
        _ => true,
    }
}

fn save_layers(instances: &InstanceStore) -> Result<XmlNode> {
    let mut node = XmlNode::new("Layers");
    for layer in instances.layers() {
        let mut child = XmlNode::new("Layer");
        child.add_attribute("name", layer.name.as_str())?;
        child.add_attribute("index", layer.index.to_string())?;
        node.add_child(child)?;
    }
    Ok(node)
}
