//! Write/read round-trip tests over the public API

use dxfstream::io::from_str;
use dxfstream::{
    Block, Circle, Color, Drawing, Entity, Face3D, Line, LwPolyline, Point, Polyline, Text,
    Vector3,
};
#[test]
fn test_empty_drawing_round_trip() {
    let drawing = Drawing::with_defaults();
    let text = drawing.to_dxf_string().unwrap();
    assert!(text.starts_with("  0\nSECTION\n  2\nHEADER\n"));
    assert!(text.ends_with("  0\nEOF\n"));

    let reparsed = from_str(&text).unwrap();
    assert_eq!(reparsed.header.version(), Some("AC1015"));
    assert!(reparsed.tables.line_types.contains("CONTINUOUS"));
    assert!(reparsed.tables.vports.contains("*ACTIVE"));
    assert!(reparsed.entities.entities.is_empty());
}

#[test]
fn test_all_entity_kinds_round_trip() {
    let mut drawing = Drawing::with_defaults();

    drawing.add_entity(Entity::Line(Line::from_points(
        Vector3::ZERO,
        Vector3::new(10.0, 0.0, 0.0),
    )));

    let mut circle = Circle::new();
    circle.center = Vector3::new(5.0, 5.0, 0.0);
    circle.radius = 2.5;
    drawing.add_entity(Entity::Circle(circle));

    let mut point = Point::new();
    point.position = Vector3::new(1.0, 2.0, 3.0);
    drawing.add_entity(Entity::Point(point));

    let mut text = Text::new("hello");
    text.height = 2.0;
    drawing.add_entity(Entity::Text(text));

    let mut polyline = Polyline::new();
    polyline.add_vertex(0.0, 0.0, 0.0);
    polyline.add_vertex(1.0, 1.0, 1.0);
    polyline.add_vertex(2.0, 0.0, 0.5);
    drawing.add_entity(Entity::Polyline(polyline));

    let mut lw = LwPolyline::new();
    lw.add_vertex(0.0, 0.0);
    lw.add_vertex(4.0, 0.0);
    lw.add_vertex(4.0, 3.0);
    lw.set_closed(true);
    drawing.add_entity(Entity::LwPolyline(lw));

    let mut face = Face3D::new();
    face.corners[1] = Vector3::new(1.0, 0.0, 0.0);
    face.corners[2] = Vector3::new(1.0, 1.0, 0.0);
    face.corners[3] = Vector3::new(0.0, 1.0, 0.0);
    drawing.add_entity(Entity::Face3D(face));

    let rendered = drawing.to_dxf_string().unwrap();
    let reparsed = from_str(&rendered).unwrap();
    assert_eq!(reparsed.entities.entities, drawing.entities.entities);
}

#[test]
fn test_block_definitions_round_trip() {
    let mut drawing = Drawing::with_defaults();
    let mut block = Block::new("DOOR");
    block.base = Vector3::new(0.5, 0.0, 0.0);
    block.push(Entity::Line(Line::from_points(
        Vector3::ZERO,
        Vector3::new(0.0, 2.0, 0.0),
    )));
    drawing.blocks.push(block);

    let rendered = drawing.to_dxf_string().unwrap();
    let reparsed = from_str(&rendered).unwrap();
    assert_eq!(reparsed.blocks.blocks, drawing.blocks.blocks);
    assert_eq!(reparsed.blocks.get("door").unwrap().entities.len(), 1);
}

#[test]
fn test_defaults_stamped_and_preserved() {
    let mut drawing = Drawing::with_defaults();
    drawing.add_entity(Entity::Line(Line::from_points(
        Vector3::ZERO,
        Vector3::new(1.0, 0.0, 0.0),
    )));

    let rendered = drawing.to_dxf_string().unwrap();
    let reparsed = from_str(&rendered).unwrap();
    let common = reparsed.entities.entities[0].common();
    assert_eq!(common.layer, "0");
    assert_eq!(common.line_type, "CONTINUOUS");
    assert_eq!(common.color, Color::Index(7));
}

#[test]
fn test_header_extents_round_trip() {
    let mut drawing = Drawing::with_defaults();
    drawing
        .header
        .set_extents(Vector3::new(-1.0, -2.0, 0.0), Vector3::new(10.0, 20.0, 0.0));

    let rendered = drawing.to_dxf_string().unwrap();
    let reparsed = from_str(&rendered).unwrap();
    assert_eq!(reparsed.header.ext_min(), Some(Vector3::new(-1.0, -2.0, 0.0)));
    assert_eq!(reparsed.header.ext_max(), Some(Vector3::new(10.0, 20.0, 0.0)));
}

#[test]
fn test_second_render_is_stable() {
    let mut drawing = Drawing::with_defaults();
    drawing.add_entity(Entity::Line(Line::from_points(
        Vector3::ZERO,
        Vector3::new(3.0, 4.0, 0.0),
    )));

    let first = drawing.to_dxf_string().unwrap();
    let reparsed = from_str(&first).unwrap();
    let second = reparsed.to_dxf_string().unwrap();
    assert_eq!(first, second);
}
