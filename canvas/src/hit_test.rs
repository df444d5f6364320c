use super::*;
use crate::doc::NodeKind;
use crate::geom::Rect;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// A(100,100) and B(300,100), 120×60, joined right→left, inside an area.
fn scene() -> Scene {
    let mut s = Scene::new();
    s.add_area(Rect { x1: 0.0, y1: 0.0, x2: 400.0, y2: 300.0 }, "Group");
    let a = s.add_node(NodeKind::Process, pt(100.0, 100.0));
    let b = s.add_node(NodeKind::Process, pt(300.0, 100.0));
    s.add_connection(&a, Port::Right, &b, Port::Left).unwrap();
    s
}

fn part_at(s: &Scene, p: Point, selected: Option<&EntityRef>) -> Option<HitPart> {
    hit_test(p, s, 1.0, selected).map(|h| h.part)
}

// =============================================================
// ResizeAnchor
// =============================================================

#[test]
fn anchor_signs_point_outward() {
    assert_eq!(ResizeAnchor::Nw.signs(), (-1.0, -1.0));
    assert_eq!(ResizeAnchor::Se.signs(), (1.0, 1.0));
    assert_eq!(ResizeAnchor::N.signs(), (0.0, -1.0));
    assert_eq!(ResizeAnchor::W.signs(), (-1.0, 0.0));
}

// =============================================================
// Priority battery
// =============================================================

#[test]
fn empty_space_misses() {
    assert!(hit_test(pt(1000.0, 1000.0), &scene(), 1.0, None).is_none());
}

#[test]
fn title_bar_beats_everything_below_it() {
    let s = scene();
    let hit = hit_test(pt(200.0, -10.0), &s, 1.0, None).unwrap();
    assert_eq!(hit.target, EntityRef::Area("area-1".into()));
    assert_eq!(hit.part, HitPart::AreaTitle);
}

#[test]
fn connection_end_beats_port() {
    let s = scene();
    let hit = hit_test(pt(160.0, 100.0), &s, 1.0, None).unwrap();
    assert_eq!(hit.target, EntityRef::Connection("conn-1".into()));
    assert_eq!(hit.part, HitPart::ConnectionEnd(ConnectionEnd::From));
    assert_eq!(part_at(&s, pt(245.0, 105.0), None), Some(HitPart::ConnectionEnd(ConnectionEnd::To)));
}

#[test]
fn free_port_is_hit() {
    let s = scene();
    let hit = hit_test(pt(100.0, 75.0), &s, 1.0, None).unwrap();
    assert_eq!(hit.target, EntityRef::Node("node-1".into()));
    assert_eq!(hit.part, HitPart::Port(Port::Top));
}

#[test]
fn node_handles_need_selection() {
    let s = scene();
    let selected = EntityRef::Node("node-1".into());
    assert_eq!(part_at(&s, pt(42.0, 72.0), None), Some(HitPart::NodeBody));
    assert_eq!(part_at(&s, pt(42.0, 72.0), Some(&selected)), Some(HitPart::NodeHandle(ResizeAnchor::Nw)));
}

#[test]
fn area_handles_need_selection_and_come_first() {
    let s = scene();
    let selected = EntityRef::Area("area-1".into());
    assert_eq!(part_at(&s, pt(200.0, 2.0), None), Some(HitPart::AreaBody));
    assert_eq!(part_at(&s, pt(200.0, 2.0), Some(&selected)), Some(HitPart::AreaHandle(ResizeAnchor::N)));
}

#[test]
fn node_body_beats_area_interior() {
    let s = scene();
    let hit = hit_test(pt(300.0, 110.0), &s, 1.0, None).unwrap();
    assert_eq!(hit.target, EntityRef::Node("node-2".into()));
    assert_eq!(hit.part, HitPart::NodeBody);
}

#[test]
fn connection_body_beats_area_interior() {
    let s = scene();
    let hit = hit_test(pt(200.0, 112.0), &s, 1.0, None).unwrap();
    assert_eq!(hit.target, EntityRef::Connection("conn-1".into()));
    assert_eq!(hit.part, HitPart::ConnectionBody);
    assert_eq!(part_at(&s, pt(200.0, 120.0), None), Some(HitPart::AreaBody));
}

// =============================================================
// Zoom scaling
// =============================================================

#[test]
fn thresholds_shrink_when_zoomed_in() {
    let s = scene();
    assert_eq!(hit_test(pt(200.0, 112.0), &s, 2.0, None).map(|h| h.part), Some(HitPart::AreaBody));
}

#[test]
fn thresholds_grow_when_zoomed_out() {
    let s = scene();
    assert_eq!(hit_test(pt(200.0, 125.0), &s, 0.5, None).map(|h| h.part), Some(HitPart::ConnectionBody));
}

// =============================================================
// Overlaps
// =============================================================

#[test]
fn topmost_node_wins() {
    let mut s = Scene::new();
    s.add_node(NodeKind::Process, pt(0.0, 0.0));
    s.add_node(NodeKind::Process, pt(20.0, 0.0));
    assert_eq!(hit_test(pt(10.0, 0.0), &s, 1.0, None).unwrap().target, EntityRef::Node("node-2".into()));

    s.bring_to_front(&EntityRef::Node("node-1".into()));
    assert_eq!(hit_test(pt(10.0, 0.0), &s, 1.0, None).unwrap().target, EntityRef::Node("node-1".into()));
}

// =============================================================
// port_target
// =============================================================

#[test]
fn port_target_prefers_exact_port() {
    let s = scene();
    assert_eq!(port_target(pt(300.0, 135.0), &s, 1.0), Some(("node-2".into(), Port::Bottom)));
}

#[test]
fn port_target_falls_back_to_nearest_port_of_body() {
    let s = scene();
    assert_eq!(port_target(pt(340.0, 95.0), &s, 1.0), Some(("node-2".into(), Port::Right)));
}

#[test]
fn port_target_misses_empty_space() {
    assert_eq!(port_target(pt(200.0, 250.0), &scene(), 1.0), None);
}
