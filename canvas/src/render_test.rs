#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::Port;

/// Records the calls a draw pass makes, in order.
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl Renderer for Recorder {
    fn draw_area(&mut self, area: &Area, selected: bool) {
        self.calls.push(format!("area {} {selected}", area.id));
    }

    fn draw_connection(&mut self, conn: &Connection, path: &[Point], selected: bool) {
        self.calls.push(format!("conn {} {} {selected}", conn.id, path.len()));
    }

    fn draw_node(&mut self, node: &Node, selected: bool) {
        self.calls.push(format!("node {} {selected}", node.id));
    }

    fn draw_handles(&mut self, handles: &[(ResizeAnchor, Point)]) {
        self.calls.push(format!("handles {}", handles.len()));
    }

    fn draw_preview(&mut self, from: Point, to: Point) {
        self.calls.push(format!("preview {},{} {},{}", from.x, from.y, to.x, to.y));
    }

    fn draw_marquee(&mut self, rect: Rect) {
        self.calls.push(format!("marquee {}x{}", rect.width(), rect.height()));
    }
}

fn two_node_scene() -> Scene {
    let mut scene = Scene::new();
    let a = scene.add_node(NodeKind::Process, Point::new(100.0, 100.0));
    let b = scene.add_node(NodeKind::Process, Point::new(300.0, 100.0));
    scene.add_area(Rect { x1: 0.0, y1: 0.0, x2: 400.0, y2: 200.0 }, "Group");
    scene.add_connection(&a, Port::Right, &b, Port::Left).unwrap();
    scene
}

// =============================================================
// Layer order
// =============================================================

#[test]
fn draws_areas_then_connections_then_nodes() {
    let scene = two_node_scene();
    let mut r = Recorder::default();
    draw(&mut r, &scene, &UiState::default(), &InputState::Idle);
    assert_eq!(r.calls, vec!["area area-1 false", "conn conn-1 2 false", "node node-1 false", "node node-2 false"]);
}

#[test]
fn nodes_follow_z_order() {
    let mut scene = two_node_scene();
    scene.send_to_back(&EntityRef::Node("node-2".into()));
    let mut r = Recorder::default();
    draw(&mut r, &scene, &UiState::default(), &InputState::Idle);
    let nodes: Vec<_> = r.calls.iter().filter(|c| c.starts_with("node")).collect();
    assert_eq!(nodes, vec!["node node-2 false", "node node-1 false"]);
}

#[test]
fn empty_scene_draws_nothing() {
    let mut r = Recorder::default();
    draw(&mut r, &Scene::new(), &UiState::default(), &InputState::Idle);
    assert!(r.calls.is_empty());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn selected_node_is_flagged_and_gets_four_handles() {
    let scene = two_node_scene();
    let ui = UiState { selection: Some(EntityRef::Node("node-1".into())), ..Default::default() };
    let mut r = Recorder::default();
    draw(&mut r, &scene, &ui, &InputState::Idle);
    assert!(r.calls.contains(&"node node-1 true".to_owned()));
    assert_eq!(r.calls.last().map(String::as_str), Some("handles 4"));
}

#[test]
fn selected_area_gets_eight_handles() {
    let scene = two_node_scene();
    let ui = UiState { selection: Some(EntityRef::Area("area-1".into())), ..Default::default() };
    let mut r = Recorder::default();
    draw(&mut r, &scene, &ui, &InputState::Idle);
    assert_eq!(r.calls.last().map(String::as_str), Some("handles 8"));
}

#[test]
fn selected_connection_has_no_handles() {
    let scene = two_node_scene();
    let ui = UiState { selection: Some(EntityRef::Connection("conn-1".into())), ..Default::default() };
    let mut r = Recorder::default();
    draw(&mut r, &scene, &ui, &InputState::Idle);
    assert!(r.calls.contains(&"conn conn-1 2 true".to_owned()));
    assert!(!r.calls.iter().any(|c| c.starts_with("handles")));
}

// =============================================================
// Overlays
// =============================================================

#[test]
fn connecting_draws_preview_from_port() {
    let scene = two_node_scene();
    let input =
        InputState::ConnectingNew { from: "node-1".into(), port: Port::Bottom, cursor: Point::new(100.0, 200.0) };
    let mut r = Recorder::default();
    draw(&mut r, &scene, &UiState::default(), &input);
    assert_eq!(r.calls.last().map(String::as_str), Some("preview 100,130 100,200"));
}

#[test]
fn reconnecting_previews_from_the_pinned_end() {
    let scene = two_node_scene();
    let input = InputState::Reconnecting {
        id: "conn-1".into(),
        end: ConnectionEnd::To,
        cursor: Point::new(50.0, 50.0),
    };
    let mut r = Recorder::default();
    draw(&mut r, &scene, &UiState::default(), &input);
    assert_eq!(r.calls.last().map(String::as_str), Some("preview 160,100 50,50"));
}

#[test]
fn marking_draws_marquee() {
    let input = InputState::MarkingArea { start: Point::new(10.0, 10.0), current: Point::new(70.0, 30.0) };
    let mut r = Recorder::default();
    draw(&mut r, &Scene::new(), &UiState::default(), &input);
    assert_eq!(r.calls, vec!["marquee 60x20"]);
}

// =============================================================
// Geometry helpers
// =============================================================

#[test]
fn decision_outline_is_a_diamond() {
    let node = Node::new("n".into(), NodeKind::Decision, Point::new(0.0, 0.0));
    let outline = node_outline(&node).unwrap();
    assert_eq!(
        outline,
        vec![Point::new(0.0, -40.0), Point::new(70.0, 0.0), Point::new(0.0, 40.0), Point::new(-70.0, 0.0)]
    );
}

#[test]
fn start_and_end_are_pills() {
    let node = Node::new("n".into(), NodeKind::Start, Point::new(0.0, 0.0));
    assert!(node_outline(&node).is_none());
    assert_eq!(pill_radius(&node), 30.0);
}

#[test]
fn arrowhead_points_along_last_segment() {
    let [tip, a, b] = arrowhead(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]).unwrap();
    assert_eq!(tip, Point::new(100.0, 0.0));
    assert!(a.x < 100.0 && b.x < 100.0);
    assert!((a.y + b.y).abs() < 1e-9);
    assert!((a.distance_to(tip) - ARROW_SIZE).abs() < 1e-9);
}

#[test]
fn arrowhead_needs_a_nonzero_segment() {
    assert!(arrowhead(&[Point::new(1.0, 1.0)]).is_none());
    assert!(arrowhead(&[Point::new(1.0, 1.0), Point::new(1.0, 1.0)]).is_none());
}
