//! Rendering: walks the scene in draw order and hands each layer to a
//! [`Renderer`].
//!
//! This module decides *what* is drawn and in which order; the renderer
//! decides *how*. It receives read-only views of the scene and UI state and
//! never mutates them. All coordinates passed to the renderer are in world
//! space; applying the viewport transform is the renderer's job.
//!
//! Layer order, bottom first:
//! 1. areas (by z-order)
//! 2. connections (by z-order)
//! 3. nodes (by z-order)
//! 4. selection handles
//! 5. gesture overlays: the connection preview line and the area rubber band

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use crate::doc::{Area, Connection, ConnectionEnd, EntityRef, Node, NodeKind};
use crate::geom::{Point, Rect};
use crate::hit::ResizeAnchor;
use crate::input::{InputState, UiState};
use crate::scene::Scene;

/// Arrowhead length in world units.
pub const ARROW_SIZE: f64 = 10.0;

/// Arrowhead half-angle in radians (~30°).
const ARROW_ANGLE: f64 = PI / 6.0;

/// A drawing surface. Implementations map world coordinates to their own
/// output space.
pub trait Renderer {
    fn draw_area(&mut self, area: &Area, selected: bool);
    fn draw_connection(&mut self, conn: &Connection, path: &[Point], selected: bool);
    fn draw_node(&mut self, node: &Node, selected: bool);
    fn draw_handles(&mut self, handles: &[(ResizeAnchor, Point)]);
    /// Dashed line from a port to the pointer while dragging a connection.
    fn draw_preview(&mut self, from: Point, to: Point);
    fn draw_marquee(&mut self, rect: Rect);
}

/// Draw the full scene: entities, selection UI and gesture overlays.
pub fn draw<R: Renderer>(renderer: &mut R, scene: &Scene, ui: &UiState, input: &InputState) {
    let selected = ui.selection.as_ref();
    let is_selected = |entity: EntityRef| selected == Some(&entity);

    for area in scene.areas_in_order() {
        renderer.draw_area(area, is_selected(EntityRef::Area(area.id.clone())));
    }
    for conn in scene.connections_in_order() {
        if let Some(path) = scene.connection_path(conn) {
            renderer.draw_connection(conn, &path, is_selected(EntityRef::Connection(conn.id.clone())));
        }
    }
    for node in scene.nodes_in_order() {
        renderer.draw_node(node, is_selected(EntityRef::Node(node.id.clone())));
    }

    match selected {
        Some(EntityRef::Node(id)) => {
            if let Some(node) = scene.node(id) {
                renderer.draw_handles(&node.handles());
            }
        }
        Some(EntityRef::Area(id)) => {
            if let Some(area) = scene.area(id) {
                renderer.draw_handles(&area.handles());
            }
        }
        Some(EntityRef::Connection(_)) | None => {}
    }

    match input {
        InputState::ConnectingNew { from, port, cursor } => {
            if let Some(node) = scene.node(from) {
                renderer.draw_preview(node.port_position(*port), *cursor);
            }
        }
        InputState::Reconnecting { cursor, .. } => {
            if let Some(pinned) = pinned_end(scene, input) {
                renderer.draw_preview(pinned, *cursor);
            }
        }
        _ => {}
    }
    if let Some(rect) = input.marquee() {
        renderer.draw_marquee(rect);
    }
}

/// The end of a connection being reconnected that stays put.
fn pinned_end(scene: &Scene, input: &InputState) -> Option<Point> {
    let InputState::Reconnecting { id, end, .. } = input else {
        return None;
    };
    let conn = scene.connection(id)?;
    let (from, from_port, to, to_port) = conn.endpoints();
    let (node, port) = match end {
        ConnectionEnd::From => (to, to_port),
        ConnectionEnd::To => (from, from_port),
    };
    scene.node(node).map(|n| n.port_position(port))
}

// =============================================================
// Geometry helpers for renderers
// =============================================================

/// Outline vertices for polygonal node kinds, or `None` for rounded shapes.
///
/// Decisions are diamonds touching the midpoints of their bounds; processes
/// are plain rectangles. Start and end nodes are drawn as pills.
#[must_use]
pub fn node_outline(node: &Node) -> Option<Vec<Point>> {
    let b = node.bounds();
    let c = b.center();
    match node.kind {
        NodeKind::Decision => Some(vec![
            Point::new(c.x, b.y1),
            Point::new(b.x2, c.y),
            Point::new(c.x, b.y2),
            Point::new(b.x1, c.y),
        ]),
        NodeKind::Process => Some(vec![
            Point::new(b.x1, b.y1),
            Point::new(b.x2, b.y1),
            Point::new(b.x2, b.y2),
            Point::new(b.x1, b.y2),
        ]),
        NodeKind::Start | NodeKind::End => None,
    }
}

/// Corner radius for pill-shaped nodes.
#[must_use]
pub fn pill_radius(node: &Node) -> f64 {
    node.width.min(node.height) / 2.0
}

/// Arrowhead triangle at the end of `path`: tip, then the two barbs.
///
/// Returns `None` if the last segment has zero length.
#[must_use]
pub fn arrowhead(path: &[Point]) -> Option<[Point; 3]> {
    let [.., prev, tip] = path else {
        return None;
    };
    let dx = tip.x - prev.x;
    let dy = tip.y - prev.y;
    if dx.hypot(dy) == 0.0 {
        return None;
    }
    let angle = dy.atan2(dx);
    let barb = |a: f64| Point::new(tip.x - ARROW_SIZE * a.cos(), tip.y - ARROW_SIZE * a.sin());
    Some([*tip, barb(angle - ARROW_ANGLE), barb(angle + ARROW_ANGLE)])
}
