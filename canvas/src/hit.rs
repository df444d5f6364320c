//! Hit-testing: decides which entity, and which part of it, lies under a
//! world-space point.
//!
//! The battery in [`hit_test`] runs in a fixed priority order and the first
//! match wins. Within each rule entities are scanned top-down (highest
//! `z_index` first) so the visually topmost entity wins overlaps. Pan
//! triggers, the area-marking mode and the empty-space fallback are decided
//! by the engine, not here.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CONNECTION_HIT_DISTANCE, HANDLE_RADIUS, PORT_RADIUS};
use crate::doc::{ConnectionEnd, EntityRef, NodeId, Port};
use crate::geom::{Point, near_point, near_polyline};
use crate::scene::Scene;

/// Which part of an entity was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// A resize handle of the selected area.
    AreaHandle(ResizeAnchor),
    /// An area's title bar.
    AreaTitle,
    /// The first or last point of a connection's routed path.
    ConnectionEnd(ConnectionEnd),
    /// A node's connection port.
    Port(Port),
    /// A corner handle of the selected node.
    NodeHandle(ResizeAnchor),
    NodeBody,
    ConnectionBody,
    /// An area's interior below the title bar.
    AreaBody,
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// Direction the handle pulls in: `(-1 | 0 | 1, -1 | 0 | 1)` for x and y.
    #[must_use]
    pub fn signs(self) -> (f64, f64) {
        match self {
            Self::N => (0.0, -1.0),
            Self::Ne => (1.0, -1.0),
            Self::E => (1.0, 0.0),
            Self::Se => (1.0, 1.0),
            Self::S => (0.0, 1.0),
            Self::Sw => (-1.0, 1.0),
            Self::W => (-1.0, 0.0),
            Self::Nw => (-1.0, -1.0),
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub target: EntityRef,
    pub part: HitPart,
}

impl Hit {
    fn new(target: EntityRef, part: HitPart) -> Self {
        Self { target, part }
    }
}

/// Test what is under `world_pt`.
///
/// Priority: selected-area handles, area title bars, connection endpoints,
/// node ports, selected-node handles, node bodies, connection paths, area
/// interiors.
#[must_use]
pub fn hit_test(world_pt: Point, scene: &Scene, zoom: f64, selected: Option<&EntityRef>) -> Option<Hit> {
    if let Some(EntityRef::Area(id)) = selected {
        if let Some(area) = scene.area(id) {
            for (anchor, pos) in area.handles() {
                if near_point(world_pt, pos, HANDLE_RADIUS, zoom) {
                    return Some(Hit::new(EntityRef::Area(id.clone()), HitPart::AreaHandle(anchor)));
                }
            }
        }
    }

    let areas = scene.areas_top_down();
    for area in &areas {
        if area.title_bar().contains(world_pt) {
            return Some(Hit::new(EntityRef::Area(area.id.clone()), HitPart::AreaTitle));
        }
    }

    let connections = scene.connections_top_down();
    for conn in &connections {
        let Some(path) = scene.connection_path(conn) else {
            continue;
        };
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            continue;
        };
        if near_point(world_pt, *first, CONNECTION_HIT_DISTANCE, zoom) {
            return Some(Hit::new(EntityRef::Connection(conn.id.clone()), HitPart::ConnectionEnd(ConnectionEnd::From)));
        }
        if near_point(world_pt, *last, CONNECTION_HIT_DISTANCE, zoom) {
            return Some(Hit::new(EntityRef::Connection(conn.id.clone()), HitPart::ConnectionEnd(ConnectionEnd::To)));
        }
    }

    let nodes = scene.nodes_top_down();
    for node in &nodes {
        for (port, pos) in node.ports() {
            if near_point(world_pt, pos, PORT_RADIUS, zoom) {
                return Some(Hit::new(EntityRef::Node(node.id.clone()), HitPart::Port(port)));
            }
        }
    }

    if let Some(EntityRef::Node(id)) = selected {
        if let Some(node) = scene.node(id) {
            for (anchor, pos) in node.handles() {
                if near_point(world_pt, pos, HANDLE_RADIUS, zoom) {
                    return Some(Hit::new(EntityRef::Node(id.clone()), HitPart::NodeHandle(anchor)));
                }
            }
        }
    }

    if let Some(node) = nodes.iter().find(|n| n.contains(world_pt)) {
        return Some(Hit::new(EntityRef::Node(node.id.clone()), HitPart::NodeBody));
    }

    for conn in &connections {
        let Some(path) = scene.connection_path(conn) else {
            continue;
        };
        if near_polyline(world_pt, &path, CONNECTION_HIT_DISTANCE, zoom) {
            return Some(Hit::new(EntityRef::Connection(conn.id.clone()), HitPart::ConnectionBody));
        }
    }

    areas
        .iter()
        .find(|a| a.contains(world_pt))
        .map(|a| Hit::new(EntityRef::Area(a.id.clone()), HitPart::AreaBody))
}

/// Find the port a dragged connection end should attach to.
///
/// A port within pick radius wins; otherwise a node body under the point
/// yields that node's nearest port.
#[must_use]
pub fn port_target(world_pt: Point, scene: &Scene, zoom: f64) -> Option<(NodeId, Port)> {
    let nodes = scene.nodes_top_down();
    for node in &nodes {
        for (port, pos) in node.ports() {
            if near_point(world_pt, pos, PORT_RADIUS, zoom) {
                return Some((node.id.clone(), port));
            }
        }
    }
    nodes
        .iter()
        .find(|n| n.contains(world_pt))
        .map(|n| (n.id.clone(), n.nearest_port(world_pt)))
}
