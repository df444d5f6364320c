//! Scene: the owner of every node, connection and area.
//!
//! DESIGN
//! ======
//! Entities live in plain vectors and carry an explicit `z_index`. Draw order
//! is ascending `(z_index, id)` and hit-test order is the reverse, so order
//! never depends on how the vectors were mutated. Ids come from per-kind
//! monotonic counters (`node-1`, `conn-1`, `area-1`).
//!
//! [`SceneSnapshot`] is both the JSON wire format and the in-memory history
//! record. Reconstruction from a snapshot rebuilds nodes first, then relinks
//! connections by id; connections whose endpoints cannot be resolved are
//! dropped and counted, never raised. A record whose id repeats an earlier
//! one of the same kind is dropped too, so every lookup by id is unambiguous.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{NODE_MIN_HEIGHT, NODE_MIN_WIDTH};
use crate::doc::{
    Area, AreaId, AreaStyle, Connection, ConnectionEnd, ConnectionId, EntityRef, Node, NodeId, NodeKind, NodeStyle,
    Port, clamp_area_rect,
};
use crate::geom::{Point, Rect};
use crate::route::{Anchor, route};

const NODE_PREFIX: &str = "node";
const CONNECTION_PREFIX: &str = "conn";
const AREA_PREFIX: &str = "area";

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("a connection cannot start and end on the same node")]
    SelfConnection,
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    #[error("connection not found: {0}")]
    ConnectionNotFound(ConnectionId),
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================
// Serialized records
// =============================================================

/// A node as stored on the wire and in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub text: String,
    /// Absent on input means the kind's default size.
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub fill_color: Option<String>,
    #[serde(default)]
    pub font_color: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub outline_color: Option<String>,
    #[serde(default)]
    pub outline_width: Option<f64>,
}

/// A connection as stored on the wire and in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRecord {
    pub id: ConnectionId,
    pub from_node_id: NodeId,
    pub from_port: Port,
    pub to_node_id: NodeId,
    pub to_port: Port,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<Point>,
}

/// An area as stored on the wire and in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRecord {
    pub id: AreaId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fill_color: Option<String>,
    #[serde(default)]
    pub outline_color: Option<String>,
    #[serde(default)]
    pub title_bg_color: Option<String>,
}

/// A complete copy of scene state. Arrays are in draw order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
    #[serde(default)]
    pub areas: Vec<AreaRecord>,
}

impl SceneSnapshot {
    /// Parse the JSON scene format.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if `json` is not a valid scene document.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&Node> for NodeRecord {
    fn from(n: &Node) -> Self {
        Self {
            id: n.id.clone(),
            kind: n.kind,
            x: n.x,
            y: n.y,
            text: n.text.clone(),
            width: Some(n.width),
            height: Some(n.height),
            link: n.link.clone(),
            fill_color: Some(n.style.fill_color.clone()),
            font_color: Some(n.style.font_color.clone()),
            font_size: Some(n.style.font_size),
            outline_color: Some(n.style.outline_color.clone()),
            outline_width: Some(n.style.outline_width),
        }
    }
}

impl NodeRecord {
    fn into_node(self, z_index: i64) -> Node {
        let defaults = NodeStyle::for_kind(self.kind);
        let (width, height) = self.kind.default_size();
        Node {
            id: self.id,
            kind: self.kind,
            x: self.x,
            y: self.y,
            width: self.width.unwrap_or(width).max(NODE_MIN_WIDTH),
            height: self.height.unwrap_or(height).max(NODE_MIN_HEIGHT),
            text: self.text,
            link: self.link,
            style: NodeStyle {
                fill_color: self.fill_color.unwrap_or(defaults.fill_color),
                font_color: self.font_color.unwrap_or(defaults.font_color),
                font_size: self.font_size.unwrap_or(defaults.font_size),
                outline_color: self.outline_color.unwrap_or(defaults.outline_color),
                outline_width: self.outline_width.unwrap_or(defaults.outline_width),
            },
            z_index,
        }
    }
}

impl From<&Connection> for ConnectionRecord {
    fn from(c: &Connection) -> Self {
        Self {
            id: c.id.clone(),
            from_node_id: c.from_node.clone(),
            from_port: c.from_port,
            to_node_id: c.to_node.clone(),
            to_port: c.to_port,
            waypoints: c.waypoints.clone(),
        }
    }
}

impl From<&Area> for AreaRecord {
    fn from(a: &Area) -> Self {
        Self {
            id: a.id.clone(),
            x1: a.rect.x1,
            y1: a.rect.y1,
            x2: a.rect.x2,
            y2: a.rect.y2,
            title: a.title.clone(),
            fill_color: Some(a.style.fill_color.clone()),
            outline_color: Some(a.style.outline_color.clone()),
            title_bg_color: Some(a.style.title_bg_color.clone()),
        }
    }
}

impl AreaRecord {
    fn into_area(self, z_index: i64) -> Area {
        let defaults = AreaStyle::default();
        Area {
            id: self.id,
            rect: clamp_area_rect(Rect { x1: self.x1, y1: self.y1, x2: self.x2, y2: self.y2 }),
            title: self.title,
            style: AreaStyle {
                fill_color: self.fill_color.unwrap_or(defaults.fill_color),
                outline_color: self.outline_color.unwrap_or(defaults.outline_color),
                title_bg_color: self.title_bg_color.unwrap_or(defaults.title_bg_color),
            },
            z_index,
        }
    }
}

/// Outcome of rebuilding a scene from a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub nodes: usize,
    pub connections: usize,
    pub areas: usize,
    /// Connections discarded as dangling, self-referencing or duplicate.
    pub dropped_connections: usize,
    /// Records of any kind discarded because their id was already taken.
    pub duplicate_ids: usize,
}

/// How id counters are adjusted when a snapshot is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPolicy {
    /// Reset each counter to one past the largest id suffix present (import).
    Reset,
    /// Never move a counter backwards (undo/redo).
    Monotonic,
}

// =============================================================
// Scene
// =============================================================

/// Aggregate owner of all entities and their id allocation.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    areas: Vec<Area>,
    next_node: u64,
    next_connection: u64,
    next_area: u64,
    next_z: i64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
            areas: Vec::new(),
            next_node: 1,
            next_connection: 1,
            next_area: 1,
            next_z: 0,
        }
    }

    fn alloc_z(&mut self) -> i64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    // --- Factories ---

    /// Create a node of `kind` centered at `center`.
    pub fn add_node(&mut self, kind: NodeKind, center: Point) -> NodeId {
        let nodes = &self.nodes;
        let id = fresh_id(NODE_PREFIX, &mut self.next_node, |id| nodes.iter().any(|n| n.id == id));
        let mut node = Node::new(id.clone(), kind, center);
        node.z_index = self.alloc_z();
        self.nodes.push(node);
        id
    }

    /// Connect two node ports.
    ///
    /// Returns `Ok(None)` without mutating when the exact
    /// `(from, from_port, to, to_port)` tuple already exists.
    ///
    /// # Errors
    ///
    /// [`SceneError::SelfConnection`] when `from == to`;
    /// [`SceneError::NodeNotFound`] when either node is missing.
    pub fn add_connection(
        &mut self,
        from: &str,
        from_port: Port,
        to: &str,
        to_port: Port,
    ) -> Result<Option<ConnectionId>, SceneError> {
        if from == to {
            return Err(SceneError::SelfConnection);
        }
        for id in [from, to] {
            if self.node(id).is_none() {
                return Err(SceneError::NodeNotFound(id.to_owned()));
            }
        }
        if self.has_connection(from, from_port, to, to_port, None) {
            debug!(from, to, "duplicate connection ignored");
            return Ok(None);
        }
        let connections = &self.connections;
        let id = fresh_id(CONNECTION_PREFIX, &mut self.next_connection, |id| connections.iter().any(|c| c.id == id));
        let z_index = self.alloc_z();
        self.connections.push(Connection {
            id: id.clone(),
            from_node: from.to_owned(),
            from_port,
            to_node: to.to_owned(),
            to_port,
            waypoints: Vec::new(),
            z_index,
        });
        Ok(Some(id))
    }

    /// Create an area covering `rect`, clamped to the minimum size.
    pub fn add_area(&mut self, rect: Rect, title: impl Into<String>) -> AreaId {
        let areas = &self.areas;
        let id = fresh_id(AREA_PREFIX, &mut self.next_area, |id| areas.iter().any(|a| a.id == id));
        let mut area = Area::new(id.clone(), rect, title);
        area.z_index = self.alloc_z();
        self.areas.push(area);
        id
    }

    fn has_connection(&self, from: &str, from_port: Port, to: &str, to_port: Port, except: Option<&str>) -> bool {
        self.connections
            .iter()
            .filter(|c| except.is_none_or(|skip| c.id != skip))
            .any(|c| c.endpoints() == (from, from_port, to, to_port))
    }

    // --- Mutations ---

    /// Move one end of a connection to a new node port.
    ///
    /// Returns `Ok(false)` when nothing changed, including when the move would
    /// duplicate another connection.
    ///
    /// # Errors
    ///
    /// [`SceneError::ConnectionNotFound`], [`SceneError::NodeNotFound`], or
    /// [`SceneError::SelfConnection`] if both ends would share a node.
    pub fn reconnect(&mut self, id: &str, end: ConnectionEnd, node: &str, port: Port) -> Result<bool, SceneError> {
        if self.node(node).is_none() {
            return Err(SceneError::NodeNotFound(node.to_owned()));
        }
        let Some(conn) = self.connection(id) else {
            return Err(SceneError::ConnectionNotFound(id.to_owned()));
        };
        let (from, from_port, to, to_port) = match end {
            ConnectionEnd::From => (node, port, conn.to_node.as_str(), conn.to_port),
            ConnectionEnd::To => (conn.from_node.as_str(), conn.from_port, node, port),
        };
        if from == to {
            return Err(SceneError::SelfConnection);
        }
        if conn.endpoints() == (from, from_port, to, to_port) {
            return Ok(false);
        }
        if self.has_connection(from, from_port, to, to_port, Some(id)) {
            debug!(id, "reconnect would duplicate an existing connection");
            return Ok(false);
        }
        let (from, to) = (from.to_owned(), to.to_owned());
        let Some(conn) = self.connection_mut(id) else {
            return Err(SceneError::ConnectionNotFound(id.to_owned()));
        };
        conn.from_node = from;
        conn.from_port = from_port;
        conn.to_node = to;
        conn.to_port = to_port;
        Ok(true)
    }

    /// Replace a connection's explicit waypoints. Returns whether anything changed.
    ///
    /// # Errors
    ///
    /// [`SceneError::ConnectionNotFound`] if `id` is unknown.
    pub fn set_waypoints(&mut self, id: &str, waypoints: Vec<Point>) -> Result<bool, SceneError> {
        let Some(conn) = self.connection_mut(id) else {
            return Err(SceneError::ConnectionNotFound(id.to_owned()));
        };
        if conn.waypoints == waypoints {
            return Ok(false);
        }
        conn.waypoints = waypoints;
        Ok(true)
    }

    /// Delete a node and every connection attached to it.
    ///
    /// Returns the number of connections removed, or `None` if the node was absent.
    pub fn delete_node(&mut self, id: &str) -> Option<usize> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        self.nodes.remove(idx);
        let before = self.connections.len();
        self.connections.retain(|c| !c.touches(id));
        let removed = before - self.connections.len();
        debug!(id, cascaded = removed, "node deleted");
        Some(removed)
    }

    pub fn delete_connection(&mut self, id: &str) -> bool {
        let before = self.connections.len();
        self.connections.retain(|c| c.id != id);
        before != self.connections.len()
    }

    pub fn delete_area(&mut self, id: &str) -> bool {
        let before = self.areas.len();
        self.areas.retain(|a| a.id != id);
        before != self.areas.len()
    }

    /// Delete whatever `entity` refers to. Returns whether anything was removed.
    pub fn delete(&mut self, entity: &EntityRef) -> bool {
        match entity {
            EntityRef::Node(id) => self.delete_node(id).is_some(),
            EntityRef::Connection(id) => self.delete_connection(id),
            EntityRef::Area(id) => self.delete_area(id),
        }
    }

    /// Raise `entity` above everything else. Returns whether it exists.
    pub fn bring_to_front(&mut self, entity: &EntityRef) -> bool {
        let z = self.alloc_z();
        self.set_z(entity, z)
    }

    /// Lower `entity` beneath everything else. Returns whether it exists.
    pub fn send_to_back(&mut self, entity: &EntityRef) -> bool {
        let lowest = self
            .nodes
            .iter()
            .map(|n| n.z_index)
            .chain(self.connections.iter().map(|c| c.z_index))
            .chain(self.areas.iter().map(|a| a.z_index))
            .min()
            .unwrap_or(0);
        self.set_z(entity, lowest - 1)
    }

    fn set_z(&mut self, entity: &EntityRef, z: i64) -> bool {
        let slot = match entity {
            EntityRef::Node(id) => self.node_mut(id).map(|n| &mut n.z_index),
            EntityRef::Connection(id) => self.connection_mut(id).map(|c| &mut c.z_index),
            EntityRef::Area(id) => self.area_mut(id).map(|a| &mut a.z_index),
        };
        match slot {
            Some(z_index) => {
                *z_index = z;
                true
            }
            None => false,
        }
    }

    // --- Lookups ---

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    #[must_use]
    pub fn connection(&self, id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    pub fn connection_mut(&mut self, id: &str) -> Option<&mut Connection> {
        self.connections.iter_mut().find(|c| c.id == id)
    }

    #[must_use]
    pub fn area(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    pub fn area_mut(&mut self, id: &str) -> Option<&mut Area> {
        self.areas.iter_mut().find(|a| a.id == id)
    }

    /// Whether `entity` still exists.
    #[must_use]
    pub fn contains(&self, entity: &EntityRef) -> bool {
        match entity {
            EntityRef::Node(id) => self.node(id).is_some(),
            EntityRef::Connection(id) => self.connection(id).is_some(),
            EntityRef::Area(id) => self.area(id).is_some(),
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    #[must_use]
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty() && self.areas.is_empty()
    }

    // --- Ordering ---

    /// Nodes in draw order (bottom first).
    #[must_use]
    pub fn nodes_in_order(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.nodes.iter().collect();
        out.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        out
    }

    /// Connections in draw order (bottom first).
    #[must_use]
    pub fn connections_in_order(&self) -> Vec<&Connection> {
        let mut out: Vec<&Connection> = self.connections.iter().collect();
        out.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        out
    }

    /// Areas in draw order (bottom first).
    #[must_use]
    pub fn areas_in_order(&self) -> Vec<&Area> {
        let mut out: Vec<&Area> = self.areas.iter().collect();
        out.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        out
    }

    /// Nodes in hit-test order (topmost first).
    #[must_use]
    pub fn nodes_top_down(&self) -> Vec<&Node> {
        let mut out = self.nodes_in_order();
        out.reverse();
        out
    }

    #[must_use]
    pub fn connections_top_down(&self) -> Vec<&Connection> {
        let mut out = self.connections_in_order();
        out.reverse();
        out
    }

    #[must_use]
    pub fn areas_top_down(&self) -> Vec<&Area> {
        let mut out = self.areas_in_order();
        out.reverse();
        out
    }

    // --- Geometry ---

    /// The routed path of `conn`, or `None` if an endpoint node is missing.
    #[must_use]
    pub fn connection_path(&self, conn: &Connection) -> Option<Vec<Point>> {
        let from = self.node(&conn.from_node)?;
        let to = self.node(&conn.to_node)?;
        Some(route(
            Anchor::new(from.port_position(conn.from_port), conn.from_port),
            Anchor::new(to.port_position(conn.to_port), conn.to_port),
            &conn.waypoints,
        ))
    }

    /// Bounding box of all nodes, used by fit-to-content.
    #[must_use]
    pub fn node_bounds(&self) -> Option<Rect> {
        self.nodes.iter().map(Node::bounds).reduce(|acc, r| acc.union(&r))
    }

    /// Bounding box of nodes and areas (title bars included), used by exporters.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        let areas = self.areas.iter().map(Area::outer_bounds);
        self.nodes.iter().map(Node::bounds).chain(areas).reduce(|acc, r| acc.union(&r))
    }

    // --- Serialization ---

    /// Copy the full scene into a snapshot, arrays in draw order.
    #[must_use]
    pub fn to_snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            nodes: self.nodes_in_order().into_iter().map(NodeRecord::from).collect(),
            connections: self.connections_in_order().into_iter().map(ConnectionRecord::from).collect(),
            areas: self.areas_in_order().into_iter().map(AreaRecord::from).collect(),
        }
    }

    /// Replace the whole scene with `snapshot`.
    ///
    /// Nodes are rebuilt first; connections are then relinked against them and
    /// any connection that is dangling, self-referencing or a duplicate tuple
    /// is dropped. Records repeating an earlier id of their kind are dropped.
    /// z-order is reassigned from array position.
    pub fn load_snapshot(&mut self, snapshot: &SceneSnapshot, policy: CounterPolicy) -> ImportReport {
        let mut z: i64 = 0;
        let mut next_z = || {
            let cur = z;
            z += 1;
            cur
        };

        let mut duplicates = 0;
        let mut node_ids: HashSet<&str> = HashSet::new();
        let mut nodes = Vec::with_capacity(snapshot.nodes.len());
        for rec in &snapshot.nodes {
            if !node_ids.insert(rec.id.as_str()) {
                debug!(id = %rec.id, "dropping node with duplicate id");
                duplicates += 1;
                continue;
            }
            nodes.push(rec.clone().into_node(next_z()));
        }
        self.nodes = nodes;

        let mut seen: HashSet<(String, Port, String, Port)> = HashSet::new();
        let mut connection_ids: HashSet<&str> = HashSet::new();
        let mut connections = Vec::with_capacity(snapshot.connections.len());
        let mut dropped = 0;
        for rec in &snapshot.connections {
            if connection_ids.contains(rec.id.as_str()) {
                debug!(id = %rec.id, "dropping connection with duplicate id");
                duplicates += 1;
                continue;
            }
            let resolvable =
                node_ids.contains(rec.from_node_id.as_str()) && node_ids.contains(rec.to_node_id.as_str());
            let key = (rec.from_node_id.clone(), rec.from_port, rec.to_node_id.clone(), rec.to_port);
            if !resolvable || rec.from_node_id == rec.to_node_id || !seen.insert(key) {
                debug!(id = %rec.id, from = %rec.from_node_id, to = %rec.to_node_id, "dropping unresolvable connection");
                dropped += 1;
                continue;
            }
            connection_ids.insert(rec.id.as_str());
            connections.push(Connection {
                id: rec.id.clone(),
                from_node: rec.from_node_id.clone(),
                from_port: rec.from_port,
                to_node: rec.to_node_id.clone(),
                to_port: rec.to_port,
                waypoints: rec.waypoints.clone(),
                z_index: next_z(),
            });
        }
        self.connections = connections;

        let mut area_ids: HashSet<&str> = HashSet::new();
        let mut areas = Vec::with_capacity(snapshot.areas.len());
        for rec in &snapshot.areas {
            if !area_ids.insert(rec.id.as_str()) {
                debug!(id = %rec.id, "dropping area with duplicate id");
                duplicates += 1;
                continue;
            }
            areas.push(rec.clone().into_area(next_z()));
        }
        self.areas = areas;
        self.next_z = z;

        let node_next = next_counter(NODE_PREFIX, self.nodes.iter().map(|n| n.id.as_str()));
        let conn_next = next_counter(CONNECTION_PREFIX, self.connections.iter().map(|c| c.id.as_str()));
        let area_next = next_counter(AREA_PREFIX, self.areas.iter().map(|a| a.id.as_str()));
        match policy {
            CounterPolicy::Reset => {
                self.next_node = node_next;
                self.next_connection = conn_next;
                self.next_area = area_next;
            }
            CounterPolicy::Monotonic => {
                self.next_node = self.next_node.max(node_next);
                self.next_connection = self.next_connection.max(conn_next);
                self.next_area = self.next_area.max(area_next);
            }
        }

        ImportReport {
            nodes: self.nodes.len(),
            connections: self.connections.len(),
            areas: self.areas.len(),
            dropped_connections: dropped,
            duplicate_ids: duplicates,
        }
    }

    /// Replace the scene with the contents of a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] on malformed input; the scene is left untouched.
    pub fn import_json(&mut self, json: &str) -> Result<ImportReport, SceneError> {
        let snapshot = SceneSnapshot::from_json(json)?;
        Ok(self.load_snapshot(&snapshot, CounterPolicy::Reset))
    }

    /// Serialize the scene to the JSON format.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if serialization fails.
    pub fn export_json(&self) -> Result<String, SceneError> {
        self.to_snapshot().to_json()
    }
}

/// One past the largest numeric suffix among ids shaped `<prefix>-<n>`, or 1.
///
/// Ids with another shape, or a suffix too large to step past, are foreign:
/// they never move the counter.
fn next_counter<'a>(prefix: &str, ids: impl Iterator<Item = &'a str>) -> u64 {
    ids.filter_map(|id| id.strip_prefix(prefix)?.strip_prefix('-'))
        .filter_map(|suffix| match suffix.parse::<u64>() {
            Ok(n) => {
                let next = n.checked_add(1);
                if next.is_none() {
                    trace!(prefix, suffix, "id suffix at counter limit; treated as foreign");
                }
                next
            }
            Err(e) => {
                trace!(prefix, suffix, error = %e, "id suffix is not a counter value");
                None
            }
        })
        .max()
        .unwrap_or(1)
}

/// Allocate `<prefix>-<counter>` and advance the counter, skipping ids that
/// are already `taken`. The counter wraps to 1 instead of overflowing.
fn fresh_id(prefix: &str, counter: &mut u64, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = format!("{prefix}-{counter}");
        *counter = match counter.checked_add(1) {
            Some(next) => next,
            None => {
                debug!(prefix, "id counter exhausted; wrapping to 1");
                1
            }
        };
        if !taken(&id) {
            return id;
        }
        trace!(id = %id, "id already taken; skipping");
    }
}
