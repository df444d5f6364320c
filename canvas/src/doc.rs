//! Document model: nodes, connections, areas, their styles, and the sparse
//! settings updates the property dialogs send back.
//!
//! Entities carry their own geometry queries (containment, port and handle
//! positions, resize rules). Ownership lives in [`crate::scene::Scene`];
//! connections refer to nodes by id only.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::{AREA_MIN_SIZE, AREA_TITLE_HEIGHT, NODE_MIN_HEIGHT, NODE_MIN_WIDTH};
use crate::geom::{Point, Rect};
use crate::hit::ResizeAnchor;

/// Identifier of a node, e.g. `node-3`.
pub type NodeId = String;
/// Identifier of a connection, e.g. `conn-7`.
pub type ConnectionId = String;
/// Identifier of an area, e.g. `area-2`.
pub type AreaId = String;

/// Reference to any entity in a scene. Used for selection and hit results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum EntityRef {
    Node(NodeId),
    Connection(ConnectionId),
    Area(AreaId),
}

impl EntityRef {
    /// The referenced id regardless of kind.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Node(id) | Self::Connection(id) | Self::Area(id) => id,
        }
    }
}

// =============================================================
// Node
// =============================================================

/// The flowchart role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Process,
    Decision,
    End,
}

impl NodeKind {
    /// Default `(width, height)` for a freshly created node.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Decision => (140.0, 80.0),
            Self::Start | Self::Process | Self::End => (120.0, 60.0),
        }
    }

    #[must_use]
    pub fn default_text(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Process => "Process",
            Self::Decision => "Decision",
            Self::End => "End",
        }
    }
}

/// One of the four cardinal attachment points on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Port {
    Top,
    Right,
    Bottom,
    Left,
}

impl Port {
    pub const ALL: [Port; 4] = [Port::Top, Port::Right, Port::Bottom, Port::Left];

    /// Unit vector the port faces, in world space (y grows downward).
    #[must_use]
    pub fn direction(self) -> (f64, f64) {
        match self {
            Self::Top => (0.0, -1.0),
            Self::Right => (1.0, 0.0),
            Self::Bottom => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
        }
    }

    /// Whether the port faces left or right.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Visual style of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub fill_color: String,
    pub font_color: String,
    pub font_size: f64,
    pub outline_color: String,
    pub outline_width: f64,
}

impl NodeStyle {
    /// Palette used for new nodes of `kind`.
    #[must_use]
    pub fn for_kind(kind: NodeKind) -> Self {
        let (fill, outline) = match kind {
            NodeKind::Start => ("#d1fae5", "#059669"),
            NodeKind::Process => ("#dbeafe", "#2563eb"),
            NodeKind::Decision => ("#fef3c7", "#d97706"),
            NodeKind::End => ("#fee2e2", "#dc2626"),
        };
        Self {
            fill_color: fill.to_owned(),
            font_color: "#1f2937".to_owned(),
            font_size: 14.0,
            outline_color: outline.to_owned(),
            outline_width: 2.0,
        }
    }
}

/// A shape on the diagram. `x`/`y` is the center of its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
    /// Hyperlink target; empty when the node links nowhere.
    pub link: String,
    pub style: NodeStyle,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i64,
}

impl Node {
    /// Build a node of `kind` centered at `center` with the kind's defaults.
    #[must_use]
    pub fn new(id: NodeId, kind: NodeKind, center: Point) -> Self {
        let (width, height) = kind.default_size();
        Self {
            id,
            kind,
            x: center.x,
            y: center.y,
            width,
            height,
            text: kind.default_text().to_owned(),
            link: String::new(),
            style: NodeStyle::for_kind(kind),
            z_index: 0,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.center(), self.width, self.height)
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// World position of `port`, at the midpoint of the matching edge.
    #[must_use]
    pub fn port_position(&self, port: Port) -> Point {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        match port {
            Port::Top => Point::new(self.x, self.y - hh),
            Port::Right => Point::new(self.x + hw, self.y),
            Port::Bottom => Point::new(self.x, self.y + hh),
            Port::Left => Point::new(self.x - hw, self.y),
        }
    }

    /// The four ports with their positions.
    #[must_use]
    pub fn ports(&self) -> [(Port, Point); 4] {
        Port::ALL.map(|port| (port, self.port_position(port)))
    }

    /// The port whose position is closest to `p`.
    #[must_use]
    pub fn nearest_port(&self, p: Point) -> Port {
        let mut best = (Port::Top, f64::INFINITY);
        for (port, pos) in self.ports() {
            let d = pos.distance_to(p);
            if d < best.1 {
                best = (port, d);
            }
        }
        best.0
    }

    /// The four corner resize handles with their positions.
    #[must_use]
    pub fn handles(&self) -> [(ResizeAnchor, Point); 4] {
        let r = self.bounds();
        [
            (ResizeAnchor::Nw, Point::new(r.x1, r.y1)),
            (ResizeAnchor::Ne, Point::new(r.x2, r.y1)),
            (ResizeAnchor::Se, Point::new(r.x2, r.y2)),
            (ResizeAnchor::Sw, Point::new(r.x1, r.y2)),
        ]
    }

    /// Resize around a fixed center.
    ///
    /// `orig` is the bounding box when the gesture started and `delta` the
    /// total pointer travel since then. Each dragged edge moves by half the
    /// delta and the opposite edge mirrors it, so the center never moves.
    /// The result is clamped to the minimum node size.
    pub fn resize_from(&mut self, anchor: ResizeAnchor, orig: &Rect, delta: Point) {
        let (sx, sy) = anchor.signs();
        let center = orig.center();
        self.width = (orig.width() + sx * delta.x).max(NODE_MIN_WIDTH);
        self.height = (orig.height() + sy * delta.y).max(NODE_MIN_HEIGHT);
        self.x = center.x;
        self.y = center.y;
    }

    /// Snapshot of every editable property.
    #[must_use]
    pub fn settings(&self) -> NodeSettings {
        NodeSettings {
            kind: Some(self.kind),
            text: Some(self.text.clone()),
            link: Some(self.link.clone()),
            width: Some(self.width),
            height: Some(self.height),
            fill_color: Some(self.style.fill_color.clone()),
            font_color: Some(self.style.font_color.clone()),
            font_size: Some(self.style.font_size),
            outline_color: Some(self.style.outline_color.clone()),
            outline_width: Some(self.style.outline_width),
        }
    }

    /// Apply only the fields present in `settings`. Returns whether anything changed.
    pub fn update_settings(&mut self, settings: &NodeSettings) -> bool {
        let before = self.clone();
        if let Some(kind) = settings.kind {
            self.kind = kind;
        }
        if let Some(text) = &settings.text {
            self.text.clone_from(text);
        }
        if let Some(link) = &settings.link {
            self.link.clone_from(link);
        }
        if let Some(w) = settings.width {
            self.width = w.max(NODE_MIN_WIDTH);
        }
        if let Some(h) = settings.height {
            self.height = h.max(NODE_MIN_HEIGHT);
        }
        if let Some(c) = &settings.fill_color {
            self.style.fill_color.clone_from(c);
        }
        if let Some(c) = &settings.font_color {
            self.style.font_color.clone_from(c);
        }
        if let Some(s) = settings.font_size {
            self.style.font_size = s;
        }
        if let Some(c) = &settings.outline_color {
            self.style.outline_color.clone_from(c);
        }
        if let Some(w) = settings.outline_width {
            self.style.outline_width = w;
        }
        *self != before
    }
}

/// Sparse update for a node. Only present fields are applied; an empty string
/// is a value, not an absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSettings {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f64>,
}

// =============================================================
// Connection
// =============================================================

/// Which end of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionEnd {
    From,
    To,
}

/// A directed link between two node ports.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: ConnectionId,
    pub from_node: NodeId,
    pub from_port: Port,
    pub to_node: NodeId,
    pub to_port: Port,
    /// Explicit bend points in world coordinates. Empty means auto-routed.
    pub waypoints: Vec<Point>,
    pub z_index: i64,
}

impl Connection {
    /// Whether the connection attaches to `node` at either end.
    #[must_use]
    pub fn touches(&self, node: &str) -> bool {
        self.from_node == node || self.to_node == node
    }

    /// The `(fromNode, fromPort, toNode, toPort)` identity tuple.
    #[must_use]
    pub fn endpoints(&self) -> (&str, Port, &str, Port) {
        (&self.from_node, self.from_port, &self.to_node, self.to_port)
    }
}

// =============================================================
// Area
// =============================================================

/// Visual style of an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStyle {
    pub fill_color: String,
    pub outline_color: String,
    pub title_bg_color: String,
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self {
            fill_color: "rgba(59, 130, 246, 0.08)".to_owned(),
            outline_color: "#3b82f6".to_owned(),
            title_bg_color: "#3b82f6".to_owned(),
        }
    }
}

/// A titled rectangular grouping region.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub id: AreaId,
    pub rect: Rect,
    pub title: String,
    pub style: AreaStyle,
    pub z_index: i64,
}

impl Area {
    /// Build an area covering `rect`, grown to the minimum size if needed.
    #[must_use]
    pub fn new(id: AreaId, rect: Rect, title: impl Into<String>) -> Self {
        Self { id, rect: clamp_area_rect(rect), title: title.into(), style: AreaStyle::default(), z_index: 0 }
    }

    /// The title bar: full width, fixed height, sitting directly above `y1`.
    #[must_use]
    pub fn title_bar(&self) -> Rect {
        Rect { x1: self.rect.x1, y1: self.rect.y1 - AREA_TITLE_HEIGHT, x2: self.rect.x2, y2: self.rect.y1 }
    }

    /// Interior containment, excluding the title bar.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    /// Interior plus title bar.
    #[must_use]
    pub fn outer_bounds(&self) -> Rect {
        self.rect.union(&self.title_bar())
    }

    /// The eight resize handles: corners and edge midpoints.
    #[must_use]
    pub fn handles(&self) -> [(ResizeAnchor, Point); 8] {
        let r = &self.rect;
        let c = r.center();
        [
            (ResizeAnchor::Nw, Point::new(r.x1, r.y1)),
            (ResizeAnchor::N, Point::new(c.x, r.y1)),
            (ResizeAnchor::Ne, Point::new(r.x2, r.y1)),
            (ResizeAnchor::E, Point::new(r.x2, c.y)),
            (ResizeAnchor::Se, Point::new(r.x2, r.y2)),
            (ResizeAnchor::S, Point::new(c.x, r.y2)),
            (ResizeAnchor::Sw, Point::new(r.x1, r.y2)),
            (ResizeAnchor::W, Point::new(r.x1, c.y)),
        ]
    }

    /// Resize with the edges opposite `anchor` pinned.
    ///
    /// Each moving edge is clamped so the rectangle never drops below the
    /// minimum size; the pinned edges never move.
    pub fn resize_from(&mut self, anchor: ResizeAnchor, orig: &Rect, delta: Point) {
        let (sx, sy) = anchor.signs();
        let mut r = *orig;
        if sx > 0.0 {
            r.x2 = (orig.x2 + delta.x).max(orig.x1 + AREA_MIN_SIZE);
        } else if sx < 0.0 {
            r.x1 = (orig.x1 + delta.x).min(orig.x2 - AREA_MIN_SIZE);
        }
        if sy > 0.0 {
            r.y2 = (orig.y2 + delta.y).max(orig.y1 + AREA_MIN_SIZE);
        } else if sy < 0.0 {
            r.y1 = (orig.y1 + delta.y).min(orig.y2 - AREA_MIN_SIZE);
        }
        self.rect = r;
    }

    #[must_use]
    pub fn settings(&self) -> AreaSettings {
        AreaSettings {
            title: Some(self.title.clone()),
            fill_color: Some(self.style.fill_color.clone()),
            outline_color: Some(self.style.outline_color.clone()),
            title_bg_color: Some(self.style.title_bg_color.clone()),
        }
    }

    /// Apply only the fields present in `settings`. Returns whether anything changed.
    pub fn update_settings(&mut self, settings: &AreaSettings) -> bool {
        let before = self.clone();
        if let Some(title) = &settings.title {
            self.title.clone_from(title);
        }
        if let Some(c) = &settings.fill_color {
            self.style.fill_color.clone_from(c);
        }
        if let Some(c) = &settings.outline_color {
            self.style.outline_color.clone_from(c);
        }
        if let Some(c) = &settings.title_bg_color {
            self.style.title_bg_color.clone_from(c);
        }
        *self != before
    }
}

/// Sparse update for an area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_bg_color: Option<String>,
}

/// Normalize and grow `rect` (from its top-left corner) to the minimum area size.
#[must_use]
pub fn clamp_area_rect(rect: Rect) -> Rect {
    let r = Rect::from_corners(Point::new(rect.x1, rect.y1), Point::new(rect.x2, rect.y2));
    Rect { x1: r.x1, y1: r.y1, x2: r.x2.max(r.x1 + AREA_MIN_SIZE), y2: r.y2.max(r.y1 + AREA_MIN_SIZE) }
}
