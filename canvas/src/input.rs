//! Input model: modifier keys, mouse buttons, input events, and the gesture
//! state machine.
//!
//! `InputEvent` is what a host feeds the engine; it is serde-tagged so
//! recorded sessions can be replayed. `InputState` is the active gesture
//! tracked between pointer-down and pointer-up, carrying all context needed to
//! compute live updates and to revert on Escape.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::{AreaId, ConnectionEnd, ConnectionId, EntityRef, NodeId, Port};
use crate::geom::{Point, Rect};
use crate::hit::ResizeAnchor;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    /// Alt / Option key. Held with the primary button it pans.
    pub alt: bool,
    /// Meta / Command key.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// A keyboard key as named by the host (e.g. `"Delete"`, `"Escape"`, `"a"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

impl Key {
    /// The single character this key types, if it is printable.
    #[must_use]
    pub fn printable(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

/// Cursor the host should display, chosen from what the pointer hovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    /// Over something clickable that does not drag (connections, area interiors).
    Pointer,
    /// Over something draggable.
    Move,
    /// Over a port or connection end, or while marking an area.
    Crosshair,
    Resize(ResizeAnchor),
    /// Pan mode is on.
    Grab,
}

/// One input event from the host. `time_ms` is a monotonic timestamp used for
/// double-click detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        screen: Point,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default)]
        time_ms: u64,
    },
    PointerMove {
        screen: Point,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        screen: Point,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Wheel {
        screen: Point,
        /// Vertical scroll amount (negative = away from the user = zoom in).
        delta_y: f64,
    },
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The currently selected entity, if any.
    pub selection: Option<EntityRef>,
    /// Primary-button drags on empty space and entities pan instead of editing.
    pub pan_mode: bool,
    /// The next primary press starts a rubber band for a new area.
    pub mark_area_mode: bool,
    /// Last click on an entity, for double-click detection.
    pub last_click: Option<(EntityRef, u64)>,
}

/// Internal state for the input state machine.
///
/// Each active variant carries gesture context needed to compute live updates
/// and to restore the pre-gesture state on Escape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Panning the viewport.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// Moving a node.
    DraggingNode {
        id: NodeId,
        /// World-space pointer position when the drag started.
        start_world: Point,
        /// Node center when the drag started.
        orig: Point,
    },
    /// Resizing a node around its center.
    ResizingNode {
        id: NodeId,
        anchor: ResizeAnchor,
        start_world: Point,
        /// Node bounds when the resize started.
        orig: Rect,
    },
    /// Moving an area by its title bar.
    DraggingArea { id: AreaId, start_world: Point, orig: Rect },
    /// Resizing an area with the opposite edges pinned.
    ResizingArea { id: AreaId, anchor: ResizeAnchor, start_world: Point, orig: Rect },
    /// Dragging a new connection out of a node port.
    ConnectingNew {
        from: NodeId,
        port: Port,
        /// Current world-space pointer, for the preview line.
        cursor: Point,
    },
    /// Dragging one end of an existing connection to a new port.
    Reconnecting { id: ConnectionId, end: ConnectionEnd, cursor: Point },
    /// Rubber-banding a new area.
    MarkingArea { start: Point, current: Point },
    /// Editing a node's label in place.
    EditingText {
        id: NodeId,
        /// Text before editing began, restored on Escape.
        original: String,
    },
}

impl InputState {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Panning { .. } => "panning",
            Self::DraggingNode { .. } => "dragging_node",
            Self::ResizingNode { .. } => "resizing_node",
            Self::DraggingArea { .. } => "dragging_area",
            Self::ResizingArea { .. } => "resizing_area",
            Self::ConnectingNew { .. } => "connecting_new",
            Self::Reconnecting { .. } => "reconnecting",
            Self::MarkingArea { .. } => "marking_area",
            Self::EditingText { .. } => "editing_text",
        }
    }

    /// The rubber-band rectangle while marking an area.
    #[must_use]
    pub fn marquee(&self) -> Option<Rect> {
        match self {
            Self::MarkingArea { start, current } => Some(Rect::from_corners(*start, *current)),
            _ => None,
        }
    }
}
