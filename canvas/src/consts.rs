//! Shared numeric constants for the canvas crate.

// ── Hit-testing ─────────────────────────────────────────────────
// Radii are world units at zoom 1.0; callers divide by the current zoom.

/// Pick radius around a node's connection port.
pub const PORT_RADIUS: f64 = 10.0;

/// Pick radius around a resize handle.
pub const HANDLE_RADIUS: f64 = 8.0;

/// Proximity to a routed connection path (and to its endpoints for reconnect).
pub const CONNECTION_HIT_DISTANCE: f64 = 15.0;

// ── Routing ─────────────────────────────────────────────────────

/// Ports closer than this on the cross axis are joined by a straight segment.
pub const ALIGN_TOLERANCE: f64 = 10.0;

/// Distance a parallel route travels out of each port before jogging.
pub const ROUTE_OFFSET: f64 = 30.0;

// ── Entity sizes ────────────────────────────────────────────────

/// Minimum node width.
pub const NODE_MIN_WIDTH: f64 = 60.0;

/// Minimum node height.
pub const NODE_MIN_HEIGHT: f64 = 40.0;

/// Minimum area width and height.
pub const AREA_MIN_SIZE: f64 = 50.0;

/// Height of the title bar drawn above an area's top edge.
pub const AREA_TITLE_HEIGHT: f64 = 28.0;

/// A rubber band smaller than this on either axis is treated as a stray click.
pub const MARK_MIN_DRAG: f64 = 5.0;

// ── Interaction / viewport defaults ─────────────────────────────

/// Two clicks on the same entity within this window are a double-click.
pub const DOUBLE_CLICK_MS: u64 = 300;

/// Number of snapshots retained by the undo history.
pub const HISTORY_CAPACITY: usize = 50;

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 5.0;

/// Multiplicative zoom step when scrolling in.
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Multiplicative zoom step when scrolling out.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// World-space margin kept around content by fit-to-content.
pub const FIT_PADDING: f64 = 50.0;
