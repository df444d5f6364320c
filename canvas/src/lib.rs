//! Diagram editing core for the flowboard flowchart editor.
//!
//! The crate owns the full interaction lifecycle of a node-and-connector
//! diagram: translating pointer and keyboard input into scene mutations,
//! routing connections orthogonally between node ports, hit-testing, pan/zoom
//! and snapshot-based undo/redo. It performs no pixel output; a host supplies
//! a [`render::Renderer`] and carries out the [`engine::Action`]s returned by
//! each event.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Interaction controller and host API |
//! | [`scene`] | Entity store, id allocation, wire format and import/export |
//! | [`doc`] | Node, connection and area types with their settings |
//! | [`route`] | Orthogonal connection router |
//! | [`hit`] | Hit-testing in priority order |
//! | [`geom`] | Points, rectangles and zoom-scaled proximity tests |
//! | [`viewport`] | Pan/zoom and coordinate conversions |
//! | [`history`] | Bounded undo/redo snapshot stack |
//! | [`input`] | Input events and the gesture state machine |
//! | [`render`] | Draw-order traversal over a host renderer |
//! | [`config`] | Engine tunables, optionally from the environment |
//! | [`consts`] | Shared numeric constants (pick radii, minimum sizes, etc.) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod history;
pub mod hit;
pub mod input;
pub mod render;
pub mod route;
pub mod scene;
pub mod viewport;
