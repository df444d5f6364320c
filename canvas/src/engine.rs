//! Interaction controller: turns input events into scene, viewport and
//! history mutations.
//!
//! DESIGN
//! ======
//! `Engine` is the sole writer of the scene/viewport/history triple. Each
//! event runs to completion and returns the [`Action`]s the host should carry
//! out (open a dialog, change the cursor, redraw, persist). Nothing here
//! touches a drawing surface, so the whole state machine is testable by
//! feeding events and inspecting state.
//!
//! Pointer-down in `Idle` resolves intent with a fixed priority battery:
//! pan trigger, area marking, then [`hit::hit_test`], then the empty-space
//! fallback (deselect and pan). Pointer-move never re-hit-tests outside
//! `Idle`. Pointer-up commits the gesture's result to history.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, info, trace};

use crate::config::{ConfigError, EngineConfig};
use crate::consts::MARK_MIN_DRAG;
use crate::doc::{AreaId, AreaSettings, ConnectionId, EntityRef, NodeId, NodeKind, NodeSettings, Port};
use crate::geom::{Point, Rect};
use crate::history::History;
use crate::hit::{self, HitPart};
use crate::input::{Button, Cursor, InputEvent, InputState, Key, Modifiers, UiState};
use crate::render::{self, Renderer};
use crate::scene::{CounterPolicy, ImportReport, Scene, SceneError, SceneSnapshot};
use crate::viewport::Viewport;

/// Title given to areas created by rubber-banding.
const NEW_AREA_TITLE: &str = "Area";

/// Effects returned from input handlers for the host to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A history entry was committed; the scene differs from the last persisted one.
    SceneChanged,
    OpenNodeSettings(NodeId),
    OpenAreaSettings(AreaId),
    /// In-place text editing began for a node.
    EditTextRequested { id: NodeId, text: String },
    SetCursor(Cursor),
    RenderNeeded,
}

/// The diagram editor core: scene, viewport, history and the input state machine.
pub struct Engine {
    pub scene: Scene,
    pub viewport: Viewport,
    pub history: History,
    pub ui: UiState,
    pub input: InputState,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with an empty scene. The empty scene is the first history entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` violates its invariants.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scene = Scene::new();
        let mut history = History::new(config.history_capacity);
        history.commit(scene.to_snapshot());
        Ok(Self {
            scene,
            viewport: Viewport::with_zoom_range(config.min_zoom, config.max_zoom),
            history,
            ui: UiState::default(),
            input: InputState::Idle,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn commit(&mut self, reason: &'static str) -> Action {
        self.history.commit(self.scene.to_snapshot());
        debug!(reason, index = self.history.index(), len = self.history.len(), "history commit");
        Action::SceneChanged
    }

    fn transition(&mut self, next: InputState) {
        trace!(from = self.input.name(), to = next.name(), "input transition");
        self.input = next;
    }

    fn select(&mut self, entity: Option<EntityRef>) {
        self.ui.selection = entity;
    }

    fn is_double_click(&self, entity: &EntityRef, time_ms: u64) -> bool {
        matches!(
            &self.ui.last_click,
            Some((prev, at)) if prev == entity && time_ms.saturating_sub(*at) < self.config.double_click_ms
        )
    }

    // --- Scene operations ---

    /// Create a node and commit.
    pub fn add_node(&mut self, kind: NodeKind, center: Point) -> NodeId {
        let id = self.scene.add_node(kind, center);
        self.commit("add_node");
        id
    }

    /// Connect two ports and commit. `Ok(None)` means the connection already existed.
    ///
    /// # Errors
    ///
    /// Propagates [`SceneError::SelfConnection`] and [`SceneError::NodeNotFound`]
    /// with no mutation and no history entry.
    pub fn add_connection(
        &mut self,
        from: &str,
        from_port: Port,
        to: &str,
        to_port: Port,
    ) -> Result<Option<ConnectionId>, SceneError> {
        let created = self.scene.add_connection(from, from_port, to, to_port)?;
        if created.is_some() {
            self.commit("add_connection");
        }
        Ok(created)
    }

    /// Create an area and commit.
    pub fn add_area(&mut self, rect: Rect, title: &str) -> AreaId {
        let id = self.scene.add_area(rect, title);
        self.commit("add_area");
        id
    }

    /// Delete an entity (cascading for nodes) and commit. Returns whether it existed.
    pub fn delete(&mut self, entity: &EntityRef) -> bool {
        if !self.scene.delete(entity) {
            return false;
        }
        self.prune_selection();
        self.commit("delete");
        true
    }

    /// Delete the selected entity, if any.
    pub fn delete_selection(&mut self) -> Vec<Action> {
        let Some(entity) = self.ui.selection.clone() else {
            return Vec::new();
        };
        if self.delete(&entity) { vec![Action::SceneChanged, Action::RenderNeeded] } else { Vec::new() }
    }

    fn prune_selection(&mut self) {
        if self.ui.selection.as_ref().is_some_and(|sel| !self.scene.contains(sel)) {
            self.ui.selection = None;
        }
    }

    /// Current editable properties of a node.
    #[must_use]
    pub fn node_settings(&self, id: &str) -> Option<NodeSettings> {
        self.scene.node(id).map(crate::doc::Node::settings)
    }

    /// Apply a sparse node update; commits only if something changed.
    pub fn update_node_settings(&mut self, id: &str, settings: &NodeSettings) -> bool {
        let changed = self.scene.node_mut(id).is_some_and(|n| n.update_settings(settings));
        if changed {
            self.commit("node_settings");
        }
        changed
    }

    /// Current editable properties of an area.
    #[must_use]
    pub fn area_settings(&self, id: &str) -> Option<AreaSettings> {
        self.scene.area(id).map(crate::doc::Area::settings)
    }

    /// Apply a sparse area update; commits only if something changed.
    pub fn update_area_settings(&mut self, id: &str, settings: &AreaSettings) -> bool {
        let changed = self.scene.area_mut(id).is_some_and(|a| a.update_settings(settings));
        if changed {
            self.commit("area_settings");
        }
        changed
    }

    /// Replace a node's text from an external editor, ending any in-place edit of it.
    pub fn set_text(&mut self, id: &str, text: &str) -> Vec<Action> {
        if matches!(&self.input, InputState::EditingText { id: editing, .. } if editing == id) {
            self.transition(InputState::Idle);
        }
        let settings = NodeSettings { text: Some(text.to_owned()), ..Default::default() };
        if self.update_node_settings(id, &settings) { vec![Action::SceneChanged, Action::RenderNeeded] } else { Vec::new() }
    }

    /// Replace a connection's explicit waypoints and commit if they changed.
    ///
    /// # Errors
    ///
    /// [`SceneError::ConnectionNotFound`] if `id` is unknown.
    pub fn set_waypoints(&mut self, id: &str, waypoints: Vec<Point>) -> Result<bool, SceneError> {
        let changed = self.scene.set_waypoints(id, waypoints)?;
        if changed {
            self.commit("waypoints");
        }
        Ok(changed)
    }

    pub fn bring_to_front(&mut self, entity: &EntityRef) -> bool {
        let found = self.scene.bring_to_front(entity);
        if found {
            self.commit("bring_to_front");
        }
        found
    }

    pub fn send_to_back(&mut self, entity: &EntityRef) -> bool {
        let found = self.scene.send_to_back(entity);
        if found {
            self.commit("send_to_back");
        }
        found
    }

    /// The routed path of a connection.
    #[must_use]
    pub fn connection_path(&self, id: &str) -> Option<Vec<Point>> {
        self.scene.connection(id).and_then(|c| self.scene.connection_path(c))
    }

    // --- History ---

    /// Step back one history entry. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.restore(&snapshot);
        debug!(index = self.history.index(), "undo");
        true
    }

    /// Step forward one history entry. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.restore(&snapshot);
        debug!(index = self.history.index(), "redo");
        true
    }

    fn restore(&mut self, snapshot: &SceneSnapshot) {
        let report = self.scene.load_snapshot(snapshot, CounterPolicy::Monotonic);
        if report.dropped_connections > 0 {
            debug!(dropped = report.dropped_connections, "restore dropped connections");
        }
        self.prune_selection();
        self.transition(InputState::Idle);
    }

    // --- Import / export ---

    /// Replace the scene with a JSON document and commit.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] on malformed input; nothing changes.
    pub fn import_json(&mut self, json: &str) -> Result<ImportReport, SceneError> {
        let report = self.scene.import_json(json)?;
        self.select(None);
        self.ui.last_click = None;
        self.transition(InputState::Idle);
        self.commit("import");
        info!(
            nodes = report.nodes,
            connections = report.connections,
            areas = report.areas,
            dropped = report.dropped_connections,
            duplicates = report.duplicate_ids,
            "scene imported"
        );
        Ok(report)
    }

    /// Replace the scene with a JSON document as a fresh session.
    ///
    /// History restarts at the loaded scene, so the load itself cannot be
    /// undone, and the viewport returns to identity.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] on malformed input; nothing changes.
    pub fn open_json(&mut self, json: &str) -> Result<ImportReport, SceneError> {
        let report = self.scene.import_json(json)?;
        self.select(None);
        self.ui.last_click = None;
        self.transition(InputState::Idle);
        self.history.reset(self.scene.to_snapshot());
        self.viewport.reset();
        info!(
            nodes = report.nodes,
            connections = report.connections,
            areas = report.areas,
            dropped = report.dropped_connections,
            duplicates = report.duplicate_ids,
            "scene opened"
        );
        Ok(report)
    }

    /// Serialize the scene.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if serialization fails.
    pub fn export_json(&self) -> Result<String, SceneError> {
        self.scene.export_json()
    }

    // --- Viewport / modes ---

    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport.set_size(width, height);
    }

    /// Frame all nodes. Returns `false` when there is nothing to frame.
    pub fn fit_to_content(&mut self) -> bool {
        self.viewport.fit_to_content(self.scene.node_bounds(), self.config.fit_padding)
    }

    pub fn set_pan_mode(&mut self, on: bool) {
        self.ui.pan_mode = on;
    }

    /// Arm area marking: the next primary press starts a rubber band.
    pub fn begin_mark_area(&mut self) {
        self.ui.mark_area_mode = true;
    }

    #[must_use]
    pub fn selection(&self) -> Option<&EntityRef> {
        self.ui.selection.as_ref()
    }

    /// Draw the scene through `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        render::draw(renderer, &self.scene, &self.ui, &self.input);
    }

    // --- Input events ---

    /// Dispatch one event.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Action> {
        match event {
            InputEvent::PointerDown { screen, button, modifiers, time_ms } => {
                self.on_pointer_down(screen, button, modifiers, time_ms)
            }
            InputEvent::PointerMove { screen, modifiers } => self.on_pointer_move(screen, modifiers),
            InputEvent::PointerUp { screen, button, modifiers } => self.on_pointer_up(screen, button, modifiers),
            InputEvent::Wheel { screen, delta_y } => self.on_wheel(screen, delta_y),
            InputEvent::KeyDown { key, modifiers } => self.on_key_down(&key, modifiers),
        }
    }

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, modifiers: Modifiers, time_ms: u64) -> Vec<Action> {
        let mut actions = Vec::new();
        if matches!(self.input, InputState::EditingText { .. }) {
            actions.extend(self.finish_text_edit());
        }
        if self.input != InputState::Idle {
            return actions;
        }

        if button != Button::Primary || modifiers.alt || self.ui.pan_mode {
            self.transition(InputState::Panning { last_screen: screen });
            actions.push(Action::SetCursor(Cursor::Grab));
            return actions;
        }

        let world = self.viewport.screen_to_world(screen);
        if self.ui.mark_area_mode {
            self.transition(InputState::MarkingArea { start: world, current: world });
            actions.push(Action::RenderNeeded);
            return actions;
        }

        let Some(hit) = hit::hit_test(world, &self.scene, self.viewport.zoom, self.ui.selection.as_ref()) else {
            self.select(None);
            self.transition(InputState::Panning { last_screen: screen });
            actions.push(Action::RenderNeeded);
            return actions;
        };

        let id = hit.target.id().to_owned();
        match hit.part {
            HitPart::AreaHandle(anchor) => {
                if let Some(area) = self.scene.area(&id) {
                    let orig = area.rect;
                    self.transition(InputState::ResizingArea { id, anchor, start_world: world, orig });
                }
            }
            HitPart::AreaTitle => {
                if self.is_double_click(&hit.target, time_ms) {
                    self.ui.last_click = None;
                    actions.push(Action::OpenAreaSettings(id));
                } else if let Some(area) = self.scene.area(&id) {
                    let orig = area.rect;
                    self.ui.last_click = Some((hit.target.clone(), time_ms));
                    self.select(Some(hit.target));
                    self.transition(InputState::DraggingArea { id, start_world: world, orig });
                }
            }
            HitPart::ConnectionEnd(end) => {
                self.select(Some(hit.target));
                self.transition(InputState::Reconnecting { id, end, cursor: world });
            }
            HitPart::Port(port) => {
                self.transition(InputState::ConnectingNew { from: id, port, cursor: world });
            }
            HitPart::NodeHandle(anchor) => {
                if let Some(node) = self.scene.node(&id) {
                    let orig = node.bounds();
                    self.transition(InputState::ResizingNode { id, anchor, start_world: world, orig });
                }
            }
            HitPart::NodeBody => {
                if self.is_double_click(&hit.target, time_ms) {
                    self.ui.last_click = None;
                    actions.push(Action::OpenNodeSettings(id));
                } else if let Some(node) = self.scene.node(&id) {
                    let orig = node.center();
                    self.ui.last_click = Some((hit.target.clone(), time_ms));
                    self.select(Some(hit.target));
                    self.transition(InputState::DraggingNode { id, start_world: world, orig });
                }
            }
            HitPart::ConnectionBody | HitPart::AreaBody => {
                self.select(Some(hit.target));
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_pointer_move(&mut self, screen: Point, _modifiers: Modifiers) -> Vec<Action> {
        let world = self.viewport.screen_to_world(screen);
        match &mut self.input {
            InputState::Idle => return vec![Action::SetCursor(self.cursor_at(world))],
            InputState::EditingText { .. } => return Vec::new(),
            InputState::Panning { last_screen } => {
                self.viewport.pan_by(screen.x - last_screen.x, screen.y - last_screen.y);
                *last_screen = screen;
            }
            InputState::DraggingNode { id, start_world, orig } => {
                let d = world.delta_from(*start_world);
                if let Some(node) = self.scene.node_mut(id) {
                    node.x = orig.x + d.x;
                    node.y = orig.y + d.y;
                }
            }
            InputState::ResizingNode { id, anchor, start_world, orig } => {
                let d = world.delta_from(*start_world);
                if let Some(node) = self.scene.node_mut(id) {
                    node.resize_from(*anchor, orig, d);
                }
            }
            InputState::DraggingArea { id, start_world, orig } => {
                let d = world.delta_from(*start_world);
                if let Some(area) = self.scene.area_mut(id) {
                    area.rect = orig.translate(d.x, d.y);
                }
            }
            InputState::ResizingArea { id, anchor, start_world, orig } => {
                let d = world.delta_from(*start_world);
                if let Some(area) = self.scene.area_mut(id) {
                    area.resize_from(*anchor, orig, d);
                }
            }
            InputState::ConnectingNew { cursor, .. } | InputState::Reconnecting { cursor, .. } => {
                *cursor = world;
            }
            InputState::MarkingArea { current, .. } => {
                *current = world;
            }
        }
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, screen: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        let world = self.viewport.screen_to_world(screen);
        let state = std::mem::take(&mut self.input);
        trace!(from = state.name(), "pointer up");
        let mut actions = Vec::new();
        match state {
            InputState::Idle => return actions,
            InputState::EditingText { .. } => {
                self.input = state;
                return actions;
            }
            InputState::Panning { .. } => {
                actions.push(Action::SetCursor(self.cursor_at(world)));
                return actions;
            }
            InputState::DraggingNode { id, orig, .. } => {
                if self.scene.node(&id).is_some_and(|n| n.center() != orig) {
                    actions.push(self.commit("move_node"));
                }
            }
            InputState::ResizingNode { id, orig, .. } => {
                if self.scene.node(&id).is_some_and(|n| n.bounds() != orig) {
                    actions.push(self.commit("resize_node"));
                }
            }
            InputState::DraggingArea { id, orig, .. } => {
                if self.scene.area(&id).is_some_and(|a| a.rect != orig) {
                    actions.push(self.commit("move_area"));
                }
            }
            InputState::ResizingArea { id, orig, .. } => {
                if self.scene.area(&id).is_some_and(|a| a.rect != orig) {
                    actions.push(self.commit("resize_area"));
                }
            }
            InputState::ConnectingNew { from, port, .. } => {
                if let Some((to, to_port)) = hit::port_target(world, &self.scene, self.viewport.zoom) {
                    match self.scene.add_connection(&from, port, &to, to_port) {
                        Ok(Some(conn)) => {
                            self.select(Some(EntityRef::Connection(conn)));
                            actions.push(self.commit("add_connection"));
                        }
                        Ok(None) => {}
                        Err(err) => debug!(%err, from = %from, to = %to, "connection rejected"),
                    }
                }
            }
            InputState::Reconnecting { id, end, .. } => {
                if let Some((node, port)) = hit::port_target(world, &self.scene, self.viewport.zoom) {
                    match self.scene.reconnect(&id, end, &node, port) {
                        Ok(true) => actions.push(self.commit("reconnect")),
                        Ok(false) => {}
                        Err(err) => debug!(%err, id = %id, "reconnect rejected"),
                    }
                }
            }
            InputState::MarkingArea { start, .. } => {
                self.ui.mark_area_mode = false;
                let rect = Rect::from_corners(start, world);
                if rect.width() >= MARK_MIN_DRAG && rect.height() >= MARK_MIN_DRAG {
                    let id = self.scene.add_area(rect, NEW_AREA_TITLE);
                    self.select(Some(EntityRef::Area(id.clone())));
                    actions.push(self.commit("add_area"));
                    actions.push(Action::OpenAreaSettings(id));
                }
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_wheel(&mut self, screen: Point, delta_y: f64) -> Vec<Action> {
        if self.viewport.zoom_at(screen, delta_y) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if matches!(self.input, InputState::EditingText { .. }) {
            return self.edit_text_key(key, modifiers);
        }
        match key.0.as_str() {
            "Escape" => self.cancel(),
            _ if self.input != InputState::Idle => Vec::new(),
            "Delete" | "Backspace" => self.delete_selection(),
            "Enter" | "F2" => self.begin_text_edit(),
            k if modifiers.command() && k.eq_ignore_ascii_case("z") => {
                let moved = if modifiers.shift { self.redo() } else { self.undo() };
                if moved { vec![Action::SceneChanged, Action::RenderNeeded] } else { Vec::new() }
            }
            k if modifiers.command() && k.eq_ignore_ascii_case("y") => {
                if self.redo() { vec![Action::SceneChanged, Action::RenderNeeded] } else { Vec::new() }
            }
            _ => Vec::new(),
        }
    }

    /// Abandon the current gesture without a history entry, restoring any
    /// geometry it changed. In `Idle`, disarms area marking or clears the selection.
    fn cancel(&mut self) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        trace!(from = state.name(), "cancel");
        match state {
            InputState::Idle => {
                if self.ui.mark_area_mode {
                    self.ui.mark_area_mode = false;
                } else {
                    self.select(None);
                }
            }
            InputState::DraggingNode { id, orig, .. } => {
                if let Some(node) = self.scene.node_mut(&id) {
                    node.x = orig.x;
                    node.y = orig.y;
                }
            }
            InputState::ResizingNode { id, orig, .. } => {
                if let Some(node) = self.scene.node_mut(&id) {
                    let c = orig.center();
                    node.x = c.x;
                    node.y = c.y;
                    node.width = orig.width();
                    node.height = orig.height();
                }
            }
            InputState::DraggingArea { id, orig, .. } | InputState::ResizingArea { id, orig, .. } => {
                if let Some(area) = self.scene.area_mut(&id) {
                    area.rect = orig;
                }
            }
            InputState::MarkingArea { .. } => self.ui.mark_area_mode = false,
            InputState::EditingText { id, original } => {
                if let Some(node) = self.scene.node_mut(&id) {
                    node.text = original;
                }
            }
            InputState::Panning { .. } | InputState::ConnectingNew { .. } | InputState::Reconnecting { .. } => {}
        }
        vec![Action::RenderNeeded]
    }

    // --- Text editing ---

    fn begin_text_edit(&mut self) -> Vec<Action> {
        let Some(EntityRef::Node(id)) = self.ui.selection.clone() else {
            return Vec::new();
        };
        let Some(node) = self.scene.node(&id) else {
            return Vec::new();
        };
        let text = node.text.clone();
        self.transition(InputState::EditingText { id: id.clone(), original: text.clone() });
        vec![Action::EditTextRequested { id, text }, Action::RenderNeeded]
    }

    fn edit_text_key(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        let InputState::EditingText { id, .. } = &self.input else {
            return Vec::new();
        };
        let id = id.clone();
        match key.0.as_str() {
            "Escape" => return self.cancel(),
            "Enter" if !modifiers.shift => return self.finish_text_edit(),
            _ => {}
        }
        let Some(node) = self.scene.node_mut(&id) else {
            self.transition(InputState::Idle);
            return Vec::new();
        };
        match key.0.as_str() {
            "Enter" => node.text.push('\n'),
            "Backspace" => {
                node.text.pop();
            }
            _ => match key.printable() {
                Some(c) if !modifiers.command() => node.text.push(c),
                _ => return Vec::new(),
            },
        }
        vec![Action::RenderNeeded]
    }

    /// Leave text editing, committing if the text changed.
    fn finish_text_edit(&mut self) -> Vec<Action> {
        let InputState::EditingText { id, original } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };
        trace!(id = %id, "text edit finished");
        let mut actions = Vec::new();
        if self.scene.node(&id).is_some_and(|n| n.text != original) {
            actions.push(self.commit("edit_text"));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Cursor hints ---

    /// Cursor for hovering `world` while idle. Runs the hit battery with no side effects.
    fn cursor_at(&self, world: Point) -> Cursor {
        if self.ui.pan_mode {
            return Cursor::Grab;
        }
        if self.ui.mark_area_mode {
            return Cursor::Crosshair;
        }
        match hit::hit_test(world, &self.scene, self.viewport.zoom, self.ui.selection.as_ref()) {
            Some(hit) => match hit.part {
                HitPart::AreaHandle(anchor) | HitPart::NodeHandle(anchor) => Cursor::Resize(anchor),
                HitPart::AreaTitle | HitPart::NodeBody => Cursor::Move,
                HitPart::ConnectionEnd(_) | HitPart::Port(_) => Cursor::Crosshair,
                HitPart::ConnectionBody | HitPart::AreaBody => Cursor::Pointer,
            },
            None => Cursor::Default,
        }
    }
}
