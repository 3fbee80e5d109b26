// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The board orchestrator: one shared transform, one selection, and the
//! gesture engines wired over a single pointer stream.

use kurbo::{Point, Size, Vec2};

use tackboard_drag::{DragConfig, DragEngine, DragFilter, GridStep};
use tackboard_pinch::PinchEngine;
use tackboard_pointer::{PointerEvent, PointerTracker, PointerUpdate};
use tackboard_view::BoardTransform;

use crate::blob::BlobStore;
use crate::input::{Key, Modifiers};
use crate::node::{Node, NodeContent, NodeId};

/// Total Manhattan movement at or below which a gesture is a click.
pub const MIN_DRAG_DISTANCE: f64 = 3.0;

/// Geometric zoom step applied per ctrl/cmd + wheel tick.
pub const WHEEL_ZOOM_FACTOR: f64 = 0.04;

/// Geometric zoom step applied per ctrl/cmd + `-`/`=` press.
pub const KEY_ZOOM_FACTOR: f64 = 0.2;

/// Grid granularity node drags snap to, in board units.
pub const NODE_GRID_STEP: f64 = 10.0;

/// Relative scale change below which a pinch step is dropped, so
/// floating-point round-trip noise never jitters the transform.
const PINCH_SCALE_DEADZONE: f64 = 1e-3;

/// Hit-target key for the board's pointer stream.
///
/// The host's hit testing resolves every pointer event to either the board
/// background or a draggable node before feeding it in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BoardTarget {
    /// The board surface itself.
    Background,
    /// A draggable node.
    Node(NodeId),
}

fn is_node_target(target: &BoardTarget) -> bool {
    matches!(target, BoardTarget::Node(_))
}

/// State change notifications, returned in application order from each
/// input call so subscribers can replay mutations exactly.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardEvent {
    /// The shared transform changed (pan, zoom, or both).
    TransformChanged(BoardTransform),
    /// The selection changed.
    SelectionChanged(Option<NodeId>),
    /// A node was created.
    NodeAdded(NodeId),
    /// A node's position changed.
    NodeMoved(NodeId),
    /// A node was removed.
    NodeRemoved(NodeId),
    /// The node should enter its edit mode.
    EditRequested(NodeId),
    /// The node left its edit mode.
    EditEnded(NodeId),
}

/// A pannable, zoomable pinboard surface.
///
/// `Board` owns the node collection, the single selection, and the shared
/// [`BoardTransform`], and wires four kernels over one pointer stream: a
/// tracker, a background-pan drag engine, a node drag engine, and a pinch
/// engine. Hosts feed it routed pointer/wheel/key events and apply the
/// returned [`BoardEvent`]s to their rendering layer.
///
/// Gesture arbitration rules, enforced centrally here:
///
/// - A press on a node always starts a node drag, never a background pan.
/// - While two pointers are down, pinch zoom runs and both drag engines
///   keep tracking but their positional output is suppressed; single-pointer
///   semantics resume on the next move after the pinch ends.
/// - A gesture whose total movement stays within [`MIN_DRAG_DISTANCE`]
///   (Manhattan) is a click: a background click clears the selection, a
///   node click only selects.
#[derive(Debug)]
pub struct Board<S> {
    nodes: Vec<Node>,
    selected: Option<NodeId>,
    editing: Option<NodeId>,
    transform: BoardTransform,
    viewport: Size,
    tracker: PointerTracker<BoardTarget>,
    pan: DragEngine<BoardTarget>,
    node_drag: DragEngine<BoardTarget>,
    pinch: PinchEngine,
    blobs: S,
    next_z: u64,
    space_panning: bool,
}

impl<S: BlobStore> Board<S> {
    /// Creates an empty board covering the given viewport.
    #[must_use]
    pub fn new(viewport: Size, blobs: S) -> Self {
        Self {
            nodes: Vec::new(),
            selected: None,
            editing: None,
            transform: BoardTransform::default(),
            viewport,
            tracker: PointerTracker::new(),
            pan: DragEngine::new(DragConfig {
                filter: DragFilter::BoundOnly(BoardTarget::Background),
                ..DragConfig::default()
            }),
            node_drag: DragEngine::new(DragConfig {
                filter: DragFilter::Matching(is_node_target),
                anchor: Some(Vec2::ZERO),
                grid: Some(GridStep::uniform(NODE_GRID_STEP)),
                ..DragConfig::default()
            }),
            pinch: PinchEngine::new(),
            blobs,
            next_z: 0,
            space_panning: false,
        }
    }

    /// The node collection, unordered with respect to stacking; `z_index`
    /// is authoritative.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    /// The currently selected node, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    /// The node currently in edit mode, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&NodeId> {
        self.editing.as_ref()
    }

    /// The shared viewport transform.
    #[must_use]
    pub fn transform(&self) -> BoardTransform {
        self.transform
    }

    /// True while the space bar requests the hold-to-pan cursor.
    #[must_use]
    pub fn is_space_panning(&self) -> bool {
        self.space_panning
    }

    /// True while two or more pointers are down.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.tracker.is_pinching()
    }

    /// The blob store collaborator.
    pub fn blobs_mut(&mut self) -> &mut S {
        &mut self.blobs
    }

    /// Updates the viewport size used for centering and keyboard zoom.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Replaces the whole node collection, e.g. when hydrating from
    /// persistence. Stale selection and edit state are dropped.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.next_z = nodes.iter().map(|node| node.z_index + 1).max().unwrap_or(0);
        self.nodes = nodes;
        if let Some(id) = self.selected.take() {
            if self.node(&id).is_some() {
                self.selected = Some(id);
            }
        }
        if let Some(id) = self.editing.take() {
            if self.node(&id).is_some() {
                self.editing = Some(id);
            }
        }
    }

    /// Replaces the transform wholesale, e.g. when hydrating from
    /// persistence.
    pub fn set_transform(&mut self, transform: BoardTransform) {
        self.transform = BoardTransform::new(transform.x, transform.y, transform.scale);
        self.pinch.set_scale(self.transform.scale);
        if !self.pan.is_dragging() {
            self.pan.set_offset(self.transform.pan());
        }
    }

    /// Handles a routed pointer press.
    pub fn pointer_down(&mut self, event: &PointerEvent<BoardTarget>) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        let Some(update) = self.tracker.pointer_down(event) else {
            return events;
        };
        self.pinch.pointer_down(&update);

        // Node drag wins over background pan; decided here, not per engine.
        let mut node_gesture = false;
        if let BoardTarget::Node(id) = update.event.target.clone() {
            if let Some(position) = self.node(&id).map(|node| node.position) {
                let world = self.world_update(&update);
                if self.node_drag.pointer_down(&world, Some(position)).is_some() {
                    node_gesture = true;
                    self.bring_to_front(&id);
                    if self.selected.as_ref() != Some(&id) {
                        self.selected = Some(id.clone());
                        events.push(BoardEvent::SelectionChanged(Some(id)));
                    }
                }
            }
        }
        if !node_gesture && !self.pan.is_dragging() {
            self.pan.set_offset(self.transform.pan());
            self.pan.pointer_down(&update, None);
        }
        events
    }

    /// Handles a routed pointer move.
    pub fn pointer_move(&mut self, event: &PointerEvent<BoardTarget>) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        let Some(update) = self.tracker.pointer_move(event) else {
            return events;
        };

        if let Some(pinch) = self.pinch.pointer_move(&update) {
            if (pinch.scale / self.transform.scale - 1.0).abs() >= PINCH_SCALE_DEADZONE {
                let next = self.transform.zoom_to(pinch.origin, pinch.scale);
                if self.apply_transform(next, &mut events) {
                    self.rebase_drags(&update);
                }
            }
        }

        if let Some(drag) = self.pan.pointer_move(&update) {
            if !drag.pinching {
                let next = self.transform.with_pan(drag.offset);
                self.apply_transform(next, &mut events);
            }
        }

        let world = self.world_update(&update);
        if let Some(drag) = self.node_drag.pointer_move(&world) {
            if !drag.pinching {
                if let BoardTarget::Node(id) = drag.target {
                    if self.move_node(&id, drag.grid_offset.to_point()) {
                        events.push(BoardEvent::NodeMoved(id));
                    }
                }
            }
        }
        events
    }

    /// Handles a routed pointer release.
    pub fn pointer_up(&mut self, event: &PointerEvent<BoardTarget>) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        let Some(update) = self.tracker.pointer_up(event) else {
            return events;
        };
        self.pinch.pointer_up(&update);

        if let Some(end) = self.pan.pointer_up(&update) {
            let clicked = end.movement.x.abs() + end.movement.y.abs() <= MIN_DRAG_DISTANCE;
            if clicked && end.target == BoardTarget::Background && self.selected.is_some() {
                self.selected = None;
                events.push(BoardEvent::SelectionChanged(None));
            }
        }

        // The end snapshot's target is whatever sat under the pointer at
        // release; the dragged node must be read off the engine first.
        let dragged = self.node_drag.target().cloned();
        let world = self.world_update(&update);
        if let Some(end) = self.node_drag.pointer_up(&world) {
            if update.event.is_primary && !update.pinching {
                if let Some(BoardTarget::Node(id)) = dragged {
                    if self.move_node(&id, end.grid_offset.to_point()) {
                        events.push(BoardEvent::NodeMoved(id));
                    }
                }
            }
        }
        events
    }

    /// Handles a ctrl/cmd + wheel tick: one discrete zoom step anchored at
    /// the cursor. An unmodified wheel is not claimed by the board.
    pub fn wheel(&mut self, delta_y: f64, modifiers: Modifiers, position: Point) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        if !modifiers.ctrl_or_meta || delta_y == 0.0 {
            return events;
        }
        let factor = if delta_y < 0.0 {
            WHEEL_ZOOM_FACTOR
        } else {
            -WHEEL_ZOOM_FACTOR
        };
        let next = self.transform.zoom_about(position, factor);
        self.apply_transform(next, &mut events);
        events
    }

    /// Handles a key press. While a node is in edit mode every shortcut
    /// except `Escape` is suppressed.
    pub fn key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<BoardEvent> {
        let mut events = Vec::new();

        if let Some(id) = self.editing.clone() {
            if key == Key::Escape {
                self.editing = None;
                events.push(BoardEvent::EditEnded(id));
            }
            return events;
        }

        match key {
            Key::Space => self.space_panning = true,
            Key::Delete => {
                if let Some(id) = self.selected.clone() {
                    events.extend(self.remove_node(&id));
                }
            }
            Key::Digit0 if modifiers.ctrl_or_meta => {
                let next = self.transform.zoom_to(self.viewport_center(), 1.0);
                self.apply_transform(next, &mut events);
            }
            Key::Minus if modifiers.ctrl_or_meta => {
                let next = self
                    .transform
                    .zoom_about(self.viewport_center(), -KEY_ZOOM_FACTOR);
                self.apply_transform(next, &mut events);
            }
            Key::Equals if modifiers.ctrl_or_meta => {
                let next = self
                    .transform
                    .zoom_about(self.viewport_center(), KEY_ZOOM_FACTOR);
                self.apply_transform(next, &mut events);
            }
            Key::Period if modifiers.ctrl_or_meta => {
                if let Some(center) = self.selected_node().map(Node::center) {
                    let next = self.transform.centered_on(center, self.viewport);
                    self.apply_transform(next, &mut events);
                }
            }
            Key::Char('n') => {
                let (_, added) = self.add_node(NodeContent::empty_note());
                events.extend(added);
            }
            Key::Char('i') => {
                let (_, added) = self.add_node(NodeContent::empty_image());
                events.extend(added);
            }
            _ => {}
        }
        events
    }

    /// Handles a key release; ends hold-to-pan.
    pub fn key_up(&mut self, key: Key) {
        if key == Key::Space {
            self.space_panning = false;
        }
    }

    /// Handles a double click; a node target is asked to enter edit mode.
    pub fn double_click(&mut self, target: &BoardTarget) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        if let BoardTarget::Node(id) = target {
            if self.node(id).is_some() {
                if self.selected.as_ref() != Some(id) {
                    self.selected = Some(id.clone());
                    events.push(BoardEvent::SelectionChanged(Some(id.clone())));
                }
                self.editing = Some(id.clone());
                events.push(BoardEvent::EditRequested(id.clone()));
            }
        }
        events
    }

    /// Selects a node (host focus handling), or clears the selection.
    pub fn select(&mut self, id: Option<NodeId>) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        if let Some(id) = &id {
            if self.node(id).is_none() {
                return events;
            }
            self.bring_to_front(id);
        }
        if self.selected != id {
            self.selected = id.clone();
            events.push(BoardEvent::SelectionChanged(id));
        }
        events
    }

    /// Creates a node, centers it in the current viewport, and selects it.
    ///
    /// The new id is returned so the caller can follow up (load an image
    /// payload, focus an editor) without observing the collection.
    pub fn add_node(&mut self, content: NodeContent) -> (NodeId, Vec<BoardEvent>) {
        let mut events = Vec::new();
        let mut node = Node::new(content);
        let center = self.transform.screen_to_world(self.viewport_center());
        let size = node.size.unwrap_or(Size::ZERO);
        node.position = Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0);
        node.z_index = self.take_z();

        let id = node.id.clone();
        self.nodes.push(node);
        events.push(BoardEvent::NodeAdded(id.clone()));
        self.selected = Some(id.clone());
        events.push(BoardEvent::SelectionChanged(Some(id.clone())));
        (id, events)
    }

    /// Moves a node to an explicit board/world position.
    ///
    /// For host-driven placement outside a drag gesture; no grid snapping
    /// is applied. Unknown ids and no-op moves return no events.
    pub fn set_node_position(&mut self, id: &NodeId, position: Point) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        if self.move_node(id, position) {
            events.push(BoardEvent::NodeMoved(id.clone()));
        }
        events
    }

    /// Removes a node, freeing its blob-store payload first.
    ///
    /// The payload release is best-effort: a failing store never blocks
    /// removal from board state.
    pub fn remove_node(&mut self, id: &NodeId) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        let Some(index) = self.nodes.iter().position(|node| &node.id == id) else {
            return events;
        };

        // Attempted before the record leaves state; failure is tolerated.
        let _ = self.blobs.remove(id);

        self.nodes.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
            events.push(BoardEvent::SelectionChanged(None));
        }
        if self.editing.as_ref() == Some(id) {
            self.editing = None;
            events.push(BoardEvent::EditEnded(id.clone()));
        }
        events.push(BoardEvent::NodeRemoved(id.clone()));
        events
    }

    /// Snapshot of the board state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> BoardDebugInfo {
        BoardDebugInfo {
            transform: self.transform,
            viewport: self.viewport,
            node_count: self.nodes.len(),
            selected: self.selected.clone(),
            editing: self.editing.clone(),
            pointer_down: self.tracker.is_pointer_down(),
            pinching: self.tracker.is_pinching(),
            space_panning: self.space_panning,
        }
    }

    fn selected_node(&self) -> Option<&Node> {
        self.selected.as_ref().and_then(|id| self.node(id))
    }

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    fn take_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    /// Raises a node above everything else on the board.
    pub fn bring_to_front(&mut self, id: &NodeId) {
        let z = self.take_z();
        if let Some(node) = self.nodes.iter_mut().find(|node| &node.id == id) {
            node.z_index = z;
        }
    }

    fn move_node(&mut self, id: &NodeId, position: Point) -> bool {
        match self.nodes.iter_mut().find(|node| &node.id == id) {
            Some(node) if node.position != position => {
                node.position = position;
                true
            }
            _ => false,
        }
    }

    /// Applies a transform if it differs, keeping the pinch and pan engines
    /// in sync so later gestures continue from the real value.
    fn apply_transform(&mut self, next: BoardTransform, events: &mut Vec<BoardEvent>) -> bool {
        if next == self.transform {
            return false;
        }
        self.transform = next;
        self.pinch.set_scale(next.scale);
        if !self.pan.is_dragging() {
            self.pan.set_offset(next.pan());
        }
        events.push(BoardEvent::TransformChanged(next));
        true
    }

    /// Re-baselines any gesture held through a pinch zoom, so the move
    /// after the pinch ends continues from the rewritten transform instead
    /// of jumping.
    fn rebase_drags(&mut self, update: &PointerUpdate<BoardTarget>) {
        let Some(&primary) = update.touches.first() else {
            return;
        };
        self.pan.rebase(primary, self.transform.pan());
        if let Some(BoardTarget::Node(id)) = self.node_drag.target().cloned() {
            if let Some(position) = self.node(&id).map(|node| node.position) {
                self.node_drag
                    .rebase(self.transform.screen_to_world(primary), position.to_vec2());
            }
        }
    }

    /// The node drag engine works in board/world coordinates so node
    /// movement follows the cursor at any zoom; this maps the event
    /// position through the current transform.
    fn world_update(&self, update: &PointerUpdate<BoardTarget>) -> PointerUpdate<BoardTarget> {
        let mut world = update.clone();
        world.event.position = self.transform.screen_to_world(update.event.position);
        world
    }
}

/// Debug snapshot of a [`Board`] state.
#[derive(Clone, Debug)]
pub struct BoardDebugInfo {
    /// Current shared transform.
    pub transform: BoardTransform,
    /// Viewport size used for centering and keyboard zoom.
    pub viewport: Size,
    /// Number of nodes on the board.
    pub node_count: usize,
    /// Currently selected node.
    pub selected: Option<NodeId>,
    /// Node currently in edit mode.
    pub editing: Option<NodeId>,
    /// True while at least one pointer is down.
    pub pointer_down: bool,
    /// True while at least two pointers are down.
    pub pinching: bool,
    /// True while the space bar requests hold-to-pan.
    pub space_panning: bool,
}
