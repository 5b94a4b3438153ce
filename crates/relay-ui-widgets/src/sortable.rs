//! Pointer-driven sortable list.
//!
//! [`SortableList`] owns an ordered collection of [`SortableItem`]s and
//! runs the drag interaction as an explicit state machine:
//!
//! ```text
//! Idle --press on item--> Armed --threshold--> Dragging --release--> Idle
//!                           |                     |
//!                           +----release----------+---cancel---> Idle
//! ```
//!
//! A press arms a potential drag but changes nothing visible. Only once
//! the pointer moves past the movement threshold does the drag become
//! active: the original item is hidden in place, a [`Ghost`] snapshot
//! follows the pointer, and exclusive pointer capture is acquired from
//! the shared [`CaptureRegistry`]. Releasing commits the reorder (if
//! the pointer resolved to a new position) and emits events in a fixed
//! order; a cancel restores the list without reordering.
//!
//! Reorders are expressed as a [`Swap`] against the ordering that
//! existed when the drag started, which is what persistence layers
//! need to replay the move.

use relay_ui_core::{Axis, ItemId, Point, Rect};
use relay_ui_input::{
    CaptureRegistry, DragDetector, OwnerId, PointerButton, PointerCapture, PointerEvent,
    PointerEventKind,
};
use std::fmt;
use std::mem;
use tracing::{debug, warn};

use crate::event::{EventResult, SortEvent, SortEvents, Swap};
use crate::ghost::{Ghost, PrepareGhost};
use crate::hit::{self, DropSlot};
use crate::item::SortableItem;

type IdCallback = Box<dyn Fn(&ItemId) + Send + Sync>;
type SwapCallback = Box<dyn Fn(Swap) + Send + Sync>;
type ChangeCallback = Box<dyn Fn() + Send + Sync>;

/// A pressed item that has not yet crossed the movement threshold.
struct ArmedDrag {
    index: usize,
    id: ItemId,
    origin_rect: Rect,
    grab_offset: Point,
    detector: DragDetector,
}

/// An active drag. Holds the pointer capture guard, so dropping the
/// session releases capture automatically.
struct DragSession {
    index: usize,
    id: ItemId,
    origin_rect: Rect,
    grab_offset: Point,
    ghost: Ghost,
    placeholder: Option<Rect>,
    pending: Option<(DropSlot, usize)>,
    _capture: PointerCapture,
}

enum DragPhase {
    Idle,
    Armed(ArmedDrag),
    Dragging(Box<DragSession>),
}

/// An ordered, pointer-sortable collection of items.
///
/// Items are laid out sequentially along the list axis from `origin`,
/// separated by `gap`. Feed pointer events through [`handle_pointer`]
/// and react to the returned [`SortEvent`]s (or register callbacks on
/// the builder).
///
/// [`handle_pointer`]: SortableList::handle_pointer
pub struct SortableList {
    owner: OwnerId,
    origin: Point,
    axis: Axis,
    gap: u16,
    drag_threshold: u16,
    require_handle: bool,
    registry: CaptureRegistry,
    items: Vec<SortableItem>,
    phase: DragPhase,
    suppress_next_click: bool,
    prepare_ghost: Option<PrepareGhost>,
    on_drag_start: Option<IdCallback>,
    on_drag_stop: Option<IdCallback>,
    on_order_changed: Option<SwapCallback>,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for SortableList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortableList")
            .field("owner", &self.owner)
            .field("origin", &self.origin)
            .field("axis", &self.axis)
            .field("gap", &self.gap)
            .field("drag_threshold", &self.drag_threshold)
            .field("require_handle", &self.require_handle)
            .field("items", &self.items.len())
            .field("dragging", &self.is_dragging())
            .finish()
    }
}

impl SortableList {
    /// Creates a builder with default settings: vertical axis, origin
    /// at `(0, 0)`, no gap, whole-item drag surface.
    #[must_use]
    pub fn builder() -> SortableListBuilder {
        SortableListBuilder::new()
    }

    /// Appends an item and lays the list out again. An active drag is
    /// cancelled first, since its captured index would go stale.
    pub fn push_item(&mut self, item: SortableItem) {
        if !matches!(self.phase, DragPhase::Idle) {
            self.on_pointer_cancel();
        }
        self.items.push(item);
        self.relayout();
    }

    /// Inserts an item at `index`, shifting later items down. An
    /// active drag is cancelled first, since its captured index would
    /// go stale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`](relay_ui_core::Error::OutOfBounds)
    /// if `index > len`.
    pub fn insert_item(&mut self, index: usize, item: SortableItem) -> relay_ui_core::Result<()> {
        if index > self.items.len() {
            return Err(relay_ui_core::Error::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        if !matches!(self.phase, DragPhase::Idle) {
            self.on_pointer_cancel();
        }
        self.items.insert(index, item);
        self.relayout();
        Ok(())
    }

    /// Removes and returns the item at `index`. An active drag is
    /// cancelled first, since its indices would no longer be valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`](relay_ui_core::Error::OutOfBounds)
    /// if `index >= len`.
    pub fn remove_item(&mut self, index: usize) -> relay_ui_core::Result<SortableItem> {
        if index >= self.items.len() {
            return Err(relay_ui_core::Error::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        if !matches!(self.phase, DragPhase::Idle) {
            self.on_pointer_cancel();
        }
        let item = self.items.remove(index);
        self.relayout();
        Ok(item)
    }

    /// Number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in their current order.
    #[must_use]
    pub fn items(&self) -> &[SortableItem] {
        &self.items
    }

    /// Mutable access to the items, e.g. to edit their controls.
    pub fn items_mut(&mut self) -> &mut [SortableItem] {
        &mut self.items
    }

    /// Item ids in their current order. Reflects committed reorders
    /// immediately; an in-flight drag does not affect the result.
    #[must_use]
    pub fn get_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id().clone()).collect()
    }

    /// The list axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns true while a drag is active (threshold crossed, pointer
    /// not yet released).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Id of the item currently being dragged, if any.
    #[must_use]
    pub fn dragging_id(&self) -> Option<&ItemId> {
        match &self.phase {
            DragPhase::Dragging(session) => Some(&session.id),
            _ => None,
        }
    }

    /// The ghost following the pointer, while a drag is active.
    #[must_use]
    pub fn ghost(&self) -> Option<&Ghost> {
        match &self.phase {
            DragPhase::Dragging(session) => Some(&session.ghost),
            _ => None,
        }
    }

    /// The placeholder rectangle marking the pending drop position.
    ///
    /// `None` when no drag is active, when the pointer has not resolved
    /// to a candidate, or when the pending destination equals the
    /// origin. The placeholder therefore never sits where the hidden
    /// original already reserves space.
    #[must_use]
    pub fn placeholder(&self) -> Option<Rect> {
        match &self.phase {
            DragPhase::Dragging(session) => session.placeholder,
            _ => None,
        }
    }

    /// Feeds one pointer event through the drag state machine and
    /// returns the events it produced, in emission order. Registered
    /// callbacks fire as each event is produced.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> SortEvents {
        match event.kind {
            PointerEventKind::Down(PointerButton::Primary) => self.on_pointer_down(event.position),
            PointerEventKind::Move => self.on_pointer_move(event.position),
            PointerEventKind::Up(PointerButton::Primary) => self.on_pointer_up(),
            PointerEventKind::Cancel => self.on_pointer_cancel(),
            PointerEventKind::Down(_) | PointerEventKind::Up(_) => SortEvents::new(),
        }
    }

    /// Offers a click to the list. The release that ends a drag arms a
    /// one-shot suppression token; the click delivered for that release
    /// is consumed here so it does not activate whatever sits under the
    /// pointer. Any later click passes through untouched.
    pub fn handle_click(&mut self, _position: Point) -> EventResult {
        if self.suppress_next_click {
            self.suppress_next_click = false;
            EventResult::Handled
        } else {
            EventResult::Ignored
        }
    }

    fn on_pointer_down(&mut self, position: Point) -> SortEvents {
        if !matches!(self.phase, DragPhase::Idle) {
            return SortEvents::new();
        }
        let Some(index) = self
            .items
            .iter()
            .position(|item| item.hit_for_drag(position, self.require_handle))
        else {
            return SortEvents::new();
        };
        let origin_rect = self.items[index].bounds();
        let mut detector = DragDetector::new(self.drag_threshold);
        detector.press(position);
        self.phase = DragPhase::Armed(ArmedDrag {
            index,
            id: self.items[index].id().clone(),
            origin_rect,
            grab_offset: position - origin_rect.origin(),
            detector,
        });
        SortEvents::new()
    }

    fn on_pointer_move(&mut self, position: Point) -> SortEvents {
        let mut events = SortEvents::new();

        if let DragPhase::Armed(armed) = &mut self.phase {
            if !armed.detector.update(position) {
                return events;
            }
            let armed = match mem::replace(&mut self.phase, DragPhase::Idle) {
                DragPhase::Armed(armed) => armed,
                _ => unreachable!(),
            };
            let Some(capture) = self.registry.acquire(self.owner) else {
                debug!(item = %armed.id, "drag not started, pointer already captured");
                return events;
            };
            self.items[armed.index].set_hidden(true);
            let mut ghost = Ghost::capture(&self.items[armed.index]);
            if let Some(prepare) = &self.prepare_ghost {
                prepare(&mut ghost);
            }
            ghost.move_to(position, armed.grab_offset);
            let id = armed.id.clone();
            self.phase = DragPhase::Dragging(Box::new(DragSession {
                index: armed.index,
                id: armed.id,
                origin_rect: armed.origin_rect,
                grab_offset: armed.grab_offset,
                ghost,
                placeholder: None,
                pending: None,
                _capture: capture,
            }));
            let event = SortEvent::DragStart { id };
            self.emit(&event);
            events.push(event);
        }

        if matches!(self.phase, DragPhase::Dragging(_)) {
            self.update_drag(position);
        }
        events
    }

    /// Moves the ghost and recomputes the pending drop candidate and
    /// placeholder for the current pointer position.
    fn update_drag(&mut self, position: Point) {
        let (index, grab_offset, origin_size) = match &self.phase {
            DragPhase::Dragging(session) => (
                session.index,
                session.grab_offset,
                session.origin_rect.size(),
            ),
            _ => return,
        };

        let others: Vec<(usize, Rect)> = self
            .items
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(i, item)| (i, item.bounds()))
            .collect();
        let slot = hit::find_drop_slot(self.axis.pos_along(position), self.axis, &others);
        let pending = slot.map(|slot| (slot, hit::resolve_destination(index, slot)));
        let placeholder = match pending {
            Some((slot, dest)) if dest != index => Some(hit::placeholder_rect(
                slot,
                self.items[slot.index].bounds(),
                origin_size,
                self.axis,
                self.gap,
            )),
            _ => None,
        };

        if let DragPhase::Dragging(session) = &mut self.phase {
            session.ghost.move_to(position, grab_offset);
            session.pending = pending;
            session.placeholder = placeholder;
        }
    }

    fn on_pointer_up(&mut self) -> SortEvents {
        match mem::replace(&mut self.phase, DragPhase::Idle) {
            // A press that never crossed the threshold is a plain click.
            DragPhase::Idle | DragPhase::Armed(_) => SortEvents::new(),
            DragPhase::Dragging(session) => {
                let DragSession {
                    index, id, pending, ..
                } = *session;
                // Capture guard dropped above with the rest of the session.
                self.items[index].set_hidden(false);

                let mut events = SortEvents::new();
                let stop = SortEvent::DragStop { id: id.clone() };
                self.emit(&stop);
                events.push(stop);

                if let Some((_, dest)) = pending {
                    if dest != index {
                        self.apply_swap(index, dest);
                        let changed = SortEvent::OrderChanged {
                            swap: Swap {
                                from: index,
                                to: dest,
                            },
                        };
                        self.emit(&changed);
                        events.push(changed);
                    }
                }

                self.emit(&SortEvent::Changed);
                events.push(SortEvent::Changed);
                self.suppress_next_click = true;
                events
            }
        }
    }

    fn on_pointer_cancel(&mut self) -> SortEvents {
        match mem::replace(&mut self.phase, DragPhase::Idle) {
            DragPhase::Idle | DragPhase::Armed(_) => SortEvents::new(),
            DragPhase::Dragging(session) => {
                let DragSession { index, id, .. } = *session;
                self.items[index].set_hidden(false);
                warn!(item = %id, "drag cancelled before release");

                let mut events = SortEvents::new();
                let stop = SortEvent::DragStop { id };
                self.emit(&stop);
                events.push(stop);
                self.emit(&SortEvent::Changed);
                events.push(SortEvent::Changed);
                events
            }
        }
    }

    fn apply_swap(&mut self, from: usize, to: usize) {
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.relayout();
    }

    /// Repositions every item sequentially along the axis from the
    /// list origin, preserving each item's own size.
    fn relayout(&mut self) {
        let mut cursor = self.axis.pos_along(self.origin);
        let cross = self.axis.cross_of(self.origin);
        for item in &mut self.items {
            let bounds = Rect::from_point_size(self.axis.point_at(cursor, cross), item.size());
            item.set_bounds(bounds);
            cursor += i32::from(self.axis.extent_along(bounds)) + i32::from(self.gap);
        }
    }

    fn emit(&self, event: &SortEvent) {
        match event {
            SortEvent::DragStart { id } => {
                if let Some(callback) = &self.on_drag_start {
                    callback(id);
                }
            }
            SortEvent::DragStop { id } => {
                if let Some(callback) = &self.on_drag_stop {
                    callback(id);
                }
            }
            SortEvent::OrderChanged { swap } => {
                if let Some(callback) = &self.on_order_changed {
                    callback(*swap);
                }
            }
            SortEvent::Changed => {
                if let Some(callback) = &self.on_change {
                    callback();
                }
            }
        }
    }
}

/// Builder for [`SortableList`].
#[derive(Default)]
pub struct SortableListBuilder {
    origin: Point,
    horizontal: bool,
    gap: u16,
    drag_threshold: Option<u16>,
    require_handle: bool,
    registry: Option<CaptureRegistry>,
    prepare_ghost: Option<PrepareGhost>,
    on_drag_start: Option<IdCallback>,
    on_drag_stop: Option<IdCallback>,
    on_order_changed: Option<SwapCallback>,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for SortableListBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortableListBuilder")
            .field("origin", &self.origin)
            .field("horizontal", &self.horizontal)
            .field("gap", &self.gap)
            .field("drag_threshold", &self.drag_threshold)
            .field("require_handle", &self.require_handle)
            .finish_non_exhaustive()
    }
}

impl SortableListBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-left corner of the first item.
    #[must_use]
    pub fn origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Lays items out left-to-right instead of top-to-bottom.
    #[must_use]
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Spacing between adjacent items, in cells.
    #[must_use]
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Distance the pointer must travel from the press before a drag
    /// activates. Defaults to [`DragDetector::DEFAULT_THRESHOLD`].
    #[must_use]
    pub fn threshold(mut self, threshold: u16) -> Self {
        self.drag_threshold = Some(threshold);
        self
    }

    /// Restricts the drag surface to each item's handle. Items without
    /// a handle become undraggable.
    #[must_use]
    pub fn drag_handle(mut self, require: bool) -> Self {
        self.require_handle = require;
        self
    }

    /// Shares a capture registry with other lists so that only one of
    /// them can drag at a time. Each list gets its own registry when
    /// none is supplied.
    #[must_use]
    pub fn registry(mut self, registry: CaptureRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Hook invoked on the ghost snapshot right after capture, before
    /// it first follows the pointer.
    #[must_use]
    pub fn prepare_ghost(mut self, prepare: impl Fn(&mut Ghost) + Send + Sync + 'static) -> Self {
        self.prepare_ghost = Some(Box::new(prepare));
        self
    }

    /// Callback fired when a drag becomes active.
    #[must_use]
    pub fn on_drag_start(mut self, callback: impl Fn(&ItemId) + Send + Sync + 'static) -> Self {
        self.on_drag_start = Some(Box::new(callback));
        self
    }

    /// Callback fired when a drag ends, by release or cancellation.
    #[must_use]
    pub fn on_drag_stop(mut self, callback: impl Fn(&ItemId) + Send + Sync + 'static) -> Self {
        self.on_drag_stop = Some(Box::new(callback));
        self
    }

    /// Callback fired when a release commits a reorder.
    #[must_use]
    pub fn on_order_changed(mut self, callback: impl Fn(Swap) + Send + Sync + 'static) -> Self {
        self.on_order_changed = Some(Box::new(callback));
        self
    }

    /// Callback fired when any interaction finishes.
    #[must_use]
    pub fn on_change(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Builds the list.
    #[must_use]
    pub fn build(self) -> SortableList {
        SortableList {
            owner: OwnerId::new(),
            origin: self.origin,
            axis: if self.horizontal {
                Axis::Horizontal
            } else {
                Axis::Vertical
            },
            gap: self.gap,
            drag_threshold: self
                .drag_threshold
                .unwrap_or(DragDetector::DEFAULT_THRESHOLD),
            require_handle: self.require_handle,
            registry: self.registry.unwrap_or_default(),
            items: Vec::new(),
            phase: DragPhase::Idle,
            suppress_next_click: false,
            prepare_ghost: self.prepare_ghost,
            on_drag_start: self.on_drag_start,
            on_drag_stop: self.on_drag_stop,
            on_order_changed: self.on_order_changed,
            on_change: self.on_change,
        }
    }
}
