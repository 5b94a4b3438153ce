//! Events emitted by the sortable drag engine.

use relay_ui_core::ItemId;
use smallvec::SmallVec;

/// An index pair describing a committed reorder: the item originally at
/// `from` now sits at `to`. Both indices refer to the ordering that
/// existed before the drag, so the pair is always a valid permutation
/// of that ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    /// The dragged item's original index.
    pub from: usize,
    /// The resolved destination index.
    pub to: usize,
}

/// High-level events produced by a [`SortableList`](crate::SortableList).
///
/// Within one interaction the order is fixed: `DragStart` once the
/// movement threshold is crossed, then on release `DragStop`, then
/// `OrderChanged` only if the destination differs from the origin, then
/// `Changed` unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortEvent {
    /// A drag crossed the movement threshold and became active.
    DragStart {
        /// Id of the dragged item.
        id: ItemId,
    },
    /// The interaction ended (release or cancellation).
    DragStop {
        /// Id of the dragged item.
        id: ItemId,
    },
    /// The drop resolved to a new position.
    OrderChanged {
        /// The committed index pair.
        swap: Swap,
    },
    /// The interaction finished, whether or not order changed.
    Changed,
}

/// The batch of events produced by one pointer event.
pub type SortEvents = SmallVec<[SortEvent; 3]>;

/// Result of offering an event to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was consumed and should not propagate further.
    Handled,
    /// Event was not consumed.
    Ignored,
}

impl EventResult {
    /// Returns true if the event was consumed.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }

    /// Returns true if the event was not consumed.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}
