//! Widgets for the Relay console UI.
//!
//! The centerpiece is [`SortableList`], a pointer-driven drag-and-drop
//! reordering engine. Items are opaque handles ([`SortableItem`]) that
//! expose bounds, an id, and optional form [`controls`]; while an item
//! is dragged a [`Ghost`] snapshot of it follows the pointer and the
//! original stays hidden in place, so a committed drop is a pure index
//! [`Swap`] over the pre-drag ordering.
//!
//! ```
//! use relay_ui_core::Size;
//! use relay_ui_input::PointerEvent;
//! use relay_ui_widgets::{SortEvent, SortableItem, SortableList};
//!
//! let mut list = SortableList::builder().horizontal(true).build();
//! list.push_item(SortableItem::new("red", Size::new(10, 4)));
//! list.push_item(SortableItem::new("blue", Size::new(10, 4)));
//!
//! list.handle_pointer(&PointerEvent::down(2, 1));
//! let events = list.handle_pointer(&PointerEvent::moved(16, 1));
//! assert!(matches!(events[0], SortEvent::DragStart { .. }));
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod controls;
pub mod event;
pub mod ghost;
pub mod hit;
pub mod item;
pub mod sortable;

pub use controls::{BoxedControl, Checkbox, Control, ControlValue, Select, TextInput};
pub use event::{EventResult, SortEvent, SortEvents, Swap};
pub use ghost::{Ghost, PrepareGhost};
pub use hit::DropSlot;
pub use item::SortableItem;
pub use sortable::{SortableList, SortableListBuilder};
