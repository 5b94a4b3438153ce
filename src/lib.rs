//! Relay UI: component toolkit for the Relay messaging console.
//!
//! This crate bundles the member crates of the toolkit:
//! - Pointer-driven sortable drag-and-drop lists
//! - Generic list editors (key/value rows, schema-driven array rows)
//! - A featured-fields manager with priority persistence
//! - Value-bearing form controls with live-value ghost cloning
//!
//! # Example
//!
//! ```
//! use relay_ui::prelude::*;
//!
//! let mut list = SortableList::builder()
//!     .horizontal(true)
//!     .build();
//! list.push_item(SortableItem::new("red", Size::new(10, 4)));
//! list.push_item(SortableItem::new("blue", Size::new(10, 4)));
//! list.push_item(SortableItem::new("green", Size::new(10, 4)));
//!
//! // Drag "red" past the center of "blue".
//! list.handle_pointer(&PointerEvent::down(2, 1));
//! list.handle_pointer(&PointerEvent::moved(17, 1));
//! let events = list.handle_pointer(&PointerEvent::up(17, 1));
//! assert!(events.iter().any(|e| matches!(e, SortEvent::OrderChanged { .. })));
//! ```

pub use relay_ui_core as core;
pub use relay_ui_editors as editors;
pub use relay_ui_input as input;
pub use relay_ui_widgets as widgets;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use relay_ui_core::{Axis, ItemId, Point, Rect, Size};
    pub use relay_ui_editors::{
        ArrayEditor, Field, FieldManager, KeyValueEditor, KeyValuePair, ListEditor, PriorityClient,
    };
    pub use relay_ui_input::{
        CaptureRegistry, DragDetector, PointerButton, PointerEvent, PointerEventKind,
    };
    pub use relay_ui_widgets::{
        Checkbox, Control, ControlValue, Ghost, Select, SortEvent, SortableItem, SortableList,
        Swap, TextInput,
    };
}
