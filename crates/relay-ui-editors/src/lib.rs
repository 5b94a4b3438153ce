//! List editors for the Relay console.
//!
//! Builds on [`relay_ui_widgets`]'s sortable list to provide the
//! data-owning side of list editing: a generic add/remove/entry-row
//! model ([`ListEditor`]), concrete editors for key/value rows
//! ([`KeyValueEditor`]) and schema-driven record rows ([`ArrayEditor`]),
//! and the featured-fields panel ([`FieldManager`]) that persists its
//! priority order over HTTP.
//!
//! The division of labour is strict: the sortable list only reports
//! index swaps, and each editor here mirrors those swaps into the data
//! it owns.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod array;
pub mod fields;
pub mod key_value;
pub mod list_editor;

pub use array::{ArrayEditor, FieldDef, FieldKind, Record};
pub use fields::{Field, FieldManager, PersistError, PriorityClient};
pub use key_value::{KeyValueEditor, KeyValuePair};
pub use list_editor::{EditorError, ListEditor, ListItemSpec};
