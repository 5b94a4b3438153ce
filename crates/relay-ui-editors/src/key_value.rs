//! Editable, reorderable rows of key/value string pairs.

use relay_ui_core::{ItemId, Size};
use relay_ui_input::PointerEvent;
use relay_ui_widgets::{Control, SortEvent, SortEvents, SortableItem, SortableList, TextInput};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::list_editor::{EditorError, ListEditor, ListItemSpec};

/// One key/value row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    /// The key field.
    pub key: String,
    /// The value field.
    pub value: String,
}

impl KeyValuePair {
    /// Creates a pair from its two fields.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

struct PairSpec;

impl ListItemSpec for PairSpec {
    type Item = KeyValuePair;

    fn is_empty(item: &KeyValuePair) -> bool {
        item.key.is_empty() && item.value.is_empty()
    }

    fn create_empty() -> KeyValuePair {
        KeyValuePair::default()
    }

    fn set_field(item: &mut KeyValuePair, field: &str, value: &serde_json::Value) {
        let text = value.as_str().unwrap_or_default();
        match field {
            "key" => item.key = text.to_owned(),
            "value" => item.value = text.to_owned(),
            _ => {}
        }
    }
}

const ROW_SIZE: Size = Size::new(48, 3);

/// A list of key/value rows backed by a [`ListEditor`] for data and a
/// [`SortableList`] for drag reordering.
///
/// Each row gets a generated stable id (`row-0`, `row-1`, ...) that
/// survives reorders, so committed swaps can be mirrored from the
/// sortable list back into the data array without re-identifying rows
/// by content.
pub struct KeyValueEditor {
    editor: ListEditor<PairSpec>,
    list: SortableList,
    next_row: u64,
}

impl fmt::Debug for KeyValueEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyValueEditor")
            .field("rows", &self.editor.len())
            .finish_non_exhaustive()
    }
}

impl Default for KeyValueEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueEditor {
    /// Creates an empty editor with a trailing entry row.
    #[must_use]
    pub fn new() -> Self {
        let mut this = Self {
            editor: ListEditor::new().with_maintain_empty_item(true),
            list: SortableList::builder().gap(1).build(),
            next_row: 0,
        };
        this.rebuild_rows();
        this
    }

    /// The display rows, including the trailing entry row.
    #[must_use]
    pub fn rows(&self) -> &[KeyValuePair] {
        self.editor.items()
    }

    /// The cleaned pairs: every row with at least one non-empty field.
    #[must_use]
    pub fn pairs(&self) -> Vec<KeyValuePair> {
        self.editor.cleaned()
    }

    /// The sortable list hosting the rows.
    #[must_use]
    pub fn list(&self) -> &SortableList {
        &self.list
    }

    /// Appends a row in front of the entry row.
    ///
    /// # Errors
    ///
    /// Propagates bound violations from the underlying editor.
    pub fn add_pair(&mut self, pair: KeyValuePair) -> Result<(), EditorError> {
        self.editor.add_item(pair)?;
        self.rebuild_rows();
        Ok(())
    }

    /// Removes the row at `index`.
    ///
    /// # Errors
    ///
    /// Propagates bound violations from the underlying editor.
    pub fn remove_pair(&mut self, index: usize) -> Result<KeyValuePair, EditorError> {
        let pair = self.editor.remove_item(index)?;
        self.rebuild_rows();
        Ok(pair)
    }

    /// Applies an edit to one field of the row at `index`. Editing the
    /// entry row promotes it and spawns a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfBounds`] for a bad index.
    pub fn set_field(&mut self, index: usize, field: &str, text: &str) -> Result<(), EditorError> {
        let before = self.editor.len();
        self.editor
            .handle_field_change(index, field, &serde_json::Value::String(text.to_owned()))?;
        if self.editor.len() != before {
            self.rebuild_rows();
        } else {
            self.sync_controls(index);
        }
        Ok(())
    }

    /// Feeds a pointer event through the sortable list and mirrors any
    /// committed swap into the data array.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> SortEvents {
        let events = self.list.handle_pointer(event);
        for event in &events {
            if let SortEvent::OrderChanged { swap } = event {
                // The list already reordered itself; mirror the data.
                let _ = self.editor.move_item(swap.from, swap.to);
            }
        }
        // Moving a row past the entry row spawns a fresh entry row.
        if self.editor.len() != self.list.len() {
            self.rebuild_rows();
        }
        events
    }

    /// Rebuilds the sortable rows from the data array, assigning fresh
    /// stable ids.
    fn rebuild_rows(&mut self) {
        while !self.list.is_empty() {
            let last = self.list.len() - 1;
            let _ = self.list.remove_item(last);
        }
        let pairs: Vec<KeyValuePair> = self.editor.items().to_vec();
        for pair in pairs {
            let id = ItemId::from(format!("row-{}", self.next_row));
            self.next_row += 1;
            self.list.push_item(
                SortableItem::new(id, ROW_SIZE)
                    .with_control(Box::new(
                        TextInput::builder().name("key").value(&pair.key).build(),
                    ))
                    .with_control(Box::new(
                        TextInput::builder().name("value").value(&pair.value).build(),
                    )),
            );
        }
    }

    /// Pushes one row's data into its controls, keeping the ghost's
    /// live-value capture faithful to the latest edit.
    fn sync_controls(&mut self, index: usize) {
        let Some(pair) = self.editor.items().get(index).cloned() else {
            return;
        };
        let Some(item) = self.list.items_mut().get_mut(index) else {
            return;
        };
        for control in item.controls_mut() {
            if let Some(input) = control.as_any_mut().downcast_mut::<TextInput>() {
                match input.name() {
                    "key" => input.set_value(&pair.key),
                    "value" => input.set_value(&pair.value),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_editor_shows_only_the_entry_row() {
        let editor = KeyValueEditor::new();
        assert_eq!(editor.rows(), &[KeyValuePair::default()]);
        assert!(editor.pairs().is_empty());
        assert_eq!(editor.list().len(), 1);
    }

    #[test]
    fn test_typing_into_the_entry_row_spawns_a_new_one() {
        let mut editor = KeyValueEditor::new();
        editor.set_field(0, "key", "city").unwrap();
        editor.set_field(0, "value", "Lisbon").unwrap();
        assert_eq!(editor.pairs(), vec![KeyValuePair::new("city", "Lisbon")]);
        assert_eq!(editor.rows().len(), 2);
        assert_eq!(editor.list().len(), 2);
    }

    #[test]
    fn test_drag_reorder_mirrors_into_pairs() {
        let mut editor = KeyValueEditor::new();
        editor.add_pair(KeyValuePair::new("a", "1")).unwrap();
        editor.add_pair(KeyValuePair::new("b", "2")).unwrap();

        // Rows are 3 tall with gap 1: row 0 at y 0..3, row 1 at y 4..7.
        let events = [
            PointerEvent::down(2, 1),
            PointerEvent::moved(2, 6),
            PointerEvent::up(2, 6),
        ];
        let mut seen = Vec::new();
        for event in &events {
            seen.extend(editor.handle_pointer(event));
        }

        assert!(seen
            .iter()
            .any(|event| matches!(event, SortEvent::OrderChanged { .. })));
        assert_eq!(
            editor.pairs(),
            vec![KeyValuePair::new("b", "2"), KeyValuePair::new("a", "1")]
        );
    }

    #[test]
    fn test_controls_track_field_edits() {
        let mut editor = KeyValueEditor::new();
        editor.add_pair(KeyValuePair::new("tag", "old")).unwrap();
        editor.set_field(0, "value", "new").unwrap();
        let value = editor.list().items()[0].controls()[1].value().unwrap();
        assert_eq!(value.to_string(), "new");
    }
}
