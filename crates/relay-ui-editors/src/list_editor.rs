//! Generic ordered-list data model shared by the concrete editors.
//!
//! [`ListEditor`] owns the display array and the "add new" UX around
//! it: when `maintain_empty_item` is on, a trailing empty row is kept
//! visible for inline entry, but that row is a display artifact only.
//! Every mutation reports the *cleaned* array (fully-empty rows
//! stripped) through the change callback, so consumers never see the
//! UI-only empty row in their data.

use std::fmt;
use thiserror::Error;

/// Per-editor item behaviour supplied by each concrete editor.
pub trait ListItemSpec {
    /// The row record type.
    type Item: Clone + Send + 'static;

    /// Whether the row counts as empty (stripped from the cleaned
    /// array, eligible to serve as the trailing entry row).
    fn is_empty(item: &Self::Item) -> bool;

    /// A fresh empty row.
    fn create_empty() -> Self::Item;

    /// Applies one field edit to a row. Unknown fields are ignored.
    fn set_field(item: &mut Self::Item, field: &str, value: &serde_json::Value);
}

/// Errors from list mutations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Removal refused: the list already holds its minimum.
    #[error("cannot remove row {index}: the list holds its minimum of {min} rows")]
    MinItems {
        /// Index whose removal was refused.
        index: usize,
        /// The configured minimum.
        min: usize,
    },
    /// Addition refused: the list already holds its maximum.
    #[error("cannot add a row: the list holds its maximum of {max} rows")]
    MaxItems {
        /// The configured maximum.
        max: usize,
    },
    /// Index does not name a row.
    #[error("row index {index} out of bounds for {len} rows")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Current display length.
        len: usize,
    },
    /// The maintained trailing empty row cannot be removed.
    #[error("the trailing entry row cannot be removed")]
    EntryRowPinned,
}

type ChangeCallback<T> = Box<dyn Fn(&[T]) + Send + Sync>;

/// Ordered collection of rows with optional trailing entry row and
/// min/max bounds. See the module docs for the cleaned-array contract.
pub struct ListEditor<S: ListItemSpec> {
    items: Vec<S::Item>,
    min_items: usize,
    max_items: Option<usize>,
    maintain_empty_item: bool,
    on_change: Option<ChangeCallback<S::Item>>,
}

impl<S: ListItemSpec> fmt::Debug for ListEditor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListEditor")
            .field("rows", &self.items.len())
            .field("min_items", &self.min_items)
            .field("max_items", &self.max_items)
            .field("maintain_empty_item", &self.maintain_empty_item)
            .finish_non_exhaustive()
    }
}

impl<S: ListItemSpec> Default for ListEditor<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ListItemSpec> ListEditor<S> {
    /// Creates an empty editor with no bounds and no entry row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            min_items: 0,
            max_items: None,
            maintain_empty_item: false,
            on_change: None,
        }
    }

    /// Refuses removals that would leave fewer than `min` real rows.
    #[must_use]
    pub fn with_min_items(mut self, min: usize) -> Self {
        self.min_items = min;
        self
    }

    /// Refuses additions past `max` real rows. The maintained entry
    /// row does not count against the bound.
    #[must_use]
    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Keeps a trailing empty row visible for inline entry.
    #[must_use]
    pub fn with_maintain_empty_item(mut self, maintain: bool) -> Self {
        self.maintain_empty_item = maintain;
        if maintain {
            self.ensure_entry_row();
        }
        self
    }

    /// Callback invoked with the cleaned array after every mutation.
    #[must_use]
    pub fn with_on_change(mut self, callback: impl Fn(&[S::Item]) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// The display array, including any trailing entry row.
    #[must_use]
    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    /// Number of display rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no rows are displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cleaned array: every row that is not fully empty, in order.
    #[must_use]
    pub fn cleaned(&self) -> Vec<S::Item> {
        self.items
            .iter()
            .filter(|item| !S::is_empty(item))
            .cloned()
            .collect()
    }

    fn real_len(&self) -> usize {
        self.items.iter().filter(|item| !S::is_empty(item)).count()
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::MaxItems`] when the list already holds
    /// its maximum of non-empty rows.
    pub fn add_item(&mut self, item: S::Item) -> Result<(), EditorError> {
        if let Some(max) = self.max_items {
            if !S::is_empty(&item) && self.real_len() >= max {
                return Err(EditorError::MaxItems { max });
            }
        }
        // New rows go in front of the entry row, never behind it.
        let at = if self.maintain_empty_item && !self.items.is_empty() {
            self.items.len() - 1
        } else {
            self.items.len()
        };
        self.items.insert(at, item);
        self.after_mutation();
        Ok(())
    }

    /// Removes the row at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfBounds`] for a bad index,
    /// [`EditorError::EntryRowPinned`] for the maintained entry row,
    /// and [`EditorError::MinItems`] when removal would drop the list
    /// below its minimum of non-empty rows.
    pub fn remove_item(&mut self, index: usize) -> Result<S::Item, EditorError> {
        if index >= self.items.len() {
            return Err(EditorError::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        let is_entry_row = self.maintain_empty_item
            && index == self.items.len() - 1
            && S::is_empty(&self.items[index]);
        if is_entry_row {
            return Err(EditorError::EntryRowPinned);
        }
        if !S::is_empty(&self.items[index]) && self.real_len() <= self.min_items {
            return Err(EditorError::MinItems {
                index,
                min: self.min_items,
            });
        }
        let item = self.items.remove(index);
        self.after_mutation();
        Ok(item)
    }

    /// Applies one field edit to the row at `index`. Typing into the
    /// entry row promotes it to a real row and spawns a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfBounds`] for a bad index.
    pub fn handle_field_change(
        &mut self,
        index: usize,
        field: &str,
        value: &serde_json::Value,
    ) -> Result<(), EditorError> {
        let Some(item) = self.items.get_mut(index) else {
            return Err(EditorError::OutOfBounds {
                index,
                len: self.items.len(),
            });
        };
        S::set_field(item, field, value);
        self.after_mutation();
        Ok(())
    }

    /// Moves the row at `from` to position `to`, as reported by a
    /// sortable list's committed swap.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfBounds`] when either index is out
    /// of range.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), EditorError> {
        let len = self.items.len();
        if from >= len {
            return Err(EditorError::OutOfBounds { index: from, len });
        }
        if to >= len {
            return Err(EditorError::OutOfBounds { index: to, len });
        }
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
            self.after_mutation();
        }
        Ok(())
    }

    fn ensure_entry_row(&mut self) {
        let needs_row = match self.items.last() {
            Some(last) => !S::is_empty(last),
            None => true,
        };
        if needs_row {
            self.items.push(S::create_empty());
        }
    }

    fn after_mutation(&mut self) {
        if self.maintain_empty_item {
            self.ensure_entry_row();
        }
        if let Some(callback) = &self.on_change {
            callback(&self.cleaned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    struct NoteSpec;

    impl ListItemSpec for NoteSpec {
        type Item = String;

        fn is_empty(item: &String) -> bool {
            item.is_empty()
        }

        fn create_empty() -> String {
            String::new()
        }

        fn set_field(item: &mut String, field: &str, value: &serde_json::Value) {
            if field == "text" {
                *item = value.as_str().unwrap_or_default().to_owned();
            }
        }
    }

    #[test]
    fn test_entry_row_appears_and_respawns() {
        let mut editor = ListEditor::<NoteSpec>::new().with_maintain_empty_item(true);
        assert_eq!(editor.items(), &[String::new()]);

        editor
            .handle_field_change(0, "text", &serde_json::json!("milk"))
            .unwrap();
        assert_eq!(editor.items(), &["milk".to_owned(), String::new()]);
        assert_eq!(editor.cleaned(), vec!["milk".to_owned()]);
    }

    #[test]
    fn test_entry_row_cannot_be_removed() {
        let mut editor = ListEditor::<NoteSpec>::new().with_maintain_empty_item(true);
        assert!(matches!(
            editor.remove_item(0),
            Err(EditorError::EntryRowPinned)
        ));
    }

    #[test]
    fn test_min_items_guard() {
        let mut editor = ListEditor::<NoteSpec>::new().with_min_items(1);
        editor.add_item("a".into()).unwrap();
        assert!(matches!(
            editor.remove_item(0),
            Err(EditorError::MinItems { index: 0, min: 1 })
        ));
    }

    #[test]
    fn test_max_items_guard_ignores_entry_row() {
        let mut editor = ListEditor::<NoteSpec>::new()
            .with_max_items(2)
            .with_maintain_empty_item(true);
        editor.add_item("a".into()).unwrap();
        editor.add_item("b".into()).unwrap();
        assert!(matches!(
            editor.add_item("c".into()),
            Err(EditorError::MaxItems { max: 2 })
        ));
        // Two real rows plus the entry row are displayed.
        assert_eq!(editor.len(), 3);
    }

    #[test]
    fn test_change_reports_cleaned_array() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        let mut editor = ListEditor::<NoteSpec>::new()
            .with_maintain_empty_item(true)
            .with_on_change(move |items| log.lock().unwrap().push(items.to_vec()));

        editor.add_item("bread".into()).unwrap();
        let last = seen.lock().unwrap().last().cloned().unwrap();
        assert_eq!(last, vec!["bread".to_owned()]);
    }

    #[test]
    fn test_interior_empty_rows_are_stripped() {
        let mut editor = ListEditor::<NoteSpec>::new();
        editor.add_item("a".into()).unwrap();
        editor.add_item(String::new()).unwrap();
        editor.add_item("b".into()).unwrap();
        assert_eq!(editor.cleaned(), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn test_move_item_reorders() {
        let mut editor = ListEditor::<NoteSpec>::new();
        for text in ["a", "b", "c"] {
            editor.add_item(text.into()).unwrap();
        }
        editor.move_item(0, 2).unwrap();
        assert_eq!(
            editor.items(),
            &["b".to_owned(), "c".to_owned(), "a".to_owned()]
        );
        assert!(matches!(
            editor.move_item(5, 0),
            Err(EditorError::OutOfBounds { index: 5, len: 3 })
        ));
    }
}
