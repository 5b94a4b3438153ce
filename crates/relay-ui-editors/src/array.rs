//! Schema-driven editor for ordered arrays of record rows.
//!
//! Each row is an ordered map of field name to JSON value; a field
//! schema describes which control renders each field. Rows are
//! reorderable by drag like every other editor in this crate.

use indexmap::IndexMap;
use relay_ui_core::{ItemId, Size};
use relay_ui_input::PointerEvent;
use relay_ui_widgets::{
    BoxedControl, Checkbox, Select, SortEvent, SortEvents, SortableItem, SortableList, TextInput,
};
use std::fmt;

use crate::list_editor::{EditorError, ListEditor, ListItemSpec};

/// A record row: field name to JSON value, in schema order.
pub type Record = IndexMap<String, serde_json::Value>;

/// Which control renders a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text input.
    Text,
    /// Boolean checkbox.
    Checkbox,
    /// Single choice from a fixed option list.
    Select(Vec<String>),
}

/// One column of the record schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name, the key into each record.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Control kind.
    pub kind: FieldKind,
}

impl FieldDef {
    /// Creates a field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
        }
    }
}

struct RecordSpec;

impl ListItemSpec for RecordSpec {
    type Item = Record;

    fn is_empty(item: &Record) -> bool {
        item.values().all(|value| match value {
            serde_json::Value::Null => true,
            serde_json::Value::String(text) => text.is_empty(),
            serde_json::Value::Bool(checked) => !checked,
            _ => false,
        })
    }

    fn create_empty() -> Record {
        Record::new()
    }

    fn set_field(item: &mut Record, field: &str, value: &serde_json::Value) {
        item.insert(field.to_owned(), value.clone());
    }
}

const ROW_SIZE: Size = Size::new(60, 3);

/// Editor for an ordered array of records shaped by a field schema.
pub struct ArrayEditor {
    schema: Vec<FieldDef>,
    editor: ListEditor<RecordSpec>,
    list: SortableList,
    next_row: u64,
}

impl fmt::Debug for ArrayEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayEditor")
            .field("schema", &self.schema)
            .field("rows", &self.editor.len())
            .finish_non_exhaustive()
    }
}

impl ArrayEditor {
    /// Creates an editor for the given schema, with a trailing entry
    /// row.
    #[must_use]
    pub fn new(schema: Vec<FieldDef>) -> Self {
        let mut this = Self {
            schema,
            editor: ListEditor::new().with_maintain_empty_item(true),
            list: SortableList::builder().gap(1).build(),
            next_row: 0,
        };
        this.rebuild_rows();
        this
    }

    /// The schema the rows are shaped by.
    #[must_use]
    pub fn schema(&self) -> &[FieldDef] {
        &self.schema
    }

    /// The display rows, including the trailing entry row.
    #[must_use]
    pub fn rows(&self) -> &[Record] {
        self.editor.items()
    }

    /// The cleaned records: every row with at least one meaningful
    /// value.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.editor.cleaned()
    }

    /// The sortable list hosting the rows.
    #[must_use]
    pub fn list(&self) -> &SortableList {
        &self.list
    }

    /// Appends a record in front of the entry row.
    ///
    /// # Errors
    ///
    /// Propagates bound violations from the underlying editor.
    pub fn add_record(&mut self, record: Record) -> Result<(), EditorError> {
        self.editor.add_item(record)?;
        self.rebuild_rows();
        Ok(())
    }

    /// Removes the row at `index`.
    ///
    /// # Errors
    ///
    /// Propagates bound violations from the underlying editor.
    pub fn remove_record(&mut self, index: usize) -> Result<Record, EditorError> {
        let record = self.editor.remove_item(index)?;
        self.rebuild_rows();
        Ok(record)
    }

    /// Applies one field edit to the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OutOfBounds`] for a bad index.
    pub fn set_field(
        &mut self,
        index: usize,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), EditorError> {
        self.editor.handle_field_change(index, field, &value)?;
        // Promotion of the entry row changes the row count.
        self.rebuild_rows();
        Ok(())
    }

    /// Feeds a pointer event through the sortable list and mirrors any
    /// committed swap into the record array.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> SortEvents {
        let events = self.list.handle_pointer(event);
        for event in &events {
            if let SortEvent::OrderChanged { swap } = event {
                let _ = self.editor.move_item(swap.from, swap.to);
            }
        }
        // Moving a row past the entry row spawns a fresh entry row.
        if self.editor.len() != self.list.len() {
            self.rebuild_rows();
        }
        events
    }

    fn control_for(def: &FieldDef, record: &Record) -> BoxedControl {
        let value = record.get(&def.name);
        match &def.kind {
            FieldKind::Text => Box::new(
                TextInput::builder()
                    .name(&def.name)
                    .value(value.and_then(serde_json::Value::as_str).unwrap_or_default())
                    .placeholder(&def.label)
                    .build(),
            ),
            FieldKind::Checkbox => {
                let mut checkbox = Checkbox::new(&def.name, &def.label);
                checkbox.set_checked(value.and_then(serde_json::Value::as_bool).unwrap_or(false));
                Box::new(checkbox)
            }
            FieldKind::Select(options) => {
                let mut select = Select::new(&def.name, options.clone());
                if let Some(choice) = value.and_then(serde_json::Value::as_str) {
                    select.select_value(choice);
                }
                Box::new(select)
            }
        }
    }

    fn rebuild_rows(&mut self) {
        while !self.list.is_empty() {
            let last = self.list.len() - 1;
            let _ = self.list.remove_item(last);
        }
        let records: Vec<Record> = self.editor.items().to_vec();
        for record in records {
            let id = ItemId::from(format!("row-{}", self.next_row));
            self.next_row += 1;
            let mut item = SortableItem::new(id, ROW_SIZE);
            for def in &self.schema {
                item = item.with_control(Self::control_for(def, &record));
            }
            self.list.push_item(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use relay_ui_widgets::ControlValue;
    use serde_json::json;

    fn contact_schema() -> Vec<FieldDef> {
        vec![
            FieldDef::new("name", "Name", FieldKind::Text),
            FieldDef::new("vip", "VIP", FieldKind::Checkbox),
            FieldDef::new(
                "channel",
                "Channel",
                FieldKind::Select(vec!["email".into(), "sms".into()]),
            ),
        ]
    }

    fn record(name: &str, vip: bool, channel: &str) -> Record {
        let mut record = Record::new();
        record.insert("name".into(), json!(name));
        record.insert("vip".into(), json!(vip));
        record.insert("channel".into(), json!(channel));
        record
    }

    #[test]
    fn test_empty_record_detection() {
        assert!(RecordSpec::is_empty(&Record::new()));
        let mut blank = Record::new();
        blank.insert("name".into(), json!(""));
        blank.insert("vip".into(), json!(false));
        blank.insert("channel".into(), serde_json::Value::Null);
        assert!(RecordSpec::is_empty(&blank));
        assert!(!RecordSpec::is_empty(&record("Ada", false, "email")));
    }

    #[test]
    fn test_rows_render_schema_controls() {
        let mut editor = ArrayEditor::new(contact_schema());
        editor.add_record(record("Ada", true, "sms")).unwrap();

        let controls = editor.list().items()[0].controls();
        assert_eq!(controls.len(), 3);
        assert_eq!(
            controls[0].value(),
            Some(ControlValue::Text("Ada".into()))
        );
        assert_eq!(controls[1].value(), Some(ControlValue::Checked(true)));
        assert_eq!(
            controls[2].value(),
            Some(ControlValue::Choice("sms".into()))
        );
    }

    #[test]
    fn test_set_field_promotes_the_entry_row() {
        let mut editor = ArrayEditor::new(contact_schema());
        editor.set_field(0, "name", json!("Grace")).unwrap();
        assert_eq!(editor.records().len(), 1);
        assert_eq!(editor.rows().len(), 2);
    }

    #[test]
    fn test_drag_reorder_mirrors_into_records() {
        let mut editor = ArrayEditor::new(contact_schema());
        editor.add_record(record("Ada", false, "email")).unwrap();
        editor.add_record(record("Grace", true, "sms")).unwrap();

        // Rows 3 tall with gap 1: row 0 at y 0..3, row 1 at y 4..7.
        editor.handle_pointer(&PointerEvent::down(2, 1));
        editor.handle_pointer(&PointerEvent::moved(2, 6));
        editor.handle_pointer(&PointerEvent::up(2, 6));

        let records = editor.records();
        let names: Vec<&str> = records
            .iter()
            .map(|record| record["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Grace", "Ada"]);
    }
}
