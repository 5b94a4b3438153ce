//! Value-bearing form controls.
//!
//! These are the controls that can live inside sortable list items:
//! a single-line text input, a checkbox, and a select. Each control
//! exposes its live value as a [`ControlValue`] snapshot so that ghost
//! cloning can carry in-progress edits, and accepts a snapshot back
//! when a clone is materialized.

use std::any::Any;
use std::fmt;

/// A snapshot of one control's live value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    /// Text content of an input.
    Text(String),
    /// Checked state of a checkbox.
    Checked(bool),
    /// The selected option of a select control.
    Choice(String),
}

impl fmt::Display for ControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlValue::Text(s) => f.write_str(s),
            ControlValue::Checked(b) => write!(f, "{b}"),
            ControlValue::Choice(s) => f.write_str(s),
        }
    }
}

/// A form control that can snapshot and restore its live value.
///
/// Controls are identified within an item by `name` (the field they
/// edit). `value` may return `None` for controls that cannot produce a
/// snapshot; ghost cloning skips those rather than failing.
pub trait Control: Any + Send {
    /// Returns the field name this control edits.
    fn name(&self) -> &str;

    /// Returns a snapshot of the current live value, if one exists.
    fn value(&self) -> Option<ControlValue>;

    /// Applies a snapshot to this control.
    ///
    /// Returns false if the snapshot kind does not match the control
    /// (for example a `Checked` value offered to a text input).
    fn apply(&mut self, value: &ControlValue) -> bool;

    /// Casts this control to `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Casts this control to `Any` for mutable downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A boxed control.
pub type BoxedControl = Box<dyn Control>;

/// A single-line text input control.
///
/// # Example
///
/// ```
/// use relay_ui_widgets::TextInput;
///
/// let mut input = TextInput::builder()
///     .name("label")
///     .placeholder("Field label")
///     .build();
/// input.set_value("Deal size");
/// assert_eq!(input.value_str(), "Deal size");
/// ```
pub struct TextInput {
    name: String,
    value: String,
    placeholder: String,
    disabled: bool,
    max_length: usize,
    on_change: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .field("disabled", &self.disabled)
            .field("max_length", &self.max_length)
            .field("on_change", &self.on_change.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl TextInput {
    /// Creates a new empty text input.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            placeholder: String::new(),
            disabled: false,
            max_length: 0,
            on_change: None,
        }
    }

    /// Creates a builder for constructing a text input.
    #[must_use]
    pub fn builder() -> TextInputBuilder {
        TextInputBuilder::default()
    }

    /// Returns the current text value.
    #[inline]
    pub fn value_str(&self) -> &str {
        &self.value
    }

    /// Sets the text value without firing the change callback.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.truncate_to_max();
    }

    /// Appends typed text, honoring `max_length`, and fires the change
    /// callback. Ignored while disabled.
    pub fn type_str(&mut self, text: &str) {
        if self.disabled {
            return;
        }
        self.value.push_str(text);
        self.truncate_to_max();
        if let Some(ref callback) = self.on_change {
            callback(&self.value);
        }
    }

    /// Returns the placeholder text.
    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns true if the input is disabled.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Sets the disabled state.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn truncate_to_max(&mut self) {
        if self.max_length > 0 && self.value.chars().count() > self.max_length {
            self.value = self.value.chars().take(self.max_length).collect();
        }
    }
}

impl Control for TextInput {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Option<ControlValue> {
        Some(ControlValue::Text(self.value.clone()))
    }

    fn apply(&mut self, value: &ControlValue) -> bool {
        match value {
            ControlValue::Text(s) => {
                self.set_value(s.clone());
                true
            }
            _ => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Builder for [`TextInput`].
#[derive(Default)]
pub struct TextInputBuilder {
    name: String,
    value: String,
    placeholder: String,
    disabled: bool,
    max_length: usize,
    on_change: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

impl TextInputBuilder {
    /// Sets the field name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the disabled state.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the maximum length in characters (0 for unlimited).
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets the change callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Builds the text input.
    #[must_use]
    pub fn build(self) -> TextInput {
        let mut input = TextInput {
            name: self.name,
            value: self.value,
            placeholder: self.placeholder,
            disabled: self.disabled,
            max_length: self.max_length,
            on_change: self.on_change,
        };
        input.truncate_to_max();
        input
    }
}

/// A checkbox control.
pub struct Checkbox {
    name: String,
    label: String,
    checked: bool,
    disabled: bool,
    on_toggle: Option<Box<dyn Fn(bool) + Send + Sync>>,
}

impl fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkbox")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("checked", &self.checked)
            .field("disabled", &self.disabled)
            .field("on_toggle", &self.on_toggle.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl Checkbox {
    /// Creates a new unchecked checkbox.
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            checked: false,
            disabled: false,
            on_toggle: None,
        }
    }

    /// Returns true if checked.
    #[inline]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Sets the checked state without firing the toggle callback.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Returns the display label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Flips the checked state and fires the toggle callback.
    /// Ignored while disabled.
    pub fn toggle(&mut self) {
        if self.disabled {
            return;
        }
        self.checked = !self.checked;
        if let Some(ref callback) = self.on_toggle {
            callback(self.checked);
        }
    }

    /// Sets the toggle callback.
    pub fn on_toggle(&mut self, callback: impl Fn(bool) + Send + Sync + 'static) {
        self.on_toggle = Some(Box::new(callback));
    }
}

impl Control for Checkbox {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Option<ControlValue> {
        Some(ControlValue::Checked(self.checked))
    }

    fn apply(&mut self, value: &ControlValue) -> bool {
        match value {
            ControlValue::Checked(checked) => {
                self.checked = *checked;
                true
            }
            _ => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A select control offering a fixed set of options.
pub struct Select {
    name: String,
    options: Vec<String>,
    selected: Option<usize>,
    disabled: bool,
    on_select: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

impl fmt::Debug for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("disabled", &self.disabled)
            .field("on_select", &self.on_select.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl Select {
    /// Creates a select with the given options and nothing selected.
    #[must_use]
    pub fn new(name: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            name: name.into(),
            options,
            selected: None,
            disabled: false,
            on_select: None,
        }
    }

    /// Returns the available options.
    #[inline]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns the selected option, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }

    /// Selects the option at the given index and fires the select
    /// callback. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if self.disabled || index >= self.options.len() {
            return;
        }
        self.selected = Some(index);
        if let Some(ref callback) = self.on_select {
            callback(&self.options[index]);
        }
    }

    /// Selects the option matching the given text, if present.
    /// Returns whether a match was found.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Sets the select callback.
    pub fn on_select(&mut self, callback: impl Fn(&str) + Send + Sync + 'static) {
        self.on_select = Some(Box::new(callback));
    }
}

impl Control for Select {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Option<ControlValue> {
        self.selected().map(|s| ControlValue::Choice(s.to_owned()))
    }

    fn apply(&mut self, value: &ControlValue) -> bool {
        match value {
            ControlValue::Choice(choice) => self.select_value(choice),
            _ => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_text_input_snapshot_roundtrip() {
        let mut input = TextInput::builder().name("key").value("api_token").build();
        assert_eq!(input.value(), Some(ControlValue::Text("api_token".into())));

        assert!(input.apply(&ControlValue::Text("webhook".into())));
        assert_eq!(input.value_str(), "webhook");
        assert!(!input.apply(&ControlValue::Checked(true)));
    }

    #[test]
    fn test_text_input_max_length_and_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&count);
        let mut input = TextInput::builder()
            .name("key")
            .max_length(4)
            .on_change(move |_| {
                observed.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        input.type_str("abcdef");
        assert_eq!(input.value_str(), "abcd");
        assert_eq!(count.load(Ordering::SeqCst), 1);

        input.set_disabled(true);
        input.type_str("x");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_checkbox_toggle_and_apply() {
        let mut checkbox = Checkbox::new("featured", "Featured");
        assert_eq!(checkbox.value(), Some(ControlValue::Checked(false)));

        checkbox.toggle();
        assert!(checkbox.is_checked());

        assert!(checkbox.apply(&ControlValue::Checked(false)));
        assert!(!checkbox.is_checked());
        assert!(!checkbox.apply(&ControlValue::Text("no".into())));
    }

    #[test]
    fn test_select_choice() {
        let mut select = Select::new(
            "stage",
            vec!["lead".into(), "qualified".into(), "closed".into()],
        );
        assert_eq!(select.value(), None);

        select.select(1);
        assert_eq!(select.selected(), Some("qualified"));
        assert_eq!(
            select.value(),
            Some(ControlValue::Choice("qualified".into()))
        );

        assert!(select.apply(&ControlValue::Choice("closed".into())));
        assert_eq!(select.selected(), Some("closed"));
        assert!(!select.apply(&ControlValue::Choice("archived".into())));
        assert_eq!(select.selected(), Some("closed"));
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut select = Select::new("stage", vec!["lead".into()]);
        select.select(5);
        assert_eq!(select.selected(), None);
    }
}
