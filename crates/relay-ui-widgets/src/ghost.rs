//! Ghost cloning.
//!
//! While a drag is active, the original item is hidden and a ghost, a
//! detached visual stand-in, follows the pointer. A structural
//! clone is not enough: the user may have typed into an input or
//! toggled a checkbox since the item was rendered, so the ghost
//! re-copies each control's live value. Value copying is best-effort;
//! a control that cannot produce a snapshot is skipped with a warning,
//! because ghost fidelity is visual only and must never abort a drag.

use relay_ui_core::{ItemId, Point, Rect};
use tracing::warn;

use crate::controls::ControlValue;
use crate::item::SortableItem;

/// Callback allowing a consumer to post-process a freshly built ghost
/// before it is shown.
pub type PrepareGhost = Box<dyn Fn(&mut Ghost) + Send + Sync>;

/// The floating stand-in for a dragged item.
#[derive(Debug, Clone)]
pub struct Ghost {
    id: ItemId,
    rect: Rect,
    values: Vec<(String, ControlValue)>,
}

impl Ghost {
    /// Builds a ghost from an item: the item's bounds plus a live-value
    /// snapshot of every control that can provide one.
    #[must_use]
    pub fn capture(item: &SortableItem) -> Self {
        let mut values = Vec::with_capacity(item.controls().len());
        for control in item.controls() {
            match control.value() {
                Some(value) => values.push((control.name().to_owned(), value)),
                None => {
                    warn!(
                        item = %item.id(),
                        control = control.name(),
                        "ghost value copy skipped: control produced no snapshot"
                    );
                }
            }
        }
        Self {
            id: item.id().clone(),
            rect: item.bounds(),
            values,
        }
    }

    /// Returns the id of the item this ghost stands in for.
    #[inline]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the ghost's current rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Repositions the ghost so it keeps the pointer-to-corner offset
    /// captured at press time, preventing the ghost from snapping its
    /// corner to the pointer.
    pub fn move_to(&mut self, pointer: Point, grab_offset: Point) {
        self.rect = self.rect.moved_to(pointer - grab_offset);
    }

    /// Returns the copied control values as `(field, value)` pairs.
    #[inline]
    pub fn values(&self) -> &[(String, ControlValue)] {
        &self.values
    }

    /// Returns the copied value for the given field, if present.
    pub fn value_of(&self, field: &str) -> Option<&ControlValue> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Replaces a copied value, or inserts it if missing. Exposed for
    /// `prepare_ghost` hooks that rewrite the clone before display.
    pub fn set_value(&mut self, field: impl Into<String>, value: ControlValue) {
        let field = field.into();
        match self.values.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((field, value)),
        }
    }
}
