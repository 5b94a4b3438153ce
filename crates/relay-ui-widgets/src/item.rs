//! The sortable item handle.
//!
//! A [`SortableItem`] is the drag engine's view of one list entry: a
//! stable id, layout bounds, an optional drag handle, and the form
//! controls rendered inside it. The engine reads geometry and clones
//! values; it never creates or destroys items, that stays with the
//! owning list component.

use relay_ui_core::{ItemId, Point, Rect, Size};

use crate::controls::BoxedControl;

/// One entry of a sortable list.
pub struct SortableItem {
    id: ItemId,
    size: Size,
    bounds: Rect,
    hidden: bool,
    /// Drag handle rectangle, relative to the item's origin.
    handle: Option<Rect>,
    controls: Vec<BoxedControl>,
}

impl std::fmt::Debug for SortableItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortableItem")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("bounds", &self.bounds)
            .field("hidden", &self.hidden)
            .field("handle", &self.handle)
            .field("controls", &self.controls.len())
            .finish()
    }
}

impl SortableItem {
    /// Creates a new item with the given id and intrinsic size.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, size: Size) -> Self {
        Self {
            id: id.into(),
            size,
            bounds: Rect::from_point_size(Point::ZERO, size),
            hidden: false,
            handle: None,
            controls: Vec::new(),
        }
    }

    /// Restricts drag initiation to the given rectangle, expressed
    /// relative to the item's origin.
    #[must_use]
    pub fn with_handle(mut self, handle: Rect) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Adds a form control to the item.
    #[must_use]
    pub fn with_control(mut self, control: BoxedControl) -> Self {
        self.controls.push(control);
        self
    }

    /// Returns the item's identifier.
    #[inline]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the item's intrinsic size.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the item's current layout bounds.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Assigns layout bounds. Called by the owning list during layout.
    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Returns true if the item is hidden (its ghost stands in for it).
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Returns the drag handle in absolute coordinates, if one is set.
    pub fn handle_bounds(&self) -> Option<Rect> {
        self.handle
            .map(|h| h.translated(self.bounds.x, self.bounds.y))
    }

    /// Tests whether a press at `point` may start a drag on this item.
    ///
    /// With `require_handle`, only presses inside the handle rectangle
    /// qualify; an item without a handle is then not draggable at all.
    pub fn hit_for_drag(&self, point: Point, require_handle: bool) -> bool {
        if self.hidden {
            return false;
        }
        if require_handle {
            return self
                .handle_bounds()
                .is_some_and(|h| h.contains_point(point));
        }
        self.bounds.contains_point(point)
    }

    /// Returns the item's form controls.
    #[inline]
    pub fn controls(&self) -> &[BoxedControl] {
        &self.controls
    }

    /// Returns the item's form controls mutably.
    #[inline]
    pub fn controls_mut(&mut self) -> &mut [BoxedControl] {
        &mut self.controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{Control, ControlValue, TextInput};

    #[test]
    fn test_hit_for_drag_whole_bounds() {
        let mut item = SortableItem::new("red", Size::new(10, 4));
        item.set_bounds(Rect::new(20, 0, 10, 4));

        assert!(item.hit_for_drag(Point::new(25, 2), false));
        assert!(!item.hit_for_drag(Point::new(31, 2), false));
    }

    #[test]
    fn test_hit_for_drag_handle_only() {
        let mut item =
            SortableItem::new("row", Size::new(40, 3)).with_handle(Rect::new(0, 0, 3, 3));
        item.set_bounds(Rect::new(10, 10, 40, 3));

        assert!(item.hit_for_drag(Point::new(11, 11), true));
        assert!(!item.hit_for_drag(Point::new(30, 11), true));
        // Without the handle requirement the whole row is draggable.
        assert!(item.hit_for_drag(Point::new(30, 11), false));
    }

    #[test]
    fn test_item_without_handle_not_draggable_when_required() {
        let mut item = SortableItem::new("row", Size::new(40, 3));
        item.set_bounds(Rect::new(0, 0, 40, 3));
        assert!(!item.hit_for_drag(Point::new(1, 1), true));
    }

    #[test]
    fn test_hidden_item_ignores_hits() {
        let mut item = SortableItem::new("row", Size::new(10, 2));
        item.set_bounds(Rect::new(0, 0, 10, 2));
        item.set_hidden(true);
        assert!(!item.hit_for_drag(Point::new(1, 1), false));
    }

    #[test]
    fn test_controls_access() {
        let mut item = SortableItem::new("row", Size::new(10, 2)).with_control(Box::new(
            TextInput::builder().name("key").value("draft").build(),
        ));
        assert_eq!(item.controls().len(), 1);

        let input = item.controls_mut()[0]
            .as_any_mut()
            .downcast_mut::<TextInput>()
            .unwrap();
        input.set_value("edited");
        assert_eq!(
            item.controls()[0].value(),
            Some(ControlValue::Text("edited".into()))
        );
    }
}
