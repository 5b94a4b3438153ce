//! End-to-end drag scenarios exercising the full pointer pipeline:
//! press, threshold, ghost, placeholder, drop, events.

use pretty_assertions::assert_eq;
use relay_ui_core::{Point, Rect, Size};
use relay_ui_input::PointerEvent;
use relay_ui_widgets::{
    Checkbox, ControlValue, SortEvent, SortableItem, SortableList, Swap, TextInput,
};

fn ids(list: &SortableList) -> Vec<&str> {
    list.items().iter().map(|item| item.id().as_str()).collect()
}

fn run(list: &mut SortableList, events: &[PointerEvent]) -> Vec<SortEvent> {
    let mut out = Vec::new();
    for event in events {
        out.extend(list.handle_pointer(event));
    }
    out
}

#[test]
fn horizontal_color_swatches_swap_forward() {
    let mut list = SortableList::builder().horizontal(true).build();
    for id in ["red", "blue", "green"] {
        list.push_item(SortableItem::new(id, Size::new(10, 4)));
    }

    // Drag red until the pointer passes blue's center but not green's.
    let events = run(
        &mut list,
        &[
            PointerEvent::down(3, 2),
            PointerEvent::moved(9, 2),
            PointerEvent::moved(18, 2),
            PointerEvent::up(18, 2),
        ],
    );

    assert_eq!(ids(&list), vec!["blue", "red", "green"]);
    assert!(events.contains(&SortEvent::OrderChanged {
        swap: Swap { from: 0, to: 1 }
    }));
}

#[test]
fn vertical_grocery_rows_swap_backward() {
    let mut list = SortableList::builder().build();
    list.push_item(SortableItem::new("chicken", Size::new(24, 5)));
    list.push_item(SortableItem::new("fish", Size::new(24, 5)));

    // Lift fish above chicken's center.
    let events = run(
        &mut list,
        &[
            PointerEvent::down(5, 7),
            PointerEvent::moved(5, 1),
            PointerEvent::up(5, 1),
        ],
    );

    assert_eq!(ids(&list), vec!["fish", "chicken"]);
    assert!(events.contains(&SortEvent::OrderChanged {
        swap: Swap { from: 1, to: 0 }
    }));
}

#[test]
fn jiggle_within_threshold_never_starts_a_drag() {
    let mut list = SortableList::builder().horizontal(true).build();
    for id in ["a", "b"] {
        list.push_item(SortableItem::new(id, Size::new(10, 4)));
    }

    let events = run(
        &mut list,
        &[
            PointerEvent::down(4, 2),
            PointerEvent::moved(5, 2),
            PointerEvent::moved(3, 1),
            PointerEvent::up(3, 1),
        ],
    );

    assert!(events.is_empty());
    assert_eq!(ids(&list), vec!["a", "b"]);
}

#[test]
fn ghost_carries_live_control_values() {
    let mut list = SortableList::builder().build();
    list.push_item(
        SortableItem::new("row-0", Size::new(30, 3))
            .with_control(Box::new(
                TextInput::builder().name("note").value("call back").build(),
            ))
            .with_control(Box::new(Checkbox::new("done", "Done"))),
    );
    list.push_item(SortableItem::new("row-1", Size::new(30, 3)));

    // Edit the control after the item was added, then start dragging.
    if let Some(input) = list.items_mut()[0].controls_mut()[0]
        .as_any_mut()
        .downcast_mut::<TextInput>()
    {
        input.set_value("call back tomorrow");
    }
    list.handle_pointer(&PointerEvent::down(2, 1));
    list.handle_pointer(&PointerEvent::moved(2, 6));

    let ghost = list.ghost().expect("drag should be active");
    assert_eq!(
        ghost.value_of("note"),
        Some(&ControlValue::Text("call back tomorrow".into()))
    );
    assert_eq!(ghost.value_of("done"), Some(&ControlValue::Checked(false)));
}

#[test]
fn placeholder_tracks_the_pending_slot() {
    let mut list = SortableList::builder().horizontal(true).gap(1).build();
    for id in ["a", "b", "c"] {
        list.push_item(SortableItem::new(id, Size::new(10, 4)));
    }
    // Layout with gap 1: a 0..10, b 11..21, c 22..32.

    list.handle_pointer(&PointerEvent::down(2, 1));
    list.handle_pointer(&PointerEvent::moved(18, 1));

    // Pointer past b's center (16): slot is before c, so the
    // placeholder reserves a's footprint just left of c.
    let placeholder = list.placeholder().expect("slot should be pending");
    assert_eq!(placeholder, Rect::new(11, 0, 10, 4));

    list.handle_pointer(&PointerEvent::up(18, 1));
    assert_eq!(ids(&list), vec!["b", "a", "c"]);
    assert!(list.placeholder().is_none());
}

#[test]
fn full_cycle_permutes_and_suppresses_the_trailing_click() {
    let mut list = SortableList::builder().horizontal(true).build();
    for id in ["one", "two", "three", "four"] {
        list.push_item(SortableItem::new(id, Size::new(8, 3)));
    }

    // Move "two" (8..16) to the end.
    run(
        &mut list,
        &[
            PointerEvent::down(10, 1),
            PointerEvent::moved(31, 1),
            PointerEvent::up(31, 1),
        ],
    );
    assert_eq!(ids(&list), vec!["one", "three", "four", "two"]);
    assert!(list.handle_click(Point::new(31, 1)).is_handled());
    assert!(list.handle_click(Point::new(31, 1)).is_ignored());

    // Ordering stays a permutation of the original ids.
    let mut sorted = ids(&list);
    sorted.sort_unstable();
    assert_eq!(sorted, vec!["four", "one", "three", "two"]);
}
