//! Drop-target hit-testing and index remapping.
//!
//! These functions are pure: they operate on indices and rectangles
//! only, so the reordering math is testable without any rendering or
//! event plumbing.
//!
//! During a drag the dragged item is conceptually removed from the
//! list, but the reorder event must be expressed against the original
//! ordering. [`resolve_destination`] performs the asymmetric
//! adjustment: candidates positioned before the drag origin keep their
//! index, candidates at or after it are shifted down by one to
//! compensate for the dragged item's conceptual removal, and inserting
//! *after* a candidate adds one back in either case.

use relay_ui_core::{Axis, Rect, Size};

/// The best current drop candidate.
///
/// `index` is the candidate's position in the *original* ordering
/// (the ordering that still includes the dragged item).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropSlot {
    /// Original index of the candidate item.
    pub index: usize,
    /// Insert after the candidate instead of before it.
    pub after: bool,
}

/// Finds the drop candidate for a pointer position.
///
/// `others` holds `(original_index, bounds)` for every sortable item
/// *except* the dragged one, in list order. The first item whose
/// center the pointer has not yet passed becomes the candidate, with
/// insert-before semantics; a pointer past every center resolves to
/// insert-after-the-last. Returns `None` for an empty slice.
#[must_use]
pub fn find_drop_slot(pointer_along: i32, axis: Axis, others: &[(usize, Rect)]) -> Option<DropSlot> {
    for &(index, rect) in others {
        if pointer_along <= axis.center_along(rect) {
            return Some(DropSlot { index, after: false });
        }
    }
    others.last().map(|&(index, _)| DropSlot { index, after: true })
}

/// Translates a drop candidate into a destination index in terms of
/// the original ordering, as if the dragged item had never been
/// removed from the list.
#[must_use]
pub fn resolve_destination(origin: usize, slot: DropSlot) -> usize {
    let base = if slot.index < origin {
        slot.index
    } else {
        slot.index - 1
    };
    if slot.after { base + 1 } else { base }
}

/// Computes the placeholder rectangle for a drop candidate.
///
/// The placeholder reserves the dragged item's footprint (its captured
/// size) immediately adjacent to the candidate: just before its leading
/// edge for insert-before, just past its trailing edge for
/// insert-after. The cross-axis position follows the candidate so the
/// placeholder lines up with the list.
#[must_use]
pub fn placeholder_rect(
    slot: DropSlot,
    candidate_bounds: Rect,
    dragged_size: Size,
    axis: Axis,
    gap: u16,
) -> Rect {
    let dragged = Rect::from_point_size(candidate_bounds.origin(), dragged_size);
    let extent = i32::from(axis.extent_along(dragged));
    let gap = i32::from(gap);

    let along = if slot.after {
        axis.end_along(candidate_bounds) + gap
    } else {
        axis.start_along(candidate_bounds) - gap - extent
    };
    let cross = axis.cross_of(candidate_bounds.origin());
    Rect::from_point_size(axis.point_at(along, cross), dragged_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lays out `n` rects of the given extent along `axis`, skipping
    /// `dragged`, and returns them paired with their original indices.
    fn lay_out(n: usize, dragged: usize, axis: Axis, extent: u16) -> Vec<(usize, Rect)> {
        (0..n)
            .filter(|&i| i != dragged)
            .map(|i| {
                let along = i as i32 * i32::from(extent);
                (i, Rect::from_point_size(axis.point_at(along, 0), match axis {
                    Axis::Horizontal => Size::new(extent, 4),
                    Axis::Vertical => Size::new(12, extent),
                }))
            })
            .collect()
    }

    #[test]
    fn test_find_slot_before_first_center() {
        // Three 10-wide items at 0, 10, 20; item 0 is being dragged.
        let others = lay_out(3, 0, Axis::Horizontal, 10);
        // Pointer at 12: before item 1's center (15).
        let slot = find_drop_slot(12, Axis::Horizontal, &others).unwrap();
        assert_eq!(slot, DropSlot { index: 1, after: false });
    }

    #[test]
    fn test_find_slot_between_centers() {
        let others = lay_out(3, 0, Axis::Horizontal, 10);
        // Pointer at 17: past item 1's center (15), before item 2's (25).
        let slot = find_drop_slot(17, Axis::Horizontal, &others).unwrap();
        assert_eq!(slot, DropSlot { index: 2, after: false });
    }

    #[test]
    fn test_find_slot_past_all_centers() {
        let others = lay_out(3, 0, Axis::Horizontal, 10);
        let slot = find_drop_slot(28, Axis::Horizontal, &others).unwrap();
        assert_eq!(slot, DropSlot { index: 2, after: true });
    }

    #[test]
    fn test_find_slot_empty_list() {
        assert_eq!(find_drop_slot(5, Axis::Vertical, &[]), None);
    }

    #[test]
    fn test_resolve_candidate_before_origin() {
        // Dragging item 2 to before item 0.
        assert_eq!(resolve_destination(2, DropSlot { index: 0, after: false }), 0);
        // Dragging item 2 to after item 0 (between 0 and 1).
        assert_eq!(resolve_destination(2, DropSlot { index: 0, after: true }), 1);
    }

    #[test]
    fn test_resolve_candidate_after_origin() {
        // Dragging item 0 to before item 2: one slot down after
        // compensating for the removal.
        assert_eq!(resolve_destination(0, DropSlot { index: 2, after: false }), 1);
        // Dragging item 0 past the last of three items.
        assert_eq!(resolve_destination(0, DropSlot { index: 2, after: true }), 2);
    }

    /// The resolved destination must describe the permutation a reader
    /// would expect: remove the dragged item, re-insert it at the
    /// destination, and it lands exactly adjacent to the candidate.
    #[test]
    fn test_resolution_matches_simulated_permutation() {
        for n in 2..6usize {
            for origin in 0..n {
                for candidate in (0..n).filter(|&c| c != origin) {
                    for after in [false, true] {
                        // `after` is only produced for the final walked
                        // item, but the math must hold generally.
                        let slot = DropSlot { index: candidate, after };
                        let dest = resolve_destination(origin, slot);
                        assert!(dest < n, "dest {dest} out of range for n={n}");

                        let mut order: Vec<usize> = (0..n).collect();
                        let dragged = order.remove(origin);
                        order.insert(dest, dragged);

                        let dragged_at = order.iter().position(|&x| x == dragged).unwrap();
                        let candidate_at = order.iter().position(|&x| x == candidate).unwrap();
                        if after {
                            assert_eq!(dragged_at, candidate_at + 1);
                        } else {
                            assert_eq!(dragged_at + 1, candidate_at);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_vertical_axis_uses_y() {
        // Two rows of height 5 at y=0 and y=5; row 1 is dragged.
        let others = lay_out(2, 1, Axis::Vertical, 5);
        // Pointer above row 0's center (2).
        let slot = find_drop_slot(1, Axis::Vertical, &others).unwrap();
        assert_eq!(slot, DropSlot { index: 0, after: false });
        assert_eq!(resolve_destination(1, slot), 0);
    }

    #[test]
    fn test_placeholder_sits_adjacent_to_candidate() {
        let candidate = Rect::new(30, 0, 10, 4);
        let size = Size::new(8, 4);

        let before = placeholder_rect(
            DropSlot { index: 3, after: false },
            candidate,
            size,
            Axis::Horizontal,
            2,
        );
        assert_eq!(before, Rect::new(20, 0, 8, 4));

        let after = placeholder_rect(
            DropSlot { index: 3, after: true },
            candidate,
            size,
            Axis::Horizontal,
            2,
        );
        assert_eq!(after, Rect::new(42, 0, 8, 4));
    }

    #[test]
    fn test_placeholder_vertical() {
        let candidate = Rect::new(0, 10, 12, 5);
        let size = Size::new(12, 5);
        let before = placeholder_rect(
            DropSlot { index: 1, after: false },
            candidate,
            size,
            Axis::Vertical,
            0,
        );
        assert_eq!(before, Rect::new(0, 5, 12, 5));
    }

    #[test]
    fn test_pointer_inside_own_slot_points_home() {
        // Dragging item 1 of three 10-wide items without leaving its
        // own footprint: the candidate is item 2 (first unpassed
        // center), which resolves back to the origin index.
        let others = lay_out(3, 1, Axis::Horizontal, 10);
        let slot = find_drop_slot(13, Axis::Horizontal, &others).unwrap();
        assert_eq!(slot, DropSlot { index: 2, after: false });
        assert_eq!(resolve_destination(1, slot), 1);
    }
}
