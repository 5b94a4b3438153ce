//! Pointer event types and drag detection.
//!
//! Pointer events abstract over the concrete input backend: mouse
//! events from crossterm convert into [`PointerEvent`]s, and a terminal
//! focus loss converts into [`PointerEventKind::Cancel`] so that a drag
//! interrupted mid-flight can be unwound instead of dangling.

use bitflags::bitflags;
use relay_ui_core::Point;
use std::fmt;

/// Represents a pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Primary button (left mouse button).
    #[default]
    Primary,
    /// Secondary button (right mouse button).
    Secondary,
    /// Middle button (scroll wheel click).
    Middle,
}

impl fmt::Display for PointerButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerButton::Primary => write!(f, "primary"),
            PointerButton::Secondary => write!(f, "secondary"),
            PointerButton::Middle => write!(f, "middle"),
        }
    }
}

impl From<crossterm::event::MouseButton> for PointerButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        match btn {
            crossterm::event::MouseButton::Left => PointerButton::Primary,
            crossterm::event::MouseButton::Right => PointerButton::Secondary,
            crossterm::event::MouseButton::Middle => PointerButton::Middle,
        }
    }
}

bitflags! {
    /// Keyboard modifiers active during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PointerModifiers: u8 {
        /// Shift key held.
        const SHIFT = 0b0001;
        /// Control key held.
        const CONTROL = 0b0010;
        /// Alt key held.
        const ALT = 0b0100;
    }
}

impl From<crossterm::event::KeyModifiers> for PointerModifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        let mut out = PointerModifiers::empty();
        if mods.contains(crossterm::event::KeyModifiers::SHIFT) {
            out |= PointerModifiers::SHIFT;
        }
        if mods.contains(crossterm::event::KeyModifiers::CONTROL) {
            out |= PointerModifiers::CONTROL;
        }
        if mods.contains(crossterm::event::KeyModifiers::ALT) {
            out |= PointerModifiers::ALT;
        }
        out
    }
}

/// The kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A button was pressed down.
    Down(PointerButton),
    /// The pointer moved, with or without a button held.
    Move,
    /// A button was released.
    Up(PointerButton),
    /// The pointer session was cancelled (focus loss, capture teardown).
    ///
    /// No matching `Up` will arrive for the press that preceded this.
    Cancel,
}

impl PointerEventKind {
    /// Returns true if this is a button down event.
    #[must_use]
    pub fn is_down(&self) -> bool {
        matches!(self, PointerEventKind::Down(_))
    }

    /// Returns true if this is a button up event.
    #[must_use]
    pub fn is_up(&self) -> bool {
        matches!(self, PointerEventKind::Up(_))
    }

    /// Returns the button associated with this event, if any.
    #[must_use]
    pub fn button(&self) -> Option<PointerButton> {
        match self {
            PointerEventKind::Down(btn) | PointerEventKind::Up(btn) => Some(*btn),
            _ => None,
        }
    }
}

/// A complete pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    /// The kind of pointer event.
    pub kind: PointerEventKind,
    /// The position where the event occurred.
    pub position: Point,
    /// Active keyboard modifiers during this event.
    pub modifiers: PointerModifiers,
}

impl PointerEvent {
    /// Creates a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, position: Point, modifiers: PointerModifiers) -> Self {
        Self {
            kind,
            position,
            modifiers,
        }
    }

    /// Creates a primary-button press at the given coordinates.
    #[must_use]
    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(
            PointerEventKind::Down(PointerButton::Primary),
            Point::new(x, y),
            PointerModifiers::empty(),
        )
    }

    /// Creates a move event at the given coordinates.
    #[must_use]
    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(
            PointerEventKind::Move,
            Point::new(x, y),
            PointerModifiers::empty(),
        )
    }

    /// Creates a primary-button release at the given coordinates.
    #[must_use]
    pub const fn up(x: i32, y: i32) -> Self {
        Self::new(
            PointerEventKind::Up(PointerButton::Primary),
            Point::new(x, y),
            PointerModifiers::empty(),
        )
    }

    /// Creates a cancellation event.
    ///
    /// The position is carried over from the last known pointer
    /// position by convention; consumers must not rely on it.
    #[must_use]
    pub const fn cancel() -> Self {
        Self::new(
            PointerEventKind::Cancel,
            Point::ZERO,
            PointerModifiers::empty(),
        )
    }

    /// Converts a crossterm mouse event into a pointer event.
    ///
    /// Scroll events have no pointer equivalent and return `None`.
    /// Crossterm reports held-button movement as `Drag`; both `Drag`
    /// and `Moved` map to [`PointerEventKind::Move`] because the drag
    /// engine tracks button state itself.
    #[must_use]
    pub fn from_mouse(event: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind as Ct;

        let kind = match event.kind {
            Ct::Down(btn) => PointerEventKind::Down(btn.into()),
            Ct::Up(btn) => PointerEventKind::Up(btn.into()),
            Ct::Drag(_) | Ct::Moved => PointerEventKind::Move,
            Ct::ScrollDown | Ct::ScrollUp | Ct::ScrollLeft | Ct::ScrollRight => return None,
        };
        Some(Self::new(
            kind,
            Point::new(i32::from(event.column), i32::from(event.row)),
            event.modifiers.into(),
        ))
    }

    /// Converts a crossterm terminal event into a pointer event.
    ///
    /// Focus loss becomes [`PointerEventKind::Cancel`]; key, resize,
    /// paste, and scroll events return `None`.
    #[must_use]
    pub fn from_terminal(event: &crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Mouse(mouse) => Self::from_mouse(mouse),
            crossterm::event::Event::FocusLost => Some(Self::cancel()),
            _ => None,
        }
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PointerEventKind::Down(btn) => {
                write!(f, "down({btn})@({},{})", self.position.x, self.position.y)
            }
            PointerEventKind::Move => {
                write!(f, "move@({},{})", self.position.x, self.position.y)
            }
            PointerEventKind::Up(btn) => {
                write!(f, "up({btn})@({},{})", self.position.x, self.position.y)
            }
            PointerEventKind::Cancel => write!(f, "cancel"),
        }
    }
}

/// Separates clicks from drags with a small movement threshold.
///
/// Movement that stays within the threshold on both axes between press
/// and release is a click; crossing the threshold on either axis marks
/// the press as a drag. The decision is sticky for the remainder of the
/// press.
#[derive(Debug, Clone)]
pub struct DragDetector {
    threshold: u16,
    press: Option<Point>,
    exceeded: bool,
}

impl Default for DragDetector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl DragDetector {
    /// The default movement threshold.
    pub const DEFAULT_THRESHOLD: u16 = 3;

    /// Creates a detector with the given movement threshold.
    #[must_use]
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            press: None,
            exceeded: false,
        }
    }

    /// Records a button press at the given position.
    pub fn press(&mut self, at: Point) {
        self.press = Some(at);
        self.exceeded = false;
    }

    /// Feeds a pointer position and returns whether the press now
    /// qualifies as a drag.
    ///
    /// Returns false when no press has been recorded.
    pub fn update(&mut self, at: Point) -> bool {
        let Some(press) = self.press else {
            return false;
        };
        if !self.exceeded {
            let threshold = u32::from(self.threshold);
            self.exceeded =
                press.x.abs_diff(at.x) > threshold || press.y.abs_diff(at.y) > threshold;
        }
        self.exceeded
    }

    /// Returns whether the current press has crossed the threshold.
    #[must_use]
    pub fn has_exceeded(&self) -> bool {
        self.exceeded
    }

    /// Returns the position of the current press, if any.
    #[must_use]
    pub fn press_position(&self) -> Option<Point> {
        self.press
    }

    /// Clears the press state, ending the current press.
    pub fn release(&mut self) {
        self.press = None;
        self.exceeded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mouse_conversions() {
        use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::SHIFT,
        };
        let ev = PointerEvent::from_mouse(&down).unwrap();
        assert_eq!(ev.kind, PointerEventKind::Down(PointerButton::Primary));
        assert_eq!(ev.position, Point::new(4, 9));
        assert!(ev.modifiers.contains(PointerModifiers::SHIFT));

        let drag = MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 5,
            row: 9,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            PointerEvent::from_mouse(&drag).unwrap().kind,
            PointerEventKind::Move
        );

        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(PointerEvent::from_mouse(&scroll).is_none());
    }

    #[test]
    fn test_focus_lost_is_cancel() {
        let ev = PointerEvent::from_terminal(&crossterm::event::Event::FocusLost).unwrap();
        assert_eq!(ev.kind, PointerEventKind::Cancel);
    }

    #[test]
    fn test_drag_detector_threshold() {
        let mut detector = DragDetector::new(3);
        detector.press(Point::new(10, 10));

        // Within threshold on both axes: still a click.
        assert!(!detector.update(Point::new(13, 10)));
        assert!(!detector.update(Point::new(10, 7)));

        // Crossing on one axis is enough.
        assert!(detector.update(Point::new(14, 10)));
        assert!(detector.has_exceeded());

        // Sticky until released.
        assert!(detector.update(Point::new(10, 10)));
        detector.release();
        assert!(!detector.has_exceeded());
        assert!(!detector.update(Point::new(100, 100)));
    }

    #[test]
    fn test_drag_detector_vertical_axis() {
        let mut detector = DragDetector::new(2);
        detector.press(Point::new(0, 0));
        assert!(!detector.update(Point::new(0, 2)));
        assert!(detector.update(Point::new(0, 3)));
    }
}
