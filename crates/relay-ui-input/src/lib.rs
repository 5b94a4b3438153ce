//! Pointer input handling for Relay UI.
//!
//! This crate provides the pointer event model consumed by the widget
//! crates:
//!
//! - **Pointer events**: button presses, movement, releases, and
//!   cancellation, with conversions from crossterm mouse events.
//!
//! - **Drag detection**: a small movement threshold separating clicks
//!   from drags, tracked per press.
//!
//! - **Pointer capture**: an RAII guard that grants one owner exclusive
//!   delivery of pointer events for the duration of a drag. Capture is
//!   released when the guard is dropped, on every exit path.
//!
//! # Quick start
//!
//! ```
//! use relay_ui_input::{DragDetector, PointerEvent};
//! use relay_ui_core::Point;
//!
//! let mut detector = DragDetector::default();
//! detector.press(Point::new(10, 10));
//! assert!(!detector.update(Point::new(11, 10))); // below threshold: a click
//! assert!(detector.update(Point::new(18, 10))); // threshold exceeded: a drag
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod capture;
pub mod pointer;

// Re-export main types at crate root for convenience
pub use capture::{CaptureRegistry, OwnerId, PointerCapture};
pub use pointer::{
    DragDetector, PointerButton, PointerEvent, PointerEventKind, PointerModifiers,
};
