//! Core types and traits for Relay UI.
//!
//! This crate provides the fundamental building blocks shared by the
//! Relay UI component crates:
//!
//! - [`geometry`]: 2D geometry primitives (Point, Size, Rect) and the
//!   [`Axis`] helpers used by axis-agnostic hit-testing
//! - [`id`]: stable, string-backed item identifiers
//! - [`error`]: error types for the core library
//!
//! # Examples
//!
//! ```
//! use relay_ui_core::{Axis, Point, Rect, Size};
//!
//! let rect = Rect::new(10, 5, 60, 18);
//! assert!(rect.contains_point(Point::new(30, 10)));
//!
//! // Hit-testing walks item centers along one axis.
//! assert_eq!(Axis::Horizontal.center_along(rect), 40);
//! assert_eq!(Axis::Vertical.center_along(rect), 14);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod geometry;
pub mod id;

// Re-export commonly used types at the crate root for convenience
pub use error::{Error, Result};
pub use geometry::{Axis, Point, Rect, Size};
pub use id::ItemId;
