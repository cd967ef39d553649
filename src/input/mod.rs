//! Input handling for the drawing surface.
//!
//! This module translates host pointer and touch events (viewport coordinates)
//! into drawing surface operations (surface-relative coordinates).

pub mod events;
pub mod pointer;

// Re-export commonly used types at module level
pub use events::{Disposition, PointerEvent, TouchEvent};
pub use pointer::{handle_pointer, handle_touch};
