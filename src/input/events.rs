//! Generic input event types for pointer and touch input.

/// Pointer (mouse/pen) events in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed
    Down { x: f64, y: f64 },
    /// Pointer moved (with or without a button held)
    Move { x: f64, y: f64 },
    /// Primary button released
    Up,
    /// Pointer left the surface
    Leave,
}

/// Touch events carrying the currently active touch points in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum TouchEvent {
    Start { touches: Vec<(f64, f64)> },
    Move { touches: Vec<(f64, f64)> },
    End,
}

impl TouchEvent {
    /// The first active touch point, which is the only one used for drawing.
    pub fn primary(&self) -> Option<(f64, f64)> {
        match self {
            TouchEvent::Start { touches } | TouchEvent::Move { touches } => {
                touches.first().copied()
            }
            TouchEvent::End => None,
        }
    }
}

/// What the host should do with the native default action of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Let the host run its default handling
    Default,
    /// Suppress default handling (scrolling, zooming) while drawing
    PreventDefault,
}
