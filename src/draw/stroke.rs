//! Stroke primitives: points and stroke styling.

use super::color::{Color, INK};
use serde::{Deserialize, Serialize};

/// Default stroke width in logical pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 6.0;

/// A point in surface-relative logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Appearance of freehand strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Line thickness in logical pixels
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: INK,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}
