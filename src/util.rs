//! Utility functions for colors and viewport geometry.
//!
//! This module provides:
//! - Name-to-color mapping for configuration values
//! - Container bounds and backing-store size calculations
//! - Character-safe text truncation

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "ink", "red", "green", "blue", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "ink" => Some(INK),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Displayed position and size of the drawing container, in viewport (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Backing-store size in device pixels for the given pixel ratio (at least 1x1).
    pub fn backing_size(&self, pixel_ratio: f64) -> (i32, i32) {
        let scale = |logical: f64| ((logical * pixel_ratio).round() as i32).max(1);
        (scale(self.width), scale(self.height))
    }

    /// Returns true when both bounds describe the same displayed size.
    pub fn same_size(&self, other: &Bounds) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0.0, 0.0, 300.0, 300.0)
    }
}

// ============================================================================
// Text Utilities
// ============================================================================

/// Returns the first `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
