//! Drawing surface and rendering primitives (Cairo-based).
//!
//! This module defines the raster side of the application:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Point`] and [`StrokeStyle`]: stroke geometry and appearance
//! - [`Surface`]: the free-hand drawing surface with content tracking
//! - [`EncodedImage`]: base64 PNG snapshots of the surface

pub mod color;
pub mod render;
pub mod snapshot;
pub mod stroke;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use snapshot::{EncodedImage, PNG_DATA_URI_PREFIX};
pub use stroke::{DEFAULT_STROKE_WIDTH, Point, StrokeStyle};
pub use surface::{PenState, Surface, SurfaceError};

pub use color::{BLACK, BLUE, GREEN, INK, RED, WHITE};
