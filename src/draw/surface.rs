//! Raster drawing surface backed by a Cairo image surface.

use super::color::{Color, WHITE};
use super::render;
use super::snapshot::EncodedImage;
use super::stroke::{Point, StrokeStyle};
use crate::util::Bounds;
use log::debug;
use thiserror::Error;

/// Errors raised by the drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// Pen state machine for the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenState {
    /// Pointer is up; `extend` does nothing
    Idle,
    /// Pointer is down; holds the last recorded point of the active stroke
    Drawing { last: Point },
}

/// Free-hand drawing surface.
///
/// The backing store is sized to the container's displayed size multiplied by the
/// device pixel ratio, and the Cairo context is scaled by the same ratio, so callers
/// always work in logical pixels while strokes render at native sharpness.
///
/// Strokes are painted as soon as they arrive and are not retained: the raster is
/// the only record of what was drawn.
pub struct Surface {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    bounds: Bounds,
    pixel_ratio: f64,
    style: StrokeStyle,
    background: Color,
    pen: PenState,
    has_content: bool,
}

impl Surface {
    /// Creates a blank surface with the default stroke style and a white background.
    pub fn new(bounds: Bounds, pixel_ratio: f64) -> Result<Self, SurfaceError> {
        Self::with_style(bounds, pixel_ratio, StrokeStyle::default(), WHITE)
    }

    /// Creates a blank surface with an explicit stroke style and background color.
    pub fn with_style(
        bounds: Bounds,
        pixel_ratio: f64,
        style: StrokeStyle,
        background: Color,
    ) -> Result<Self, SurfaceError> {
        let pixel_ratio = sanitize_ratio(pixel_ratio);
        let (surface, ctx) = create_backing(bounds, pixel_ratio)?;
        let mut this = Self {
            surface,
            ctx,
            bounds,
            pixel_ratio,
            style,
            background: background.opaque(),
            pen: PenState::Idle,
            has_content: false,
        };
        this.clear()?;
        Ok(this)
    }

    /// Re-creates the backing store for a new container size or pixel ratio.
    ///
    /// The new backing store starts blank. Returns `false` when nothing changed, in
    /// which case the existing pixels are kept.
    pub fn resize(&mut self, bounds: Bounds, pixel_ratio: f64) -> Result<bool, SurfaceError> {
        let pixel_ratio = sanitize_ratio(pixel_ratio);
        if bounds.same_size(&self.bounds) && pixel_ratio == self.pixel_ratio {
            // Position changes only affect coordinate mapping
            self.bounds = bounds;
            return Ok(false);
        }

        let (surface, ctx) = create_backing(bounds, pixel_ratio)?;
        self.surface = surface;
        self.ctx = ctx;
        self.bounds = bounds;
        self.pixel_ratio = pixel_ratio;
        self.clear()?;
        debug!(
            "Surface resized to {}x{} (ratio {})",
            self.surface.width(),
            self.surface.height(),
            self.pixel_ratio
        );
        Ok(true)
    }

    /// Records the starting point of a stroke and enters drawing mode.
    pub fn begin(&mut self, point: Point) {
        self.pen = PenState::Drawing { last: point };
    }

    /// Extends the active stroke to `point`.
    ///
    /// Returns `true` when a segment was painted. Outside drawing mode this is a
    /// no-op returning `false`.
    pub fn extend(&mut self, point: Point) -> Result<bool, SurfaceError> {
        let PenState::Drawing { last } = self.pen else {
            return Ok(false);
        };

        render::render_segment(&self.ctx, last, point, &self.style)?;
        self.pen = PenState::Drawing { last: point };
        if !self.has_content {
            debug!("Surface received its first stroke");
            self.has_content = true;
        }
        Ok(true)
    }

    /// Leaves drawing mode. Idempotent.
    pub fn end(&mut self) {
        self.pen = PenState::Idle;
    }

    /// Resets the surface to the opaque background and clears the content flag.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        render::fill_background(&self.ctx, self.background)?;
        self.pen = PenState::Idle;
        self.has_content = false;
        Ok(())
    }

    /// Whether at least one segment was painted since the last clear.
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.pen, PenState::Drawing { .. })
    }

    /// Encodes the current pixels as a base64 PNG.
    ///
    /// Pending drawing operations are flushed first so the snapshot reflects exactly
    /// what was painted at call time.
    pub fn snapshot(&self) -> Result<EncodedImage, SurfaceError> {
        Ok(EncodedImage::from_png(&self.snapshot_png()?))
    }

    /// Encodes the current pixels as raw PNG bytes.
    pub fn snapshot_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.surface.flush();
        let mut buffer = Vec::new();
        self.surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }

    /// Maps viewport coordinates to surface-relative logical coordinates.
    pub fn to_surface_point(&self, viewport_x: f64, viewport_y: f64) -> Point {
        Point::new(viewport_x - self.bounds.left, viewport_y - self.bounds.top)
    }

    /// Container bounds in viewport coordinates.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Device pixel ratio the backing store was created with.
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Backing store size in device pixels.
    pub fn backing_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }
}

fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

fn create_backing(
    bounds: Bounds,
    pixel_ratio: f64,
) -> Result<(cairo::ImageSurface, cairo::Context), SurfaceError> {
    let (width, height) = bounds.backing_size(pixel_ratio);
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    let ctx = cairo::Context::new(&surface)?;
    ctx.scale(pixel_ratio, pixel_ratio);
    Ok((surface, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new(Bounds::new(10.0, 20.0, 120.0, 80.0), 1.0).unwrap()
    }

    fn stroke(surface: &mut Surface, from: Point, to: Point) {
        surface.begin(from);
        surface.extend(to).unwrap();
        surface.end();
    }

    #[test]
    fn starts_blank_and_idle() {
        let surface = surface();
        assert!(!surface.has_content());
        assert!(!surface.is_drawing());
    }

    #[test]
    fn content_flag_set_by_first_extend() {
        let mut surface = surface();
        surface.begin(Point::new(5.0, 5.0));
        assert!(!surface.has_content());

        assert!(surface.extend(Point::new(20.0, 20.0)).unwrap());
        assert!(surface.has_content());

        assert!(surface.extend(Point::new(30.0, 25.0)).unwrap());
        surface.end();
        assert!(surface.has_content());
    }

    #[test]
    fn extend_without_begin_is_noop() {
        let mut surface = surface();
        let blank = surface.snapshot_png().unwrap();

        assert!(!surface.extend(Point::new(40.0, 40.0)).unwrap());
        assert!(!surface.has_content());
        assert_eq!(surface.snapshot_png().unwrap(), blank);
    }

    #[test]
    fn end_is_idempotent_and_stops_extending() {
        let mut surface = surface();
        surface.begin(Point::new(1.0, 1.0));
        surface.end();
        surface.end();
        assert!(!surface.extend(Point::new(50.0, 50.0)).unwrap());
        assert!(!surface.has_content());
    }

    #[test]
    fn clear_restores_initial_pixels() {
        let mut surface = surface();
        let blank = surface.snapshot_png().unwrap();

        stroke(&mut surface, Point::new(5.0, 5.0), Point::new(60.0, 40.0));
        assert_ne!(surface.snapshot_png().unwrap(), blank);

        surface.clear().unwrap();
        assert!(!surface.has_content());
        assert_eq!(surface.snapshot_png().unwrap(), blank);
    }

    #[test]
    fn backing_store_scales_with_pixel_ratio() {
        let surface = Surface::new(Bounds::new(0.0, 0.0, 100.0, 50.0), 2.0).unwrap();
        assert_eq!(surface.backing_size(), (200, 100));

        let fallback = Surface::new(Bounds::new(0.0, 0.0, 100.0, 50.0), 0.0).unwrap();
        assert_eq!(fallback.pixel_ratio(), 1.0);
        assert_eq!(fallback.backing_size(), (100, 50));
    }

    #[test]
    fn resize_keeps_pixels_when_size_is_unchanged() {
        let mut surface = surface();
        stroke(&mut surface, Point::new(5.0, 5.0), Point::new(60.0, 40.0));

        let moved = Bounds::new(0.0, 0.0, 120.0, 80.0);
        assert!(!surface.resize(moved, 1.0).unwrap());
        assert!(surface.has_content());
        assert_eq!(surface.bounds(), moved);

        assert!(surface.resize(Bounds::new(0.0, 0.0, 60.0, 40.0), 1.0).unwrap());
        assert!(!surface.has_content());
    }

    #[test]
    fn viewport_points_map_to_surface_coordinates() {
        let surface = surface();
        assert_eq!(surface.to_surface_point(15.0, 25.0), Point::new(5.0, 5.0));
    }

    #[test]
    fn snapshot_is_png() {
        let surface = surface();
        let png = surface.snapshot().unwrap().to_png().unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }
}
