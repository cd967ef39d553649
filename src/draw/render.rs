//! Cairo-based rendering functions for strokes and backgrounds.

use super::color::Color;
use super::stroke::{Point, StrokeStyle};

/// Fills the entire surface with an opaque background color.
///
/// Uses the `Source` operator so any previous pixels (including alpha) are replaced,
/// which makes a cleared surface byte-identical to a freshly created one.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to fill
/// * `color` - Background color (forced opaque)
pub fn fill_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    let color = color.opaque();
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let result = ctx.paint();
    ctx.restore()?;
    result
}

/// Renders one straight segment of a freehand stroke.
///
/// Strokes are never retained, so each pointer move paints the segment from the
/// previous point to the current one immediately. Round caps make consecutive
/// segments join without gaps.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `from` - Previous point of the stroke (logical pixels)
/// * `to` - New point of the stroke (logical pixels)
/// * `style` - Stroke color and width
pub fn render_segment(
    ctx: &cairo::Context,
    from: Point,
    to: Point,
    style: &StrokeStyle,
) -> Result<(), cairo::Error> {
    let color = style.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(style.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke()
}
