//! Cairo-based stroke rendering functions.

use super::color::Color;
use super::surface::{Point, Shadow};

/// Upper bound on the number of rings used to approximate a blurred shadow.
const MAX_SHADOW_RINGS: usize = 8;

fn set_pen(ctx: &cairo::Context, color: Color, thick: f64) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
}

/// Renders a single segment of an in-progress stroke.
pub fn render_segment(
    ctx: &cairo::Context,
    from: Point,
    to: Point,
    color: Color,
    thick: f64,
) -> Result<(), cairo::Error> {
    set_pen(ctx, color, thick);
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke()
}

/// Render freehand stroke (polyline through points)
///
/// Paths with fewer than two points have no drawable area and are skipped.
pub fn render_path(
    ctx: &cairo::Context,
    points: &[Point],
    color: Color,
    thick: f64,
) -> Result<(), cairo::Error> {
    let Some((first, rest)) = points.split_first() else {
        return Ok(());
    };
    if rest.is_empty() {
        return Ok(());
    }

    set_pen(ctx, color, thick);
    ctx.move_to(first.x, first.y);
    for point in rest {
        ctx.line_to(point.x, point.y);
    }
    ctx.stroke()
}

/// Renders a soft shadow around a path, beneath whatever is already painted.
///
/// Cairo has no blur primitive, so the shadow is built from concentric
/// translucent strokes that grow out to `line_width + 2 * blur`. They are
/// composited with `DestOver`, which keeps earlier pixels on top.
pub fn render_soft_shadow(
    ctx: &cairo::Context,
    points: &[Point],
    thick: f64,
    shadow: &Shadow,
) -> Result<(), cairo::Error> {
    if shadow.blur <= 0.0 || shadow.color.a <= 0.0 || points.len() < 2 {
        return Ok(());
    }

    let rings = (shadow.blur.ceil() as usize).clamp(1, MAX_SHADOW_RINGS);
    let ring_color = shadow.color.with_alpha_scaled(1.0 / (rings as f64 + 1.0));

    ctx.save()?;
    ctx.set_operator(cairo::Operator::DestOver);
    for ring in 1..=rings {
        let spread = shadow.blur * ring as f64 / rings as f64;
        render_path(ctx, points, ring_color, thick + spread * 2.0)?;
    }
    ctx.restore()
}

/// Erases the whole target to transparent.
pub fn clear_all(ctx: &cairo::Context) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Clear);
    ctx.paint()?;
    ctx.restore()
}
