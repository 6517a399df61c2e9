//! Cairo-based rendering of a projected [`Scene`].

use super::color::Color;
use super::scene::{Preview, Scene, ScreenShape, SnapMarker};
use super::shape::ShapeKind;
use crate::util;
use crate::view::ScreenPoint;

/// Stroke settings used for one paint pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Color of committed shapes and rings
    pub stroke: Color,
    /// Color of the in-progress preview
    pub preview: Color,
    /// Color of the snap indicator
    pub snap: Color,
    /// Line width in pixels
    pub thickness: f64,
}

/// Fills the whole surface with the canvas background.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    color.apply(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the surface as-is
}

/// Renders committed shapes, rings, the preview and the snap marker, in that order.
pub fn render_scene(ctx: &cairo::Context, scene: &Scene, style: &RenderStyle) {
    for shape in &scene.shapes {
        render_shape(ctx, shape, style.stroke, style.thickness);
    }

    for ring in &scene.rings {
        render_polyline(ctx, ring, style.stroke, style.thickness);
    }

    if let Some(preview) = &scene.preview {
        render_preview(ctx, preview, style);
    }

    if let Some(marker) = &scene.snap {
        render_snap_marker(ctx, marker, style.snap);
    }
}

/// Renders a single projected two-point shape.
pub fn render_shape(ctx: &cairo::Context, shape: &ScreenShape, color: Color, thick: f64) {
    let ScreenShape { kind, p1, p2 } = *shape;
    match kind {
        ShapeKind::Line => render_line(ctx, p1, p2, color, thick),
        ShapeKind::Rect => render_rect(ctx, p1, p2, color, thick),
        ShapeKind::Ellipse => render_ellipse(ctx, p1, p2, color, thick),
    }
}

fn render_preview(ctx: &cairo::Context, preview: &Preview, style: &RenderStyle) {
    let color = style.preview;
    let thick = style.thickness;

    match preview {
        Preview::TwoPoint { kind, points } => match points.as_slice() {
            [p1, p2] => render_shape(
                ctx,
                &ScreenShape {
                    kind: *kind,
                    p1: *p1,
                    p2: *p2,
                },
                color,
                thick,
            ),
            _ => render_vertex_dots(ctx, points, color, thick),
        },
        Preview::Polyline { points } => {
            render_polyline(ctx, points, color, thick);
            render_vertex_dots(ctx, points, color, thick);
        }
        Preview::RegularPolygon {
            points,
            ring,
            circle,
        } => {
            if let Some((center, radius)) = circle {
                let _ = ctx.save();
                ctx.set_dash(&[4.0, 4.0], 0.0);
                color.with_alpha(color.a * 0.5).apply(ctx);
                ctx.set_line_width(1.0);
                ctx.new_sub_path();
                ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    *radius,
                    0.0,
                    std::f64::consts::PI * 2.0,
                );
                let _ = ctx.stroke();
                let _ = ctx.restore();
            }
            render_polyline(ctx, ring, color, thick);
            render_vertex_dots(ctx, points, color, thick);
        }
    }
}

/// Render a polyline through screen points
///
/// Accepts a borrowed slice; rings are closed by their repeated last point.
pub fn render_polyline(ctx: &cairo::Context, points: &[ScreenPoint], color: Color, thick: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x as f64, first.y as f64);
    for p in rest {
        ctx.line_to(p.x as f64, p.y as f64);
    }

    let _ = ctx.stroke();
}

/// Render a straight line
fn render_line(ctx: &cairo::Context, p1: ScreenPoint, p2: ScreenPoint, color: Color, thick: f64) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(p1.x as f64, p1.y as f64);
    ctx.line_to(p2.x as f64, p2.y as f64);
    let _ = ctx.stroke();
}

/// Render a rectangle (outline) spanned by two opposite corners
fn render_rect(ctx: &cairo::Context, p1: ScreenPoint, p2: ScreenPoint, color: Color, thick: f64) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    let (x, y, w, h) = util::normalized_rect(p1.x, p1.y, p2.x, p2.y);
    ctx.rectangle(x, y, w, h);
    let _ = ctx.stroke();
}

/// Render an ellipse inscribed in the box spanned by two corners
fn render_ellipse(
    ctx: &cairo::Context,
    p1: ScreenPoint,
    p2: ScreenPoint,
    color: Color,
    thick: f64,
) {
    let (cx, cy, rx, ry) = util::ellipse_from_corners(p1.x, p1.y, p2.x, p2.y);

    // Flat boxes collapse to a segment; scaling by zero would break the matrix.
    if rx == 0.0 || ry == 0.0 {
        render_line(ctx, p1, p2, color, thick);
        return;
    }

    color.apply(ctx);
    ctx.set_line_width(thick);

    let _ = ctx.save();
    ctx.translate(cx, cy);
    ctx.scale(rx, ry);
    ctx.new_sub_path();
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.restore();

    let _ = ctx.stroke();
}

fn render_vertex_dots(ctx: &cairo::Context, points: &[ScreenPoint], color: Color, thick: f64) {
    color.apply(ctx);
    let radius = (thick * 1.5).max(2.0);
    for p in points {
        ctx.new_sub_path();
        ctx.arc(
            p.x as f64,
            p.y as f64,
            radius,
            0.0,
            std::f64::consts::PI * 2.0,
        );
    }
    let _ = ctx.fill();
}

/// Renders the snap indicator as an outlined circle with a center dot.
pub fn render_snap_marker(ctx: &cairo::Context, marker: &SnapMarker, color: Color) {
    let radius = marker.radius.max(1.0);
    let (x, y) = (marker.center.x as f64, marker.center.y as f64);
    let _ = ctx.save();

    color.apply(ctx);
    ctx.set_line_width(1.5);
    ctx.new_sub_path();
    ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.stroke();

    ctx.new_sub_path();
    ctx.arc(x, y, 1.5, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.fill();

    let _ = ctx.restore();
}
