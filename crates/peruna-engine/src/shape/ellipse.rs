use core::f32::consts::TAU;

use crate::coords::{CanvasSize, Vec2};

use super::kind::effective_segments;
use super::tessellated::MeshBuilder;
use super::{ShapeKind, ShapeStyle, TessellatedShape, VertexRole};

/// Center-anchored ellipse approximated by a `segments`-sided polygon.
///
/// Unstroked: a triangle fan from the center (`3 * segments` vertices).
/// Stroked: a ring of quads between the outline and an outline shrunk by the stroke
/// width (axis-corrected, as for rectangles), then the fan over the inner outline
/// (`9 * segments` vertices).
pub(super) fn tessellate(
    center: Vec2,
    size: Vec2,
    segments: u32,
    canvas: CanvasSize,
    style: &ShapeStyle,
) -> TessellatedShape {
    let kind = ShapeKind::Ellipse { center, size, segments };
    let stroked = style.strokes();
    let n = effective_segments(segments);

    let c = canvas.to_ndc(center);
    let radii = canvas.extent_to_ndc(Vec2::new(size.x.abs(), size.y.abs())) * 0.5;

    let mut mesh = MeshBuilder::with_capacity(kind.vertex_count(stroked));

    let inner = if stroked {
        let inset = canvas.extent_to_ndc(Vec2::new(style.stroke_width, style.stroke_width));
        let inner = Vec2::new((radii.x - inset.x).max(0.0), (radii.y - inset.y).max(0.0));

        for i in 0..n {
            let (o0, o1) = (point(c, radii, i, n), point(c, radii, i + 1, n));
            let (i0, i1) = (point(c, inner, i, n), point(c, inner, i + 1, n));
            mesh.quad(o0, o1, i0, i1, VertexRole::Stroke);
        }
        inner
    } else {
        radii
    };

    for i in 0..n {
        mesh.triangle(c, point(c, inner, i, n), point(c, inner, i + 1, n), VertexRole::Fill);
    }

    debug_assert_eq!(mesh.len(), kind.vertex_count(stroked));
    TessellatedShape::new(kind, mesh, style.fill, style.stroke, style.stroke_enabled)
}

/// Outline point `i` of `n`; `i == n` wraps to the first point exactly.
#[inline]
fn point(center: Vec2, radii: Vec2, i: usize, n: usize) -> Vec2 {
    let theta = TAU * (i % n) as f32 / n as f32;
    let (sin, cos) = theta.sin_cos();
    Vec2::new(center.x + radii.x * cos, center.y + radii.y * sin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn style(stroke_width: f32, stroke_enabled: bool) -> ShapeStyle {
        ShapeStyle {
            fill: Color::SMU_BLUE,
            stroke: Color::SMU_RED,
            stroke_width,
            stroke_enabled,
        }
    }

    #[test]
    fn fill_only_fan_has_three_vertices_per_segment() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let shape = tessellate(Vec2::new(50.0, 50.0), Vec2::new(40.0, 20.0), 24, canvas, &style(3.0, false));
        assert_eq!(shape.vertex_count(), 72);
        assert!(shape.roles().iter().all(|r| *r == VertexRole::Fill));
    }

    #[test]
    fn stroked_ellipse_is_ring_plus_fan() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let shape = tessellate(Vec2::new(50.0, 50.0), Vec2::new(40.0, 40.0), 32, canvas, &style(3.0, true));
        assert_eq!(shape.vertex_count(), 288);
        assert_eq!(shape.roles().iter().filter(|r| **r == VertexRole::Stroke).count(), 192);
    }

    #[test]
    fn outline_lies_on_the_ellipse() {
        let canvas = CanvasSize::new(200.0, 100.0);
        let shape = tessellate(Vec2::new(100.0, 50.0), Vec2::new(80.0, 40.0), 32, canvas, &style(0.0, true));
        // Radii in NDC: 40px / 100px half-width, 20px / 50px half-height.
        let (rx, ry) = (0.4, 0.4);
        for p in shape.positions().iter().skip(1).step_by(3) {
            let d = (p.x / rx).powi(2) + (p.y / ry).powi(2);
            assert!((d - 1.0).abs() < 1e-4, "{p:?} off the outline ({d})");
        }
    }

    #[test]
    fn segment_count_is_clamped() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let shape = tessellate(Vec2::new(50.0, 50.0), Vec2::new(10.0, 10.0), 0, canvas, &style(3.0, false));
        assert_eq!(shape.vertex_count(), 9);
    }

    #[test]
    fn fan_closes_on_first_point() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let shape = tessellate(Vec2::new(50.0, 50.0), Vec2::new(30.0, 30.0), 8, canvas, &style(0.0, false));
        let first = shape.positions()[1];
        let last = shape.positions()[shape.vertex_count() - 1];
        assert_eq!(first, last);
    }
}
