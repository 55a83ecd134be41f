use crate::coords::{CanvasSize, Vec2};

use super::tessellated::MeshBuilder;
use super::{ShapeKind, ShapeStyle, TessellatedShape, VertexRole};

/// Line from `from` to `to`.
///
/// Stroked: one quad whose long edges sit `length_to_ndc(stroke_width)` on either side
/// of the segment (half the width each way on a square canvas). Unstroked: the two
/// endpoints as a degenerate pair that rasterizes nothing.
///
/// Lines have no interior, so the stroke color doubles as the fill color.
/// A zero-length line divides by zero and yields NaN (invisible) geometry.
pub(super) fn tessellate(from: Vec2, to: Vec2, canvas: CanvasSize, style: &ShapeStyle) -> TessellatedShape {
    let kind = ShapeKind::Line { from, to };
    let stroked = style.strokes();

    let p0 = canvas.to_ndc(from);
    let p1 = canvas.to_ndc(to);

    let mut mesh = MeshBuilder::with_capacity(kind.vertex_count(stroked));

    if stroked {
        let dir = p1 - p0;
        let n = dir.perp() / dir.length() * canvas.length_to_ndc(style.stroke_width);
        mesh.quad(p0 + n, p1 + n, p0 - n, p1 - n, VertexRole::Stroke);
    } else {
        mesh.vertex(p0, VertexRole::Fill);
        mesh.vertex(p1, VertexRole::Fill);
    }

    TessellatedShape::new(kind, mesh, style.stroke, style.stroke, style.stroke_enabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::from_ndc;
    use crate::paint::Color;

    fn style(stroke_width: f32, stroke_enabled: bool) -> ShapeStyle {
        ShapeStyle {
            fill: Color::SMU_RED,
            stroke: Color::SMU_BLUE,
            stroke_width,
            stroke_enabled,
        }
    }

    #[test]
    fn stroke_quad_is_offset_half_width_each_side() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let shape = tessellate(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), canvas, &style(10.0, true));

        assert_eq!(shape.vertex_count(), 6);
        assert!(shape.roles().iter().all(|r| *r == VertexRole::Stroke));

        let mut ys: Vec<f32> = shape
            .positions()
            .iter()
            .map(|p| from_ndc(*p, canvas.width, canvas.height).y)
            .collect();
        ys.sort_by(f32::total_cmp);
        ys.dedup_by(|a, b| (*a - *b).abs() < 1e-4);

        assert_eq!(ys.len(), 2);
        assert!((ys[0] + 5.0).abs() < 1e-4, "upper edge at {}", ys[0]);
        assert!((ys[1] - 5.0).abs() < 1e-4, "lower edge at {}", ys[1]);
    }

    #[test]
    fn stroke_quad_spans_endpoints() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let shape = tessellate(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), canvas, &style(10.0, true));
        let xs: Vec<f32> = shape
            .positions()
            .iter()
            .map(|p| from_ndc(*p, canvas.width, canvas.height).x)
            .collect();
        assert!(xs.iter().all(|x| x.abs() < 1e-4 || (x - 100.0).abs() < 1e-4));
    }

    #[test]
    fn unstroked_line_is_two_fill_endpoints() {
        let canvas = CanvasSize::new(200.0, 100.0);
        let shape = tessellate(Vec2::new(50.0, 50.0), Vec2::new(150.0, 25.0), canvas, &style(3.0, false));
        assert_eq!(shape.positions(), &[Vec2::new(-0.5, 0.0), Vec2::new(0.5, 0.5)]);
        assert_eq!(shape.roles(), &[VertexRole::Fill, VertexRole::Fill]);
    }

    #[test]
    fn uses_stroke_color_for_fill() {
        let shape = tessellate(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            CanvasSize::new(100.0, 100.0),
            &style(3.0, true),
        );
        assert_eq!(shape.fill(), Color::SMU_BLUE);
        assert_eq!(shape.stroke(), Color::SMU_BLUE);
    }

    #[test]
    fn zero_length_line_does_not_panic() {
        let shape = tessellate(
            Vec2::new(5.0, 5.0),
            Vec2::new(5.0, 5.0),
            CanvasSize::new(100.0, 100.0),
            &style(3.0, true),
        );
        assert_eq!(shape.vertex_count(), 6);
        assert!(shape.positions().iter().any(|p| !p.is_finite()));
    }
}
