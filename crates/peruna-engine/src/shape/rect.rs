use crate::coords::{CanvasSize, Vec2};

use super::tessellated::MeshBuilder;
use super::{ShapeKind, ShapeStyle, TessellatedShape, VertexRole};

/// Center-anchored rectangle.
///
/// Stroked rectangles are a picture frame: the inner rectangle is inset by the
/// stroke width on every side (axis-corrected, so the band is the same pixel
/// thickness on all four sides), the band is four trapezoids of two triangles each,
/// and the inner rectangle is the fill. An inset larger than half the rectangle
/// collapses the inner rectangle onto the center line.
pub(super) fn tessellate(center: Vec2, size: Vec2, canvas: CanvasSize, style: &ShapeStyle) -> TessellatedShape {
    let kind = ShapeKind::Rect { center, size };
    let stroked = style.strokes();

    let c = canvas.to_ndc(center);
    let half = canvas.extent_to_ndc(Vec2::new(size.x.abs(), size.y.abs())) * 0.5;

    let left = c.x - half.x;
    let right = c.x + half.x;
    let top = c.y + half.y;
    let bottom = c.y - half.y;

    let o_lb = Vec2::new(left, bottom);
    let o_rb = Vec2::new(right, bottom);
    let o_lt = Vec2::new(left, top);
    let o_rt = Vec2::new(right, top);

    let mut mesh = MeshBuilder::with_capacity(kind.vertex_count(stroked));

    if stroked {
        let inset = canvas.extent_to_ndc(Vec2::new(style.stroke_width, style.stroke_width));

        let i_left = (left + inset.x).min(c.x);
        let i_right = (right - inset.x).max(c.x);
        let i_top = (top - inset.y).max(c.y);
        let i_bottom = (bottom + inset.y).min(c.y);

        let i_lb = Vec2::new(i_left, i_bottom);
        let i_rb = Vec2::new(i_right, i_bottom);
        let i_lt = Vec2::new(i_left, i_top);
        let i_rt = Vec2::new(i_right, i_top);

        // bottom, right, top, left
        mesh.quad(o_lb, o_rb, i_lb, i_rb, VertexRole::Stroke);
        mesh.quad(o_rb, o_rt, i_rb, i_rt, VertexRole::Stroke);
        mesh.quad(o_rt, o_lt, i_rt, i_lt, VertexRole::Stroke);
        mesh.quad(o_lt, o_lb, i_lt, i_lb, VertexRole::Stroke);

        mesh.quad(i_lb, i_rb, i_lt, i_rt, VertexRole::Fill);
    } else {
        mesh.quad(o_lb, o_rb, o_lt, o_rt, VertexRole::Fill);
    }

    TessellatedShape::new(kind, mesh, style.fill, style.stroke, style.stroke_enabled)
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

    fn pixel_bounds<I: Iterator<Item = Vec2>>(points: I, canvas: CanvasSize) -> (f32, f32, f32, f32) {
        points
            .map(|p| from_ndc(p, canvas.width, canvas.height))
            .fold((f32::MAX, f32::MAX, f32::MIN, f32::MIN), |(x0, y0, x1, y1), p| {
                (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y))
            })
    }

    fn approx(a: (f32, f32, f32, f32), b: (f32, f32, f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3 && (a.2 - b.2).abs() < 1e-3 && (a.3 - b.3).abs() < 1e-3
    }

    #[test]
    fn unstroked_rect_covers_pixel_box() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let shape = tessellate(Vec2::new(50.0, 50.0), Vec2::new(20.0, 20.0), canvas, &style(3.0, false));

        assert_eq!(shape.vertex_count(), 6);
        assert!(shape.roles().iter().all(|r| *r == VertexRole::Fill));

        let xs: Vec<f32> = shape.positions().iter().map(|p| p.x).collect();
        let ys: Vec<f32> = shape.positions().iter().map(|p| p.y).collect();
        for v in xs.iter().chain(&ys) {
            assert!((v.abs() - 0.2).abs() < 1e-6, "unexpected NDC coordinate {v}");
        }
        assert!(approx(pixel_bounds(shape.positions().iter().copied(), canvas), (40.0, 40.0, 60.0, 60.0)));
    }

    #[test]
    fn keeps_pixel_proportions_on_wide_canvas() {
        let canvas = CanvasSize::new(400.0, 100.0);
        let shape = tessellate(Vec2::new(200.0, 50.0), Vec2::new(40.0, 40.0), canvas, &style(0.0, true));
        assert!(approx(pixel_bounds(shape.positions().iter().copied(), canvas), (180.0, 30.0, 220.0, 70.0)));
    }

    #[test]
    fn stroked_rect_is_frame_plus_inset_fill() {
        let canvas = CanvasSize::new(200.0, 100.0);
        let shape = tessellate(Vec2::new(100.0, 50.0), Vec2::new(60.0, 40.0), canvas, &style(5.0, true));

        assert_eq!(shape.vertex_count(), 30);
        assert_eq!(shape.roles().iter().filter(|r| **r == VertexRole::Stroke).count(), 24);
        assert!(shape.roles()[24..].iter().all(|r| *r == VertexRole::Fill));

        let outer = pixel_bounds(shape.positions_with(VertexRole::Stroke), canvas);
        let inner = pixel_bounds(shape.positions_with(VertexRole::Fill), canvas);
        assert!(approx(outer, (70.0, 30.0, 130.0, 70.0)), "outer {outer:?}");
        assert!(approx(inner, (75.0, 35.0, 125.0, 65.0)), "inner {inner:?}");
    }

    #[test]
    fn oversized_stroke_collapses_inner_rect() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let shape = tessellate(Vec2::new(50.0, 50.0), Vec2::new(4.0, 4.0), canvas, &style(10.0, true));
        assert_eq!(shape.vertex_count(), 30);
        for p in shape.positions_with(VertexRole::Fill) {
            assert_eq!(p, Vec2::zero());
        }
    }

    #[test]
    fn negative_size_is_mirrored() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let a = tessellate(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0), canvas, &style(0.0, false));
        let b = tessellate(Vec2::new(50.0, 50.0), Vec2::new(-20.0, -10.0), canvas, &style(0.0, false));
        assert_eq!(a.positions(), b.positions());
    }
}
