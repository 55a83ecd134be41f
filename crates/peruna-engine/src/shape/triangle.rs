use crate::coords::{CanvasSize, Vec2};

use super::tessellated::MeshBuilder;
use super::{ShapeKind, ShapeStyle, TessellatedShape, VertexRole};

/// Triangle through `a`, `b`, `c`.
///
/// Stroked: each edge becomes its own quad offset `length_to_ndc(stroke_width)` to
/// both sides, with no miter between edges, followed by the original triangle as fill.
pub(super) fn tessellate(a: Vec2, b: Vec2, c: Vec2, canvas: CanvasSize, style: &ShapeStyle) -> TessellatedShape {
    let kind = ShapeKind::Triangle { a, b, c };
    let stroked = style.strokes();

    let p = [canvas.to_ndc(a), canvas.to_ndc(b), canvas.to_ndc(c)];

    let mut mesh = MeshBuilder::with_capacity(kind.vertex_count(stroked));

    if stroked {
        let half_width = canvas.length_to_ndc(style.stroke_width);
        for i in 0..3 {
            let from = p[i];
            let to = p[(i + 1) % 3];
            let edge = to - from;
            let n = edge.perp() / edge.length() * half_width;
            mesh.quad(from + n, to + n, from - n, to - n, VertexRole::Stroke);
        }
    }

    mesh.triangle(p[0], p[1], p[2], VertexRole::Fill);

    TessellatedShape::new(kind, mesh, style.fill, style.stroke, style.stroke_enabled)
}
