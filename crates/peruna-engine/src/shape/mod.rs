//! Shape tessellation.
//!
//! Turns a pixel-space [`ShapeKind`] plus the captured [`ShapeStyle`] into a
//! [`TessellatedShape`]: a triangle list in NDC with one [`VertexRole`] tag per vertex.
//!
//! Stroke geometry never miters or caps; corner gaps and overlaps are expected.
//! Construction is infallible: degenerate or NaN input produces degenerate geometry.
//!
//! Vertex counts (`stroked` means enabled and width > 0):
//!
//! | kind     | unstroked | stroked |
//! |----------|-----------|---------|
//! | line     | 2         | 6       |
//! | rect     | 6         | 30      |
//! | triangle | 3         | 21      |
//! | ellipse  | 3n        | 9n      |

mod ellipse;
mod kind;
mod line;
mod rect;
mod style;
mod tessellated;
mod transform;
mod triangle;

pub use kind::{ShapeKind, DEFAULT_ELLIPSE_SEGMENTS, MAX_ELLIPSE_SEGMENTS, MIN_ELLIPSE_SEGMENTS};
pub use style::ShapeStyle;
pub use tessellated::{TessellatedShape, VertexRole};
pub use transform::{Mat4, Transform, IDENTITY};

use crate::coords::CanvasSize;

/// Tessellates `kind` against the canvas size at this instant.
pub fn tessellate(kind: &ShapeKind, canvas: CanvasSize, style: &ShapeStyle) -> TessellatedShape {
    match *kind {
        ShapeKind::Line { from, to } => line::tessellate(from, to, canvas, style),
        ShapeKind::Rect { center, size } => rect::tessellate(center, size, canvas, style),
        ShapeKind::Triangle { a, b, c } => triangle::tessellate(a, b, c, canvas, style),
        ShapeKind::Ellipse { center, size, segments } => {
            ellipse::tessellate(center, size, segments, canvas, style)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn kinds() -> [ShapeKind; 4] {
        [
            ShapeKind::Line { from: Vec2::new(10.0, 20.0), to: Vec2::new(80.0, 60.0) },
            ShapeKind::Rect { center: Vec2::new(50.0, 40.0), size: Vec2::new(30.0, 20.0) },
            ShapeKind::Triangle {
                a: Vec2::new(5.0, 5.0),
                b: Vec2::new(70.0, 15.0),
                c: Vec2::new(30.0, 75.0),
            },
            ShapeKind::Ellipse {
                center: Vec2::new(60.0, 30.0),
                size: Vec2::new(25.0, 40.0),
                segments: DEFAULT_ELLIPSE_SEGMENTS,
            },
        ]
    }

    fn style(stroke_width: f32, stroke_enabled: bool) -> ShapeStyle {
        ShapeStyle {
            fill: Color::SMU_RED,
            stroke: Color::CHARCOAL,
            stroke_width,
            stroke_enabled,
        }
    }

    #[test]
    fn disabled_or_zero_width_stroke_is_fill_only() {
        let canvas = CanvasSize::new(120.0, 90.0);
        for kind in kinds() {
            for st in [style(3.0, false), style(0.0, true), style(0.0, false)] {
                let shape = tessellate(&kind, canvas, &st);
                assert_eq!(shape.vertex_count(), kind.vertex_count(false), "{}", kind.name());
                assert_eq!(shape.roles().len(), shape.vertex_count());
                assert!(shape.roles().iter().all(|r| *r == VertexRole::Fill), "{}", kind.name());
            }
        }
    }

    #[test]
    fn stroked_counts_match_table() {
        let canvas = CanvasSize::new(120.0, 90.0);
        let expected = [6, 30, 21, 9 * DEFAULT_ELLIPSE_SEGMENTS as usize];
        for (kind, want) in kinds().iter().zip(expected) {
            let shape = tessellate(kind, canvas, &style(3.0, true));
            assert_eq!(shape.vertex_count(), want, "{}", kind.name());
            assert_eq!(shape.roles().len(), want, "{}", kind.name());
        }
    }

    #[test]
    fn unstroked_counts_match_table() {
        let canvas = CanvasSize::new(120.0, 90.0);
        let expected = [2, 6, 3, 3 * DEFAULT_ELLIPSE_SEGMENTS as usize];
        for (kind, want) in kinds().iter().zip(expected) {
            assert_eq!(tessellate(kind, canvas, &style(3.0, false)).vertex_count(), want);
        }
    }

    #[test]
    fn tessellated_shape_keeps_kind_and_style() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let kind = kinds()[1];
        let shape = tessellate(&kind, canvas, &style(3.0, true));
        assert_eq!(*shape.kind(), kind);
        assert_eq!(shape.fill(), Color::SMU_RED);
        assert_eq!(shape.stroke(), Color::CHARCOAL);
        assert!(shape.stroke_enabled());
        assert!(shape.transform().is_identity());
    }

    #[test]
    fn nan_input_is_silently_degenerate() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let kind = ShapeKind::Rect { center: Vec2::new(f32::NAN, 0.0), size: Vec2::new(10.0, 10.0) };
        let shape = tessellate(&kind, canvas, &style(3.0, true));
        assert_eq!(shape.vertex_count(), 30);
    }
}
