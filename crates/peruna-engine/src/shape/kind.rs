use crate::coords::Vec2;

/// Segment count used for ellipses unless a sketch overrides it.
pub const DEFAULT_ELLIPSE_SEGMENTS: u32 = 32;

/// Fewest segments an ellipse may be built with.
pub const MIN_ELLIPSE_SEGMENTS: u32 = 3;

/// Most segments an ellipse may be built with; bounds per-ellipse cost.
pub const MAX_ELLIPSE_SEGMENTS: u32 = 1024;

/// Closed set of drawable primitives, in canvas pixels.
///
/// Adding a primitive means adding a variant here and a tessellator module beside
/// this one; `tessellate` matches exhaustively so the compiler points at the gap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeKind {
    Line { from: Vec2, to: Vec2 },
    /// Center-anchored rectangle.
    Rect { center: Vec2, size: Vec2 },
    Triangle { a: Vec2, b: Vec2, c: Vec2 },
    /// Center-anchored ellipse; `size` holds the two diameters.
    Ellipse { center: Vec2, size: Vec2, segments: u32 },
}

impl ShapeKind {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line { .. } => "line",
            ShapeKind::Rect { .. } => "rect",
            ShapeKind::Triangle { .. } => "triangle",
            ShapeKind::Ellipse { .. } => "ellipse",
        }
    }

    /// Vertex count the tessellator emits for this kind.
    ///
    /// `stroked` is the resolved flag: stroke enabled *and* a positive width.
    pub fn vertex_count(&self, stroked: bool) -> usize {
        match (self, stroked) {
            (ShapeKind::Line { .. }, false) => 2,
            (ShapeKind::Line { .. }, true) => 6,
            (ShapeKind::Rect { .. }, false) => 6,
            (ShapeKind::Rect { .. }, true) => 30,
            (ShapeKind::Triangle { .. }, false) => 3,
            (ShapeKind::Triangle { .. }, true) => 21,
            (ShapeKind::Ellipse { segments, .. }, false) => 3 * effective_segments(*segments),
            (ShapeKind::Ellipse { segments, .. }, true) => 9 * effective_segments(*segments),
        }
    }
}

#[inline]
pub(crate) fn effective_segments(segments: u32) -> usize {
    segments.clamp(MIN_ELLIPSE_SEGMENTS, MAX_ELLIPSE_SEGMENTS) as usize
}
