use super::{length_to_ndc, to_ndc, Vec2};

/// Canvas size in logical pixels.
///
/// Updated only by the host surface on resize. Every shape construction reads it
/// exactly once, so a resize never changes geometry that was already tessellated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Canvas center in pixels.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Maps a pixel-space point into NDC.
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> Vec2 {
        to_ndc(p.x, p.y, self.width, self.height)
    }

    /// Maps a pixel length into an aspect-independent NDC length.
    #[inline]
    pub fn length_to_ndc(self, px: f32) -> f32 {
        length_to_ndc(px, self.width, self.height)
    }

    /// Pixel extent → NDC extent along each axis (`2 * px / dimension`).
    ///
    /// Unlike [`length_to_ndc`](Self::length_to_ndc) this is axis-corrected, so a
    /// `(w, h)` pixel box keeps its pixel proportions on a non-square canvas.
    #[inline]
    pub fn extent_to_ndc(self, size: Vec2) -> Vec2 {
        Vec2::new(2.0 * size.x / self.width, 2.0 * size.y / self.height)
    }
}

impl Default for CanvasSize {
    /// Matches the size a canvas reports before the host surface sends its first resize.
    fn default() -> Self {
        Self::new(300.0, 300.0)
    }
}
