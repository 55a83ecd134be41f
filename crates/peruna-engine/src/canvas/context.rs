use crate::coords::{CanvasSize, Vec2};
use crate::math;
use crate::noise;
use crate::paint::Color;
use crate::scene::FrameBuffer;
use crate::shape::{
    tessellate, ShapeKind, DEFAULT_ELLIPSE_SEGMENTS, MAX_ELLIPSE_SEGMENTS, MIN_ELLIPSE_SEGMENTS,
};

use super::DrawState;

/// Immediate-mode drawing context for one canvas.
///
/// Owns the draw state, the canvas size and the frame buffer. Every `draw_*` call
/// captures the current state by value, tessellates against the current canvas
/// size, and appends the result; later state changes or resizes never touch shapes
/// that were already recorded.
#[derive(Debug)]
pub struct Canvas {
    size: CanvasSize,
    state: DrawState,
    background: Color,
    ellipse_segments: u32,
    frame: FrameBuffer,
}

impl Canvas {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            state: DrawState::default(),
            background: Color::DARK_GRAY,
            ellipse_segments: DEFAULT_ELLIPSE_SEGMENTS,
            frame: FrameBuffer::new(),
        }
    }

    // ── canvas size ───────────────────────────────────────────────────────

    #[inline]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Host-surface resize notification. Affects only shapes drawn afterwards.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = CanvasSize::new(width, height);
    }

    // ── draw state ────────────────────────────────────────────────────────

    #[inline]
    pub fn draw_state(&self) -> &DrawState {
        &self.state
    }

    #[inline]
    pub fn set_fill(&mut self, color: Color) {
        self.state.fill = color;
    }

    /// Fill from channel values in `[0, 255]`.
    #[inline]
    pub fn set_fill_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.set_fill(Color::rgba(r, g, b, a));
    }

    #[inline]
    pub fn set_fill_gray(&mut self, level: f32) {
        self.set_fill(Color::gray(level, 255.0));
    }

    /// Sets the stroke color and turns stroking back on.
    #[inline]
    pub fn set_stroke(&mut self, color: Color) {
        self.state.stroke = color;
        self.state.stroke_enabled = true;
    }

    #[inline]
    pub fn set_stroke_rgba(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.set_stroke(Color::rgba(r, g, b, a));
    }

    #[inline]
    pub fn set_stroke_gray(&mut self, level: f32) {
        self.set_stroke(Color::gray(level, 255.0));
    }

    #[inline]
    pub fn disable_stroke(&mut self) {
        self.state.stroke_enabled = false;
    }

    /// Color the surface is cleared to before the frame's shapes are painted.
    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    #[inline]
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    #[inline]
    pub fn set_background_gray(&mut self, level: f32) {
        self.set_background(Color::gray(level, 255.0));
    }

    #[inline]
    pub fn ellipse_segments(&self) -> u32 {
        self.ellipse_segments
    }

    /// Polygon resolution for subsequent ellipses, clamped to
    /// `MIN_ELLIPSE_SEGMENTS..=MAX_ELLIPSE_SEGMENTS`.
    pub fn set_ellipse_segments(&mut self, segments: u32) {
        self.ellipse_segments = segments.clamp(MIN_ELLIPSE_SEGMENTS, MAX_ELLIPSE_SEGMENTS);
    }

    // ── shapes ────────────────────────────────────────────────────────────

    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.record(ShapeKind::Line {
            from: Vec2::new(x1, y1),
            to: Vec2::new(x2, y2),
        });
    }

    /// Rectangle centered on `(x, y)`.
    pub fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.record(ShapeKind::Rect {
            center: Vec2::new(x, y),
            size: Vec2::new(w, h),
        });
    }

    pub fn draw_triangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.record(ShapeKind::Triangle {
            a: Vec2::new(x1, y1),
            b: Vec2::new(x2, y2),
            c: Vec2::new(x3, y3),
        });
    }

    /// Ellipse centered on `(x, y)` with diameters `w` and `h`.
    pub fn draw_ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.record(ShapeKind::Ellipse {
            center: Vec2::new(x, y),
            size: Vec2::new(w, h),
            segments: self.ellipse_segments,
        });
    }

    #[inline]
    pub fn draw_circle(&mut self, x: f32, y: f32, d: f32) {
        self.draw_ellipse(x, y, d, d);
    }

    fn record(&mut self, kind: ShapeKind) {
        let shape = tessellate(&kind, self.size, &self.state.style());
        self.frame.push(shape);
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Drops every recorded shape. The scheduler calls this at the start of each tick.
    #[inline]
    pub fn clear_frame(&mut self) {
        self.frame.clear();
    }

    #[inline]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    #[inline]
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    // ── helpers ───────────────────────────────────────────────────────────

    /// Uniform value in `[low, high]`; not reproducible between runs.
    #[inline]
    pub fn random_uniform(&self, low: f32, high: f32) -> f32 {
        math::random_uniform(low, high)
    }

    /// Uniform value in `[0, high]`.
    #[inline]
    pub fn random_to(&self, high: f32) -> f32 {
        math::random_uniform(0.0, high)
    }

    #[inline]
    pub fn map_range(&self, value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32, clamp: bool) -> f32 {
        math::map_range(value, in_lo, in_hi, out_lo, out_hi, clamp)
    }

    /// Color from channel values in `[0, 255]`.
    #[inline]
    pub fn make_color(&self, r: f32, g: f32, b: f32, a: f32) -> Color {
        Color::rgba(r, g, b, a)
    }

    /// Canonical noise in `[0, 1]`; see [`noise::noise`].
    #[inline]
    pub fn noise(&self, x: f32, y: f32, z: f32) -> f32 {
        noise::noise(x, y, z)
    }

    /// Masked-table noise in `[0, 1]`; see [`noise::noise_masked`].
    #[inline]
    pub fn noise_masked(&self, x: f32, y: f32, z: f32) -> f32 {
        noise::noise_masked(x, y, z)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasSize::default())
    }
}
