use crate::paint::Color;
use crate::shape::ShapeStyle;

/// Stroke width applied to every stroked shape, in canvas pixels.
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;

/// Current drawing attributes.
///
/// Changed only by the explicit setters on [`Canvas`](super::Canvas); persists
/// across draw calls and across frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawState {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_enabled: bool,
    pub stroke_width: f32,
}

impl DrawState {
    /// Snapshot handed to the tessellator.
    #[inline]
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle {
            fill: self.fill,
            stroke: self.stroke,
            stroke_width: self.stroke_width,
            stroke_enabled: self.stroke_enabled,
        }
    }
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill: Color::SMU_RED,
            stroke: Color::CHARCOAL,
            stroke_enabled: true,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}
