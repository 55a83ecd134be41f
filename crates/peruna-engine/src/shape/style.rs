use crate::paint::Color;

/// Draw state captured by value when a shape is issued.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeStyle {
    pub fill: Color,
    pub stroke: Color,
    /// Stroke width in canvas pixels.
    pub stroke_width: f32,
    pub stroke_enabled: bool,
}

impl ShapeStyle {
    /// Whether stroke geometry is emitted. A zero width behaves like a disabled stroke.
    #[inline]
    pub fn strokes(&self) -> bool {
        self.stroke_enabled && self.stroke_width > 0.0
    }
}
