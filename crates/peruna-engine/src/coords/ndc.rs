use super::Vec2;

/// Converts canvas pixels (origin top-left, +Y down) into NDC (origin center, +Y up).
///
/// Points inside `[0, w] x [0, h]` land inside `[-1, 1] x [-1, 1]`.
///
/// A zero-sized canvas divides by zero; callers must not tessellate before the
/// host surface reports a real size.
#[inline]
pub fn to_ndc(x: f32, y: f32, canvas_w: f32, canvas_h: f32) -> Vec2 {
    let hw = canvas_w / 2.0;
    let hh = canvas_h / 2.0;
    Vec2::new((x - hw) / hw, (hh - y) / hh)
}

/// Converts a pixel length (stroke widths) into NDC using the shorter canvas side.
#[inline]
pub fn length_to_ndc(px: f32, canvas_w: f32, canvas_h: f32) -> f32 {
    px / canvas_w.min(canvas_h)
}

/// Inverse of [`to_ndc`].
#[inline]
pub fn from_ndc(ndc: Vec2, canvas_w: f32, canvas_h: f32) -> Vec2 {
    let hw = canvas_w / 2.0;
    let hh = canvas_h / 2.0;
    Vec2::new(ndc.x * hw + hw, hh - ndc.y * hh)
}
