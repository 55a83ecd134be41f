/// Straight-alpha RGBA color with components normalized to `[0, 1]`.
///
/// Sketch code usually thinks in 8-bit channel values; [`Color::rgba`] takes those
/// and the `*_255` accessors give them back.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Quick-prototyping red, also the default fill.
    pub const SMU_RED: Color = Color::new(204.0 / 255.0, 0.0, 53.0 / 255.0, 1.0);
    /// Quick-prototyping blue.
    pub const SMU_BLUE: Color = Color::new(53.0 / 255.0, 76.0 / 255.0, 161.0 / 255.0, 1.0);
    /// Default stroke.
    pub const CHARCOAL: Color = Color::new(38.0 / 255.0, 38.0 / 255.0, 38.0 / 255.0, 1.0);
    /// Default background.
    pub const DARK_GRAY: Color = Color::new(0.1, 0.1, 0.1, 1.0);

    /// Creates a color from normalized components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from channel values in `[0, 255]`.
    ///
    /// Values are divided by 255 and not clamped, matching how sketches feed
    /// noise-derived values straight in.
    #[inline]
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(r / 255.0, g / 255.0, b / 255.0, a / 255.0)
    }

    /// Opaque [`Color::rgba`].
    #[inline]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 255.0)
    }

    /// Gray level in `[0, 255]` with alpha in `[0, 255]`.
    #[inline]
    pub fn gray(level: f32, a: f32) -> Self {
        Self::rgba(level, level, level, a)
    }

    #[inline]
    pub fn r_255(self) -> f32 {
        self.r * 255.0
    }

    #[inline]
    pub fn g_255(self) -> f32 {
        self.g * 255.0
    }

    #[inline]
    pub fn b_255(self) -> f32 {
        self.b * 255.0
    }

    #[inline]
    pub fn a_255(self) -> f32 {
        self.a * 255.0
    }

    /// Channels scaled to `[0, 255]` and truncated toward zero.
    #[inline]
    pub fn to_rgba8(self) -> [i32; 4] {
        [
            self.r_255() as i32,
            self.g_255() as i32,
            self.b_255() as i32,
            self.a_255() as i32,
        ]
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color with a different normalized alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Decodes the sRGB-encoded channels to linear light. Alpha is unchanged.
    ///
    /// Needed when presenting to an `*Srgb` surface, which re-encodes on write.
    pub fn to_linear(self) -> Self {
        fn decode(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Self::new(decode(self.r), decode(self.g), decode(self.b), self.a)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_normalizes_channels() {
        let c = Color::rgba(255.0, 0.0, 51.0, 255.0);
        assert_eq!(c, Color::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn rgb_defaults_to_opaque() {
        assert_eq!(Color::rgb(10.0, 20.0, 30.0).a, 1.0);
    }

    #[test]
    fn scaled_accessors_round_trip_channel_values() {
        let c = Color::rgba(204.0, 0.0, 53.0, 128.0);
        assert!((c.r_255() - 204.0).abs() < 1e-4);
        assert!((c.b_255() - 53.0).abs() < 1e-4);
        assert!((c.a_255() - 128.0).abs() < 1e-4);
    }

    #[test]
    fn to_rgba8_truncates() {
        let c = Color::new(0.5, 1.0, 0.0, 0.999);
        assert_eq!(c.to_rgba8(), [127, 255, 0, 254]);
    }

    #[test]
    fn gray_sets_all_channels() {
        let c = Color::gray(51.0, 255.0);
        assert_eq!((c.r, c.g, c.b), (0.2, 0.2, 0.2));
    }

    #[test]
    fn to_linear_keeps_endpoints_and_alpha() {
        let c = Color::new(0.0, 1.0, 0.5, 0.25).to_linear();
        assert_eq!(c.r, 0.0);
        assert!((c.g - 1.0).abs() < 1e-6);
        assert!((c.b - 0.214).abs() < 1e-3);
        assert_eq!(c.a, 0.25);
    }
}
