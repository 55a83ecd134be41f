use crate::coords::Vec2;

/// Column-major 4x4 matrix, laid out the way WGSL `mat4x4<f32>` expects.
pub type Mat4 = [[f32; 4]; 4];

pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Per-shape transform applied in NDC on the GPU.
///
/// Composes as `translate * rotate * scale`: scale first, then rotate about the
/// NDC origin, then translate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    /// Translation in NDC units.
    pub translation: Vec2,
    /// Counter-clockwise rotation in radians.
    pub rotation: f32,
    pub scale: Vec2,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec2::zero(),
        rotation: 0.0,
        scale: Vec2::new(1.0, 1.0),
    };

    #[inline]
    pub fn translated(self, translation: Vec2) -> Self {
        Self { translation, ..self }
    }

    #[inline]
    pub fn rotated(self, rotation: f32) -> Self {
        Self { rotation, ..self }
    }

    #[inline]
    pub fn scaled(self, scale: Vec2) -> Self {
        Self { scale, ..self }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn matrix(&self) -> Mat4 {
        let (sin, cos) = self.rotation.sin_cos();
        let Vec2 { x: sx, y: sy } = self.scale;
        let Vec2 { x: tx, y: ty } = self.translation;

        [
            [cos * sx, sin * sx, 0.0, 0.0],
            [-sin * sy, cos * sy, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [tx, ty, 0.0, 1.0],
        ]
    }

    /// Applies the transform to an NDC point on the CPU.
    pub fn apply(&self, p: Vec2) -> Vec2 {
        let m = self.matrix();
        Vec2::new(
            m[0][0] * p.x + m[1][0] * p.y + m[3][0],
            m[0][1] * p.x + m[1][1] * p.y + m[3][1],
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    #[test]
    fn default_is_identity_matrix() {
        assert!(Transform::default().is_identity());
        assert_eq!(Transform::default().matrix(), IDENTITY);
    }

    #[test]
    fn translation_lands_in_last_column() {
        let m = Transform::IDENTITY.translated(Vec2::new(0.25, -0.5)).matrix();
        assert_eq!(m[3], [0.25, -0.5, 0.0, 1.0]);
    }

    #[test]
    fn scales_before_rotating_before_translating() {
        let t = Transform {
            translation: Vec2::new(0.1, 0.2),
            rotation: FRAC_PI_2,
            scale: Vec2::new(2.0, 1.0),
        };
        // (0.5, 0) -> scale (1, 0) -> rotate (0, 1) -> translate (0.1, 1.2)
        assert!(close(t.apply(Vec2::new(0.5, 0.0)), Vec2::new(0.1, 1.2)));
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        let t = Transform::IDENTITY.rotated(FRAC_PI_2);
        assert!(close(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }
}
