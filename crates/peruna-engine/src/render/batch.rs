//! CPU-side packing of a frame buffer into GPU-ready arrays.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;
use crate::scene::FrameBuffer;
use crate::shape::TessellatedShape;

// ── vertex ────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct ShapeVertex {
    pub pos: [f32; 2],
    /// 0 = fill, 1 = stroke.
    pub role: f32,
}

impl ShapeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32    // role
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── per-shape uniforms ────────────────────────────────────────────────────

/// Mirrors `Shape` in `shape.wgsl` (112 bytes, mat4 at offset 48).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct ShapeUniforms {
    pub fill: [f32; 4],
    pub stroke: [f32; 4],
    pub has_stroke: u32,
    pub _pad: [u32; 3],
    pub transform: [[f32; 4]; 4],
}

impl ShapeUniforms {
    fn new(shape: &TessellatedShape, linear: bool) -> Self {
        let encode = |c: Color| (if linear { c.to_linear() } else { c }).to_array();
        Self {
            fill: encode(shape.fill()),
            stroke: encode(shape.stroke()),
            has_stroke: shape.stroke_enabled() as u32,
            _pad: [0; 3],
            transform: shape.transform().matrix(),
        }
    }
}

// ── batch ─────────────────────────────────────────────────────────────────

/// Everything one frame uploads: a shared vertex array plus one uniform block
/// and one vertex range per shape.
#[derive(Debug, Default)]
pub(super) struct ShapeBatch {
    pub vertices: Vec<ShapeVertex>,
    pub uniforms: Vec<ShapeUniforms>,
    pub draws: Vec<Range<u32>>,
}

impl ShapeBatch {
    pub fn build(frame: &FrameBuffer, linear: bool) -> Self {
        let mut batch = Self {
            vertices: Vec::with_capacity(frame.vertex_count()),
            uniforms: Vec::with_capacity(frame.len()),
            draws: Vec::with_capacity(frame.len()),
        };

        for shape in frame.iter() {
            if shape.vertex_count() == 0 {
                continue;
            }
            let start = batch.vertices.len() as u32;
            batch.vertices.extend(
                shape
                    .positions()
                    .iter()
                    .zip(shape.roles())
                    .map(|(p, role)| ShapeVertex {
                        pos: [p.x, p.y],
                        role: role.as_f32(),
                    }),
            );
            let end = batch.vertices.len() as u32;

            batch.uniforms.push(ShapeUniforms::new(shape, linear));
            batch.draws.push(start..end);
        }

        batch
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Uniform blocks laid out `stride` bytes apart for dynamic-offset binding.
    pub fn uniform_bytes(&self, stride: usize) -> Vec<u8> {
        let size = std::mem::size_of::<ShapeUniforms>();
        debug_assert!(stride >= size);

        let mut out = vec![0u8; self.uniforms.len() * stride];
        for (i, u) in self.uniforms.iter().enumerate() {
            out[i * stride..i * stride + size].copy_from_slice(bytemuck::bytes_of(u));
        }
        out
    }
}

/// Rounds `size` up to the next multiple of `alignment` (a power of two).
#[inline]
pub(super) fn align_to(size: u64, alignment: u64) -> u64 {
    let a = alignment.max(1);
    size.div_ceil(a) * a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::coords::Vec2;
    use crate::shape::Transform;

    fn frame_with(draw: impl FnOnce(&mut Canvas)) -> FrameBuffer {
        let mut canvas = Canvas::default();
        draw(&mut canvas);
        canvas.frame().clone()
    }

    #[test]
    fn uniform_block_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<ShapeUniforms>(), 112);
        assert_eq!(std::mem::offset_of!(ShapeUniforms, has_stroke), 32);
        assert_eq!(std::mem::offset_of!(ShapeUniforms, transform), 48);
        assert_eq!(std::mem::size_of::<ShapeVertex>(), 12);
    }

    #[test]
    fn ranges_follow_buffer_order() {
        let frame = frame_with(|c| {
            c.draw_rect(150.0, 150.0, 100.0, 50.0);
            c.draw_line(0.0, 0.0, 10.0, 10.0);
            c.disable_stroke();
            c.draw_triangle(0.0, 0.0, 10.0, 0.0, 5.0, 5.0);
        });

        let batch = ShapeBatch::build(&frame, false);
        assert_eq!(batch.draws, vec![0..30, 30..36, 36..39]);
        assert_eq!(batch.vertices.len(), frame.vertex_count());
        assert_eq!(batch.uniforms.len(), 3);
    }

    #[test]
    fn roles_and_stroke_flag_are_carried() {
        let frame = frame_with(|c| {
            c.draw_rect(150.0, 150.0, 100.0, 50.0);
            c.disable_stroke();
            c.draw_rect(150.0, 150.0, 100.0, 50.0);
        });

        let batch = ShapeBatch::build(&frame, false);
        let stroked = &batch.vertices[batch.draws[0].start as usize..batch.draws[0].end as usize];
        assert_eq!(stroked.iter().filter(|v| v.role == 1.0).count(), 24);
        assert_eq!(batch.uniforms[0].has_stroke, 1);

        let plain = &batch.vertices[batch.draws[1].start as usize..batch.draws[1].end as usize];
        assert!(plain.iter().all(|v| v.role == 0.0));
        assert_eq!(batch.uniforms[1].has_stroke, 0);
    }

    #[test]
    fn colors_pass_through_or_linearize() {
        let frame = frame_with(|c| {
            c.set_fill(Color::new(0.5, 0.5, 0.5, 0.5));
            c.draw_circle(10.0, 10.0, 5.0);
        });

        let raw = ShapeBatch::build(&frame, false);
        assert_eq!(raw.uniforms[0].fill, [0.5, 0.5, 0.5, 0.5]);

        let linear = ShapeBatch::build(&frame, true);
        assert!(linear.uniforms[0].fill[0] < 0.25);
        assert_eq!(linear.uniforms[0].fill[3], 0.5);
    }

    #[test]
    fn transform_lands_in_uniforms() {
        let mut frame = frame_with(|c| c.draw_circle(10.0, 10.0, 5.0));
        let t = Transform::IDENTITY.translated(Vec2::new(0.25, -0.5));
        if let Some(shape) = frame.last_mut() {
            shape.set_transform(t);
        }

        let batch = ShapeBatch::build(&frame, false);
        assert_eq!(batch.uniforms[0].transform[3], [0.25, -0.5, 0.0, 1.0]);
    }

    #[test]
    fn uniform_bytes_respect_stride() {
        let frame = frame_with(|c| {
            c.draw_line(0.0, 0.0, 1.0, 1.0);
            c.draw_line(0.0, 0.0, 2.0, 2.0);
        });
        let batch = ShapeBatch::build(&frame, false);
        let bytes = batch.uniform_bytes(256);

        assert_eq!(bytes.len(), 512);
        assert_eq!(&bytes[256..256 + 112], bytemuck::bytes_of(&batch.uniforms[1]));
        assert!(bytes[112..256].iter().all(|&b| b == 0));
    }

    #[test]
    fn empty_frame_yields_empty_batch() {
        let batch = ShapeBatch::build(&FrameBuffer::new(), true);
        assert!(batch.is_empty());
        assert!(batch.uniform_bytes(256).is_empty());
    }

    #[test]
    fn align_rounds_up() {
        assert_eq!(align_to(112, 256), 256);
        assert_eq!(align_to(256, 256), 256);
        assert_eq!(align_to(257, 256), 512);
        assert_eq!(align_to(112, 0), 112);
    }
}
