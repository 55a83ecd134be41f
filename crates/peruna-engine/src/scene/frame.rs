use crate::shape::TessellatedShape;

/// Shapes recorded for the current frame.
///
/// Insertion order is submission order is paint order; later shapes draw over
/// earlier ones. The buffer is never sorted.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity for the next frame
#[derive(Debug, Default, Clone)]
pub struct FrameBuffer {
    shapes: Vec<TessellatedShape>,
}

impl FrameBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    #[inline]
    pub fn push(&mut self, shape: TessellatedShape) {
        self.shapes.push(shape);
    }

    /// Shapes in paint order.
    #[inline]
    pub fn shapes(&self) -> &[TessellatedShape] {
        &self.shapes
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &TessellatedShape> {
        self.shapes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Most recently recorded shape, e.g. to adjust its transform.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut TessellatedShape> {
        self.shapes.last_mut()
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut TessellatedShape> {
        self.shapes.get_mut(index)
    }

    /// Total vertices across all shapes.
    pub fn vertex_count(&self) -> usize {
        self.shapes.iter().map(TessellatedShape::vertex_count).sum()
    }
}
