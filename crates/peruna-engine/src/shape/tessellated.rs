use crate::coords::Vec2;
use crate::paint::Color;

use super::{ShapeKind, Transform};

/// Which uniform color a vertex takes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VertexRole {
    Fill,
    Stroke,
}

impl VertexRole {
    /// Value uploaded per vertex; interpolated and thresholded at 0.5 per fragment.
    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            VertexRole::Fill => 0.0,
            VertexRole::Stroke => 1.0,
        }
    }
}

/// Triangle-list geometry for one draw call, already in NDC.
///
/// Everything except the transform is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TessellatedShape {
    kind: ShapeKind,
    positions: Vec<Vec2>,
    roles: Vec<VertexRole>,
    fill: Color,
    stroke: Color,
    stroke_enabled: bool,
    transform: Transform,
}

impl TessellatedShape {
    pub(crate) fn new(
        kind: ShapeKind,
        mesh: MeshBuilder,
        fill: Color,
        stroke: Color,
        stroke_enabled: bool,
    ) -> Self {
        debug_assert_eq!(mesh.positions.len(), mesh.roles.len());
        Self {
            kind,
            positions: mesh.positions,
            roles: mesh.roles,
            fill,
            stroke,
            stroke_enabled,
            transform: Transform::IDENTITY,
        }
    }

    /// Pixel-space description this geometry was built from.
    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    #[inline]
    pub fn roles(&self) -> &[VertexRole] {
        &self.roles
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn fill(&self) -> Color {
        self.fill
    }

    #[inline]
    pub fn stroke(&self) -> Color {
        self.stroke
    }

    #[inline]
    pub fn stroke_enabled(&self) -> bool {
        self.stroke_enabled
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Vertices tagged `role`.
    pub fn positions_with(&self, role: VertexRole) -> impl Iterator<Item = Vec2> + '_ {
        self.positions
            .iter()
            .zip(&self.roles)
            .filter(move |(_, r)| **r == role)
            .map(|(p, _)| *p)
    }
}

/// Accumulates triangles with their role tags.
#[derive(Debug, Default)]
pub(crate) struct MeshBuilder {
    positions: Vec<Vec2>,
    roles: Vec<VertexRole>,
}

impl MeshBuilder {
    pub(crate) fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            roles: Vec::with_capacity(vertices),
        }
    }

    #[inline]
    pub(crate) fn vertex(&mut self, p: Vec2, role: VertexRole) {
        self.positions.push(p);
        self.roles.push(role);
    }

    #[inline]
    pub(crate) fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, role: VertexRole) {
        self.vertex(a, role);
        self.vertex(b, role);
        self.vertex(c, role);
    }

    /// Two triangles `(a, b, c)` and `(c, b, d)`.
    ///
    /// `a`/`b` run along one side, `c`/`d` along the opposite side in the same direction.
    #[inline]
    pub(crate) fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, role: VertexRole) {
        self.triangle(a, b, c, role);
        self.triangle(c, b, d, role);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }
}
