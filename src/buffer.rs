//! Flat triangle vertex buffer.
//!
//! Indexed faces are expanded once after load into a flat list where every
//! run of three vertices is one triangle in (A, B, C) winding order. The main
//! loop owns the buffer, rotates it in place each frame and hands it to the
//! rasterizer read-only.

use crate::math::vec3::Vec3;
use crate::mesh::{Face, Mesh};

/// Ordered triangle corners; `len()` is always a multiple of 3.
///
/// The only constructors go through [`VertexBuffer::expand`], and mutable
/// access is limited to a slice, so the length invariant holds by construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexBuffer {
    vertices: Vec<Vec3>,
}

impl VertexBuffer {
    /// Looks up the three corners of every face and appends them in order,
    /// each multiplied by `scale`.
    ///
    /// # Panics
    /// Panics if a face index is out of bounds. Faces produced by
    /// [`Mesh`] loading are bounds-checked, so this only happens with
    /// hand-built faces.
    pub fn expand(vertices: &[Vec3], faces: &[Face], scale: f32) -> Self {
        let mut out = Vec::with_capacity(faces.len() * 3);
        for face in faces {
            for index in face.indices() {
                out.push(vertices[index as usize] * scale);
            }
        }
        Self { vertices: out }
    }

    /// Expands a loaded mesh.
    pub fn from_mesh(mesh: &Mesh, scale: f32) -> Self {
        Self::expand(mesh.vertices(), mesh.faces(), scale)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [Vec3] {
        &mut self.vertices
    }

    /// Iterates over triangles as `[A, B, C]`.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        debug_assert_eq!(self.vertices.len() % 3, 0);
        self.vertices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn expands_faces_in_winding_order() {
        let vertices = quad();
        let faces = [Face::new(0, 1, 2), Face::new(0, 2, 3)];
        let buffer = VertexBuffer::expand(&vertices, &faces, 1.0);

        assert_eq!(buffer.len(), 6);
        assert_eq!(buffer.triangle_count(), 2);
        assert_eq!(
            buffer.vertices(),
            &[
                vertices[0],
                vertices[1],
                vertices[2],
                vertices[0],
                vertices[2],
                vertices[3]
            ]
        );
    }

    #[test]
    fn applies_uniform_scale() {
        let vertices = quad();
        let buffer = VertexBuffer::expand(&vertices, &[Face::new(1, 2, 3)], 2.0);
        assert_eq!(
            buffer.vertices(),
            &[
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(2.0, 2.0, 0.0),
                Vec3::new(0.0, 2.0, 0.0)
            ]
        );
    }

    #[test]
    fn triangles_yield_consecutive_triples() {
        let vertices = quad();
        let buffer = VertexBuffer::expand(&vertices, &[Face::new(3, 2, 1)], 1.0);
        let triangles: Vec<_> = buffer.triangles().collect();
        assert_eq!(triangles, vec![[vertices[3], vertices[2], vertices[1]]]);
    }

    #[test]
    fn no_faces_gives_empty_buffer() {
        let buffer = VertexBuffer::expand(&quad(), &[], 1.0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.triangles().count(), 0);
    }
}
