//! Indexed polygon mesh.
//!
//! Shape generators produce a [`Mesh`] and the renderer consumes it; nothing
//! else is shared between them. Vertices live in one flat buffer and faces
//! index into it, so shared corners are stored once.

use crate::math::vec3::Vec3;

/// Vertex indices of one polygon face, in winding order.
///
/// A drawable face has at least three indices. Faces must be convex and
/// roughly planar; the generators in [`crate::shapes`] guarantee both.
pub type Face = Vec<u32>;

/// A polygon mesh in world space.
///
/// Meshes are plain transient data, typically rebuilt every frame by a shape
/// generator. Construction never validates: a face with fewer than three
/// indices or an index past the vertex buffer is simply skipped when the
/// mesh is rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, vertex: Vec3) -> u32 {
        self.vertices.push(vertex);
        (self.vertices.len() - 1) as u32
    }

    pub fn push_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Resolve a face's indices into vertex positions.
    ///
    /// Returns `None` for faces the renderer must skip: fewer than three
    /// indices, or any index out of range.
    pub fn face_vertices(&self, face: &Face) -> Option<Vec<Vec3>> {
        if face.len() < 3 {
            return None;
        }
        face.iter()
            .map(|&i| self.vertices.get(i as usize).copied())
            .collect()
    }
}
