//! Cube generator.

use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::shapes::ToMesh;

/// A cube centered on `position`, rotated by Euler angles, `size` along
/// each edge.
///
/// Rotation is intrinsic and applied in a fixed X, then Y, then Z order
/// before translation; animations that spin all three axes rely on that
/// order staying put.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    pub position: Vec3,
    pub rotation: Vec3,
    pub size: f32,
}

impl Cube {
    /// Create a cube of the given edge length at the origin, unrotated.
    pub fn new(size: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            size,
        }
    }
}

impl ToMesh for Cube {
    /// Emit the cube's 8 vertices and 6 quad faces.
    ///
    /// Faces are wound so that the normal taken from each face's first
    /// three vertices points into the cube; the face toward -Z (index
    /// order 0,1,2,3) has normal +Z.
    fn to_mesh(&self) -> Mesh {
        let s = self.size / 2.0;

        let corners = [
            Vec3::new(-s, -s, -s),
            Vec3::new(s, -s, -s),
            Vec3::new(s, s, -s),
            Vec3::new(-s, s, -s),
            Vec3::new(-s, -s, s),
            Vec3::new(s, -s, s),
            Vec3::new(s, s, s),
            Vec3::new(-s, s, s),
        ];

        let vertices = corners
            .iter()
            .map(|&v| {
                v.rotate_x(self.rotation.x)
                    .rotate_y(self.rotation.y)
                    .rotate_z(self.rotation.z)
                    + self.position
            })
            .collect();

        let faces = vec![
            vec![0, 1, 2, 3], // front
            vec![4, 7, 6, 5], // back
            vec![0, 3, 7, 4], // left
            vec![1, 5, 6, 2], // right
            vec![3, 2, 6, 7], // top
            vec![0, 4, 5, 1], // bottom
        ];

        Mesh::new(vertices, faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_counts() {
        let mesh = Cube::new(2.0).to_mesh();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 6);
        for face in &mesh.faces {
            assert_eq!(face.len(), 4);
            assert!(face.iter().all(|&i| i < 8));
        }
    }

    #[test]
    fn test_cube_vertices_at_half_size() {
        let mesh = Cube::new(3.0).to_mesh();
        for v in &mesh.vertices {
            assert_relative_eq!(v.x.abs(), 1.5);
            assert_relative_eq!(v.y.abs(), 1.5);
            assert_relative_eq!(v.z.abs(), 1.5);
        }
    }

    #[test]
    fn test_cube_translation() {
        let mut cube = Cube::new(1.0);
        cube.position = Vec3::new(10.0, -2.0, 4.0);
        let mesh = cube.to_mesh();
        for v in &mesh.vertices {
            assert_relative_eq!((v.x - 10.0).abs(), 0.5, epsilon = 1e-6);
            assert_relative_eq!((v.y + 2.0).abs(), 0.5, epsilon = 1e-6);
            assert_relative_eq!((v.z - 4.0).abs(), 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_front_face_normal_points_inward() {
        let mesh = Cube::new(2.0).to_mesh();
        let verts = mesh.face_vertices(&mesh.faces[0]).unwrap();
        let normal = (verts[1] - verts[0])
            .cross(verts[2] - verts[0])
            .normalized();
        // Front face sits at z = -1; its winding normal points +Z.
        assert_relative_eq!(normal.z, 1.0, epsilon = 1e-6);
        assert!(verts.iter().all(|v| (v.z + 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_rotation_order_is_x_then_y_then_z() {
        let mut cube = Cube::new(2.0);
        cube.rotation = Vec3::new(std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2, 0.0);
        let mesh = cube.to_mesh();

        // Corner (-1,-1,-1): rotate_x(90) -> (-1, 1, -1); rotate_y(90) -> (-1, 1, 1).
        let v0 = mesh.vertices[0];
        assert_relative_eq!(v0.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(v0.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(v0.z, 1.0, epsilon = 1e-5);
    }
}
