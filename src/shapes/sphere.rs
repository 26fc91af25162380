//! UV-sphere generator.

use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::shapes::ToMesh;

/// A UV-sphere: latitude rings from pole to pole, longitude segments
/// around the Y axis.
///
/// The grid has `(lat_segments + 1) * (lon_segments + 1)` vertices (the
/// seam column is duplicated) and `lat_segments * lon_segments` quad
/// faces. The rows touching the poles produce quads with two coincident
/// corners; they rasterize as thin triangles and are kept as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub lat_segments: u32,
    pub lon_segments: u32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, lat_segments: u32, lon_segments: u32) -> Self {
        Self {
            center,
            radius,
            lat_segments,
            lon_segments,
        }
    }
}

impl ToMesh for Sphere {
    /// Emit the lat/lon grid, wound to match the cube: each face's
    /// first-three-vertex normal points into the sphere.
    fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::default();

        for lat in 0..=self.lat_segments {
            let phi = std::f32::consts::PI * lat as f32 / self.lat_segments as f32;
            let y = phi.cos();
            let ring_radius = phi.sin();

            for lon in 0..=self.lon_segments {
                let theta = 2.0 * std::f32::consts::PI * lon as f32 / self.lon_segments as f32;
                let unit = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());
                mesh.push_vertex(self.center + unit * self.radius);
            }
        }

        let stride = self.lon_segments + 1;
        for lat in 0..self.lat_segments {
            for lon in 0..self.lon_segments {
                let current = lat * stride + lon;
                let next = current + stride;
                mesh.push_face(vec![current, next, next + 1, current + 1]);
            }
        }

        mesh
    }
}
