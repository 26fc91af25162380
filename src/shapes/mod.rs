//! Shape generators.
//!
//! Each generator describes a solid parametrically (position, rotation,
//! size) and emits an indexed [`Mesh`] on demand. The renderer never sees
//! the generators themselves, only the meshes they produce.
//!
//! Available shapes:
//! - [`Cube`]: axis-aligned cube with per-axis Euler rotation
//! - [`Sphere`]: UV-sphere on a latitude/longitude grid

mod cube;
mod sphere;

pub use cube::Cube;
pub use sphere::Sphere;

use crate::mesh::Mesh;

/// Conversion from a parametric shape to a renderable mesh.
///
/// `to_mesh` snapshots the shape's current placement into world-space
/// geometry; callers typically mutate the shape and re-emit every frame.
pub trait ToMesh {
    fn to_mesh(&self) -> Mesh;
}
