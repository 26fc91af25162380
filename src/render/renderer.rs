//! The rasterization pipeline.
//!
//! [`Renderer`] turns world-space meshes into shaded pixels:
//!
//! 1. Resolve each face's vertices, skipping malformed faces
//! 2. Flat-shade each face from its winding normal
//! 3. Depth-sort faces, furthest first (painter's algorithm)
//! 4. Project vertices onto the screen with a fixed focal length
//! 5. Fill each projected polygon with a bounding-box scan and a convex
//!    half-plane test
//!
//! There is no z-buffer and no clipping stage; overdraw resolves depth and
//! bounds-checked pixel writes absorb offscreen geometry. The whole path is
//! infallible: bad input draws nothing rather than returning errors.

use super::framebuffer::Framebuffer;
use crate::light::DirectionalLight;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;

/// Default distance from the camera to the projection plane, in world units.
pub const DEFAULT_FOCAL_LENGTH: f32 = 5.0;

/// Depth floor for vertices at or behind the camera plane; keeps the
/// perspective divide finite without flipping the projection.
const MIN_PROJECTED_Z: f32 = 0.1;

/// Fill-test slack: a sample counts as outside only when it fails an edge's
/// cross product by more than this. Sub-pixel faces still cover their
/// nearest integer sample.
const EDGE_TOLERANCE: f32 = -0.1;

/// A face resolved, shaded, and ready for projection.
struct ShadedFace {
    vertices: Vec<Vec3>,
    color: u32,
    avg_depth: f32,
}

/// Software renderer drawing meshes into an owned [`Framebuffer`].
///
/// The implied camera sits on the negative-Z axis at `-focal_length`,
/// looking toward +Z with +X right and +Y down the panel.
pub struct Renderer {
    framebuffer: Framebuffer,
    pub light: DirectionalLight,
    pub focal_length: f32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            light: DirectionalLight::default(),
            focal_length: DEFAULT_FOCAL_LENGTH,
        }
    }

    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Reset the framebuffer to black. Typically called once per frame
    /// before rendering the scene's meshes.
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Render one mesh into the framebuffer.
    ///
    /// Faces with fewer than three indices or an out-of-range index are
    /// skipped. Depth ordering holds within this call only: separate calls
    /// composite in call order, nearer meshes should be rendered later.
    pub fn render(&mut self, mesh: &Mesh) {
        let mut faces: Vec<ShadedFace> = Vec::with_capacity(mesh.face_count());
        for face in &mesh.faces {
            let vertices = match mesh.face_vertices(face) {
                Some(v) => v,
                None => continue,
            };
            let normal = (vertices[1] - vertices[0])
                .cross(vertices[2] - vertices[0])
                .normalized();
            let avg_depth = vertices.iter().map(|v| v.z).sum::<f32>() / vertices.len() as f32;
            faces.push(ShadedFace {
                color: self.light.shade(normal),
                vertices,
                avg_depth,
            });
        }

        // Painter's algorithm: further away faces are drawn first so nearer
        // faces overwrite them. The sort is stable, so equal depths keep
        // their mesh order.
        faces.sort_by(|a, b| b.avg_depth.total_cmp(&a.avg_depth));

        for face in &faces {
            self.fill_face(&face.vertices, face.color);
        }
    }

    /// Perspective-project a world-space vertex to screen coordinates.
    fn project_vertex(&self, v: Vec3) -> Vec2 {
        let mut z = v.z + self.focal_length;
        if z <= 0.0 {
            z = MIN_PROJECTED_Z;
        }
        let scale = self.focal_length / z;
        Vec2::new(
            v.x * scale + self.framebuffer.width() as f32 / 2.0,
            v.y * scale + self.framebuffer.height() as f32 / 2.0,
        )
    }

    /// Project a face and fill it, testing each integer sample in the
    /// clamped bounding box against the polygon's edges.
    fn fill_face(&mut self, vertices: &[Vec3], color: u32) {
        let projected: Vec<Vec2> = vertices.iter().map(|&v| self.project_vertex(v)).collect();

        let mut min_x = projected[0].x;
        let mut max_x = projected[0].x;
        let mut min_y = projected[0].y;
        let mut max_y = projected[0].y;
        for p in &projected[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        let x0 = (min_x as i32).max(0);
        let x1 = (max_x as i32 + 1).min(self.framebuffer.width() as i32 - 1);
        let y0 = (min_y as i32).max(0);
        let y1 = (max_y as i32 + 1).min(self.framebuffer.height() as i32 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                if point_in_polygon(Vec2::new(x as f32, y as f32), &projected) {
                    self.framebuffer.set_pixel(x, y, color);
                }
            }
        }
    }
}

/// Convex point-in-polygon test over edges in winding order.
///
/// A point is inside when no edge's cross product falls below the fill
/// tolerance; polygons wound the other way reject every interior point and
/// fill nothing, which is what culls faces turned away from the camera.
fn point_in_polygon(p: Vec2, polygon: &[Vec2]) -> bool {
    for i in 0..polygon.len() {
        let edge = polygon[(i + 1) % polygon.len()] - polygon[i];
        let to_point = p - polygon[i];
        if edge.cross(to_point) < EDGE_TOLERANCE {
            return false;
        }
    }
    true
}
