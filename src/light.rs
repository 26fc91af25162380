//! Lighting types for the renderer.

use crate::colors::{lerp_color, DEFAULT_LIGHT, DEFAULT_SHADOW};
use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// `direction` points from surfaces toward the light source and is kept
/// normalized. Shading is a flat two-color model: faces squarely toward the
/// light take `light_color`, faces turned away take `shadow_color`, and
/// everything between blends per channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub light_color: u32,
    pub shadow_color: u32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::ONE.normalized(),
            light_color: DEFAULT_LIGHT,
            shadow_color: DEFAULT_SHADOW,
        }
    }
}

impl DirectionalLight {
    /// Create a new directional light. The direction is normalized
    /// automatically.
    pub fn new(direction: Vec3, light_color: u32, shadow_color: u32) -> Self {
        Self {
            direction: direction.normalized(),
            light_color,
            shadow_color,
        }
    }

    /// Lambertian brightness for a unit surface normal, clamped to `[0, 1]`.
    ///
    /// The zero normal (a degenerate face) yields 0.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction).clamp(0.0, 1.0)
    }

    /// Flat-shade a face with the given unit normal.
    ///
    /// Brightness 0 reproduces `shadow_color` exactly; brightness 1
    /// reproduces `light_color` exactly.
    pub fn shade(&self, normal: Vec3) -> u32 {
        lerp_color(self.shadow_color, self.light_color, self.intensity(normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::pack_color;

    #[test]
    fn test_direct_illumination() {
        let light = DirectionalLight::new(Vec3::FORWARD, DEFAULT_LIGHT, DEFAULT_SHADOW);
        assert!((light.intensity(Vec3::FORWARD) - 1.0).abs() < 1e-6);
        assert_eq!(light.shade(Vec3::FORWARD), DEFAULT_LIGHT);
    }

    #[test]
    fn test_back_face_gets_shadow_color() {
        let light = DirectionalLight::new(Vec3::FORWARD, DEFAULT_LIGHT, DEFAULT_SHADOW);
        assert_eq!(light.intensity(-Vec3::FORWARD), 0.0);
        assert_eq!(light.shade(-Vec3::FORWARD), DEFAULT_SHADOW);
    }

    #[test]
    fn test_angled_illumination() {
        // Normal at 45 degrees to the light: cos(45) ~ 0.707.
        let light = DirectionalLight::new(Vec3::UP, DEFAULT_LIGHT, DEFAULT_SHADOW);
        let normal = Vec3::new(0.0, 1.0, 1.0).normalized();
        assert!((light.intensity(normal) - 0.707).abs() < 0.01);
    }

    #[test]
    fn test_degenerate_normal_is_shadow() {
        let light = DirectionalLight::default();
        assert_eq!(light.intensity(Vec3::ZERO), 0.0);
        assert_eq!(light.shade(Vec3::ZERO), light.shadow_color);
    }

    #[test]
    fn test_direction_normalized_on_construction() {
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, 9.0), 0xFFFFFF, 0x000000);
        assert!((light.direction.length() - 1.0).abs() < 1e-6);
        // Halfway brightness blends the endpoints evenly.
        let normal = Vec3::new(0.0, 1.0, 1.0).normalized();
        assert_eq!(light.shade(normal), pack_color(180, 180, 180));
    }
}
