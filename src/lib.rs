//! A CPU software renderer for low-resolution LED matrix panels.
//!
//! This crate rasterizes small 3D scenes (cube fields, falling cubes, a
//! UV-sphere) into a packed-RGB framebuffer sized for an LED panel chain.
//! All geometry work happens on the CPU; SDL2 is used only by the demo
//! binary to preview the framebuffer in a window.
//!
//! # Quick Start
//!
//! ```
//! use ledshade::prelude::*;
//!
//! let mut renderer = Renderer::new(32, 32);
//! renderer.render(&Cube::new(2.0).to_mesh());
//! assert!(renderer.framebuffer().pixels().iter().any(|&p| p != 0));
//! ```

pub mod colors;
pub mod config;
pub mod light;
pub mod math;
pub mod mesh;
pub mod pattern;
pub mod render;
pub mod scenes;
pub mod shapes;

// Re-export commonly needed types at crate root for convenience
pub use config::Config;
pub use light::DirectionalLight;
pub use mesh::{Face, Mesh};
pub use render::{Framebuffer, Renderer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use ledshade::prelude::*;
/// ```
pub mod prelude {
    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Geometry
    pub use crate::mesh::{Face, Mesh};
    pub use crate::shapes::{Cube, Sphere, ToMesh};

    // Rendering
    pub use crate::colors::{lerp_color, pack_color, unpack_color};
    pub use crate::light::DirectionalLight;
    pub use crate::render::{Framebuffer, Renderer};

    // Configuration & scenes
    pub use crate::config::Config;
    pub use crate::scenes::Scene;
}
