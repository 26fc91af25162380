//! Rendering: the owned pixel grid and the mesh rasterization pipeline.

mod framebuffer;
mod renderer;

pub use framebuffer::Framebuffer;
pub use renderer::{Renderer, DEFAULT_FOCAL_LENGTH};
