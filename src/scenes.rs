//! Demo animations for the preview binary.
//!
//! Every scene implements [`Scene`]: `advance` steps the simulation by
//! `dt` seconds, `draw` renders the current state. Scenes do not clear
//! the framebuffer; the animation loop does that once per frame.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AnimationConfig;
use crate::math::vec3::Vec3;
use crate::pattern;
use crate::render::Renderer;
use crate::shapes::{Cube, Sphere, ToMesh};

/// An animated demo driven by the animation loop.
pub trait Scene {
    /// Step the simulation by `dt` seconds.
    fn advance(&mut self, dt: f32);
    /// Draw the current state into a cleared framebuffer.
    fn draw(&self, renderer: &mut Renderer);
}

/// Rotating cubes at staggered depths with a gentle vertical bob.
pub struct CubeField {
    num_cubes: u32,
    cube_size: f32,
    rotation_speed: Vec3,
    bob_speed: f32,
    bob_amplitude: f32,
    time: f32,
}

impl CubeField {
    pub fn new(animation: &AnimationConfig) -> Self {
        Self {
            num_cubes: animation.num_cubes,
            cube_size: animation.cube_size,
            rotation_speed: Vec3::new(
                animation.rotation_speed_x,
                animation.rotation_speed_y,
                animation.rotation_speed_z,
            ),
            bob_speed: animation.position_animation_speed,
            bob_amplitude: animation.position_animation_amplitude,
            time: 0.0,
        }
    }

    /// The cube at `index` for the current time.
    fn cube(&self, index: u32) -> Cube {
        let i = index as f32;
        // About a third of a turn, keeps neighbouring cubes out of phase.
        let phase = i * 2.094;
        Cube {
            position: Vec3::new(
                (i - (self.num_cubes as f32 - 1.0) / 2.0) * 4.0,
                (self.time * self.bob_speed + i).sin() * self.bob_amplitude,
                8.0 - (index % 3) as f32 * 3.0,
            ),
            rotation: Vec3::new(
                self.time * self.rotation_speed.x + phase,
                self.time * self.rotation_speed.y + phase,
                self.time * self.rotation_speed.z,
            ),
            size: self.cube_size,
        }
    }
}

impl Scene for CubeField {
    fn advance(&mut self, dt: f32) {
        self.time += dt;
    }

    fn draw(&self, renderer: &mut Renderer) {
        for i in 0..self.num_cubes {
            renderer.render(&self.cube(i).to_mesh());
        }
    }
}

const RAIN_CUBE_SIZE: f32 = 1.5;
/// World units past the panel edge where cubes spawn and despawn.
const RAIN_EDGE_MARGIN: f32 = 5.0;

struct FallingCube {
    position: Vec3,
    /// Fall speed in world units per second.
    velocity_y: f32,
    /// Horizontal drift in world units per second.
    drift_x: f32,
}

/// Small cubes tumbling down the panel, spawned on a timer.
pub struct FallingRain {
    width: f32,
    height: f32,
    spawn_interval: f32,
    cubes: Vec<FallingCube>,
    spawn_timer: f32,
    time: f32,
    rng: StdRng,
}

impl FallingRain {
    pub fn new(width: u32, height: u32, animation: &AnimationConfig) -> Self {
        Self::with_rng(width, height, animation, StdRng::from_os_rng())
    }

    /// Deterministic variant for tests and benchmarks.
    pub fn seeded(width: u32, height: u32, animation: &AnimationConfig, seed: u64) -> Self {
        Self::with_rng(width, height, animation, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: u32, height: u32, animation: &AnimationConfig, rng: StdRng) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            spawn_interval: animation.spawn_interval,
            cubes: Vec::new(),
            spawn_timer: 0.0,
            time: 0.0,
            rng,
        }
    }

    pub fn active_cubes(&self) -> usize {
        self.cubes.len()
    }

    fn spawn_cube(&mut self) {
        let x_span = (self.width - 5.0).max(1.0);
        let x = self.rng.random_range(0.0..x_span) - self.width / 2.0;
        self.cubes.push(FallingCube {
            position: Vec3::new(x, -(self.height / 2.0 + RAIN_EDGE_MARGIN), 0.0),
            velocity_y: self.rng.random_range(15.0..30.0),
            drift_x: self.rng.random_range(-6.0..6.0),
        });
    }
}

impl Scene for FallingRain {
    fn advance(&mut self, dt: f32) {
        self.time += dt;
        self.spawn_timer += dt;
        if self.spawn_timer >= self.spawn_interval {
            self.spawn_timer = 0.0;
            self.spawn_cube();
        }

        for cube in &mut self.cubes {
            cube.position.y += cube.velocity_y * dt;
            cube.position.x += cube.drift_x * dt;
        }
        let despawn_y = self.height / 2.0 + RAIN_EDGE_MARGIN;
        self.cubes.retain(|cube| cube.position.y <= despawn_y);
    }

    fn draw(&self, renderer: &mut Renderer) {
        // All cubes share one tumble driven by scene time.
        let rotation = Vec3::new(self.time * 1.2, self.time * 0.8, self.time * 0.5);
        for falling in &self.cubes {
            let cube = Cube {
                position: falling.position,
                rotation,
                size: RAIN_CUBE_SIZE,
            };
            renderer.render(&cube.to_mesh());
        }
    }
}

const SPHERE_RADIUS: f32 = 10.0;
const SPHERE_LAT_SEGMENTS: u32 = 12;
const SPHERE_LON_SEGMENTS: u32 = 16;

/// A UV-sphere under an orbiting light, bobbing gently.
///
/// A uniform sphere shows no spin of its own, so the motion is carried
/// by the light direction orbiting around it.
pub struct SphereSpin {
    base_direction: Vec3,
    orbit_speed: f32,
    bob_speed: f32,
    bob_amplitude: f32,
    time: f32,
}

impl SphereSpin {
    pub fn new(light_direction: Vec3, animation: &AnimationConfig) -> Self {
        Self {
            base_direction: light_direction.normalized(),
            orbit_speed: animation.rotation_speed_y,
            bob_speed: animation.position_animation_speed,
            bob_amplitude: animation.position_animation_amplitude,
            time: 0.0,
        }
    }
}

impl Scene for SphereSpin {
    fn advance(&mut self, dt: f32) {
        self.time += dt;
    }

    fn draw(&self, renderer: &mut Renderer) {
        renderer.light.direction = self
            .base_direction
            .rotate_y(self.time * self.orbit_speed);
        let center = Vec3::new(
            0.0,
            (self.time * self.bob_speed).sin() * self.bob_amplitude,
            8.0,
        );
        let sphere = Sphere::new(center, SPHERE_RADIUS, SPHERE_LAT_SEGMENTS, SPHERE_LON_SEGMENTS);
        renderer.render(&sphere.to_mesh());
    }
}

/// Static diagnostic pattern drawn in the configured light colors.
pub struct Pattern;

impl Scene for Pattern {
    fn advance(&mut self, _dt: f32) {}

    fn draw(&self, renderer: &mut Renderer) {
        let light = renderer.light;
        pattern::draw_test_pattern(
            renderer.framebuffer_mut(),
            light.light_color,
            light.shadow_color,
        );
    }
}
