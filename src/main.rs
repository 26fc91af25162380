use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ledshade::colors::{lerp_color, BLACK};
use ledshade::config::Config;
use ledshade::render::Renderer;
use ledshade::scenes::{CubeField, FallingRain, Pattern, Scene, SphereSpin};

const SCENES: [(&str, &str); 4] = [
    ("cubes", "rotating cube field at staggered depths"),
    ("rain", "small cubes tumbling down the panel"),
    ("sphere", "UV-sphere under an orbiting light"),
    ("pattern", "static diagnostic test pattern"),
];

#[derive(Parser)]
#[command(name = "ledshade")]
#[command(version, about = "Renders 3D demo scenes for LED matrix panels")]
struct Cli {
    /// Scene to run (see --list-scenes).
    #[arg(default_value = "cubes")]
    scene: String,

    /// Path to the JSON config file.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// List available scenes and exit.
    #[arg(long)]
    list_scenes: bool,
}

fn build_scene(name: &str, config: &Config, width: u32, height: u32) -> Option<Box<dyn Scene>> {
    let animation = &config.animation;
    match name {
        "cubes" => Some(Box::new(CubeField::new(animation))),
        "rain" => Some(Box::new(FallingRain::new(width, height, animation))),
        "sphere" => Some(Box::new(SphereSpin::new(
            config.renderer.light().direction,
            animation,
        ))),
        "pattern" => Some(Box::new(Pattern)),
        _ => None,
    }
}

fn process_input(event_pump: &mut sdl2::EventPump) -> bool {
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => return false,
            _ => {}
        }
    }
    true
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.list_scenes {
        println!("Available scenes:");
        for (name, description) in SCENES {
            println!("  {:<8} {}", name, description);
        }
        return Ok(());
    }

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            warn!("could not load {}: {}, using defaults", cli.config.display(), e);
            Config::default()
        }
    };

    let (width, height) = config.display.resolution();
    info!("display resolution: {}x{}", width, height);

    let mut renderer = Renderer::new(width, height);
    renderer.focal_length = config.renderer.focal_length;
    renderer.light = config.renderer.light();

    // Panel brightness scales both shading endpoints, so every rendered
    // pixel dims by the same factor.
    let brightness = config.display.brightness.min(100);
    if brightness < 100 {
        let dim = brightness as f32 / 100.0;
        renderer.light.light_color = lerp_color(BLACK, renderer.light.light_color, dim);
        renderer.light.shadow_color = lerp_color(BLACK, renderer.light.shadow_color, dim);
    }

    let mut scene = match build_scene(&cli.scene, &config, width, height) {
        Some(scene) => scene,
        None => return Err(format!("unknown scene '{}' (try --list-scenes)", cli.scene)),
    };
    info!("scene '{}' running, press Escape or close the window to quit", cli.scene);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    // Integer upscale so each LED becomes a square block of pixels.
    let scale = (512 / width.max(height)).max(1);
    let window = video_subsystem
        .window(
            &format!("ledshade - {}", cli.scene),
            width * scale,
            height * scale,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;

    let dt = config.renderer.frame_rate_ms as f32 / 1000.0;
    let mut frame: u64 = 0;

    while process_input(&mut event_pump) {
        scene.advance(dt);

        renderer.clear();
        scene.draw(&mut renderer);

        texture
            .update(None, renderer.framebuffer().as_bytes(), (width * 4) as usize)
            .map_err(|e| e.to_string())?;

        canvas.clear();
        canvas.copy(
            &texture,
            None,
            Some(Rect::new(0, 0, width * scale, height * scale)),
        )?;
        canvas.present();

        thread::sleep(Duration::from_millis(config.renderer.frame_rate_ms));
        frame += 1;
        if frame % 100 == 0 {
            info!("frame {}", frame);
        }
    }

    Ok(())
}
