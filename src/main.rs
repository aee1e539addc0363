// Allow unused code for designed-but-not-yet-used APIs
// Remove these as the codebase matures
#![allow(dead_code)]

mod clip;
mod config;
mod demos;
mod display;
mod util;

use config::Config;
use demos::{BouncingBall, Demo, LineClip};
use display::{Display, InputEvent, PixelBuffer, RenderTarget};
use sdl2::keyboard::Keycode;
use util::FpsCounter;

const DEFAULT_CONFIG_PATH: &str = "clipdemo.json";

/// Seconds between window title refreshes when the FPS readout is on
const TITLE_REFRESH: f32 = 0.5;

struct Args {
    width: Option<u32>,
    height: Option<u32>,
    vsync: bool,
    config_path: String,
}

/// Parse command line arguments
fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        width: None,
        height: None,
        vsync: true,
        config_path: DEFAULT_CONFIG_PATH.to_string(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => parsed.vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        parsed.width = Some(w);
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        parsed.height = Some(h);
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1024x768)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            parsed.width = Some(w);
                            parsed.height = Some(h);
                        }
                    }
                    i += 1;
                }
            },
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    parsed.config_path = args[i + 1].clone();
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: clipdemo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --width W, -w W           Set window width");
                println!("  --height H, -h H          Set window height");
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1024x768)");
                println!("  --no-vsync                Disable VSync for uncapped framerate");
                println!(
                    "  --config PATH, -c PATH    Config file path (default: {})",
                    DEFAULT_CONFIG_PATH
                );
                println!("  --help                    Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    parsed
}

fn main() -> Result<(), String> {
    let args = parse_args();

    // Config file is optional; a present-but-broken one is a fatal startup error
    let mut config = match Config::load(&args.config_path) {
        Ok(config) => config,
        Err(_) if !std::path::Path::new(&args.config_path).exists() => Config::default(),
        Err(e) => return Err(format!("failed to load {}: {}", args.config_path, e)),
    };

    // CLI overrides the file
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if !args.vsync {
        config.vsync = false;
    }
    config.validate()?;

    let (mut display, texture_creator) =
        Display::with_options("clipdemo", config.width, config.height, config.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, config.width, config.height)?;
    let mut buffer = PixelBuffer::with_size(config.width, config.height);

    // FPS counter with 60 sample rolling average
    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = false;
    let mut title_timer = 0.0_f32;

    // Available demos
    let mut demos: Vec<Box<dyn Demo>> = vec![
        Box::new(LineClip::new(&config)),     // 1
        Box::new(BouncingBall::new(&config)), // 2
    ];
    let mut current = 0_usize;

    println!("=== clipdemo ===");
    println!("Resolution: {}x{}", config.width, config.height);
    if config.vsync {
        println!("VSync: ON (60fps locked). Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped framerate)");
    }
    println!("Use --help for command line options.");
    println!("Controls:");
    println!("  1          - Line Clipping");
    println!("  2          - Bouncing Ball");
    println!("  Left/Right - Cycle through demos");
    println!("  R          - Reset current demo (rolls new segments)");
    println!("  F          - Toggle FPS in window title");
    println!("  Escape     - Quit");

    'main: loop {
        let (dt, avg_fps) = fps_counter.tick();

        // Handle input
        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::Num1 => current = 0,
                    Keycode::Num2 => current = 1,
                    Keycode::Left => {
                        current = if current == 0 {
                            demos.len() - 1
                        } else {
                            current - 1
                        };
                    },
                    Keycode::Right => {
                        current = if current + 1 >= demos.len() {
                            0
                        } else {
                            current + 1
                        };
                    },
                    Keycode::R => demos[current].reset(),
                    Keycode::F => {
                        show_fps = !show_fps;
                        if !show_fps {
                            display.set_title("clipdemo")?;
                        }
                    },
                    _ => {},
                },
            }
        }

        // Update and render current demo
        demos[current].update(dt);
        demos[current].render(&mut buffer);

        // FPS readout in the title, refreshed at most twice a second
        if show_fps {
            title_timer += dt;
            if title_timer >= TITLE_REFRESH {
                title_timer = 0.0;
                let title = format!(
                    "clipdemo - {} - {} fps ({:.1} ms)",
                    demos[current].name(),
                    avg_fps as u32,
                    fps_counter.avg_frame_time_ms()
                );
                display.set_title(&title)?;
            }
        }

        display.present(&mut target, &buffer)?;
    }

    Ok(())
}
