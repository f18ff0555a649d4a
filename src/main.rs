//! Bounce Box entry point
//!
//! Headless demo driver: loads settings, populates a world, and runs the
//! simulation for a fixed number of ticks while reporting bounce activity
//! through the log.

use std::path::Path;

use bounce_box::audio::AudioManager;
use bounce_box::error::Result;
use bounce_box::sim::{World, tick};
use bounce_box::{Color, Settings};

const SETTINGS_PATH: &str = "bounce-box.json";
const DEMO_TICKS: u64 = 600;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings_path = Path::new(SETTINGS_PATH);
    let settings = Settings::load(settings_path);
    if !settings_path.exists() {
        if let Err(err) = settings.save(settings_path) {
            log::warn!("could not write default settings: {err}");
        }
    }

    let viewport = settings.viewport()?;
    let audio = AudioManager::new(settings.sound_enabled);
    let mut rng = rand::rng();
    let mut world = World::new();
    log::info!(
        "world seed {} with {}x{} viewport",
        world.seed(),
        viewport.width(),
        viewport.height()
    );

    for _ in 0..settings.circle_count {
        let color = if settings.random_circle_colors {
            Color::random(&mut rng)
        } else {
            settings.circle_color
        };
        world.add_circle(settings.circle_radius, None, None, color, viewport)?;
    }
    for _ in 0..settings.square_count {
        world.add_square(settings.square_size, None, None, settings.square_color, viewport)?;
    }
    log::info!(
        "spawned {} circles and {} squares",
        settings.circle_count,
        settings.square_count
    );

    let mut total_bounces = 0u64;
    for tick_no in 1..=DEMO_TICKS {
        let events = tick(&mut world, settings.gravity, viewport)?;
        total_bounces += events.len() as u64;
        for event in &events {
            audio.handle(event);
        }
        if tick_no % 120 == 0 {
            log::info!("tick {tick_no}: {total_bounces} bounces so far");
        }
    }

    log::info!("demo finished after {DEMO_TICKS} ticks with {total_bounces} bounces");
    Ok(())
}
