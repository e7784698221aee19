// Glass Clock - an animated analog clock with an hourly score counter.
//
// Module structure:
// - clock: time-to-geometry math (hand angles, progress, ticks)
// - time_source: local wall-clock readings
// - score: hour rollover counter and its highlight timer
// - greeting / theme: time-of-day text and light/dark styling
// - render / hud: drawing the dial and the widgets around it
// - scheduler / app: the per-frame loop and the state it owns

mod app;
mod clock;
mod greeting;
mod hud;
mod logging;
mod render;
mod scheduler;
mod score;
mod settings;
mod theme;
mod time_source;

use log::{info, warn};
use macroquad::prelude::*;

use app::ClockApp;
use logging::init_logging;
use scheduler::run_frames;
use settings::{Settings, load_font};
use time_source::SystemClock;

const WINDOW_WIDTH: i32 = 420;
const WINDOW_HEIGHT: i32 = 620;

fn window_conf() -> Conf {
    Conf {
        window_title: "Glass Clock".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

// Entry point of the application using the macroquad::main macro.
#[macroquad::main(window_conf)]
async fn main() {
    let settings = Settings::from_env();
    init_logging(settings.logging());
    info!("starting glass clock ({WINDOW_WIDTH}x{WINDOW_HEIGHT})");

    // A missing or broken font is not fatal: fall back to the built-in one.
    let font = match settings.font_path.as_deref() {
        Some(path) => match load_font(path) {
            Ok(font) => {
                info!("using font {}", path.display());
                Some(font)
            }
            Err(err) => {
                warn!("{err:#}; falling back to the default font");
                None
            }
        },
        None => None,
    };

    let mut app = ClockApp::new(SystemClock, font);
    let frames = run_frames(&mut app).await;
    info!("clock stopped after {frames} frames");
}
