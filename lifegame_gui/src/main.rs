// main.rs - Desktop front end for the lifegame engine

use std::time::{Duration, Instant};

use eframe::egui;
use lifegame::{Lifegame, LifegameConfig};

mod surface;
mod ui;

use surface::PixelSurface;

/// Width budget for the cell canvas, in pixels.
const CANVAS_WIDTH: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    // A smaller population than the library default keeps the canvas
    // close to square inside one window.
    let config = LifegameConfig {
        init_percent: 37.5,
        cell_size: 4,
        min_count: 20_000,
    };
    let game = Lifegame::new(CANVAS_WIDTH, config, PixelSurface::default())?;
    let app = LifegameApp::new(game);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native("Lifegame", options, Box::new(|_cc| Box::new(app)))?;
    Ok(())
}

pub struct LifegameApp {
    pub game: Lifegame<PixelSurface>,
    pub texture: Option<egui::TextureHandle>,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub selected_pattern: usize,
}

impl LifegameApp {
    pub fn new(game: Lifegame<PixelSurface>) -> Self {
        Self {
            game,
            texture: None,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(100),
            selected_pattern: 0,
        }
    }
}
