//! Interactive star-field viewer.
//!
//! An embedded star catalog is projected onto the screen in either a
//! perspective sphere view or a stereographic map view and navigated
//! with drag, pinch, and two-finger rotation gestures.

mod app;
mod camera;
mod catalog;
mod celestial;
mod config;
mod drawing;
mod math;
mod picking;
mod projection;
mod render;
mod settings;

use app::App;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sky Viz",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )
}
