mod analytics;
mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::SugarScopeApp;
use eframe::egui;

const DEFAULT_DATASET: &str = "food_facts_snacks.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // The dataset is loaded exactly once; a load failure is fatal.
    let dataset = match data::loader::load_file(&path) {
        Ok(ds) => {
            log::info!(
                "Loaded {} products from {} (p99 sugar {:.1}g, p99 protein {:.1}g)",
                ds.len(),
                path.display(),
                ds.p99_sugar,
                ds.p99_protein
            );
            ds
        }
        Err(e) => {
            log::error!("Failed to load dataset {}: {e:#}", path.display());
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SugarScope – Snack Market Analytics",
        options,
        Box::new(|_cc| Ok(Box::new(SugarScopeApp::new(dataset)))),
    )
}
