// main.rs - Conway's Game of Life viewer on a torus
// Window mode by default, terminal mode with --headless

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;        // Viewer state
mod config;     // Command-line options
mod headless;   // Terminal driver
mod history;    // Repeat detection
mod render;     // Grid painting
mod scheduler;  // Start/Pause and speed timing
mod ui;         // egui front end

use app::GameOfLife;
use config::{Config, WINDOW_SIZE};
use headless::HeadlessOptions;
use scheduler::interval_for_speed;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    if let Err(err) = run(config) {
        error!("{err:#}");
        return Err(err);
    }
    Ok(())
}

fn run(config: Config) -> Result<()> {
    let mut rng = config.rng();
    let initial = config.initial_grid(&mut rng)?;
    info!(size = %initial.size(), population = initial.population(), "seeded grid");

    if config.headless {
        let options = HeadlessOptions {
            interval: interval_for_speed(config.speed),
            generations: config.generations,
            print: config.print,
        };
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start the tokio runtime")?;
        let summary = runtime.block_on(headless::run(&initial, options, &mut std::io::stdout().lock()))?;
        info!(
            generations = summary.generations,
            population = summary.population,
            repeated = summary.repeated,
            "finished"
        );
        return Ok(());
    }

    let mut app = GameOfLife::new(&initial, rng, config.alive, config.speed);
    if let Some(index) = config.pattern_index()? {
        app.selected_pattern = index;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("viewer window failed: {err}"))
}
