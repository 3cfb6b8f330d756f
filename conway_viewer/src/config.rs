// config.rs - Command-line configuration

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use conway::distributors::{self, find_pattern, PATTERNS};
use conway::{Grid, GridSize};

use crate::scheduler::DEFAULT_SPEED;

pub const GRID_SIZE: usize = 50;                      // Default board is 50x50
pub const WINDOW_SIZE: [f32; 2] = [800.0, 950.0];

fn parse_percentage(value: &str) -> Result<f64, String> {
    let percentage: f64 = value.parse().map_err(|err| format!("{err}"))?;
    if (0.0..=1.0).contains(&percentage) {
        Ok(percentage)
    } else {
        Err(format!("{percentage} is not between 0 and 1"))
    }
}

fn parse_speed(value: &str) -> Result<f32, String> {
    let speed: f32 = value.parse().map_err(|err| format!("{err}"))?;
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(format!("{speed} is not a positive number of generations per second"))
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "conway_viewer", about = "Conway's Game of Life on a torus")]
pub struct Config {
    /// Grid width in cells
    #[arg(long, default_value_t = GRID_SIZE)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = GRID_SIZE)]
    pub height: usize,

    /// Derive the grid from a viewport width in pixels (reduced by GCD)
    #[arg(long, requires = "viewport_height")]
    pub viewport_width: Option<u32>,

    /// Derive the grid from a viewport height in pixels (reduced by GCD)
    #[arg(long, requires = "viewport_width")]
    pub viewport_height: Option<u32>,

    /// Share of cells alive in a random seeding, 0 to 1
    #[arg(long, default_value_t = distributors::DEFAULT_PERCENTAGE_ALIVE, value_parser = parse_percentage)]
    pub alive: f64,

    /// Seed with a named pattern instead of random cells
    #[arg(long)]
    pub pattern: Option<String>,

    /// Generations per second
    #[arg(long, default_value_t = DEFAULT_SPEED, value_parser = parse_speed)]
    pub speed: f32,

    /// Fixed RNG seed for reproducible boards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run in the terminal instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Generations to run in headless mode
    #[arg(long, default_value_t = 100)]
    pub generations: u64,

    /// Print every generation in headless mode
    #[arg(long)]
    pub print: bool,
}

impl Config {
    pub fn grid_size(&self) -> Result<GridSize> {
        let size = match (self.viewport_width, self.viewport_height) {
            (Some(width), Some(height)) => GridSize::from_viewport(width, height)?,
            _ => GridSize::new(self.width, self.height)?,
        };
        Ok(size)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Index into [`PATTERNS`] of the configured pattern, if any.
    pub fn pattern_index(&self) -> Result<Option<usize>> {
        let Some(name) = &self.pattern else {
            return Ok(None);
        };
        let shape = find_pattern(name).ok_or_else(|| {
            let known: Vec<_> = PATTERNS.iter().map(|p| p.name).collect();
            anyhow!("unknown pattern {name:?}, expected one of: {}", known.join(", "))
        })?;
        Ok(PATTERNS.iter().position(|p| std::ptr::eq(p, shape)))
    }

    pub fn initial_grid(&self, rng: &mut StdRng) -> Result<Grid> {
        let size = self.grid_size().context("invalid grid size")?;
        let grid = match self.pattern_index()? {
            Some(index) => Grid::generate(size, distributors::pattern(&PATTERNS[index])),
            None => Grid::generate(size, distributors::random(self.alive, rng)),
        };
        Ok(grid)
    }
}
