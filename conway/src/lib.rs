// lib.rs - Toroidal Conway's Game of Life core

pub mod distributors;
pub mod error;
pub mod grid;
pub mod sequencer;
pub mod sizing;

pub use distributors::{Pattern, PATTERNS};
pub use error::{GridError, Result};
pub use grid::{Grid, GridSize};
pub use sequencer::GenerationSequencer;
