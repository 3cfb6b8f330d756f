// sequencer.rs - Double-buffered generation sequencer on a torus

use tracing::trace;

use crate::error::Result;
use crate::grid::{Grid, GridSize};

/// Steps one coordinate by -1, 0 or +1, wrapping at both edges.
fn wrap(coord: usize, delta: isize, dim: usize) -> usize {
    match coord.checked_add_signed(delta) {
        None => dim - 1,
        Some(c) if c >= dim => 0,
        Some(c) => c,
    }
}

/// Counts alive cells among the 8 wrapped neighbours of `(x, y)`.
///
/// Every offset is evaluated on its own, so on grids one cell wide or tall
/// the same physical cell can be counted more than once.
pub fn alive_neighbours(grid: &Grid, x: usize, y: usize) -> u8 {
    let (width, height) = (grid.width(), grid.height());
    let mut count = 0;
    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if grid.get(wrap(x, dx, width), wrap(y, dy, height)) {
                count += 1;
            }
        }
    }
    count
}

/// Conway's rule: birth on 3, survival on 2 or 3.
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    match (alive, neighbours) {
        (true, 2) | (_, 3) => true,   // Survival or birth
        _ => false,                   // Death or stays dead
    }
}

/// Advances a grid one generation per call, reusing two buffers.
///
/// Both buffers are deep copies of the initial grid made at construction;
/// nothing is allocated afterwards.
#[derive(Debug, Clone)]
pub struct GenerationSequencer {
    current: Grid,
    scratch: Grid,
    generation: u64,
}

impl GenerationSequencer {
    pub fn new(initial: &Grid) -> Self {
        Self {
            current: initial.clone(),
            scratch: initial.clone(),
            generation: 0,
        }
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        Ok(Self::new(&Grid::from_rows(rows)?))
    }

    /// Computes the next generation into the scratch buffer, then swaps.
    pub fn advance(&mut self) -> &Grid {
        let (width, height) = (self.current.width(), self.current.height());
        for y in 0..height {
            for x in 0..width {
                let neighbours = alive_neighbours(&self.current, x, y);
                let alive = self.current.get(x, y);
                self.scratch.set(x, y, next_state(alive, neighbours));
            }
        }

        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.current.population(),
            "advanced"
        );
        &self.current
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn size(&self) -> GridSize {
        self.current.size()
    }
}
