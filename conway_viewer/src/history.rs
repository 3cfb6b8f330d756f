// history.rs - Recent grid hashes, used to pause once the board starts repeating

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use conway::Grid;

pub const HISTORY_LEN: usize = 10;

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug, Clone, Default)]
pub struct GridHistory {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

impl GridHistory {
    /// True if `grid` matches one of the last [`HISTORY_LEN`] recorded grids.
    /// A repeated grid is not recorded again.
    pub fn record(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::distributors::{find_pattern, pattern};
    use conway::{GenerationSequencer, GridSize};

    fn board(name: &str, size: usize) -> Grid {
        let shape = find_pattern(name).unwrap();
        Grid::generate(GridSize::new(size, size).unwrap(), pattern(shape))
    }

    #[test]
    fn blinker_repeats_after_two_generations() {
        let start = board("Blinker", 5);
        let mut history = GridHistory::default();
        let mut sequencer = GenerationSequencer::new(&start);
        assert!(!history.record(&start));
        assert!(!history.record(sequencer.advance()));
        assert!(history.record(sequencer.advance()));
    }

    #[test]
    fn still_life_repeats_immediately() {
        let mut grid = Grid::dead(GridSize::new(4, 4).unwrap());
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            grid.set(x, y, true);
        }
        let mut history = GridHistory::default();
        let mut sequencer = GenerationSequencer::new(&grid);
        assert!(!history.record(&grid));
        assert!(history.record(sequencer.advance()));
    }

    #[test]
    fn glider_does_not_repeat_on_a_large_board() {
        let mut history = GridHistory::default();
        let mut sequencer = GenerationSequencer::new(&board("Glider", 20));
        assert!(!history.record(sequencer.current()));
        for _ in 0..30 {
            assert!(!history.record(sequencer.advance()));
        }
    }

    #[test]
    fn clear_forgets_everything() {
        let grid = board("Toad", 6);
        let mut history = GridHistory::default();
        assert!(!history.record(&grid));
        history.clear();
        assert!(!history.record(&grid));
    }

    #[test]
    fn window_keeps_only_recent_grids() {
        let size = GridSize::new(HISTORY_LEN + 1, 1).unwrap();
        let grids: Vec<Grid> = (0..=HISTORY_LEN)
            .map(|i| Grid::generate(size, |x, _| x == i))
            .collect();
        let mut history = GridHistory::default();
        for grid in &grids {
            assert!(!history.record(grid));
        }
        // The first grid was pushed out by the eleventh.
        assert!(!history.record(&grids[0]));
        assert!(history.record(&grids[HISTORY_LEN]));
    }
}
