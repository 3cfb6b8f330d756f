// distributors.rs - Initial populations: uniform random and fixed patterns

use rand::distributions::Standard;
use rand::Rng;

/// Share of cells seeded alive when nothing else is configured.
pub const DEFAULT_PERCENTAGE_ALIVE: f64 = 0.5;

/// A cell is alive when a uniform sample in `[0, 1)` falls strictly below
/// `percentage_alive`.
pub fn random<R: Rng>(
    percentage_alive: f64,
    rng: &mut R,
) -> impl FnMut(usize, usize) -> bool + '_ {
    move |_, _| {
        let sample: f64 = rng.sample(Standard);
        sample < percentage_alive
    }
}

/// A named set of alive cells, as `(x, y)` pairs.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells.iter().any(|&(cx, cy)| cx == x && cy == y)
    }
}

/// Alive exactly on the pattern's cells. Cells beyond the grid never get asked for.
pub fn pattern(shape: &Pattern) -> impl FnMut(usize, usize) -> bool + '_ {
    move |x, y| shape.contains(x, y)
}

/// Case-insensitive lookup in [`PATTERNS`].
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(1, 2), (2, 2), (3, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(2, 1), (3, 1), (4, 1), (1, 2), (2, 2), (3, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(1, 1), (2, 1), (1, 2), (2, 2), (3, 3), (4, 3), (3, 4), (4, 4)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (4, 2), (5, 2), (6, 2), (10, 2), (11, 2), (12, 2),
            (2, 4), (7, 4), (9, 4), (14, 4),
            (2, 5), (7, 5), (9, 5), (14, 5),
            (2, 6), (7, 6), (9, 6), (14, 6),
            (4, 7), (5, 7), (6, 7), (10, 7), (11, 7), (12, 7),
            // Bottom half (mirrored)
            (4, 9), (5, 9), (6, 9), (10, 9), (11, 9), (12, 9),
            (2, 10), (7, 10), (9, 10), (14, 10),
            (2, 11), (7, 11), (9, 11), (14, 11),
            (2, 12), (7, 12), (9, 12), (14, 12),
            (4, 14), (5, 14), (6, 14), (10, 14), (11, 14), (12, 14),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(2, 1), (3, 1), (1, 2), (2, 2), (2, 3)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (1, 5), (2, 5), (1, 6), (2, 6),
            (11, 5), (11, 6), (11, 7), (12, 4), (12, 8), (13, 3), (13, 9),
            (14, 3), (14, 9), (15, 6), (16, 4), (16, 8), (17, 5), (17, 6),
            (17, 7), (18, 6), (21, 3), (21, 4), (21, 5), (22, 3), (22, 4),
            (22, 5), (23, 2), (23, 6), (25, 1), (25, 2), (25, 6), (25, 7),
            (35, 3), (35, 4), (36, 3), (36, 4),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, GridSize};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Every draw from this source samples exactly 0.5.
    fn half() -> StepRng {
        StepRng::new(1 << 63, 0)
    }

    #[test]
    fn random_is_alive_below_the_threshold() {
        assert!(random(0.6, &mut half())(0, 0));
    }

    #[test]
    fn random_is_dead_above_the_threshold() {
        assert!(!random(0.4, &mut half())(0, 0));
    }

    #[test]
    fn random_is_dead_at_the_threshold() {
        assert!(!random(0.5, &mut half())(0, 0));
    }

    #[test]
    fn random_extremes_fill_or_empty_the_grid() {
        let size = GridSize::new(8, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Grid::generate(size, random(1.0, &mut rng)).population(), 48);
        assert_eq!(Grid::generate(size, random(0.0, &mut rng)).population(), 0);
    }

    #[test]
    fn seeded_random_grids_repeat() {
        let size = GridSize::new(10, 10).unwrap();
        let a = Grid::generate(size, random(DEFAULT_PERCENTAGE_ALIVE, &mut StdRng::seed_from_u64(42)));
        let b = Grid::generate(size, random(DEFAULT_PERCENTAGE_ALIVE, &mut StdRng::seed_from_u64(42)));
        assert_eq!(a, b);
    }

    #[test]
    fn pattern_places_exactly_its_cells() {
        let glider = find_pattern("glider").unwrap();
        let grid = Grid::generate(GridSize::new(6, 6).unwrap(), pattern(glider));
        let mut cells: Vec<_> = grid.alive_cells().collect();
        cells.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(cells, vec![(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn pattern_is_clipped_to_small_grids() {
        let gun = find_pattern("Gosper Glider Gun").unwrap();
        assert_eq!(gun.cells.len(), 36);
        let grid = Grid::generate(GridSize::new(16, 9).unwrap(), pattern(gun));
        let expected = gun.cells.iter().filter(|&&(x, y)| x < 16 && y < 9).count();
        assert_eq!(grid.population(), expected);
    }

    #[test]
    fn pattern_names_are_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            assert!(PATTERNS[i + 1..].iter().all(|b| !a.name.eq_ignore_ascii_case(b.name)));
        }
        assert!(find_pattern("no such pattern").is_none());
    }
}
