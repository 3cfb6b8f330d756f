//! Behaviour of the generation sequencer over whole runs.

use conway::distributors::{find_pattern, pattern, random};
use conway::{GenerationSequencer, Grid, GridError, GridSize};
use rand::rngs::StdRng;
use rand::SeedableRng;

const T: bool = true;
const F: bool = false;

fn four_by_four() -> Grid {
    Grid::from_rows(vec![
        vec![T, F, F, F],
        vec![F, T, T, F],
        vec![F, F, F, F],
        vec![F, T, F, F],
    ])
    .unwrap()
}

#[test]
fn advances_one_generation() {
    let mut sequencer = GenerationSequencer::new(&four_by_four());
    let next = sequencer.advance();
    assert_eq!(
        next.to_rows(),
        vec![
            vec![T, F, T, F],
            vec![F, T, F, F],
            vec![F, T, T, F],
            vec![F, F, F, F],
        ]
    );
    let mut alive: Vec<_> = next.alive_cells().collect();
    alive.sort();
    assert_eq!(alive, vec![(0, 0), (1, 1), (1, 2), (2, 0), (2, 2)]);
}

#[test]
fn chains_two_generations() {
    let mut sequencer = GenerationSequencer::new(&four_by_four());
    sequencer.advance();
    assert_eq!(
        sequencer.advance().to_rows(),
        vec![
            vec![F, T, F, F],
            vec![T, F, F, T],
            vec![F, T, T, F],
            vec![F, F, T, T],
        ]
    );
    assert_eq!(sequencer.generation(), 2);
}

#[test]
fn preserves_dimensions_on_every_call() {
    let mut rng = StdRng::seed_from_u64(3);
    for (width, height) in [(1, 1), (1, 5), (7, 1), (2, 3), (13, 8)] {
        let size = GridSize::new(width, height).unwrap();
        let mut sequencer = GenerationSequencer::new(&Grid::generate(size, random(0.4, &mut rng)));
        for _ in 0..10 {
            let next = sequencer.advance();
            assert_eq!((next.width(), next.height()), (width, height));
        }
    }
}

#[test]
fn caller_mutation_does_not_leak_into_buffers() {
    let mut grid = four_by_four();
    let mut sequencer = GenerationSequencer::new(&grid);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            grid.set(x, y, true);
        }
    }
    let mut untouched = GenerationSequencer::new(&four_by_four());
    assert_eq!(sequencer.advance(), untouched.advance());
    assert_eq!(sequencer.advance(), untouched.advance());
}

#[test]
fn rejects_invalid_grids_at_construction() {
    assert_eq!(GenerationSequencer::from_rows(vec![]).unwrap_err(), GridError::Empty);
    assert_eq!(
        GenerationSequencer::from_rows(vec![vec![T, F, F], vec![F, F]]).unwrap_err(),
        GridError::Jagged { row: 1, expected: 3, found: 2 }
    );
}

#[test]
fn blinker_oscillates_with_period_two() {
    let blinker = find_pattern("Blinker").unwrap();
    let start = Grid::generate(GridSize::new(5, 5).unwrap(), pattern(blinker));
    let mut sequencer = GenerationSequencer::new(&start);

    let vertical = sequencer.advance().clone();
    assert_ne!(vertical, start);
    assert_eq!(vertical.alive_cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(sequencer.advance(), &start);
}

#[test]
fn glider_wraps_around_the_torus() {
    let glider = find_pattern("Glider").unwrap();
    let start = Grid::generate(GridSize::new(8, 8).unwrap(), pattern(glider));
    let mut sequencer = GenerationSequencer::new(&start);

    // One diagonal step every four generations; eight steps cross the whole board.
    for _ in 0..31 {
        assert_eq!(sequencer.advance().population(), 5);
    }
    assert_eq!(sequencer.advance(), &start);
}

#[test]
fn block_on_the_seam_is_still_life() {
    // A 2x2 block split across all four corners.
    let mut grid = Grid::dead(GridSize::new(6, 5).unwrap());
    for (x, y) in [(0, 0), (5, 0), (0, 4), (5, 4)] {
        grid.set(x, y, true);
    }
    let mut sequencer = GenerationSequencer::new(&grid);
    assert_eq!(sequencer.advance(), &grid);
    assert_eq!(sequencer.advance(), &grid);
}
