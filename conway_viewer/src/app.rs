// app.rs - Viewer state: the sequencer plus everything that drives it

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use tracing::{debug, info};

use conway::distributors::{self, PATTERNS};
use conway::{GenerationSequencer, Grid};

use crate::history::GridHistory;
use crate::render::GridView;
use crate::scheduler::{interval_for_speed, Scheduler};

pub struct GameOfLife {
    sequencer: GenerationSequencer,
    generations_before_edit: u64,     // Carried over when a cell is toggled
    history: GridHistory,
    scheduler: Scheduler,
    rng: StdRng,
    percentage_alive: f64,

    pub view: GridView,
    pub speed: f32,
    pub selected_pattern: usize,
}

impl GameOfLife {
    pub fn new(initial: &Grid, rng: StdRng, percentage_alive: f64, speed: f32) -> Self {
        let mut history = GridHistory::default();
        history.record(initial);
        Self {
            sequencer: GenerationSequencer::new(initial),
            generations_before_edit: 0,
            history,
            scheduler: Scheduler::new(interval_for_speed(speed)),
            rng,
            percentage_alive,
            view: GridView::new(initial.size()),
            speed,
            selected_pattern: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.sequencer.current()
    }

    pub fn generation(&self) -> u64 {
        self.generations_before_edit + self.sequencer.generation()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn toggle_running(&mut self, now: Instant) {
        if self.scheduler.is_running() {
            self.scheduler.stop();
            info!(generation = self.generation(), "paused");
        } else {
            self.scheduler.start(now);
            info!(generation = self.generation(), "started");
        }
    }

    pub fn pause(&mut self) {
        self.scheduler.stop();
    }

    pub fn set_speed(&mut self, speed: f32, now: Instant) {
        self.speed = speed;
        self.scheduler.set_interval(interval_for_speed(speed), now);
        debug!(speed, interval = ?self.scheduler.interval(), "speed changed");
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_due(now)
    }

    /// Advances at most one generation. Returns true if the board changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.scheduler.poll(now) {
            return false;
        }
        let grid = self.sequencer.advance();
        if self.history.record(grid) {
            self.scheduler.stop();
            info!(generation = self.generation(), "board is repeating, pausing");
        }
        true
    }

    /// Restarts from `grid`. The sequencer has no reset, so a new one is built.
    fn reseed(&mut self, grid: Grid) {
        self.generations_before_edit = 0;
        self.replace_sequencer(grid);
    }

    fn replace_sequencer(&mut self, grid: Grid) {
        self.sequencer = GenerationSequencer::new(&grid);
        self.history.clear();
        self.history.record(&grid);
        if self.view.size() != grid.size() {
            let (live, dead) = (self.view.live_color, self.view.dead_color);
            self.view = GridView::new(grid.size());
            self.view.live_color = live;
            self.view.dead_color = dead;
        }
        debug!(size = %grid.size(), population = grid.population(), "reseeded");
    }

    pub fn clear_grid(&mut self) {
        self.pause();
        self.reseed(Grid::dead(self.grid().size()));
    }

    pub fn apply_random_pattern(&mut self) {
        self.pause();
        let grid = Grid::generate(
            self.grid().size(),
            distributors::random(self.percentage_alive, &mut self.rng),
        );
        self.reseed(grid);
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(shape) = PATTERNS.get(self.selected_pattern) else {
            return;
        };
        self.pause();
        self.reseed(Grid::generate(self.grid().size(), distributors::pattern(shape)));
    }

    /// Cells can only be edited while paused.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if self.is_running() {
            return;
        }
        let mut grid = self.grid().clone();
        grid.toggle(x, y);
        self.generations_before_edit = self.generation();
        self.replace_sequencer(grid);
    }
}
