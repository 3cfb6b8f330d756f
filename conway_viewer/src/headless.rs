// headless.rs - Terminal driver: one timed advance per interval tick

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use conway::{GenerationSequencer, Grid};

use crate::history::GridHistory;
use crate::render::render_text;

#[derive(Debug, Clone, Copy)]
pub struct HeadlessOptions {
    pub interval: Duration,
    pub generations: u64,
    pub print: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub generations: u64,
    pub population: usize,
    pub repeated: bool,
}

/// Runs until `options.generations` have been computed or the board repeats.
pub async fn run<W: Write>(initial: &Grid, options: HeadlessOptions, out: &mut W) -> Result<Summary> {
    let mut sequencer = GenerationSequencer::new(initial);
    let mut history = GridHistory::default();
    history.record(initial);
    if options.print {
        write!(out, "{}", render_text(0, initial)).context("failed to write frame")?;
    }

    let mut ticker = time::interval(options.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut repeated = false;
    while sequencer.generation() < options.generations {
        ticker.tick().await;

        let start = Instant::now();
        sequencer.advance();
        let elapsed = start.elapsed();
        debug!(
            generation = sequencer.generation(),
            population = sequencer.current().population(),
            elapsed_us = elapsed.as_micros() as u64,
            "tick"
        );

        if options.print {
            write!(out, "{}", render_text(sequencer.generation(), sequencer.current()))
                .context("failed to write frame")?;
        }
        if history.record(sequencer.current()) {
            info!(generation = sequencer.generation(), "board is repeating, stopping");
            repeated = true;
            break;
        }
    }
    out.flush().context("failed to flush output")?;

    Ok(Summary {
        generations: sequencer.generation(),
        population: sequencer.current().population(),
        repeated,
    })
}
