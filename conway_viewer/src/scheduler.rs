// scheduler.rs - Interval scheduler behind the Start/Pause button and speed slider

use std::time::{Duration, Instant};

pub const MIN_SPEED: f32 = 0.5;                       // Slowest setting, gen/sec
pub const MAX_SPEED: f32 = 90.0;                      // Fastest setting, gen/sec
pub const DEFAULT_SPEED: f32 = 10.0;

/// Speeds outside the slider range are clamped; NaN falls back to the default.
pub fn interval_for_speed(speed: f32) -> Duration {
    let speed = if speed.is_nan() { DEFAULT_SPEED } else { speed };
    Duration::from_millis((1000.0 / speed.clamp(MIN_SPEED, MAX_SPEED)) as u64)
}

/// Decides when the next generation is due. Time is always passed in, so
/// the frame loop and the tests drive it the same way.
#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
    next_due: Option<Instant>,
    last_run: Option<Instant>,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next_due: None, last_run: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// The first run happens on the next poll.
    pub fn start(&mut self, now: Instant) {
        if !self.is_running() {
            self.next_due = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Re-times a running schedule against the last run, so a new interval
    /// never triggers an extra run unless it has already elapsed.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if let (Some(_), Some(last)) = (self.next_due, self.last_run) {
            self.next_due = Some((last + interval).max(now));
        }
    }

    /// Returns true when a run is due and books the following one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.last_run = Some(now);
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
