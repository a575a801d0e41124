use web_time::{Duration, Instant};

/// How often the elapsed time is redrawn while the game runs.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Wall-clock span of one game, from the first flip to the last match.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameTimer {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl GameTimer {
    pub const fn new() -> Self {
        Self {
            started_at: None,
            stopped_at: None,
        }
    }

    /// Starts the clock, returns `false` if it had already been started.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Stops the clock, returns `false` if it was not running.
    pub fn stop(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        self.stopped_at = Some(now);
        true
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped_at.is_some()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self
                .stopped_at
                .unwrap_or(now)
                .saturating_duration_since(started_at),
            None => Duration::ZERO,
        }
    }

    /// Whole seconds elapsed, rounded down.
    pub fn elapsed_secs(&self, now: Instant) -> u32 {
        self.elapsed(now).as_secs().try_into().unwrap_or(u32::MAX)
    }
}
