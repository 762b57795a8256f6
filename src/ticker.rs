use std::time::Duration;

/// Event-poll interval for the main loop, in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get the poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Turns irregular slices of elapsed wall time into whole one-second ticks.
/// The countdown logic only ever consumes full seconds, which keeps it
/// testable without real time.
#[derive(Debug, Default)]
pub struct SecondTicker {
    carry: Duration,
}

impl SecondTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed wall time; returns how many whole seconds have
    /// accumulated. The sub-second remainder carries over to the next call.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.carry += elapsed;
        let seconds = self.carry.as_secs();
        self.carry -= Duration::from_secs(seconds);
        seconds as u32
    }
}
