//! Tick scheduling for gravity steps
//!
//! The game loop blocks on a [`Ticker`] between gravity steps. Real games wait
//! a fixed interval; tests and headless runs step instantly.

use std::time::Duration;

use crate::commands::CommandQueue;
use crate::types::TICK_MS;

/// Paces the falling piece
pub trait Ticker {
    /// Block until the next gravity step is due.
    ///
    /// Implementations must return early once quit is requested on `queue`.
    fn wait(&mut self, queue: &CommandQueue);
}

/// Waits a fixed interval per tick, interrupted by `Quit`
#[derive(Debug, Clone, Copy)]
pub struct IntervalTicker {
    interval: Duration,
}

impl IntervalTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_MS as u64))
    }
}

impl Ticker for IntervalTicker {
    fn wait(&mut self, queue: &CommandQueue) {
        queue.wait_for_quit(self.interval);
    }
}

/// Never blocks; counts how many ticks elapsed
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualTicker {
    ticks: u64,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Ticker for ManualTicker {
    fn wait(&mut self, _queue: &CommandQueue) {
        self.ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Command;
    use std::time::Instant;

    #[test]
    fn default_interval_is_a_third_of_a_second() {
        assert_eq!(IntervalTicker::default().interval(), Duration::from_millis(333));
    }

    #[test]
    fn interval_ticker_returns_immediately_after_quit() {
        let queue = CommandQueue::new();
        queue.push(Command::Quit);
        let mut ticker = IntervalTicker::new(Duration::from_secs(60));

        let started = Instant::now();
        ticker.wait(&queue);
        assert!(started.elapsed() < Duration::from_secs(60));
    }

    #[test]
    fn manual_ticker_counts() {
        let queue = CommandQueue::new();
        let mut ticker = ManualTicker::new();
        ticker.wait(&queue);
        ticker.wait(&queue);
        assert_eq!(ticker.ticks(), 2);
    }
}
