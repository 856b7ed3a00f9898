//! Fixed-interval tick scheduling on top of the frame loop
//!
//! egui repaints on demand, so the ticker only tells the frame loop how many
//! fixed ticks are due and when the next one falls. It runs from a press until
//! the screen reports nothing left to animate.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_tick: Option<Instant>,
}

/// Upper bound on catch-up ticks after a stall (minimized window etc.)
const MAX_CATCH_UP: u32 = 120;

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(Duration::from_millis(1));
    }

    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Start counting from `now`. A running ticker keeps its phase.
    pub fn start(&mut self, now: Instant) {
        if self.last_tick.is_none() {
            self.last_tick = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    /// Number of whole intervals elapsed since the last consumed tick.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last_tick else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(last);
        let ticks = (elapsed.as_nanos() / self.interval.as_nanos()).min(u32::MAX as u128) as u32;
        if ticks == 0 {
            return 0;
        }
        if ticks > MAX_CATCH_UP {
            self.last_tick = Some(now);
            return MAX_CATCH_UP;
        }
        self.last_tick = Some(last + self.interval * ticks);
        ticks
    }

    /// Time until the next tick is due, `None` when stopped.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        let last = self.last_tick?;
        Some((last + self.interval).saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn stopped_ticker_never_fires() {
        let mut t = Ticker::new(MS * 50);
        let now = Instant::now();
        assert_eq!(t.due(now + MS * 500), 0);
        assert_eq!(t.until_next(now), None);
        assert!(!t.is_running());
    }

    #[test]
    fn counts_whole_intervals_and_keeps_remainder() {
        let mut t = Ticker::new(MS * 50);
        let start = Instant::now();
        t.start(start);
        assert_eq!(t.due(start + MS * 49), 0);
        assert_eq!(t.due(start + MS * 120), 2);
        // 20ms of the third interval already elapsed
        assert_eq!(t.until_next(start + MS * 120), Some(MS * 30));
        assert_eq!(t.due(start + MS * 150), 1);
    }

    #[test]
    fn restart_while_running_keeps_phase() {
        let mut t = Ticker::new(MS * 16);
        let start = Instant::now();
        t.start(start);
        t.start(start + MS * 10);
        assert_eq!(t.due(start + MS * 16), 1);
    }

    #[test]
    fn stall_is_capped() {
        let mut t = Ticker::new(MS * 16);
        let start = Instant::now();
        t.start(start);
        assert_eq!(t.due(start + Duration::from_secs(60)), MAX_CATCH_UP);
        assert_eq!(t.due(start + Duration::from_secs(60)), 0);
    }

    #[test]
    fn stop_clears_schedule() {
        let mut t = Ticker::new(MS * 16);
        let start = Instant::now();
        t.start(start);
        t.stop();
        assert_eq!(t.due(start + MS * 100), 0);
        assert_eq!(t.until_next(start), None);
    }
}
