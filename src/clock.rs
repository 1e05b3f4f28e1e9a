//! Timed simulation ticks
//!
//! Driven from the animation frame loop: each frame reports the current time
//! and gets back how many simulation ticks are due. Rendering keeps running
//! while paused; only ticks stop.

use crate::consts::{MAX_CATCHUP_TICKS, MAX_SPEED, MIN_SPEED};

#[derive(Debug, Clone)]
pub struct TickClock {
    interval_ms: f64,
    accumulator: f64,
    last_time: Option<f64>,
    paused: bool,
}

impl TickClock {
    /// `speed` is in ticks per second, clamped to the supported range
    pub fn new(speed: u32) -> Self {
        Self {
            interval_ms: Self::interval_for(speed),
            accumulator: 0.0,
            last_time: None,
            paused: false,
        }
    }

    /// Tick interval in milliseconds for a speed setting
    pub fn interval_for(speed: u32) -> f64 {
        1000.0 / speed.clamp(MIN_SPEED, MAX_SPEED) as f64
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.interval_ms = Self::interval_for(speed);
        log::debug!("Tick interval {:.1}ms", self.interval_ms);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume timing from the next frame, with no catch-up for the pause
    pub fn resume(&mut self) {
        self.paused = false;
        self.last_time = None;
        self.accumulator = 0.0;
    }

    /// Returns the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
        self.paused
    }

    /// Number of ticks due at `now_ms`
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        if self.paused {
            return 0;
        }
        let Some(last) = self.last_time.replace(now_ms) else {
            return 0;
        };

        self.accumulator += (now_ms - last).max(0.0);

        let mut due = 0;
        while self.accumulator >= self.interval_ms && due < MAX_CATCHUP_TICKS {
            self.accumulator -= self.interval_ms;
            due += 1;
        }
        if due == MAX_CATCHUP_TICKS {
            // Drop the backlog rather than spiralling
            self.accumulator = 0.0;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_speed() {
        assert_eq!(TickClock::interval_for(10), 100.0);
        assert_eq!(TickClock::interval_for(0), 1000.0);
        assert_eq!(TickClock::interval_for(1000), 1000.0 / 60.0);

        let mut clock = TickClock::new(4);
        assert_eq!(clock.interval_ms(), 250.0);
        clock.set_speed(20);
        assert_eq!(clock.interval_ms(), 50.0);
    }

    #[test]
    fn test_advance_schedule() {
        let mut clock = TickClock::new(10);
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.advance(100.0), 1);
        assert_eq!(clock.advance(150.0), 0);
        assert_eq!(clock.advance(200.0), 1);
        // Long stall is capped
        assert_eq!(clock.advance(10_000.0), MAX_CATCHUP_TICKS);
        assert_eq!(clock.advance(10_050.0), 0);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut clock = TickClock::new(10);
        clock.advance(0.0);
        assert!(clock.toggle_pause());
        assert_eq!(clock.advance(500.0), 0);

        assert!(!clock.toggle_pause());
        // Timing restarts; no burst for the paused time
        assert_eq!(clock.advance(1_000.0), 0);
        assert_eq!(clock.advance(1_100.0), 1);
    }

    #[test]
    fn test_time_going_backwards() {
        let mut clock = TickClock::new(10);
        clock.advance(500.0);
        assert_eq!(clock.advance(100.0), 0);
    }
}
