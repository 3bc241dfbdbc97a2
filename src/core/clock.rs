//! Fixed-step frame clock.
//!
//! Converts elapsed wall-clock time into a whole number of engine ticks at
//! 60 ticks per second. The remainder carries over to the next frame.

use super::constants::{FRAME_MICROS, MAX_FRAME_CATCHUP_MS};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FrameClock {
    step_micros: u64,
    accumulated_micros: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_step(Duration::from_micros(FRAME_MICROS))
    }

    pub fn with_step(step: Duration) -> Self {
        Self {
            step_micros: (step.as_micros() as u64).max(1),
            accumulated_micros: 0,
        }
    }

    pub fn step(&self) -> Duration {
        Duration::from_micros(self.step_micros)
    }

    /// Add `elapsed` and return how many ticks are now due.
    ///
    /// Elapsed time is clamped so a long stall (terminal resize, suspended
    /// process) does not replay seconds of simulation at once.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let cap = Duration::from_millis(MAX_FRAME_CATCHUP_MS);
        self.accumulated_micros += elapsed.min(cap).as_micros() as u64;

        let due = self.accumulated_micros / self.step_micros;
        self.accumulated_micros %= self.step_micros;
        due as u32
    }

    /// Time left until the next tick is due.
    pub fn until_next_tick(&self) -> Duration {
        Duration::from_micros(self.step_micros - self.accumulated_micros)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_less_than_a_step_is_zero_ticks() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(Duration::from_millis(10)), 0);
        assert_eq!(clock.advance(Duration::from_millis(10)), 1);
    }

    #[test]
    fn test_default_step_is_truncated_sixtieth() {
        assert_eq!(FrameClock::new().step(), Duration::from_micros(16_666));
    }

    #[test]
    fn test_one_second_is_sixty_ticks() {
        let mut clock = FrameClock::new();
        let mut ticks = 0;
        for _ in 0..100 {
            ticks += clock.advance(Duration::from_millis(10));
        }
        assert_eq!(ticks, 60);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::new();
        let ticks = clock.advance(Duration::from_secs(5));
        assert_eq!(ticks, 6); // 100ms / 16.666ms
    }

    #[test]
    fn test_until_next_tick() {
        let mut clock = FrameClock::with_step(Duration::from_millis(20));
        clock.advance(Duration::from_millis(5));
        assert_eq!(clock.until_next_tick(), Duration::from_millis(15));
    }
}
