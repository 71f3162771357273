//! Millisecond timebase
//!
//! A single monotonic counter, incremented once per 1 ms tick and read
//! from everywhere else. The counter is atomic so a reader can never
//! observe a torn value while an increment is in flight; intervals are
//! computed with wrapping subtraction so the u32 rollover (~49.7 days)
//! is harmless.

use portable_atomic::{AtomicU32, Ordering};

/// Tick period of the counter, in milliseconds
pub const TICK_PERIOD_MS: u32 = 1;

/// Monotonic millisecond counter
///
/// `const`-constructible so it can live in a `static` shared between the
/// tick source and the rest of the system. Starts at 0, never resets,
/// wraps at `u32::MAX`.
pub struct TickCounter(AtomicU32);

impl TickCounter {
    /// Create a counter at 0
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Advance by one tick period
    ///
    /// Called exactly once per 1 ms period by the tick source; nothing
    /// else writes the counter.
    pub fn tick(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Current millisecond count
    pub fn now(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Milliseconds elapsed from `earlier` to `now`
///
/// Wraparound-safe: correct for any two readings less than a full u32
/// period apart. Never compare tick values directly.
pub fn since(now: u32, earlier: u32) -> u32 {
    now.wrapping_sub(earlier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        let ticks = TickCounter::new();
        assert_eq!(ticks.now(), 0);
    }

    #[test]
    fn test_tick_advances_by_one() {
        let ticks = TickCounter::new();
        for _ in 0..250 {
            ticks.tick();
        }
        assert_eq!(ticks.now(), 250);
    }

    #[test]
    fn test_since_simple() {
        assert_eq!(since(1500, 500), 1000);
        assert_eq!(since(500, 500), 0);
    }

    #[test]
    fn test_since_across_wraparound() {
        // 10 ms before rollover to 20 ms after is 30 ms
        let earlier = u32::MAX - 9;
        let now = 20;
        assert_eq!(since(now, earlier), 30);
    }
}
