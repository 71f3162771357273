//! Score arbitration
//!
//! A ball rattling in a scoring hole can close its switch several times;
//! the debounce filter cannot tell those apart from honest repeat scores.
//! The arbiter can: it enforces a minimum interval between accepted
//! events per switch, dropping everything inside the window.

use crate::switches::{SwitchId, SWITCH_COUNT};
use crate::time;

/// Minimum interval between accepted score events on one switch, in ms
pub const SCORE_LOCKOUT_MS: u32 = 1000;

/// Per-switch lockout bookkeeping
///
/// Timestamps are seeded one lockout window in the past so the first
/// event on every switch is always eligible.
#[derive(Debug, Clone)]
pub struct ScoreArbiter {
    last_score: [u32; SWITCH_COUNT],
}

impl ScoreArbiter {
    /// Create an arbiter with every switch immediately eligible
    pub fn new() -> Self {
        Self {
            last_score: [0u32.wrapping_sub(SCORE_LOCKOUT_MS + 1); SWITCH_COUNT],
        }
    }

    /// Gate and re-arm in one step
    ///
    /// Returns `true` and re-arms the switch's lockout if more than
    /// [`SCORE_LOCKOUT_MS`] has elapsed since its last accepted event;
    /// returns `false` without mutating anything otherwise. Callers act
    /// only on `true`.
    pub fn eligible(&mut self, id: SwitchId, now: u32) -> bool {
        let index = id.index();
        if time::since(now, self.last_score[index]) > SCORE_LOCKOUT_MS {
            self.last_score[index] = now;
            true
        } else {
            false
        }
    }
}

impl Default for ScoreArbiter {
    fn default() -> Self {
        Self::new()
    }
}
