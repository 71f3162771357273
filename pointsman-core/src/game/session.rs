//! Score and ball-count aggregate
//!
//! Invariants: `score >= 0` and `balls <= MAX_BALLS`, after every
//! mutation. Scoring and reversal are symmetric saturating operations;
//! each is a no-op at its boundary.

/// Balls loaded at the start of a game; also the reversal ceiling
pub const MAX_BALLS: u8 = 10;

/// Score at or above which an exhausted game counts as a win
pub const WIN_SCORE: i16 = 1000;

/// One game's score and remaining balls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameSession {
    score: i16,
    balls: u8,
}

impl GameSession {
    /// Fresh session: zero score, full rack of balls
    pub fn new() -> Self {
        Self {
            score: 0,
            balls: MAX_BALLS,
        }
    }

    /// Current score, always >= 0
    pub fn score(&self) -> i16 {
        self.score
    }

    /// Balls remaining, always <= [`MAX_BALLS`]
    pub fn balls(&self) -> u8 {
        self.balls
    }

    /// True once every ball has been played
    pub fn exhausted(&self) -> bool {
        self.balls == 0
    }

    /// Reset to a fresh session
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// A ball dropped through a scoring hole: add its points, spend a ball
    ///
    /// No-op when no balls remain.
    pub fn apply_score(&mut self, points: i16) {
        if self.balls > 0 {
            self.score += points;
            self.balls -= 1;
        }
    }

    /// Undo one scored ball: subtract its points, return the ball
    ///
    /// The score clamps at zero. No-op when the rack is already full.
    pub fn apply_reversal(&mut self, points: i16) {
        if self.balls < MAX_BALLS {
            self.score = (self.score - points).max(0);
            self.balls += 1;
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
