//! Five-state game lifecycle
//!
//! The machine is a step function: the driver loop calls
//! [`Game::poll`] every iteration with the current tick count and start
//! button level, and [`Game::score_event`] once per confirmed, arbitrated
//! switch event. Each poll returns the display commands due this
//! iteration (usually none). Nothing here sleeps or reads hardware, so
//! the whole lifecycle runs under test with simulated time.

use crate::screen::{self, CommandBatch};
use crate::switches::SwitchId;
use crate::time;

use super::session::{GameSession, MAX_BALLS, WIN_SCORE};

/// Status refresh interval during Active and ReverseGame, in ms
pub const STATUS_REFRESH_MS: u32 = 200;

/// Banner alternation interval during EndGame and WinGame, in ms
pub const BANNER_REFRESH_MS: u32 = 1000;

/// "SCORE" caption color during normal play
const COLOR_PLAY: u8 = 1;
/// "SCORE" caption color during undo mode
const COLOR_UNDO: u8 = 2;

/// Game lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Prompting for a new game; waits on the start button only
    NewGame,
    /// Balls in play, score accumulating
    Active,
    /// Out of balls below the win threshold
    EndGame,
    /// Out of balls at or above the win threshold
    WinGame,
    /// Undo mode: balls returned one at a time, score wound back
    ReverseGame,
}

/// The game state machine
///
/// Owns the session exclusively; the input pipeline reaches it only
/// through [`Game::score_event`].
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    session: GameSession,
    /// Entry broadcast for the current state still owed
    entered: bool,
    /// Tick of the last periodic broadcast
    last_refresh: u32,
    /// Which half of the banner alternation comes next
    banner_flip: bool,
    /// ReverseGame finished unwinding; waiting on the start button
    settled: bool,
}

impl Game {
    /// Start at the new-game prompt
    pub fn new() -> Self {
        Self {
            state: GameState::NewGame,
            session: GameSession::new(),
            entered: true,
            last_refresh: 0,
            banner_flip: false,
            settled: false,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Current session values
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Apply one confirmed, arbitrated switch event
    ///
    /// Must be called at most once per arbitrated event; the arbiter's
    /// lockout already guarantees at-most-one acceptance per window.
    pub fn score_event(&mut self, id: SwitchId) {
        let points = id.points();
        match self.state {
            GameState::Active => self.session.apply_score(points),
            GameState::ReverseGame if !self.settled => self.session.apply_reversal(points),
            GameState::EndGame | GameState::WinGame => {
                // A ball pulled back out after the round ended: the
                // operator is undoing the game.
                self.enter(GameState::ReverseGame);
                self.session.apply_reversal(points);
            }
            // Prompt screen and a settled undo ignore the switches.
            _ => {}
        }
    }

    /// One driver-loop step; returns the display commands due now
    pub fn poll(&mut self, now: u32, start_pressed: bool) -> CommandBatch {
        if self.entered {
            self.entered = false;
            // Periodic broadcasts start immediately in the new state.
            self.force_refresh(now);
            match self.state {
                GameState::NewGame => return screen::new_game_prompt(),
                GameState::Active | GameState::ReverseGame => return screen::wiped(),
                GameState::EndGame | GameState::WinGame => {}
            }
        }

        match self.state {
            GameState::NewGame => {
                if start_pressed {
                    self.session.reset();
                    self.enter(GameState::Active);
                }
                CommandBatch::new()
            }

            GameState::Active => {
                if self.session.exhausted() {
                    let next = if self.session.score() >= WIN_SCORE {
                        GameState::WinGame
                    } else {
                        GameState::EndGame
                    };
                    self.enter(next);
                    return CommandBatch::new();
                }
                if self.refresh_due(now, STATUS_REFRESH_MS) {
                    return screen::play_status(
                        self.session.score(),
                        self.session.balls(),
                        COLOR_PLAY,
                    );
                }
                CommandBatch::new()
            }

            GameState::EndGame | GameState::WinGame => {
                if start_pressed {
                    self.enter(GameState::NewGame);
                    return CommandBatch::new();
                }
                if self.refresh_due(now, BANNER_REFRESH_MS) {
                    let first_half = !self.banner_flip;
                    self.banner_flip = first_half;
                    return match (self.state, first_half) {
                        (GameState::WinGame, true) => {
                            screen::max_score_banner(self.session.score())
                        }
                        (GameState::WinGame, false) => screen::great_job_banner(),
                        (_, true) => screen::score_banner(self.session.score()),
                        (_, false) => screen::game_over_banner(),
                    };
                }
                CommandBatch::new()
            }

            GameState::ReverseGame => {
                if self.settled {
                    if start_pressed {
                        self.session.reset();
                        self.enter(GameState::Active);
                    }
                    return CommandBatch::new();
                }
                if self.session.balls() == MAX_BALLS || self.session.score() == 0 {
                    self.settled = true;
                    return if self.session.score() == 0 {
                        screen::undo_success(self.session.score(), self.session.balls())
                    } else {
                        screen::undo_fail(self.session.score(), self.session.balls())
                    };
                }
                if self.refresh_due(now, STATUS_REFRESH_MS) {
                    return screen::play_status(
                        self.session.score(),
                        self.session.balls(),
                        COLOR_UNDO,
                    );
                }
                CommandBatch::new()
            }
        }
    }

    /// Switch states; the entry broadcast is owed on the next poll
    fn enter(&mut self, next: GameState) {
        self.state = next;
        self.entered = true;
        self.banner_flip = false;
        self.settled = false;
    }

    /// True at most once per `interval`; re-arms on true
    fn refresh_due(&mut self, now: u32, interval: u32) -> bool {
        if time::since(now, self.last_refresh) >= interval {
            self.last_refresh = now;
            true
        } else {
            false
        }
    }

    /// Make the next cadence check fire immediately
    fn force_refresh(&mut self, now: u32) {
        self.last_refresh = now.wrapping_sub(BANNER_REFRESH_MS.max(STATUS_REFRESH_MS));
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
