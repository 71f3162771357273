//! Game lifecycle
//!
//! The session aggregate (score and balls remaining) and the five-state
//! machine that owns it. Only this module mutates the session; the input
//! pipeline merely decides which events reach it.

pub mod machine;
pub mod session;

pub use machine::{Game, GameState};
pub use session::{GameSession, MAX_BALLS, WIN_SCORE};
