//! Input pipeline for the scoring switches
//!
//! Raw edges become score events in three stages, each the gatekeeper for
//! the next: the pending set coalesces asynchronous captures, the
//! debounce filter confirms a stable level, and the arbiter enforces the
//! per-switch lockout.

pub mod arbiter;
pub mod debounce;
pub mod pending;

pub use arbiter::{ScoreArbiter, SCORE_LOCKOUT_MS};
pub use debounce::{
    DebouncePass, Debouncer, Edge, DEBOUNCE_CHECKS, DEBOUNCE_REQUIRED, DEBOUNCE_SAMPLE_MS,
};
pub use pending::PendingSet;
