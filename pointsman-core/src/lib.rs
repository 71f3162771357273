//! Board-agnostic control core for the arcade scoring machine
//!
//! This crate contains all application logic that does not depend on
//! specific hardware:
//!
//! - Millisecond timebase with wraparound-safe interval arithmetic
//! - Scoring switch identity and point values
//! - Input pipeline: pending-event set, debounce filter, score arbiter
//! - Game session and the five-state game lifecycle
//! - Per-state display command batches
//!
//! Everything here is driven by values (tick counts, sampled levels,
//! button state) rather than peripherals, so the whole crate tests on the
//! host by stepping simulated time.

#![no_std]
#![deny(unsafe_code)]

pub mod game;
pub mod input;
pub mod screen;
pub mod switches;
pub mod time;
