//! Score Display Communication Protocol
//!
//! This crate defines the I2C-based command protocol between the scoring
//! controller (bus master) and the remote score display. The protocol is
//! master-only and fire-and-forget: the display never responds, and the
//! controller never checks.
//!
//! # Protocol Overview
//!
//! Each logical command is one bus transaction addressed to the display:
//! ```text
//! ┌─────────┬─────────┬──────────────────────┐
//! │ ADDRESS │ COMMAND │ PAYLOAD              │
//! │ 0x04    │ 1B      │ command-specific     │
//! └─────────┴─────────┴──────────────────────┘
//! ```
//!
//! Commands:
//! - `0x01` / `0x02` — write text to the top/bottom row: `[color][len][bytes…]`
//! - `0x03` — write score: big-endian 16-bit signed
//! - `0x04` — write ball count: 1 byte
//! - `0x05` — clear screen: no payload
//!
//! The display is assumed ready again [`SETTLE_DELAY_MS`] after each
//! transaction; callers insert that delay between consecutive commands.

#![no_std]
#![deny(unsafe_code)]

pub mod commands;

pub use commands::{
    DisplayCommand, ProtocolError, Row, CMD_BALL_COUNT, CMD_CLEAR, CMD_SCORE, CMD_TEXT_BOTTOM,
    CMD_TEXT_TOP, DISPLAY_ADDRESS, MAX_COMMAND_SIZE, MAX_TEXT_LEN, SETTLE_DELAY_MS,
};
