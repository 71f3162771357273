//! Timebase tick task
//!
//! Advances the shared millisecond counter once per 1 ms period. This is
//! the only writer; everything else reads through [`TICKS`].

use defmt::*;
use embassy_time::{Duration, Ticker};

use pointsman_core::time::{TickCounter, TICK_PERIOD_MS};

/// The system millisecond counter
pub static TICKS: TickCounter = TickCounter::new();

/// Tick task - advances the timebase at 1 kHz
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS as u64));

    loop {
        ticker.next().await;
        TICKS.tick();
    }
}
