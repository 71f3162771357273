//! Scoring switch capture tasks
//!
//! One task per switch owns its pin: it waits for the rising edge, runs
//! the bounded confirmation pass against the live level, and raises the
//! pending bit only for a confirmed press. Everything downstream
//! (arbitration, scoring) belongs to the controller.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use pointsman_core::input::{Debouncer, Edge, DEBOUNCE_SAMPLE_MS};
use pointsman_core::switches::SwitchId;

use crate::channels::PENDING;

/// Capture task for one scoring switch
#[embassy_executor::task(pool_size = 4)]
pub async fn switch_task(id: SwitchId, mut pin: Input<'static>) {
    info!("Switch task started: {:?}", id);

    let mut debouncer = Debouncer::new(pin.is_high());

    loop {
        pin.wait_for_rising_edge().await;

        // Confirm against the live pin, one sample per millisecond. The
        // pass is bounded, so this settles within ~5 ms.
        let mut pass = debouncer.begin();
        let confirmed = loop {
            Timer::after_millis(DEBOUNCE_SAMPLE_MS).await;
            if let Some(level) = pass.sample(pin.is_high()) {
                break level;
            }
        };

        // Only a genuine transition into the pressed level counts; a
        // re-confirmation of the current level is chatter.
        if debouncer.commit(confirmed) == Some(Edge::Pressed) {
            trace!("Confirmed press: {:?}", id);
            PENDING.raise(id);
        }
    }
}
