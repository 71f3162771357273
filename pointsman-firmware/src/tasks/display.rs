//! Display transmit task
//!
//! Sends command batches to the remote score display. The link is
//! fire-and-forget by contract: no acknowledgement exists, so a bus
//! error is logged and the command dropped - the only symptom is a
//! stale display.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Timer;
use embedded_hal_async::i2c::I2c as _;

use pointsman_protocol::{DISPLAY_ADDRESS, SETTLE_DELAY_MS};

use crate::channels::DISPLAY_CHANNEL;

/// Display task - writes command batches over the I2C master
#[embassy_executor::task]
pub async fn display_task(mut i2c: I2c<'static, I2C0, Async>) {
    info!("Display task started");

    loop {
        let batch = DISPLAY_CHANNEL.receive().await;

        for command in &batch {
            match command.encode() {
                Ok(bytes) => {
                    if let Err(e) = i2c.write(DISPLAY_ADDRESS, &bytes).await {
                        warn!("Display write failed: {:?}", e);
                    }
                }
                Err(e) => warn!("Unencodable display command: {:?}", e),
            }

            // The display has no ready signal; give it settling time
            // after every transaction.
            Timer::after_millis(SETTLE_DELAY_MS).await;
        }
    }
}
