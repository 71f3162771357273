//! Pointsman - Arcade Scoring Machine Firmware
//!
//! Main firmware binary for RP2040-based scoring controllers. Watches
//! the four scoring microswitches and the start button, runs the game
//! lifecycle, and drives the remote score display over I2C.
//!
//! Named after the railwayman who works the points: this firmware's
//! whole job is watching switches and keeping the score honest.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use pointsman_core::switches::SwitchId;

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => I2cInterruptHandler<I2C0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pointsman firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Scoring switches: one microswitch per hole, wired active-high
    // against pull-downs, in point-value order.
    let switch_five = Input::new(p.PIN_2, Pull::Down);
    let switch_ten = Input::new(p.PIN_3, Pull::Down);
    let switch_fifty = Input::new(p.PIN_4, Pull::Down);
    let switch_hundred = Input::new(p.PIN_5, Pull::Down);

    // Start button: active-low against the internal pull-up
    let start_button = Input::new(p.PIN_6, Pull::Up);

    // Setup I2C master for the remote score display
    let i2c_config = {
        let mut cfg = I2cConfig::default();
        cfg.frequency = 100_000;
        cfg
    };
    let i2c = I2c::new_async(p.I2C0, p.PIN_17, p.PIN_16, Irqs, i2c_config);

    info!("I2C initialized for display communication");

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::switch_task(SwitchId::Five, switch_five))
        .unwrap();
    spawner
        .spawn(tasks::switch_task(SwitchId::Ten, switch_ten))
        .unwrap();
    spawner
        .spawn(tasks::switch_task(SwitchId::Fifty, switch_fifty))
        .unwrap();
    spawner
        .spawn(tasks::switch_task(SwitchId::Hundred, switch_hundred))
        .unwrap();
    spawner.spawn(tasks::display_task(i2c)).unwrap();
    spawner.spawn(tasks::controller_task(start_button)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
