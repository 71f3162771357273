//! Game controller task
//!
//! The driver loop: drains confirmed presses, arbitrates them against
//! the per-switch lockout, dispatches accepted events into the game
//! state machine, and steps the machine with the current tick count and
//! start button level. Display batches go out through the channel; the
//! session and arbiter never leave this task.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use pointsman_core::game::{Game, GameState};
use pointsman_core::input::ScoreArbiter;

use crate::channels::{DISPLAY_CHANNEL, PENDING};
use crate::tasks::tick::TICKS;

/// Controller loop period in milliseconds
///
/// Fast enough that the 200 ms status cadence and button handling feel
/// immediate; the heavy lifting is all event-driven.
const POLL_INTERVAL_MS: u64 = 5;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(start_button: Input<'static>) {
    info!("Controller task started");

    let mut game = Game::new();
    let mut arbiter = ScoreArbiter::new();
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        // The prompt screen waits on the start button alone; presses
        // captured while prompting are dropped when the game starts.
        if game.state() != GameState::NewGame {
            for id in PENDING.drain() {
                if arbiter.eligible(id, TICKS.now()) {
                    debug!("Score event: {:?}", id);
                    game.score_event(id);
                } else {
                    trace!("Lockout drop: {:?}", id);
                }
            }
        }

        let before = game.state();
        let batch = game.poll(TICKS.now(), start_button.is_low());
        if game.state() != before {
            info!("State: {:?} -> {:?}", before, game.state());
            // Stale captures do not carry across a lifecycle change.
            PENDING.clear();
        }

        if !batch.is_empty() {
            DISPLAY_CHANNEL.send(batch).await;
        }

        ticker.next().await;
    }
}
