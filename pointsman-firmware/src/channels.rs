//! Inter-task communication
//!
//! Static plumbing shared between the capture, controller and display
//! tasks. Captures cross task boundaries only through the lock-free
//! pending set; display output flows through a bounded channel so
//! settling delays never stall the controller loop.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use pointsman_core::input::PendingSet;
use pointsman_core::screen::CommandBatch;

/// Channel capacity for outbound display batches
const DISPLAY_CHANNEL_SIZE: usize = 4;

/// Confirmed switch presses waiting for the controller to arbitrate
pub static PENDING: PendingSet = PendingSet::new();

/// Display command batches from the controller to the display task
pub static DISPLAY_CHANNEL: Channel<CriticalSectionRawMutex, CommandBatch, DISPLAY_CHANNEL_SIZE> =
    Channel::new();
