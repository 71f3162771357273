//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`. Everything shares one cooperative executor, so the
//! application remains a single logical thread.

pub mod controller;
pub mod display;
pub mod switches;
pub mod tick;

pub use controller::controller_task;
pub use display::display_task;
pub use switches::switch_task;
pub use tick::tick_task;
