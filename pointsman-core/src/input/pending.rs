//! Pending-event set
//!
//! One bit per scoring switch, raised from capture context and drained by
//! the controller loop. A bitmask rather than a queue: repeat captures of
//! the same switch between drains coalesce into one event, and a drain
//! hands each raised switch to the caller exactly once, in ascending
//! index order.

use portable_atomic::{AtomicU8, Ordering};

use crate::switches::{SwitchId, SWITCH_COUNT};

/// Lock-free set of switches with a capture waiting to be processed
///
/// `raise` is the only operation permitted from capture context; it is a
/// single atomic OR and never touches game state.
pub struct PendingSet(AtomicU8);

impl PendingSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self(AtomicU8::new(0))
    }

    /// Mark a switch as pending
    pub fn raise(&self, id: SwitchId) {
        self.0.fetch_or(1 << id.index(), Ordering::Relaxed);
    }

    /// Take and clear the whole set
    ///
    /// Returns an iterator over the raised switches in index order.
    /// Captures that land after the swap stay raised for the next drain.
    pub fn drain(&self) -> Drained {
        Drained {
            mask: self.0.swap(0, Ordering::Relaxed),
            index: 0,
        }
    }

    /// Discard all pending events without processing them
    pub fn clear(&self) {
        self.0.store(0, Ordering::Relaxed);
    }

    /// True if no switch is pending
    pub fn is_empty(&self) -> bool {
        self.0.load(Ordering::Relaxed) == 0
    }
}

impl Default for PendingSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a drained pending set, ascending switch index
pub struct Drained {
    mask: u8,
    index: usize,
}

impl Iterator for Drained {
    type Item = SwitchId;

    fn next(&mut self) -> Option<SwitchId> {
        while self.index < SWITCH_COUNT {
            let index = self.index;
            self.index += 1;
            if self.mask & (1 << index) != 0 {
                return SwitchId::from_index(index);
            }
        }
        None
    }
}
