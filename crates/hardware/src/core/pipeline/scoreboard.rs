//! Busy-flag scoreboard for register dependency tracking.
//!
//! Each architectural register carries one flag that is set while an issued
//! instruction that will write it is still in flight. Issue sets the flag and
//! write-back clears it. At most one in-flight writer per register is allowed,
//! so locking a locked register or releasing a free one is an invariant
//! failure the caller turns into a hazard violation.
//!
//! Stages that must see the state as of the start of the cycle work on a
//! cloned copy; the scoreboard is a fixed-size array, so the copy is cheap.

use crate::common::constants::NUM_REGISTERS;

/// Busy-flag scoreboard: `true` means a pending writer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    busy: [bool; NUM_REGISTERS],
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Create a new scoreboard with all registers clear (no pending writers).
    pub const fn new() -> Self {
        Self {
            busy: [false; NUM_REGISTERS],
        }
    }

    /// Whether `reg` has a pending writer.
    #[inline]
    pub const fn is_busy(&self, reg: usize) -> bool {
        self.busy[reg]
    }

    /// Mark `reg` as having a pending writer.
    ///
    /// Returns `false`, leaving the flag untouched, if it was already set.
    #[must_use]
    pub const fn lock(&mut self, reg: usize) -> bool {
        if self.busy[reg] {
            return false;
        }
        self.busy[reg] = true;
        true
    }

    /// Clear the pending writer of `reg`.
    ///
    /// Returns `false` if the register was not locked.
    #[must_use]
    pub const fn release(&mut self, reg: usize) -> bool {
        if !self.busy[reg] {
            return false;
        }
        self.busy[reg] = false;
        true
    }

    /// Returns true if no register has a pending writer.
    pub fn is_clear(&self) -> bool {
        self.busy.iter().all(|b| !b)
    }

    /// Indices of every locked register, in ascending order.
    pub fn locked(&self) -> impl Iterator<Item = usize> + '_ {
        self.busy
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }
}
