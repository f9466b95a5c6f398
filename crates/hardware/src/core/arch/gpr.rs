//! General-Purpose Register File.
//!
//! This module implements the 32-entry register file. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`R0`-`R31`), all starting at 0.
//! 2. **Uniformity:** `R0` is an ordinary register here; writes to it stick.
//! 3. **Debugging:** Provides read-only access to the full register state for traces.

use crate::common::constants::NUM_REGISTERS;

/// General-Purpose Register file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGISTERS],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline]
    pub const fn read(&self, idx: usize) -> i32 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The value to store.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx] = val;
    }

    /// All 32 registers, `R0` first.
    #[inline]
    pub const fn as_slice(&self) -> &[i32; NUM_REGISTERS] {
        &self.regs
    }
}
