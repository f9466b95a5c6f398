//! Instruction Fetch unit control state.
//!
//! Control-flow instructions never enter Pre-Issue. Fetch parks the first one
//! it sees in the waiting slot and stops fetching until the branch unit
//! resolves it. The resolved instruction is shown as `executed` for exactly
//! one cycle.

use std::sync::Arc;

use crate::isa::instruction::Instruction;

/// IF Unit state.
#[derive(Debug, Clone)]
pub struct IfUnit {
    /// Control-flow instruction waiting for its operands.
    pub waiting: Option<Arc<Instruction>>,
    /// Control-flow instruction resolved in the current cycle.
    pub executed: Option<Arc<Instruction>>,
    fetch_enabled: bool,
    break_retired: bool,
}

impl Default for IfUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl IfUnit {
    /// Creates an IF Unit with fetch enabled and nothing waiting.
    pub const fn new() -> Self {
        Self {
            waiting: None,
            executed: None,
            fetch_enabled: true,
            break_retired: false,
        }
    }

    /// Clears the previous cycle's `executed` slot.
    pub fn begin_cycle(&mut self) {
        self.executed = None;
    }

    /// Whether sequential fetch may proceed.
    #[inline]
    pub const fn fetch_enabled(&self) -> bool {
        self.fetch_enabled
    }

    /// Whether `BREAK` has been resolved.
    #[inline]
    pub const fn break_retired(&self) -> bool {
        self.break_retired
    }

    /// Parks a control-flow instruction and disables fetch.
    pub fn hold(&mut self, inst: Arc<Instruction>) {
        self.waiting = Some(inst);
        self.fetch_enabled = false;
    }

    /// Moves the waiting instruction to `executed`.
    ///
    /// Fetch is re-enabled unless the instruction was `BREAK`, which
    /// instead marks the program as retired.
    pub fn retire(&mut self, halt: bool) -> Option<Arc<Instruction>> {
        let inst = self.waiting.take()?;
        if halt {
            self.break_retired = true;
        } else {
            self.fetch_enabled = true;
        }
        self.executed = Some(Arc::clone(&inst));
        Some(inst)
    }
}
