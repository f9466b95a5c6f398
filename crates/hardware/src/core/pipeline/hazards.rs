//! Data Hazard Detection.
//!
//! There is no forwarding: an instruction issues only when every operand it
//! reads is already in the register file and nothing older still owes a write
//! to, or a read from, its destination. This module provides:
//! 1. **Issue Checks:** RAW, WAW and WAR against the scoreboard and against older
//!    instructions still in Pre-Issue, plus memory ordering.
//! 2. **Branch Readiness:** Whether the instruction waiting in the IF Unit can resolve.
//!
//! Two scoreboards are consulted. `committed` is the state at the start of the
//! cycle, so a register released by Write-Back this cycle still reads as busy;
//! `current` additionally holds the locks taken by instructions issued earlier
//! in the same cycle.

use std::fmt;
use std::sync::Arc;

use crate::common::constants::NUM_REGISTERS;
use crate::core::pipeline::latches::BoundedQueue;
use crate::core::pipeline::scoreboard::Scoreboard;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes::Mnemonic;

/// Why a Pre-Issue instruction cannot issue this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    /// A source register has a pending or older writer.
    Raw(usize),
    /// The destination has a pending or older writer.
    Waw(usize),
    /// An older, unissued instruction still has to read the destination.
    War(usize),
    /// An older memory instruction has not issued yet.
    MemoryOrder,
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(r) => write!(f, "RAW on R{r}"),
            Self::Waw(r) => write!(f, "WAW on R{r}"),
            Self::War(r) => write!(f, "WAR on R{r}"),
            Self::MemoryOrder => f.write_str("older memory access not issued"),
        }
    }
}

/// Registers and memory accesses owed by older instructions that did not
/// issue this cycle.
#[derive(Debug, Clone, Default)]
pub struct PendingAccess {
    reads: [bool; NUM_REGISTERS],
    writes: [bool; NUM_REGISTERS],
    store: bool,
    load: bool,
}

impl PendingAccess {
    /// Records an instruction that stays in Pre-Issue.
    pub fn note(&mut self, inst: &Instruction) {
        for src in inst.sources() {
            self.reads[src] = true;
        }
        if let Some(dest) = inst.destination() {
            self.writes[dest] = true;
        }
        match inst.mnemonic {
            Mnemonic::Sw => self.store = true,
            Mnemonic::Lw => self.load = true,
            _ => {}
        }
    }

    /// Whether an older unissued instruction writes `reg`.
    #[inline]
    pub const fn writes(&self, reg: usize) -> bool {
        self.writes[reg]
    }

    /// Whether an older unissued instruction reads `reg`.
    #[inline]
    pub const fn reads(&self, reg: usize) -> bool {
        self.reads[reg]
    }
}

/// Returns the first hazard that keeps `inst` in Pre-Issue, or `None` if it
/// may issue as far as data dependencies are concerned.
///
/// Stores keep program order with every older store, and loads never pass an
/// older store. A store also never passes an older load, which would let the
/// load observe the newer value.
pub fn issue_hazard(
    inst: &Instruction,
    committed: &Scoreboard,
    current: &Scoreboard,
    pending: &PendingAccess,
) -> Option<Hazard> {
    match inst.mnemonic {
        Mnemonic::Lw if pending.store => return Some(Hazard::MemoryOrder),
        Mnemonic::Sw if pending.store || pending.load => return Some(Hazard::MemoryOrder),
        _ => {}
    }

    let busy = |reg: usize| committed.is_busy(reg) || current.is_busy(reg);

    if let Some(src) = inst
        .sources()
        .into_iter()
        .find(|&src| busy(src) || pending.writes(src))
    {
        return Some(Hazard::Raw(src));
    }

    let dest = inst.destination()?;
    if busy(dest) || pending.writes(dest) {
        return Some(Hazard::Waw(dest));
    }
    if pending.reads(dest) {
        return Some(Hazard::War(dest));
    }
    None
}

/// Returns the first source register that keeps a control-flow instruction
/// from resolving, or `None` if it can resolve now.
///
/// A source is blocked while it is locked in either scoreboard or while any
/// instruction still in Pre-Issue will write it.
pub fn branch_blocker(
    inst: &Instruction,
    committed: &Scoreboard,
    current: &Scoreboard,
    pre_issue: &BoundedQueue<Arc<Instruction>>,
) -> Option<usize> {
    inst.sources().into_iter().find(|&src| {
        committed.is_busy(src)
            || current.is_busy(src)
            || pre_issue.iter().any(|queued| queued.writes(src))
    })
}
