//! Branch Resolution Unit (BRU).
//!
//! There is no prediction: the IF Unit holds a control-flow instruction until
//! its source registers are ready and then asks the BRU for the next fetch
//! address. Branch offsets are already shifted by the decoder and are relative
//! to the address after the branch.

use crate::core::arch::Gpr;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes::Mnemonic;

/// Outcome of resolving one control-flow instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Address to fetch next.
    pub next_pc: u32,
    /// Whether a conditional branch was taken. Always true for `J`/`JR`.
    pub taken: bool,
    /// Set only by `BREAK`: fetch stays disabled for the rest of the run.
    pub halt: bool,
}

/// Branch Resolution Unit.
pub struct Bru;

impl Bru {
    /// Resolves a control-flow instruction against the current register file.
    ///
    /// `NOP` and `BREAK` fall through to the next address; `BREAK` also
    /// reports `halt`. Non-control-flow mnemonics fall through as well.
    pub const fn resolve(inst: &Instruction, regs: &Gpr) -> Resolution {
        let fallthrough = inst.next_address();
        let (taken, target) = match inst.mnemonic {
            Mnemonic::J => (true, inst.target),
            Mnemonic::Jr => (true, regs.read(inst.rs) as u32),
            Mnemonic::Beq => (
                regs.read(inst.rs) == regs.read(inst.rt),
                fallthrough.wrapping_add_signed(inst.imm),
            ),
            Mnemonic::Bltz => (
                regs.read(inst.rs) < 0,
                fallthrough.wrapping_add_signed(inst.imm),
            ),
            Mnemonic::Bgtz => (
                regs.read(inst.rs) > 0,
                fallthrough.wrapping_add_signed(inst.imm),
            ),
            _ => (false, fallthrough),
        };
        Resolution {
            next_pc: if taken { target } else { fallthrough },
            taken,
            halt: matches!(inst.mnemonic, Mnemonic::Break),
        }
    }
}
