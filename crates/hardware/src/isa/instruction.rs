//! Instruction encoding and decoded-instruction utilities.
//!
//! Provides bit extraction for the 32-bit instruction format and the decoded
//! [`Instruction`] record shared by every pipeline stage.

use std::fmt;

use crate::common::constants::{
    CATEGORY_MASK, CATEGORY_SHIFT, IMM16_MASK, INDEX26_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT,
    REG_MASK, RS_SHIFT, RT_SHIFT, SHAMT_SHIFT,
};
use crate::isa::opcodes::{Category, Format, Mnemonic};

/// Trait for extracting instruction fields from encoded instructions.
///
/// Layout, most significant bit first:
/// `category[31:30] | opcode[29:26] | rs[25:21] | rt[20:16] | rd[15:11] | shamt[10:6]`,
/// with `imm16[15:0]` and `index26[25:0]` overlapping the register fields.
pub trait InstructionBits {
    /// Extracts the 2-bit category field (bits 30-31).
    fn category_bits(&self) -> u32;

    /// Extracts the 4-bit opcode field (bits 26-29).
    fn opcode(&self) -> u32;

    /// Extracts the `rs` register field (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the `rt` register field (bits 16-20).
    fn rt(&self) -> usize;

    /// Extracts the `rd` register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift-amount field (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the raw 16-bit immediate/offset field (bits 0-15).
    fn imm16(&self) -> u32;

    /// Extracts the 26-bit jump index (bits 0-25).
    fn index26(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn category_bits(&self) -> u32 {
        (self >> CATEGORY_SHIFT) & CATEGORY_MASK
    }

    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM16_MASK
    }

    #[inline(always)]
    fn index26(&self) -> u32 {
        self & INDEX26_MASK
    }
}

/// A decoded instruction.
///
/// Operand fields not used by the mnemonic's [`Format`] are zero. `imm` is
/// already extended: sign-extended for offsets and `ADDI`, zero-extended for
/// `ANDI`/`ORI`/`XORI`, and pre-shifted by two for branch offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Raw 32-bit encoding.
    pub raw: u32,
    /// Address the instruction was loaded at.
    pub address: u32,
    /// Instruction category.
    pub category: Category,
    /// Operation.
    pub mnemonic: Mnemonic,
    /// `rs` register index.
    pub rs: usize,
    /// `rt` register index.
    pub rt: usize,
    /// `rd` register index.
    pub rd: usize,
    /// Shift amount for `SLL`/`SRL`/`SRA`.
    pub shamt: u32,
    /// Immediate value or memory/branch offset.
    pub imm: i32,
    /// Absolute target address for `J`.
    pub target: u32,
    /// Rendered assembly text, e.g. `ADD R3, R1, R2`.
    pub text: String,
}

impl Instruction {
    /// Operand layout.
    #[inline]
    pub const fn format(&self) -> Format {
        self.mnemonic.format()
    }

    /// Registers read by the instruction.
    ///
    /// `SW` reads `rt` as its store data. Control flow reads only the registers
    /// its condition or target needs.
    pub fn sources(&self) -> Vec<usize> {
        match self.format() {
            Format::ThreeReg | Format::BranchTwoReg => vec![self.rs, self.rt],
            Format::LoadStore if self.mnemonic == Mnemonic::Sw => vec![self.rs, self.rt],
            Format::LoadStore | Format::Immediate | Format::JumpRegister | Format::BranchOneReg => {
                vec![self.rs]
            }
            Format::Shift => vec![self.rt],
            Format::Jump | Format::NoOperand => Vec::new(),
        }
    }

    /// Register written by the instruction, if any.
    pub const fn destination(&self) -> Option<usize> {
        match self.format() {
            Format::ThreeReg | Format::Shift => Some(self.rd),
            Format::Immediate => Some(self.rt),
            Format::LoadStore => match self.mnemonic {
                Mnemonic::Lw => Some(self.rt),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether this instruction reads `reg`.
    pub fn reads(&self, reg: usize) -> bool {
        self.sources().contains(&reg)
    }

    /// Whether this instruction writes `reg`.
    pub fn writes(&self, reg: usize) -> bool {
        self.destination() == Some(reg)
    }

    /// Address of the following instruction.
    #[inline]
    pub const fn next_address(&self) -> u32 {
        self.address.wrapping_add(crate::common::constants::WORD_SIZE)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
