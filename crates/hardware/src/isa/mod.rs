//! Instruction set definitions for the MIPS subset.
//!
//! This module contains everything needed to go from an input line to a
//! decoded instruction and back to text:
//! 1. **Opcodes:** Categories, mnemonics, operand formats, and the two opcode tables.
//! 2. **Instruction:** Bitfield accessors and the decoded instruction record.
//! 3. **Decode:** Line parsing, table lookup, and immediate extension.
//! 4. **Disassembly:** Assembly text and the disassembly listing.
//! 5. **Program:** The immutable, address-indexed instruction sequence.

/// Instruction decoder.
pub mod decode;

/// Assembly text rendering and the disassembly listing.
pub mod disasm;

/// Bitfield accessors and the decoded instruction type.
pub mod instruction;

/// Categories, mnemonics, and opcode tables.
pub mod opcodes;

/// Decoded program storage.
pub mod program;

pub use instruction::Instruction;
pub use opcodes::{Category, Format, Mnemonic};
pub use program::Program;
