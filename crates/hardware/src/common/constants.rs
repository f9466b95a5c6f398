//! Global Simulator Constants.
//!
//! This module defines constants shared by the decoder and the pipeline. It includes:
//! 1. **Encoding Constants:** Word width and field shifts/masks for the instruction format.
//! 2. **Memory Constants:** Word size and the default program base address.
//! 3. **Pipeline Constants:** Fixed fetch/issue widths and default buffer capacities.

/// Width of one instruction or data word in bits.
pub const WORD_BITS: usize = 32;

/// Size of one instruction or data word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Address of the first input line unless the configuration overrides it.
pub const DEFAULT_BASE_ADDRESS: u32 = 256;

/// Bit position of the 2-bit category field (bits 31-30).
pub const CATEGORY_SHIFT: u32 = 30;

/// Mask for the category field after shifting.
pub const CATEGORY_MASK: u32 = 0x3;

/// Bit position of the 4-bit opcode field (bits 29-26).
pub const OPCODE_SHIFT: u32 = 26;

/// Mask for the opcode field after shifting.
pub const OPCODE_MASK: u32 = 0xF;

/// Bit position of the `rs` register field (bits 25-21).
pub const RS_SHIFT: u32 = 21;

/// Bit position of the `rt` register field (bits 20-16).
pub const RT_SHIFT: u32 = 16;

/// Bit position of the `rd` register field (bits 15-11).
pub const RD_SHIFT: u32 = 11;

/// Bit position of the shift-amount field (bits 10-6).
pub const SHAMT_SHIFT: u32 = 6;

/// Mask for any 5-bit register or shift-amount field after shifting.
pub const REG_MASK: u32 = 0x1F;

/// Mask for the 16-bit immediate/offset field (bits 15-0).
pub const IMM16_MASK: u32 = 0xFFFF;

/// Mask for the 26-bit jump index field (bits 25-0).
pub const INDEX26_MASK: u32 = 0x03FF_FFFF;

/// Mask selecting the top four bits of the program counter, kept by `J`.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Left shift applied to branch offsets and jump indices (word to byte).
pub const WORD_OFFSET_SHIFT: u32 = 2;

/// Instructions fetched per cycle.
pub const FETCH_WIDTH: usize = 2;

/// Default Pre-Issue queue capacity.
pub const DEFAULT_PRE_ISSUE_SIZE: usize = 4;

/// Default Pre-ALU1 / Pre-ALU2 queue capacity.
pub const DEFAULT_PRE_ALU_SIZE: usize = 2;

/// Default safety cap on simulated cycles.
pub const DEFAULT_MAX_CYCLES: u64 = 100_000;
