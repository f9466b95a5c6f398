//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA). The shift amount comes from the 5-bit
//! `shamt` field, so it is masked to 0-31.

use crate::isa::opcodes::Mnemonic;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The shift mnemonic.
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (lower five bits used).
///
/// # Returns
///
/// The shifted value. `SRL` shifts in zeros, `SRA` copies the sign bit.
/// Returns `0` for non-shift mnemonics.
pub const fn execute(op: Mnemonic, a: i32, b: i32) -> i32 {
    let sh = b as u32 & SHAMT_MASK;
    match op {
        Mnemonic::Sll => ((a as u32) << sh) as i32,
        Mnemonic::Srl => ((a as u32) >> sh) as i32,
        Mnemonic::Sra => a >> sh,
        _ => 0,
    }
}
