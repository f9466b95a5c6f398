//! ALU logical and comparison operations.
//!
//! Bitwise operations act on the raw 32 bits. `SLT` is a signed comparison
//! and always yields 0 or 1.

use crate::isa::opcodes::Mnemonic;

/// Executes a logical or comparison operation.
///
/// Returns `0` for non-logic mnemonics.
pub const fn execute(op: Mnemonic, a: i32, b: i32) -> i32 {
    match op {
        Mnemonic::And | Mnemonic::Andi => a & b,
        Mnemonic::Or | Mnemonic::Ori => a | b,
        Mnemonic::Xor | Mnemonic::Xori => a ^ b,
        Mnemonic::Nor => !(a | b),
        Mnemonic::Slt => (a < b) as i32,
        _ => 0,
    }
}
