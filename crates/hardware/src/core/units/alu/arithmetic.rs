//! ALU arithmetic operations.
//!
//! Addition, subtraction and multiplication on signed 32-bit operands. All
//! three wrap on overflow; `MUL` keeps the low 32 bits of the product.

use crate::isa::opcodes::Mnemonic;

/// Executes an integer arithmetic operation.
///
/// Returns `0` for non-arithmetic mnemonics.
pub const fn execute(op: Mnemonic, a: i32, b: i32) -> i32 {
    match op {
        Mnemonic::Add | Mnemonic::Addi => a.wrapping_add(b),
        Mnemonic::Sub => a.wrapping_sub(b),
        Mnemonic::Mul => a.wrapping_mul(b),
        _ => 0,
    }
}
