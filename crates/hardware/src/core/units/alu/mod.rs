//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by ALU2 in the Execute stage.
//! Every operation takes two signed 32-bit operands already captured at issue
//! and produces one signed 32-bit result. Immediates arrive pre-extended and
//! shift amounts arrive as the second operand.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Addi
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Andi, Ori, Xori
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract, multiply).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::opcodes::Mnemonic;

/// Arithmetic Logic Unit for the register and immediate ALU instructions.
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The instruction's mnemonic.
    /// * `a`  - First operand (`R[rs]`, or `R[rt]` for shifts).
    /// * `b`  - Second operand (`R[rt]`, the extended immediate, or the shift amount).
    ///
    /// # Returns
    ///
    /// The result to write back. Mnemonics that never reach ALU2 (memory and
    /// control flow) yield `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::isa::Mnemonic;
    ///
    /// assert_eq!(Alu::execute(Mnemonic::Add, 5, 10), 15);
    /// assert_eq!(Alu::execute(Mnemonic::Add, i32::MAX, 1), i32::MIN);
    /// assert_eq!(Alu::execute(Mnemonic::Slt, -5, 10), 1);
    /// assert_eq!(Alu::execute(Mnemonic::Sra, -16, 2), -4);
    /// ```
    pub fn execute(op: Mnemonic, a: i32, b: i32) -> i32 {
        match op {
            Mnemonic::Add | Mnemonic::Addi | Mnemonic::Sub | Mnemonic::Mul => {
                arithmetic::execute(op, a, b)
            }

            Mnemonic::And
            | Mnemonic::Andi
            | Mnemonic::Or
            | Mnemonic::Ori
            | Mnemonic::Xor
            | Mnemonic::Xori
            | Mnemonic::Nor
            | Mnemonic::Slt => logic::execute(op, a, b),

            Mnemonic::Sll | Mnemonic::Srl | Mnemonic::Sra => shifts::execute(op, a, b),

            Mnemonic::J
            | Mnemonic::Jr
            | Mnemonic::Beq
            | Mnemonic::Bltz
            | Mnemonic::Bgtz
            | Mnemonic::Break
            | Mnemonic::Nop
            | Mnemonic::Sw
            | Mnemonic::Lw => 0,
        }
    }
}
