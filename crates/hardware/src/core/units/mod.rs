//! Execution units and functional components.
//!
//! This module contains the processor's execution units: the integer ALU used
//! by ALU2 and the branch resolution unit used by the IF Unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for jumps and conditional branches.
pub mod bru;
