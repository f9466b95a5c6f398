//! Core processor implementation.
//!
//! This module contains the simulated machine: architectural state, the data
//! segment, the execution units, and the instruction pipeline that
//! coordinates them.

/// Architectural state (register file).
pub mod arch;

/// Data segment storage and address mapping.
pub mod memory;

/// Instruction pipeline implementation (engine, stages, latches, hazards).
pub mod pipeline;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::pipeline::Pipeline;
