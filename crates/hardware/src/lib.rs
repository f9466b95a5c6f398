//! MIPS-subset decoder and pipeline simulator library.
//!
//! This crate decodes a textual listing of 32-bit binary words and simulates
//! it on a two-issue, scoreboarded, in-order pipeline. It provides:
//! 1. **ISA:** Opcode tables, the decoder, and the disassembler for the 24-instruction subset.
//! 2. **Core:** Register file, data segment, ALU, branch unit, and the pipeline engine.
//! 3. **Simulation:** Image loading, the run loop, and the per-cycle trace.
//! 4. **Configuration:** Base address, queue sizes, addressing mode, and cycle budget.
//!
//! # Example
//!
//! ```
//! use mipsim_core::{Config, Simulator};
//!
//! // ADDI R1, R0, #5 ; BREAK
//! let text = "11100000000000010000000000000101\n\
//!             01010100000000000000000000001101\n";
//! let mut sim = Simulator::from_source(text, &Config::default()).unwrap();
//! let trace = sim.run_to_trace().unwrap();
//! assert_eq!(sim.registers()[1], 5);
//! assert!(trace.starts_with("--------------------\nCycle:1\n"));
//! ```

/// Common types and constants (register indices, field layout, errors).
pub mod common;
/// Simulator configuration (defaults, addressing mode, queue sizes).
pub mod config;
/// Machine model (architectural state, data segment, units, pipeline).
pub mod core;
/// Instruction set (opcodes, decode, disassembly, program storage).
pub mod isa;
/// Image loader, run loop, and trace rendering.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Error taxonomy.
pub use crate::common::error::{ConfigError, DecodeError, SimError};
/// Top-level simulator; construct with `Simulator::new` or `Simulator::from_source`.
pub use crate::sim::Simulator;
/// Per-run counters.
pub use crate::stats::SimStats;
