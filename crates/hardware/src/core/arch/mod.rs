//! Architectural state.
//!
//! This module contains the programmer-visible state of the processor:
//! 1. **GPRs:** The 32-entry signed register file.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
