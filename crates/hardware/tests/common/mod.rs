//! Shared test infrastructure.

/// Instruction word encoders.
pub mod builder;


/// Sequential reference interpreter.
pub mod reference;
