//! Common utilities and types used throughout the simulator.
//!
//! This module provides building blocks shared by the decoder and the pipeline:
//! 1. **Constants:** Encoding field positions, word size, and pipeline defaults.
//! 2. **Error Handling:** The decode, simulation, and configuration error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for decoding, simulation, and configuration.
pub mod error;

pub use constants::{NUM_REGISTERS, WORD_SIZE};
pub use error::{ConfigError, DecodeError, SimError};
