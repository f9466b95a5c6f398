//! Decoder and simulation error definitions.
//!
//! This module defines the error taxonomy for the simulator. It provides:
//! 1. **Decode Errors:** Malformed input lines and encodings outside the mnemonic tables.
//! 2. **Simulation Errors:** Data segment faults, fetches outside the program, and
//!    internal hazard invariant failures.
//! 3. **Configuration Errors:** Unparseable or out-of-range configuration documents.
//!
//! Every variant aborts the run; there is no partial-result recovery mode.

use thiserror::Error;

/// Failure to turn an input line into an instruction or data word.
///
/// Line numbers are 1-based positions in the input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The line is not exactly 32 characters of `0` and `1`.
    #[error("line {line}: malformed word ({reason})")]
    MalformedLine {
        /// Source line number.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },

    /// The two category bits select neither category 1 (`01`) nor category 2 (`11`).
    #[error("line {line}: unknown instruction category {bits:#04b}")]
    UnknownCategory {
        /// Source line number.
        line: usize,
        /// The raw category bits.
        bits: u32,
    },

    /// The opcode index is outside the category's mnemonic table.
    #[error("line {line}: unknown opcode {opcode} in category {category}")]
    UnknownOpcode {
        /// Source line number.
        line: usize,
        /// Category number (1 or 2).
        category: u8,
        /// The 4-bit opcode index.
        opcode: u32,
    },

    /// The input ended without a `BREAK`, so the program can never halt.
    #[error("program has no BREAK instruction")]
    MissingBreak,
}

/// Failure raised while the pipeline is running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The input could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A load or store addressed a word outside the data segment.
    #[error("cycle {cycle}: {mnemonic} at {pc} accessed address {address}, outside the data segment")]
    OutOfRangeAccess {
        /// Cycle in which the access happened.
        cycle: u64,
        /// Address of the memory instruction.
        pc: u32,
        /// Mnemonic of the memory instruction.
        mnemonic: &'static str,
        /// Effective address.
        address: i64,
    },

    /// A load or store used an address that is not a multiple of four.
    #[error("cycle {cycle}: {mnemonic} at {pc} used misaligned address {address}")]
    MisalignedAccess {
        /// Cycle in which the access happened.
        cycle: u64,
        /// Address of the memory instruction.
        pc: u32,
        /// Mnemonic of the memory instruction.
        mnemonic: &'static str,
        /// Effective address.
        address: i64,
    },

    /// Fetch reached an address with no instruction.
    #[error("cycle {cycle}: fetch from {pc} is outside the program")]
    FetchOutOfRange {
        /// Cycle in which the fetch happened.
        cycle: u64,
        /// The program counter.
        pc: u32,
    },

    /// An internal pipeline invariant was broken.
    #[error("cycle {cycle}: hazard violation: {detail}")]
    HazardViolation {
        /// Cycle in which the violation was detected.
        cycle: u64,
        /// Description of the broken invariant.
        detail: String,
    },

    /// The program did not halt within the configured cycle budget.
    #[error("simulation did not finish within {limit} cycles")]
    CycleLimitExceeded {
        /// The configured limit.
        limit: u64,
    },
}

/// Failure to load a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulator cannot run with.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
