//! Instruction pipeline implementation.
//!
//! This module implements the two-issue, scoreboarded in-order pipeline. It
//! includes the following components:
//! 1. **Engine:** Owns the machine state and sequences the stages each cycle.
//! 2. **Stages:** Fetch, Issue, Execute, Memory and Writeback.
//! 3. **Latches:** Buffer entries and bounded queues between stages.
//! 4. **Hazards:** RAW/WAW/WAR and memory-order checks, plus branch readiness.
//! 5. **Scoreboard:** Per-register pending-writer flags.
//! 6. **IF Unit:** Holding slot for control-flow instructions.

/// Pipeline engine and per-cycle snapshot.
pub mod engine;

/// Data hazard and branch readiness checks.
pub mod hazards;

/// IF Unit state.
pub mod if_unit;

/// Inter-stage buffer entries and bounded queues.
pub mod latches;

/// Busy-flag scoreboard.
pub mod scoreboard;

/// Pipeline stage implementations.
pub mod stages;

pub use engine::{CycleSnapshot, Pipeline};
