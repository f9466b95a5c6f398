//! Pipeline stage implementations.
//!
//! Each stage is a free function over the [`Pipeline`](super::engine::Pipeline)
//! state. The engine calls them in reverse pipeline order:
//! 1. **Writeback:** Commits Post-MEM and Post-ALU2 results and releases locks.
//! 2. **Memory:** Performs the load or store held in Pre-MEM.
//! 3. **Execute:** ALU1 computes addresses; ALU2 computes results.
//! 4. **Issue:** Moves hazard-free instructions out of Pre-Issue.
//! 5. **Fetch:** Resolves the waiting control-flow instruction, then fetches.

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Instruction issue stage implementation.
pub mod issue;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Execute stage entry point (ALU1 and ALU2).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Issue stage entry point.
pub use issue::issue_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
