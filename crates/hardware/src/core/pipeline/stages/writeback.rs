//! Writeback (WB) Stage.
//!
//! Commits Post-MEM first and then Post-ALU2 to the register file, releasing
//! each destination's scoreboard lock. Both slots drain in the same cycle.

use tracing::debug;

use crate::common::error::SimError;
use crate::core::pipeline::engine::Pipeline;

/// Executes the writeback stage of the pipeline.
///
/// # Errors
///
/// [`SimError::HazardViolation`] if an entry has no destination or its
/// destination was not locked.
pub fn wb_stage(p: &mut Pipeline) -> Result<(), SimError> {
    for entry in [p.post_mem.take(), p.post_alu2.take()].into_iter().flatten() {
        let Some(dest) = entry.dest else {
            return Err(p.violation(format!("{} reached write-back without a destination", entry.inst)));
        };

        p.regs.write(dest, entry.value);
        if !p.scoreboard.release(dest) {
            return Err(p.violation(format!(
                "{} wrote R{dest} without holding its lock",
                entry.inst
            )));
        }
        p.stats.instructions_retired += 1;

        debug!(
            cycle = p.cycle,
            pc = entry.inst.address,
            inst = %entry.inst,
            dest,
            value = entry.value,
            "write-back"
        );
    }
    Ok(())
}
