//! Execute (EX) Stage.
//!
//! Two independent units, each taking at most one entry per cycle:
//! 1. **ALU1:** Pre-ALU1 → Pre-MEM, computing the effective address `operand1 + operand2`.
//! 2. **ALU2:** Pre-ALU2 → Post-ALU2, applying the [`Alu`] operation.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::pipeline::engine::Pipeline;
use crate::core::units::alu::Alu;

/// Executes the execute stage of the pipeline.
///
/// # Errors
///
/// [`SimError::HazardViolation`] if a destination slot is still occupied,
/// which the preceding stages make impossible.
pub fn execute_stage(p: &mut Pipeline) -> Result<(), SimError> {
    if let Some(mut entry) = p.pre_alu1.pop_front() {
        if p.pre_mem.is_some() {
            return Err(p.violation("Pre-MEM occupied when ALU1 completed"));
        }
        entry.value = entry.operand1.wrapping_add(entry.operand2);
        trace!(cycle = p.cycle, inst = %entry.inst, address = entry.value, "alu1");
        p.pre_mem = Some(entry);
    }

    if let Some(mut entry) = p.pre_alu2.pop_front() {
        if p.post_alu2.is_some() {
            return Err(p.violation("Post-ALU2 occupied when ALU2 completed"));
        }
        entry.value = Alu::execute(entry.inst.mnemonic, entry.operand1, entry.operand2);
        trace!(cycle = p.cycle, inst = %entry.inst, result = entry.value, "alu2");
        p.stats.alu_ops += 1;
        p.post_alu2 = Some(entry);
    }
    Ok(())
}
