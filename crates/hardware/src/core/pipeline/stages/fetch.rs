//! Instruction Fetch (IF) Stage.
//!
//! This module implements the front of the pipeline. Each cycle it:
//! 1. **Resolves:** Retires the control-flow instruction waiting in the IF
//!    Unit once its source registers are hazard-free, redirecting the PC.
//! 2. **Fetches:** Reads up to two sequential instructions into Pre-Issue,
//!    bounded by the Pre-Issue space free at the start of the cycle.
//! 3. **Diverts:** Parks the first control-flow instruction in the IF Unit
//!    and stops fetching until it resolves.

use tracing::{debug, trace};

use crate::common::constants::FETCH_WIDTH;
use crate::common::error::SimError;
use crate::core::pipeline::engine::{CycleStart, Pipeline};
use crate::core::pipeline::hazards::branch_blocker;
use crate::core::units::bru::Bru;
use crate::isa::opcodes::Mnemonic;

/// Executes the instruction fetch stage of the pipeline.
///
/// # Errors
///
/// [`SimError::FetchOutOfRange`] if the PC leaves the program, and
/// [`SimError::HazardViolation`] if Pre-Issue overflows.
pub fn fetch_stage(p: &mut Pipeline, start: &CycleStart) -> Result<(), SimError> {
    resolve_waiting(p, start);

    if !p.if_unit.fetch_enabled() {
        return Ok(());
    }

    for _ in 0..FETCH_WIDTH.min(start.pre_issue_free) {
        let pc = p.pc;
        let Some(inst) = p.program.fetch(pc) else {
            return Err(SimError::FetchOutOfRange { cycle: p.cycle, pc });
        };
        p.pc = inst.next_address();
        p.stats.fetched += 1;

        if inst.mnemonic.is_control_flow() {
            debug!(cycle = p.cycle, pc, inst = %inst, "fetch: hold in IF unit");
            p.if_unit.hold(inst);
            break;
        }

        debug!(cycle = p.cycle, pc, inst = %inst, "fetch");
        if let Err(inst) = p.pre_issue.push(inst) {
            return Err(p.violation(format!("Pre-Issue overflow fetching {inst}")));
        }
    }
    Ok(())
}

/// Resolves the waiting control-flow instruction if its operands are ready.
fn resolve_waiting(p: &mut Pipeline, start: &CycleStart) {
    let Some(waiting) = p.if_unit.waiting.as_deref() else {
        return;
    };

    if let Some(reg) = branch_blocker(waiting, &start.committed, &p.scoreboard, &p.pre_issue) {
        trace!(cycle = p.cycle, pc = waiting.address, inst = %waiting, reg, "branch waits for operand");
        p.stats.stalls_control += 1;
        return;
    }

    let resolution = Bru::resolve(waiting, &p.regs);
    let Some(inst) = p.if_unit.retire(resolution.halt) else {
        return;
    };
    if !resolution.halt {
        p.pc = resolution.next_pc;
    }

    p.stats.branches += 1;
    p.stats.instructions_retired += 1;
    let redirects = !matches!(inst.mnemonic, Mnemonic::Nop | Mnemonic::Break);
    if redirects && resolution.taken {
        p.stats.branches_taken += 1;
    }

    debug!(
        cycle = p.cycle,
        pc = inst.address,
        inst = %inst,
        taken = resolution.taken,
        next_pc = resolution.next_pc,
        "resolve"
    );
}
