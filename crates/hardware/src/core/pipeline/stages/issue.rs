//! Issue Stage.
//!
//! Scans Pre-Issue in program order and moves at most one memory instruction
//! to Pre-ALU1 and one ALU instruction to Pre-ALU2. An instruction may pass
//! older ones that cannot issue, as long as [`issue_hazard`] finds no
//! dependency on them. Operands are read from the register file here and
//! travel with the instruction.
//!
//! The candidates are chosen in one pass over an unchanged queue and removed
//! afterwards, so skipped instructions keep their relative order.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::common::error::SimError;
use crate::core::arch::Gpr;
use crate::core::pipeline::engine::{CycleStart, Pipeline};
use crate::core::pipeline::hazards::{PendingAccess, issue_hazard};
use crate::core::pipeline::latches::BufferEntry;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes::{Format, Mnemonic};

/// Executes the issue stage of the pipeline.
///
/// A queue only accepts an instruction if it was empty after Execute ran
/// this cycle.
///
/// # Errors
///
/// [`SimError::HazardViolation`] if a destination lock or a Pre-ALU push
/// fails, which the hazard checks make impossible.
pub fn issue_stage(p: &mut Pipeline, start: &CycleStart) -> Result<(), SimError> {
    let mut pending = PendingAccess::default();
    let mut mem_open = p.pre_alu1.is_empty();
    let mut alu_open = p.pre_alu2.is_empty();
    let mut chosen: Vec<usize> = Vec::with_capacity(2);
    let mut data_stall = false;
    let mut structural_stall = false;

    for (idx, inst) in p.pre_issue.iter().enumerate() {
        let is_memory = inst.mnemonic.is_memory();
        let open = if is_memory { mem_open } else { alu_open };

        if let Some(hazard) = issue_hazard(inst, &start.committed, &p.scoreboard, &pending) {
            trace!(cycle = p.cycle, pc = inst.address, inst = %inst, %hazard, "issue stall");
            data_stall = true;
            pending.note(inst);
            continue;
        }
        if !open {
            trace!(cycle = p.cycle, pc = inst.address, inst = %inst, "issue slot busy");
            structural_stall = true;
            pending.note(inst);
            continue;
        }

        if let Some(dest) = inst.destination() {
            if !p.scoreboard.lock(dest) {
                return Err(SimError::HazardViolation {
                    cycle: p.cycle,
                    detail: format!("{inst} issued while R{dest} was locked"),
                });
            }
        }
        if is_memory {
            mem_open = false;
        } else {
            alu_open = false;
        }
        chosen.push(idx);
    }

    // Highest index first so earlier indices stay valid.
    for &idx in chosen.iter().rev() {
        let Some(inst) = p.pre_issue.remove(idx) else {
            return Err(p.violation(format!("Pre-Issue entry {idx} vanished during issue")));
        };
        let entry = capture_operands(inst, &p.regs);
        debug!(
            cycle = p.cycle,
            pc = entry.inst.address,
            inst = %entry.inst,
            operand1 = entry.operand1,
            operand2 = entry.operand2,
            "issue"
        );

        let target = if entry.inst.mnemonic.is_memory() {
            &mut p.pre_alu1
        } else {
            &mut p.pre_alu2
        };
        if let Err(entry) = target.push(entry) {
            return Err(p.violation(format!("Pre-ALU queue overflow issuing {}", entry.inst)));
        }
        p.stats.issued += 1;
    }

    if data_stall {
        p.stats.stalls_data += 1;
    }
    if structural_stall {
        p.stats.stalls_structural += 1;
    }
    Ok(())
}

/// Builds the buffer entry for an issuing instruction, reading its operands
/// from the register file.
///
/// | Format        | operand1 | operand2        | store data |
/// |---------------|----------|-----------------|------------|
/// | `LW`          | `R[rs]`  | offset          |            |
/// | `SW`          | `R[rs]`  | offset          | `R[rt]`    |
/// | Shift         | `R[rt]`  | shift amount    |            |
/// | Immediate     | `R[rs]`  | extended imm    |            |
/// | Three-reg     | `R[rs]`  | `R[rt]`         |            |
pub fn capture_operands(inst: Arc<Instruction>, regs: &Gpr) -> BufferEntry {
    let (operand1, operand2) = match inst.format() {
        Format::LoadStore | Format::Immediate => (regs.read(inst.rs), inst.imm),
        Format::Shift => (regs.read(inst.rt), inst.shamt as i32),
        _ => (regs.read(inst.rs), regs.read(inst.rt)),
    };
    let store_data = if inst.mnemonic == Mnemonic::Sw {
        regs.read(inst.rt)
    } else {
        0
    };

    BufferEntry {
        operand1,
        operand2,
        store_data,
        ..BufferEntry::new(inst)
    }
}
