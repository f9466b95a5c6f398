//! Per-cycle simulation trace rendering.
//!
//! Pure function of a [`CycleSnapshot`]: the same snapshot always renders to
//! the same text. Occupied slots print the instruction text in brackets
//! after the label. The IF Unit lines put the brackets right after the colon,
//! queue entries always keep the space after theirs, and the single-entry
//! buffers add a space only when occupied.

use std::fmt::{self, Write};

use crate::common::constants::WORD_SIZE;
use crate::core::pipeline::CycleSnapshot;
use crate::isa::instruction::Instruction;

/// Separator printed before each cycle block.
pub const SEPARATOR: &str = "--------------------";

/// Values per row in the register and data dumps.
const ROW_WIDTH: usize = 8;

/// Renders one cycle block.
pub fn render_cycle(snap: &CycleSnapshot<'_>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_cycle(&mut out, snap);
    out
}

fn write_cycle(out: &mut String, snap: &CycleSnapshot<'_>) -> fmt::Result {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Cycle:{}", snap.cycle)?;
    writeln!(out)?;

    writeln!(out, "IF Unit:")?;
    slot(out, "\tWaiting Instruction:", "", snap.waiting)?;
    slot(out, "\tExecuted Instruction:", "", snap.executed)?;

    queue(out, "Pre-Issue Queue:", &snap.pre_issue, snap.pre_issue_size)?;
    queue(out, "Pre-ALU1 Queue:", &snap.pre_alu1, snap.pre_alu_size)?;
    slot(out, "Pre-MEM Queue:", " ", snap.pre_mem)?;
    slot(out, "Post-MEM Queue:", " ", snap.post_mem)?;
    queue(out, "Pre-ALU2 Queue:", &snap.pre_alu2, snap.pre_alu_size)?;
    slot(out, "Post-ALU2 Queue:", " ", snap.post_alu2)?;
    writeln!(out)?;

    writeln!(out, "Registers")?;
    for (row, regs) in snap.registers.chunks(ROW_WIDTH).enumerate() {
        write!(out, "R{:02}:", row * ROW_WIDTH)?;
        for value in regs {
            write!(out, "\t{value}")?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    writeln!(out, "Data")?;
    let words = snap.data.words();
    for (row, chunk) in words.chunks(ROW_WIDTH).enumerate() {
        let address = snap.data.base() as usize + row * ROW_WIDTH * WORD_SIZE as usize;
        write!(out, "{address}:")?;
        for value in chunk {
            write!(out, "\t{value}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn slot(out: &mut String, label: &str, gap: &str, inst: Option<&Instruction>) -> fmt::Result {
    match inst {
        Some(inst) => writeln!(out, "{label}{gap}[{inst}]"),
        None => writeln!(out, "{label}"),
    }
}

fn queue(out: &mut String, label: &str, entries: &[&Instruction], capacity: usize) -> fmt::Result {
    writeln!(out, "{label}")?;
    for idx in 0..capacity {
        slot(out, &format!("\tEntry {idx}: "), "", entries.get(idx).copied())?;
    }
    Ok(())
}
