//! Sequential reference interpreter.
//!
//! Executes one instruction at a time with no pipeline at all. The pipeline
//! must reach the same registers and data words for any program, because
//! its hazard checks only delay instructions and never reorder a dependent
//! pair.

use mipsim_core::config::{AddressingMode, Config};
use mipsim_core::isa::Mnemonic;
use mipsim_core::sim::load_image;

/// Architectural state after a reference run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Final register file.
    pub registers: [i32; 32],
    /// Final data words.
    pub data: Vec<i32>,
    /// Instructions executed, including the final `BREAK`.
    pub executed: u64,
}

/// Runs `source` to `BREAK`, or returns `None` after `limit` instructions or
/// on any fault.
pub fn run(source: &str, config: &Config, limit: u64) -> Option<Outcome> {
    let image = load_image(source, config).ok()?;
    let mut regs = [0i32; 32];
    let mut data = image.data.words().to_vec();
    let data_base = i64::from(image.data.base());
    let mut pc = image.program.base();
    let mut executed = 0;

    let index = |address: i64| -> Option<usize> {
        let offset = match config.memory.addressing {
            AddressingMode::SegmentRelative => address,
            AddressingMode::Absolute => address - data_base,
        };
        if offset < 0 || offset % 4 != 0 {
            return None;
        }
        Some((offset / 4) as usize)
    };

    while executed < limit {
        let inst = image.program.fetch(pc)?;
        executed += 1;
        let next = pc.wrapping_add(4);
        let rs = regs[inst.rs];
        let rt = regs[inst.rt];
        let branch = next.wrapping_add_signed(inst.imm);
        pc = next;

        match inst.mnemonic {
            Mnemonic::Break => {
                return Some(Outcome {
                    registers: regs,
                    data,
                    executed,
                });
            }
            Mnemonic::Nop => {}
            Mnemonic::J => pc = inst.target,
            Mnemonic::Jr => pc = rs as u32,
            Mnemonic::Beq if rs == rt => pc = branch,
            Mnemonic::Bltz if rs < 0 => pc = branch,
            Mnemonic::Bgtz if rs > 0 => pc = branch,
            Mnemonic::Beq | Mnemonic::Bltz | Mnemonic::Bgtz => {}
            Mnemonic::Lw => {
                let idx = index(i64::from(rs.wrapping_add(inst.imm)))?;
                regs[inst.rt] = *data.get(idx)?;
            }
            Mnemonic::Sw => {
                let idx = index(i64::from(rs.wrapping_add(inst.imm)))?;
                *data.get_mut(idx)? = rt;
            }
            Mnemonic::Sll => regs[inst.rd] = rt.wrapping_shl(inst.shamt),
            Mnemonic::Srl => regs[inst.rd] = ((rt as u32) >> inst.shamt) as i32,
            Mnemonic::Sra => regs[inst.rd] = rt >> inst.shamt,
            Mnemonic::Add => regs[inst.rd] = rs.wrapping_add(rt),
            Mnemonic::Sub => regs[inst.rd] = rs.wrapping_sub(rt),
            Mnemonic::Mul => regs[inst.rd] = rs.wrapping_mul(rt),
            Mnemonic::And => regs[inst.rd] = rs & rt,
            Mnemonic::Or => regs[inst.rd] = rs | rt,
            Mnemonic::Xor => regs[inst.rd] = rs ^ rt,
            Mnemonic::Nor => regs[inst.rd] = !(rs | rt),
            Mnemonic::Slt => regs[inst.rd] = i32::from(rs < rt),
            Mnemonic::Addi => regs[inst.rt] = rs.wrapping_add(inst.imm),
            Mnemonic::Andi => regs[inst.rt] = rs & inst.imm,
            Mnemonic::Ori => regs[inst.rt] = rs | inst.imm,
            Mnemonic::Xori => regs[inst.rt] = rs ^ inst.imm,
        }
    }
    None
}
