//! Instruction Disassembler.
//!
//! Converts decoded instructions into assembly text and produces the
//! disassembly listing (one line per input word).
//!
//! # Text formats
//!
//! | Format        | Example                   |
//! |---------------|---------------------------|
//! | Jump          | `J #280`                  |
//! | Jump register | `JR #4`                   |
//! | One-reg branch| `BGTZ R1, #8`             |
//! | Two-reg branch| `BEQ R1, R2, #-12`        |
//! | Load/store    | `LW R3, 4(R0)`            |
//! | Three-reg     | `ADD R3, R1, R2`          |
//! | Immediate     | `ADDI R1, R0, #5`         |
//! | Shift         | `SLL R2, R1, #3`          |
//! | No operand    | `BREAK`, `NOP`            |

use std::fmt::Write;

use crate::isa::instruction::Instruction;
use crate::isa::opcodes::Format;
use crate::sim::loader::Image;

/// Renders the assembly text of a decoded instruction.
pub fn render(inst: &Instruction) -> String {
    let op = inst.mnemonic.name();
    match inst.format() {
        Format::Jump => format!("{op} #{}", inst.target),
        Format::JumpRegister => format!("{op} #{}", inst.rs),
        Format::BranchOneReg => format!("{op} R{}, #{}", inst.rs, inst.imm),
        Format::BranchTwoReg => format!("{op} R{}, R{}, #{}", inst.rs, inst.rt, inst.imm),
        Format::LoadStore => format!("{op} R{}, {}(R{})", inst.rt, inst.imm, inst.rs),
        Format::ThreeReg => format!("{op} R{}, R{}, R{}", inst.rd, inst.rs, inst.rt),
        Format::Immediate => format!("{op} R{}, R{}, #{}", inst.rt, inst.rs, inst.imm),
        Format::Shift => format!("{op} R{}, R{}, #{}", inst.rd, inst.rt, inst.shamt),
        Format::NoOperand => op.to_string(),
    }
}

/// Formats one listing line: `<bits>\t<address>\t<text>`.
fn listing_line(out: &mut String, raw: u32, address: u32, text: &dyn std::fmt::Display) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{raw:032b}\t{address}\t{text}");
}

/// Produces the disassembly listing for a loaded image.
///
/// Instructions come first in program order, then each data word as its signed
/// decimal value, mirroring the order of the input lines.
pub fn listing(image: &Image) -> String {
    let mut out = String::new();
    for inst in image.program.iter() {
        listing_line(&mut out, inst.raw, inst.address, &inst.text);
    }
    for (address, word) in image.data.iter_words() {
        listing_line(&mut out, word as u32, address, &word);
    }
    out
}
