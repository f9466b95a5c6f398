//! Instruction word encoders.
//!
//! Each helper returns the 32-bit encoding the decoder expects. Branch and
//! jump helpers take byte offsets/addresses and store them the way the
//! encoding does (word offsets, 26-bit word index).

use mipsim_core::isa::Mnemonic;
use mipsim_core::isa::opcodes::Category;

fn category_bits(m: Mnemonic) -> u32 {
    match m.category() {
        Category::Control => 0b01,
        Category::Arithmetic => 0b11,
    }
}

/// Encodes the register fields of any instruction.
pub fn encode(m: Mnemonic, rs: u32, rt: u32, rd: u32, shamt: u32) -> u32 {
    (category_bits(m) << 30)
        | (m.opcode() << 26)
        | ((rs & 0x1F) << 21)
        | ((rt & 0x1F) << 16)
        | ((rd & 0x1F) << 11)
        | ((shamt & 0x1F) << 6)
}

/// Encodes an instruction carrying a 16-bit immediate.
pub fn encode_imm(m: Mnemonic, rs: u32, rt: u32, imm: i32) -> u32 {
    encode(m, rs, rt, 0, 0) | (imm as u32 & 0xFFFF)
}

// --- Category 1 ---

/// `J #target`, with `target` a byte address.
pub fn j(target: u32) -> u32 {
    encode(Mnemonic::J, 0, 0, 0, 0) | ((target >> 2) & 0x03FF_FFFF)
}

/// `JR rs`.
pub fn jr(rs: u32) -> u32 {
    encode(Mnemonic::Jr, rs, 0, 0, 0)
}

/// `BEQ rs, rt, #byte_offset`.
pub fn beq(rs: u32, rt: u32, byte_offset: i32) -> u32 {
    encode_imm(Mnemonic::Beq, rs, rt, byte_offset >> 2)
}

/// `BLTZ rs, #byte_offset`.
pub fn bltz(rs: u32, byte_offset: i32) -> u32 {
    encode_imm(Mnemonic::Bltz, rs, 0, byte_offset >> 2)
}

/// `BGTZ rs, #byte_offset`.
pub fn bgtz(rs: u32, byte_offset: i32) -> u32 {
    encode_imm(Mnemonic::Bgtz, rs, 0, byte_offset >> 2)
}

/// `BREAK`, with the conventional `0x0D` function code in the low bits.
pub fn brk() -> u32 {
    encode(Mnemonic::Break, 0, 0, 0, 0) | 0x0D
}

/// `SW rt, offset(rs)`.
pub fn sw(rt: u32, offset: i32, rs: u32) -> u32 {
    encode_imm(Mnemonic::Sw, rs, rt, offset)
}

/// `LW rt, offset(rs)`.
pub fn lw(rt: u32, offset: i32, rs: u32) -> u32 {
    encode_imm(Mnemonic::Lw, rs, rt, offset)
}

/// `SLL`/`SRL`/`SRA rd, rt, #shamt`.
pub fn shift(m: Mnemonic, rd: u32, rt: u32, shamt: u32) -> u32 {
    encode(m, 0, rt, rd, shamt)
}

/// `NOP`.
pub fn nop() -> u32 {
    encode(Mnemonic::Nop, 0, 0, 0, 0)
}

// --- Category 2 ---

/// Three-register ALU op: `OP rd, rs, rt`.
pub fn alu(m: Mnemonic, rd: u32, rs: u32, rt: u32) -> u32 {
    encode(m, rs, rt, rd, 0)
}

/// `ADD rd, rs, rt`.
pub fn add(rd: u32, rs: u32, rt: u32) -> u32 {
    alu(Mnemonic::Add, rd, rs, rt)
}

/// Immediate ALU op: `OP rt, rs, #imm`.
pub fn alu_imm(m: Mnemonic, rt: u32, rs: u32, imm: i32) -> u32 {
    encode_imm(m, rs, rt, imm)
}

/// `ADDI rt, rs, #imm`.
pub fn addi(rt: u32, rs: u32, imm: i32) -> u32 {
    alu_imm(Mnemonic::Addi, rt, rs, imm)
}

/// Renders a word as the 32-character line the loader reads.
pub fn line(word: u32) -> String {
    format!("{word:032b}")
}
