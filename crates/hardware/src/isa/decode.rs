//! Instruction Decoder.
//!
//! This module turns input lines into structured instructions. It handles:
//! 1. **Line Parsing:** Validating a 32-character `0`/`1` line and packing it into a word.
//! 2. **Table Lookup:** Selecting the mnemonic from the category and opcode fields.
//! 3. **Operand Extraction:** Filling the fields each [`Format`] uses, with sign or
//!    zero extension of 16-bit immediates and pre-shifted branch offsets.

use crate::common::constants::{JUMP_REGION_MASK, WORD_BITS, WORD_OFFSET_SHIFT};
use crate::common::error::DecodeError;
use crate::isa::disasm;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::opcodes::{Category, Format, Mnemonic};

/// Sign-extends a 16-bit two's-complement field by replicating bit 15.
///
/// ```
/// use mipsim_core::isa::decode::sign_extend16;
/// assert_eq!(sign_extend16(0xFFFF), -1);
/// assert_eq!(sign_extend16(0x7FFF), 32767);
/// ```
#[inline]
pub const fn sign_extend16(field: u32) -> i32 {
    (field as u16) as i16 as i32
}

/// Zero-extends a 16-bit field, clearing bits 16-31.
///
/// ```
/// use mipsim_core::isa::decode::zero_extend16;
/// assert_eq!(zero_extend16(0xFFFF), 65535);
/// ```
#[inline]
pub const fn zero_extend16(field: u32) -> i32 {
    (field & 0xFFFF) as i32
}

/// Parses one input line into a 32-bit word.
///
/// Surrounding whitespace is ignored. The remaining text must be exactly 32
/// characters, each `0` or `1`, most significant bit first.
///
/// # Errors
///
/// [`DecodeError::MalformedLine`] when the length or alphabet is wrong.
pub fn parse_word(line: &str, line_no: usize) -> Result<u32, DecodeError> {
    let bits = line.trim();
    if bits.len() != WORD_BITS {
        return Err(DecodeError::MalformedLine {
            line: line_no,
            reason: format!("expected {WORD_BITS} bits, found {} characters", bits.len()),
        });
    }

    bits.bytes().try_fold(0u32, |word, b| match b {
        b'0' => Ok(word << 1),
        b'1' => Ok((word << 1) | 1),
        other => Err(DecodeError::MalformedLine {
            line: line_no,
            reason: format!("unexpected character {:?}", char::from(other)),
        }),
    })
}

/// Decodes a 32-bit word loaded at `address` into an instruction.
///
/// # Arguments
///
/// * `word` - The encoded instruction.
/// * `address` - The address the word was loaded at; `J` keeps its top four bits.
/// * `line_no` - Source line, used only for error reporting.
///
/// # Errors
///
/// [`DecodeError::UnknownCategory`] or [`DecodeError::UnknownOpcode`] when the
/// encoding is not in either mnemonic table.
pub fn decode(word: u32, address: u32, line_no: usize) -> Result<Instruction, DecodeError> {
    let category = Category::from_bits(word.category_bits()).ok_or(DecodeError::UnknownCategory {
        line: line_no,
        bits: word.category_bits(),
    })?;
    let opcode = word.opcode();
    let mnemonic = category.table()[opcode as usize].ok_or(DecodeError::UnknownOpcode {
        line: line_no,
        category: category.number(),
        opcode,
    })?;

    let mut inst = Instruction {
        raw: word,
        address,
        category,
        mnemonic,
        rs: 0,
        rt: 0,
        rd: 0,
        shamt: 0,
        imm: 0,
        target: 0,
        text: String::new(),
    };

    match mnemonic.format() {
        Format::Jump => {
            inst.target = (address & JUMP_REGION_MASK) | (word.index26() << WORD_OFFSET_SHIFT);
        }
        Format::JumpRegister => inst.rs = word.rs(),
        Format::BranchTwoReg => {
            inst.rs = word.rs();
            inst.rt = word.rt();
            inst.imm = branch_offset(word);
        }
        Format::BranchOneReg => {
            inst.rs = word.rs();
            inst.imm = branch_offset(word);
        }
        Format::LoadStore => {
            inst.rs = word.rs();
            inst.rt = word.rt();
            inst.imm = sign_extend16(word.imm16());
        }
        Format::Shift => {
            inst.rt = word.rt();
            inst.rd = word.rd();
            inst.shamt = word.shamt();
        }
        Format::ThreeReg => {
            inst.rs = word.rs();
            inst.rt = word.rt();
            inst.rd = word.rd();
        }
        Format::Immediate => {
            inst.rs = word.rs();
            inst.rt = word.rt();
            inst.imm = match mnemonic {
                Mnemonic::Addi => sign_extend16(word.imm16()),
                _ => zero_extend16(word.imm16()),
            };
        }
        Format::NoOperand => {}
    }

    inst.text = disasm::render(&inst);
    Ok(inst)
}

/// Branch offsets are word counts; store them as byte offsets.
#[inline]
fn branch_offset(word: u32) -> i32 {
    sign_extend16(word.imm16()).wrapping_shl(WORD_OFFSET_SHIFT)
}
