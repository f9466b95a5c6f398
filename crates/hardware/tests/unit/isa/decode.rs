//! Decoder Unit Tests.
//!
//! Verifies that every mnemonic decodes to the right fields and assembly
//! text, and that words outside the two opcode tables are rejected.

use mipsim_core::DecodeError;
use mipsim_core::isa::Mnemonic;
use mipsim_core::isa::decode::{decode, parse_word};
use rstest::rstest;

use crate::common::builder::{self, alu, alu_imm, shift};

const BASE: u32 = 256;

// ══════════════════════════════════════════════════════════
// 1. Assembly text for every mnemonic
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::j(builder::j(280), "J #280")]
#[case::jr(builder::jr(4), "JR #4")]
#[case::beq(builder::beq(1, 2, -12), "BEQ R1, R2, #-12")]
#[case::bltz(builder::bltz(3, 8), "BLTZ R3, #8")]
#[case::bgtz(builder::bgtz(1, 8), "BGTZ R1, #8")]
#[case::brk(builder::brk(), "BREAK")]
#[case::sw(builder::sw(2, 4, 1), "SW R2, 4(R1)")]
#[case::lw(builder::lw(3, -8, 0), "LW R3, -8(R0)")]
#[case::sll(shift(Mnemonic::Sll, 2, 1, 3), "SLL R2, R1, #3")]
#[case::srl(shift(Mnemonic::Srl, 5, 6, 31), "SRL R5, R6, #31")]
#[case::sra(shift(Mnemonic::Sra, 7, 7, 0), "SRA R7, R7, #0")]
#[case::nop(builder::nop(), "NOP")]
#[case::add(alu(Mnemonic::Add, 3, 1, 2), "ADD R3, R1, R2")]
#[case::sub(alu(Mnemonic::Sub, 4, 5, 6), "SUB R4, R5, R6")]
#[case::mul(alu(Mnemonic::Mul, 31, 30, 29), "MUL R31, R30, R29")]
#[case::and(alu(Mnemonic::And, 1, 1, 1), "AND R1, R1, R1")]
#[case::or(alu(Mnemonic::Or, 8, 9, 10), "OR R8, R9, R10")]
#[case::xor(alu(Mnemonic::Xor, 0, 0, 0), "XOR R0, R0, R0")]
#[case::nor(alu(Mnemonic::Nor, 2, 3, 4), "NOR R2, R3, R4")]
#[case::slt(alu(Mnemonic::Slt, 5, 6, 7), "SLT R5, R6, R7")]
#[case::addi(alu_imm(Mnemonic::Addi, 1, 0, -5), "ADDI R1, R0, #-5")]
#[case::andi(alu_imm(Mnemonic::Andi, 1, 2, -1), "ANDI R1, R2, #65535")]
#[case::ori(alu_imm(Mnemonic::Ori, 3, 4, 0x8000), "ORI R3, R4, #32768")]
#[case::xori(alu_imm(Mnemonic::Xori, 5, 6, 12), "XORI R5, R6, #12")]
fn renders_assembly_text(#[case] word: u32, #[case] expected: &str) {
    let inst = decode(word, BASE, 1).unwrap();
    assert_eq!(inst.text, expected);
    assert_eq!(inst.to_string(), expected);
    assert_eq!(inst.raw, word);
    assert_eq!(inst.address, BASE);
}

#[test]
fn every_mnemonic_is_reachable() {
    for m in Mnemonic::ALL {
        let word = builder::encode(m, 1, 2, 3, 4);
        assert_eq!(decode(word, BASE, 1).unwrap().mnemonic, m, "{m}");
    }
}

// ══════════════════════════════════════════════════════════
// 2. Operand extraction
// ══════════════════════════════════════════════════════════

#[test]
fn jump_keeps_region_of_its_own_address() {
    let inst = decode(builder::j(0x40), 0x1000_0100, 1).unwrap();
    assert_eq!(inst.target, 0x1000_0040);
}

#[test]
fn branch_offsets_are_in_bytes_after_decode() {
    let inst = decode(builder::bgtz(9, -8), BASE, 1).unwrap();
    assert_eq!(inst.rs, 9);
    assert_eq!(inst.imm, -8);
}

#[test]
fn destinations_and_sources() {
    let sw = decode(builder::sw(2, 0, 1), BASE, 1).unwrap();
    assert_eq!(sw.destination(), None);
    assert_eq!(sw.sources(), vec![1, 2]);

    let lw = decode(builder::lw(7, 0, 1), BASE, 1).unwrap();
    assert_eq!(lw.destination(), Some(7));
    assert_eq!(lw.sources(), vec![1]);

    let sll = decode(shift(Mnemonic::Sll, 4, 3, 1), BASE, 1).unwrap();
    assert_eq!(sll.destination(), Some(4));
    assert_eq!(sll.sources(), vec![3]);

    let beq = decode(builder::beq(5, 6, 4), BASE, 1).unwrap();
    assert_eq!(beq.destination(), None);
    assert!(beq.reads(5) && beq.reads(6));
}

#[test]
fn control_flow_classification() {
    for m in [
        Mnemonic::J,
        Mnemonic::Jr,
        Mnemonic::Beq,
        Mnemonic::Bltz,
        Mnemonic::Bgtz,
        Mnemonic::Break,
        Mnemonic::Nop,
    ] {
        assert!(m.is_control_flow(), "{m}");
    }
    assert!(!Mnemonic::Sll.is_control_flow());
    assert!(Mnemonic::Lw.is_memory() && Mnemonic::Sw.is_memory());
}

// ══════════════════════════════════════════════════════════
// 3. Rejected encodings
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::category_00(0x0000_0000, DecodeError::UnknownCategory { line: 4, bits: 0b00 })]
#[case::category_10(0x8000_0000, DecodeError::UnknownCategory { line: 4, bits: 0b10 })]
#[case::control_12(0x4000_0000 | (12 << 26), DecodeError::UnknownOpcode { line: 4, category: 1, opcode: 12 })]
#[case::arith_15(0xC000_0000 | (15 << 26), DecodeError::UnknownOpcode { line: 4, category: 2, opcode: 15 })]
fn rejects_unassigned_encodings(#[case] word: u32, #[case] expected: DecodeError) {
    assert_eq!(decode(word, BASE, 4).unwrap_err(), expected);
}

#[rstest]
#[case::empty("")]
#[case::too_long("010101000000000000000000000011010")]
#[case::letters("0101010000000000000000000000110x")]
#[case::spaces("0101 0100 0000 0000 0000 0000 0000")]
fn rejects_malformed_lines(#[case] line: &str) {
    assert!(matches!(
        parse_word(line, 2),
        Err(DecodeError::MalformedLine { line: 2, .. })
    ));
}
