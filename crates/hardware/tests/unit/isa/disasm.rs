//! Disassembly Listing Tests.
//!
//! The listing has one line per input word: the 32-bit binary text, a tab,
//! the word's address, a tab, and either the assembly text or the signed
//! data value.

use mipsim_core::Config;
use mipsim_core::isa::disasm;
use mipsim_core::sim::load_image;
use pretty_assertions::assert_eq;

use crate::common::builder::{addi, brk, j, jr, sw};
use crate::common::harness::TestContext;

#[test]
fn listing_covers_program_and_data() {
    let ctx = TestContext::new()
        .program(&[addi(1, 0, 5), brk()])
        .data(&[-1, 7]);
    let image = load_image(&ctx.source(), &Config::default()).unwrap();

    let expected = "\
11100000000000010000000000000101\t256\tADDI R1, R0, #5
01010100000000000000000000001101\t260\tBREAK
11111111111111111111111111111111\t264\t-1
00000000000000000000000000000111\t268\t7
";
    assert_eq!(disasm::listing(&image), expected);
}

#[test]
fn listing_without_data_ends_at_break() {
    let ctx = TestContext::new().program(&[sw(3, 0, 0), j(256), brk()]);
    let image = load_image(&ctx.source(), &Config::default()).unwrap();
    let listing = disasm::listing(&image);

    let texts: Vec<&str> = listing
        .lines()
        .map(|l| l.rsplit('\t').next().unwrap_or_default())
        .collect();
    assert_eq!(texts, vec!["SW R3, 0(R0)", "J #256", "BREAK"]);
}

#[test]
fn jump_register_prints_register_number_as_operand() {
    let ctx = TestContext::new().program(&[jr(4), brk()]);
    let image = load_image(&ctx.source(), &Config::default()).unwrap();
    let listing = disasm::listing(&image);
    assert_eq!(listing.lines().next(), Some("01000100100000000000000000000000\t256\tJR #4"));
}

#[test]
fn data_words_are_not_decoded() {
    // A data word that would be an unknown category if decoded.
    let ctx = TestContext::new().program(&[brk()]).data(&[0]);
    let image = load_image(&ctx.source(), &Config::default()).unwrap();
    assert!(disasm::listing(&image).ends_with("\t260\t0\n"));
}

#[test]
fn base_address_comes_from_config() {
    let mut config = Config::default();
    config.general.base_address = 1024;
    let ctx = TestContext::new().program(&[brk()]).data(&[3]);
    let image = load_image(&ctx.source(), &config).unwrap();
    let listing = disasm::listing(&image);
    assert!(listing.contains("\t1024\tBREAK\n"));
    assert!(listing.contains("\t1028\t3\n"));
}
