//! Pipeline Timing Tests.
//!
//! Steps small programs cycle by cycle and checks where each instruction
//! sits. Program addresses start at 256.

use mipsim_core::isa::Mnemonic;
use mipsim_core::sim::Simulator;

use crate::common::builder::{add, addi, beq, brk, lw, sw};
use crate::common::harness::TestContext;

fn mnemonics<'a>(iter: impl Iterator<Item = &'a Mnemonic>) -> Vec<Mnemonic> {
    iter.copied().collect()
}

fn pre_issue(sim: &Simulator) -> Vec<Mnemonic> {
    mnemonics(sim.pipeline.pre_issue.iter().map(|i| &i.mnemonic))
}

fn pre_alu1(sim: &Simulator) -> Vec<Mnemonic> {
    mnemonics(sim.pipeline.pre_alu1.iter().map(|e| &e.inst.mnemonic))
}

fn pre_alu2(sim: &Simulator) -> Vec<Mnemonic> {
    mnemonics(sim.pipeline.pre_alu2.iter().map(|e| &e.inst.mnemonic))
}

/// `ADDI R1,R0,5; ADDI R2,R0,10; ADD R3,R1,R2; SW R3,0(R0); BREAK` over one data word.
fn sum_and_store() -> TestContext {
    TestContext::new()
        .program(&[addi(1, 0, 5), addi(2, 0, 10), add(3, 1, 2), sw(3, 0, 0), brk()])
        .data(&[0])
}

// ══════════════════════════════════════════════════════════
// 1. Fetch
// ══════════════════════════════════════════════════════════

#[test]
fn fetches_two_per_cycle() {
    let sim = sum_and_store().step(1);
    assert_eq!(pre_issue(&sim), vec![Mnemonic::Addi, Mnemonic::Addi]);
    assert_eq!(sim.pipeline.pc, 264);
}

#[test]
fn fetch_is_bounded_by_space_at_cycle_start() {
    // Cycle 3 starts with one free Pre-Issue slot, so only BREAK is fetched.
    let sim = sum_and_store().step(3);
    assert_eq!(pre_issue(&sim), vec![Mnemonic::Add, Mnemonic::Sw]);
    let waiting = sim.pipeline.if_unit.waiting.as_ref().map(|i| i.mnemonic);
    assert_eq!(waiting, Some(Mnemonic::Break));
}

#[test]
fn control_flow_stops_fetch_and_never_enters_pre_issue() {
    let ctx = TestContext::new().program(&[addi(1, 0, 1), beq(0, 0, 4), addi(2, 0, 99), addi(3, 0, 7), brk()]);
    let sim = ctx.step(1);
    assert_eq!(pre_issue(&sim), vec![Mnemonic::Addi]);
    let waiting = sim.pipeline.if_unit.waiting.as_ref().map(|i| i.mnemonic);
    assert_eq!(waiting, Some(Mnemonic::Beq));
    assert_eq!(sim.stats().fetched, 2);
}

#[test]
fn resolved_branch_is_shown_for_one_cycle() {
    let ctx = TestContext::new().program(&[addi(1, 0, 1), beq(0, 0, 4), addi(2, 0, 99), addi(3, 0, 7), brk()]);

    let sim = ctx.step(2);
    let executed = sim.pipeline.if_unit.executed.as_ref().map(|i| i.mnemonic);
    assert_eq!(executed, Some(Mnemonic::Beq));
    // The target is fetched in the same cycle the branch resolves.
    assert_eq!(pre_issue(&sim), vec![Mnemonic::Addi]);
    assert_eq!(sim.pipeline.pre_issue.get(0).map(|i| i.address), Some(268));

    let sim = ctx.step(3);
    let executed = sim.pipeline.if_unit.executed.as_ref().map(|i| i.mnemonic);
    assert_eq!(executed, Some(Mnemonic::Break));
}

#[test]
fn break_resolves_and_stops_fetch() {
    let sim = sum_and_store().step(4);
    assert!(sim.pipeline.if_unit.waiting.is_none());
    assert!(sim.pipeline.if_unit.break_retired());
    assert!(!sim.pipeline.if_unit.fetch_enabled());
    assert!(!sim.is_finished());
}

// ══════════════════════════════════════════════════════════
// 2. Issue
// ══════════════════════════════════════════════════════════

#[test]
fn memory_and_alu_instructions_co_issue() {
    let ctx = TestContext::new().program(&[addi(1, 0, 3), lw(2, 0, 0), brk()]).data(&[11]);
    let sim = ctx.step(2);
    assert!(sim.pipeline.pre_issue.is_empty());
    assert_eq!(pre_alu1(&sim), vec![Mnemonic::Lw]);
    assert_eq!(pre_alu2(&sim), vec![Mnemonic::Addi]);
    assert_eq!(sim.stats().issued, 2);
}

#[test]
fn one_alu_instruction_per_cycle() {
    let sim = sum_and_store().step(2);
    assert_eq!(pre_alu2(&sim), vec![Mnemonic::Addi]);
    assert_eq!(pre_issue(&sim).first(), Some(&Mnemonic::Addi));
    assert_eq!(sim.stats().stalls_structural, 1);
}

#[test]
fn raw_waits_until_the_cycle_after_write_back() {
    let ctx = TestContext::new().program(&[addi(1, 0, 5), add(2, 1, 1), brk()]);

    let sim = ctx.step(4);
    assert_eq!(sim.registers()[1], 5);
    assert_eq!(pre_issue(&sim), vec![Mnemonic::Add]);
    assert!(sim.pipeline.scoreboard.is_clear());

    let sim = ctx.step(5);
    assert!(sim.pipeline.pre_issue.is_empty());
    assert_eq!(pre_alu2(&sim), vec![Mnemonic::Add]);
    assert!(sim.pipeline.scoreboard.is_busy(2));
}

#[test]
fn dependent_pair_does_not_co_issue() {
    // LW uses R1 as its base, so it waits for the ADDI to write back.
    let ctx = TestContext::new().program(&[addi(1, 0, 0), lw(2, 0, 1), brk()]).data(&[3]);

    let sim = ctx.step(2);
    assert_eq!(pre_alu2(&sim), vec![Mnemonic::Addi]);
    assert!(sim.pipeline.pre_alu1.is_empty());
    assert_eq!(pre_issue(&sim), vec![Mnemonic::Lw]);

    assert_eq!(pre_issue(&ctx.step(4)), vec![Mnemonic::Lw]);
    assert_eq!(pre_alu1(&ctx.step(5)), vec![Mnemonic::Lw]);
    assert_eq!(ctx.run().registers()[2], 3);
}

#[test]
fn issue_locks_the_destination() {
    let sim = sum_and_store().step(2);
    assert!(sim.pipeline.scoreboard.is_busy(1));
    assert!(!sim.pipeline.scoreboard.is_busy(2));
}

#[test]
fn store_issues_after_its_data_is_written() {
    let ctx = sum_and_store();
    assert_eq!(pre_issue(&ctx.step(8)), vec![Mnemonic::Sw]);
    assert_eq!(pre_alu1(&ctx.step(9)), vec![Mnemonic::Sw]);
}

// ══════════════════════════════════════════════════════════
// 3. Execute, memory, write-back
// ══════════════════════════════════════════════════════════

#[test]
fn alu1_computes_the_effective_address() {
    let ctx = TestContext::new().program(&[lw(2, 4, 0), brk()]).data(&[0, 42]);
    let sim = ctx.step(3);
    let entry = sim.pipeline.pre_mem.as_ref().unwrap();
    assert_eq!(entry.value, 4);
    assert_eq!(entry.inst.mnemonic, Mnemonic::Lw);

    let sim = ctx.step(4);
    assert_eq!(sim.pipeline.post_mem.as_ref().map(|e| e.value), Some(42));

    let sim = ctx.step(5);
    assert_eq!(sim.registers()[2], 42);
    assert!(sim.is_finished());
}

#[test]
fn store_completes_in_memory_stage() {
    let sim = sum_and_store().step(10);
    assert_eq!(sim.data().words(), &[0]);
    assert!(sim.pipeline.pre_mem.is_some());

    let sim = sum_and_store().step(11);
    assert_eq!(sim.data().words(), &[15]);
    assert!(sim.pipeline.post_mem.is_none());
    assert!(sim.is_finished());
}

#[test]
fn scoreboard_is_clear_when_finished() {
    let sim = sum_and_store().run();
    assert!(sim.pipeline.scoreboard.is_clear());
    assert!(sim.pipeline.is_drained());
}
