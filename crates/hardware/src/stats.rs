//! Simulation statistics collection and reporting.
//!
//! This module tracks per-run counters for the pipeline. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived IPC/CPI.
//! 2. **Instruction mix:** Counts by kind (ALU, load, store, control flow).
//! 3. **Branches:** Resolved conditional branches and how many were taken.
//! 4. **Stalls:** Data, structural, and control stall cycles.

use std::fmt::Write;

use serde::Serialize;

/// Per-run counters, updated by the pipeline stages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Instructions that completed: register write-backs, stores, and
    /// resolved control flow.
    pub instructions_retired: u64,
    /// Instructions placed in Pre-Issue or the IF Unit by Fetch.
    pub fetched: u64,
    /// Instructions moved from Pre-Issue to a Pre-ALU queue.
    pub issued: u64,

    /// ALU2 operations executed.
    pub alu_ops: u64,
    /// Loads completed in Memory.
    pub loads: u64,
    /// Stores completed in Memory.
    pub stores: u64,
    /// Control-flow instructions resolved in the IF Unit (including `NOP` and `BREAK`).
    pub branches: u64,
    /// Conditional branches and jumps that redirected the PC.
    pub branches_taken: u64,

    /// Cycles in which an instruction was held in Pre-Issue by a data hazard.
    pub stalls_data: u64,
    /// Cycles in which a hazard-free instruction was held because its Pre-ALU
    /// queue was occupied or its issue slot was already used.
    pub stalls_structural: u64,
    /// Cycles in which a control-flow instruction waited in the IF Unit.
    pub stalls_control: u64,
}

impl SimStats {
    /// Retired instructions per cycle, or `0.0` before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        self.instructions_retired as f64 / self.cycles as f64
    }

    /// Renders a human-readable report.
    pub fn report(&self) -> String {
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;

        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "MIPS PIPELINE SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "sim_cycles               {}", self.cycles);
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "sim_ipc                  {:.4}", self.ipc());
        let _ = writeln!(out, "sim_cpi                  {:.4}", cyc / instr);
        let _ = writeln!(out, "sim_fetched              {}", self.fetched);
        let _ = writeln!(out, "sim_issued               {}", self.issued);
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "INSTRUCTION MIX");
        for (name, n) in [
            ("op.alu", self.alu_ops),
            ("op.load", self.loads),
            ("op.store", self.stores),
            ("op.control", self.branches),
        ] {
            let _ = writeln!(out, "  {name:<22} {n} ({:.2}%)", pct(n, instr));
        }
        let _ = writeln!(out, "  {:<22} {}", "branch.taken", self.branches_taken);
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "STALLS");
        for (name, n) in [
            ("stalls.data", self.stalls_data),
            ("stalls.structural", self.stalls_structural),
            ("stalls.control", self.stalls_control),
        ] {
            let _ = writeln!(out, "  {name:<22} {n} ({:.2}%)", pct(n, cyc));
        }
        let _ = writeln!(out, "==========================================================");
        out
    }
}
