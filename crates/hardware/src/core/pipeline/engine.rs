//! Two-issue in-order pipeline engine.
//!
//! The engine owns every piece of mutable machine state: the register file,
//! scoreboard, data segment, program counter and all inter-stage buffers.
//! One call to [`Pipeline::tick`] advances one cycle, running the stages in
//! reverse order so each stage sees the buffer contents its predecessor left
//! at the end of the previous cycle:
//!
//! Write-Back → Memory → Execute (ALU1, ALU2) → Issue → Fetch

use std::sync::Arc;

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::SimError;
use crate::config::{AddressingMode, Config};
use crate::core::arch::Gpr;
use crate::core::memory::DataSegment;
use crate::core::pipeline::if_unit::IfUnit;
use crate::core::pipeline::latches::{BoundedQueue, BufferEntry};
use crate::core::pipeline::scoreboard::Scoreboard;
use crate::core::pipeline::stages::{execute_stage, fetch_stage, issue_stage, mem_stage, wb_stage};
use crate::isa::instruction::Instruction;
use crate::isa::program::Program;
use crate::stats::SimStats;

/// State recorded before any stage runs in a cycle.
#[derive(Debug, Clone, Copy)]
pub struct CycleStart {
    /// Scoreboard as committed at the end of the previous cycle.
    pub committed: Scoreboard,
    /// Free Pre-Issue slots before Issue removed anything.
    pub pre_issue_free: usize,
}

/// The pipeline engine.
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Number of the last completed cycle (0 before the first tick).
    pub cycle: u64,
    /// Address of the next instruction to fetch.
    pub pc: u32,
    /// Decoded instructions.
    pub program: Program,
    /// Data words, mutated only by the Memory stage.
    pub data: DataSegment,
    /// Register file.
    pub regs: Gpr,
    /// Pending-writer flags, including locks taken during the current cycle.
    pub scoreboard: Scoreboard,
    /// Control-flow holding unit.
    pub if_unit: IfUnit,
    /// Fetched instructions awaiting issue, in program order.
    pub pre_issue: BoundedQueue<Arc<Instruction>>,
    /// Issued loads and stores awaiting ALU1.
    pub pre_alu1: BoundedQueue<BufferEntry>,
    /// Address computed by ALU1, awaiting Memory.
    pub pre_mem: Option<BufferEntry>,
    /// Loaded word awaiting Write-Back.
    pub post_mem: Option<BufferEntry>,
    /// Issued ALU instructions awaiting ALU2.
    pub pre_alu2: BoundedQueue<BufferEntry>,
    /// ALU2 result awaiting Write-Back.
    pub post_alu2: Option<BufferEntry>,
    /// How effective addresses map to data words.
    pub addressing: AddressingMode,
    /// Run counters.
    pub stats: SimStats,
}

impl Pipeline {
    /// Creates an engine with an empty pipeline, zeroed registers, and the PC
    /// at the first instruction.
    pub fn new(program: Program, data: DataSegment, config: &Config) -> Self {
        Self {
            cycle: 0,
            pc: program.base(),
            program,
            data,
            regs: Gpr::new(),
            scoreboard: Scoreboard::new(),
            if_unit: IfUnit::new(),
            pre_issue: BoundedQueue::new(config.pipeline.pre_issue_size),
            pre_alu1: BoundedQueue::new(config.pipeline.pre_alu_size),
            pre_mem: None,
            post_mem: None,
            pre_alu2: BoundedQueue::new(config.pipeline.pre_alu_size),
            post_alu2: None,
            addressing: config.memory.addressing,
            stats: SimStats::default(),
        }
    }

    /// Runs one cycle of all stages.
    ///
    /// # Errors
    ///
    /// Any [`SimError`] raised by a stage. The engine state is left as the
    /// failing stage found it and should not be ticked again.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.cycle += 1;
        self.stats.cycles += 1;

        let start = CycleStart {
            committed: self.scoreboard,
            pre_issue_free: self.pre_issue.free_slots(),
        };
        self.if_unit.begin_cycle();

        wb_stage(self)?;
        mem_stage(self)?;
        execute_stage(self)?;
        issue_stage(self, &start)?;
        fetch_stage(self, &start)?;
        Ok(())
    }

    /// Returns true if no instruction is held anywhere in the pipeline.
    pub fn is_drained(&self) -> bool {
        self.if_unit.waiting.is_none()
            && self.pre_issue.is_empty()
            && self.pre_alu1.is_empty()
            && self.pre_alu2.is_empty()
            && self.pre_mem.is_none()
            && self.post_mem.is_none()
            && self.post_alu2.is_none()
    }

    /// Returns true once `BREAK` has resolved and every buffer is empty.
    pub fn is_finished(&self) -> bool {
        self.if_unit.break_retired() && self.is_drained()
    }

    /// Builds a borrowed view of the state at the end of the last cycle.
    pub fn snapshot(&self) -> CycleSnapshot<'_> {
        CycleSnapshot {
            cycle: self.cycle,
            waiting: self.if_unit.waiting.as_deref(),
            executed: self.if_unit.executed.as_deref(),
            pre_issue: self.pre_issue.iter().map(Arc::as_ref).collect(),
            pre_issue_size: self.pre_issue.capacity(),
            pre_alu1: self.pre_alu1.iter().map(|e| e.inst.as_ref()).collect(),
            pre_mem: self.pre_mem.as_ref().map(|e| e.inst.as_ref()),
            post_mem: self.post_mem.as_ref().map(|e| e.inst.as_ref()),
            pre_alu2: self.pre_alu2.iter().map(|e| e.inst.as_ref()).collect(),
            post_alu2: self.post_alu2.as_ref().map(|e| e.inst.as_ref()),
            pre_alu_size: self.pre_alu1.capacity(),
            registers: self.regs.as_slice(),
            data: &self.data,
        }
    }

    /// Builds a hazard violation error for the current cycle.
    pub(crate) fn violation(&self, detail: impl Into<String>) -> SimError {
        SimError::HazardViolation {
            cycle: self.cycle,
            detail: detail.into(),
        }
    }
}

/// Read-only view of the pipeline after a cycle, consumed by the trace renderer.
#[derive(Debug, Clone)]
pub struct CycleSnapshot<'a> {
    /// Cycle number, starting at 1.
    pub cycle: u64,
    /// IF Unit waiting slot.
    pub waiting: Option<&'a Instruction>,
    /// IF Unit executed slot.
    pub executed: Option<&'a Instruction>,
    /// Pre-Issue contents, head first.
    pub pre_issue: Vec<&'a Instruction>,
    /// Pre-Issue capacity.
    pub pre_issue_size: usize,
    /// Pre-ALU1 contents, head first.
    pub pre_alu1: Vec<&'a Instruction>,
    /// Pre-MEM slot.
    pub pre_mem: Option<&'a Instruction>,
    /// Post-MEM slot.
    pub post_mem: Option<&'a Instruction>,
    /// Pre-ALU2 contents, head first.
    pub pre_alu2: Vec<&'a Instruction>,
    /// Post-ALU2 slot.
    pub post_alu2: Option<&'a Instruction>,
    /// Capacity of each Pre-ALU queue.
    pub pre_alu_size: usize,
    /// Register file.
    pub registers: &'a [i32; NUM_REGISTERS],
    /// Data segment.
    pub data: &'a DataSegment,
}
