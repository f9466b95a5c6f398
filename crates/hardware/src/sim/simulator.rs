//! Simulator: drives the pipeline engine to completion.
//!
//! Wraps a [`Pipeline`] with the run loop, the cycle budget, and trace
//! collection. The engine itself knows nothing about either.

use tracing::info;

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::SimError;
use crate::config::Config;
use crate::core::memory::DataSegment;
use crate::core::pipeline::{CycleSnapshot, Pipeline};
use crate::sim::loader::{Image, load_image};
use crate::sim::trace::render_cycle;
use crate::stats::SimStats;

/// Top-level simulator.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Pipeline engine and machine state.
    pub pipeline: Pipeline,
    max_cycles: u64,
}

impl Simulator {
    /// Creates a simulator for a loaded image.
    pub fn new(image: Image, config: &Config) -> Self {
        Self {
            pipeline: Pipeline::new(image.program, image.data, config),
            max_cycles: config.general.max_cycles,
        }
    }

    /// Decodes `text` and creates a simulator for it.
    ///
    /// # Errors
    ///
    /// [`SimError::Decode`] if the text does not decode.
    pub fn from_source(text: &str, config: &Config) -> Result<Self, SimError> {
        Ok(Self::new(load_image(text, config)?, config))
    }

    /// Returns true once the program has halted and the pipeline drained.
    pub fn is_finished(&self) -> bool {
        self.pipeline.is_finished()
    }

    /// Cycles completed so far.
    pub const fn cycle(&self) -> u64 {
        self.pipeline.cycle
    }

    /// Register values.
    pub const fn registers(&self) -> &[i32; NUM_REGISTERS] {
        self.pipeline.regs.as_slice()
    }

    /// Current data segment.
    pub const fn data(&self) -> &DataSegment {
        &self.pipeline.data
    }

    /// Run counters.
    pub const fn stats(&self) -> &SimStats {
        &self.pipeline.stats
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// [`SimError::CycleLimitExceeded`] if the cycle budget is spent, or any
    /// error raised by the pipeline.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if self.pipeline.cycle >= self.max_cycles {
            return Err(SimError::CycleLimitExceeded {
                limit: self.max_cycles,
            });
        }
        self.pipeline.tick()
    }

    /// Runs until the program finishes, calling `on_cycle` after every cycle.
    ///
    /// # Errors
    ///
    /// The first error raised by [`Self::tick`].
    pub fn run<F>(&mut self, mut on_cycle: F) -> Result<&SimStats, SimError>
    where
        F: FnMut(&CycleSnapshot<'_>),
    {
        info!(
            instructions = self.pipeline.program.len(),
            data_words = self.pipeline.data.len(),
            max_cycles = self.max_cycles,
            "simulation started"
        );
        while !self.is_finished() {
            self.tick()?;
            on_cycle(&self.pipeline.snapshot());
        }
        let stats = &self.pipeline.stats;
        info!(
            cycles = stats.cycles,
            retired = stats.instructions_retired,
            ipc = stats.ipc(),
            "simulation finished"
        );
        Ok(stats)
    }

    /// Runs to completion and returns the concatenated cycle trace.
    ///
    /// # Errors
    ///
    /// The first error raised by [`Self::tick`]; no partial trace is returned.
    pub fn run_to_trace(&mut self) -> Result<String, SimError> {
        let mut trace = String::new();
        let _ = self.run(|snap| trace.push_str(&render_cycle(snap)))?;
        Ok(trace)
    }
}
