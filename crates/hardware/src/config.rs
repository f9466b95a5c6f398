//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize
//! a run. It provides:
//! 1. **Defaults:** Baseline constants (base address, queue sizes, cycle cap).
//! 2. **Structures:** Hierarchical config for general, pipeline, and memory settings.
//! 3. **Enums:** Data segment addressing modes.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or use `Config::default()`
//! for the CLI. Every section and field is optional in the JSON document.

use serde::Deserialize;

use crate::common::constants;
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Address of the first input word.
    pub const fn base_address() -> u32 {
        constants::DEFAULT_BASE_ADDRESS
    }

    /// Safety cap on simulated cycles.
    pub const fn max_cycles() -> u64 {
        constants::DEFAULT_MAX_CYCLES
    }

    /// Pre-Issue queue capacity.
    pub const fn pre_issue_size() -> usize {
        constants::DEFAULT_PRE_ISSUE_SIZE
    }

    /// Pre-ALU1 / Pre-ALU2 queue capacity.
    pub const fn pre_alu_size() -> usize {
        constants::DEFAULT_PRE_ALU_SIZE
    }
}

/// How a load/store effective address selects a data word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AddressingMode {
    /// The effective address is a byte offset from the data segment base.
    ///
    /// `SW R3, 0(R0)` writes the first data word.
    #[default]
    SegmentRelative,
    /// The effective address is a program address.
    ///
    /// `LW R3, 284(R0)` reads the word stored at address 284.
    Absolute,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{AddressingMode, Config};
///
/// let config = Config::default();
/// assert_eq!(config.general.base_address, 256);
/// assert_eq!(config.pipeline.pre_issue_size, 4);
///
/// let config = Config::from_json(r#"{ "memory": { "addressing": "Absolute" } }"#).unwrap();
/// assert_eq!(config.memory.addressing, AddressingMode::Absolute);
/// assert_eq!(config.pipeline.pre_alu_size, 2);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// General run settings
    pub general: GeneralConfig,
    /// Pipeline buffer sizes
    pub pipeline: PipelineConfig,
    /// Data segment settings
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] for values the pipeline cannot run with.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.base_address % constants::WORD_SIZE != 0 {
            return Err(ConfigError::Invalid(format!(
                "general.base_address {} is not word-aligned",
                self.general.base_address
            )));
        }
        if self.general.max_cycles == 0 {
            return Err(ConfigError::Invalid(
                "general.max_cycles must be positive".to_string(),
            ));
        }
        if self.pipeline.pre_issue_size < constants::FETCH_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "pipeline.pre_issue_size must be at least {}",
                constants::FETCH_WIDTH
            )));
        }
        if self.pipeline.pre_alu_size == 0 {
            return Err(ConfigError::Invalid(
                "pipeline.pre_alu_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// General run settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Address assigned to the first input word; later words follow at +4.
    pub base_address: u32,

    /// Abort with an error if the program has not halted after this many cycles.
    pub max_cycles: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            base_address: defaults::base_address(),
            max_cycles: defaults::max_cycles(),
        }
    }
}

/// Pipeline buffer capacities.
///
/// Fetch width and issue width are fixed at two.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Capacity of the Pre-Issue queue.
    pub pre_issue_size: usize,

    /// Capacity of each of the Pre-ALU1 and Pre-ALU2 queues.
    pub pre_alu_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pre_issue_size: defaults::pre_issue_size(),
            pre_alu_size: defaults::pre_alu_size(),
        }
    }
}

/// Data segment settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryConfig {
    /// Effective address interpretation for `LW`/`SW`.
    pub addressing: AddressingMode,
}
