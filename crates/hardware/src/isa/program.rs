//! Decoded program storage.

use std::sync::Arc;

use crate::common::constants::WORD_SIZE;
use crate::isa::instruction::Instruction;

/// Ordered, immutable instruction sequence starting at `base`.
///
/// Instructions are reference counted so pipeline buffers can hold them
/// without copying.
#[derive(Debug, Clone, Default)]
pub struct Program {
    base: u32,
    instructions: Vec<Arc<Instruction>>,
}

impl Program {
    /// Builds a program from instructions laid out contiguously from `base`.
    pub fn new(base: u32, instructions: Vec<Instruction>) -> Self {
        Self {
            base,
            instructions: instructions.into_iter().map(Arc::new).collect(),
        }
    }

    /// Address of the first instruction.
    #[inline]
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Number of instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program holds no instructions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Instruction at `pc`, or `None` when `pc` is unaligned or outside the program.
    pub fn fetch(&self, pc: u32) -> Option<Arc<Instruction>> {
        let offset = pc.checked_sub(self.base)?;
        if offset % WORD_SIZE != 0 {
            return None;
        }
        self.instructions
            .get((offset / WORD_SIZE) as usize)
            .map(Arc::clone)
    }

    /// Iterates instructions in address order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Instruction>> {
        self.instructions.iter()
    }
}
