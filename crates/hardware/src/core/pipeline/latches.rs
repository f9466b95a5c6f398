//! Pipeline buffer structures for inter-stage communication.
//!
//! This module defines what travels between the stages of the two-issue pipeline:
//! Fetch → Pre-Issue → Issue → Pre-ALU1 / Pre-ALU2 → ALU1 / ALU2 → Pre-MEM →
//! Memory → Post-MEM / Post-ALU2 → Write-Back.
//!
//! 1. **Buffer Entries:** An issued instruction plus the operands captured at issue.
//! 2. **Bounded Queues:** Order-preserving FIFOs with a hard capacity.
//!
//! Single-entry buffers (Pre-MEM, Post-MEM, Post-ALU2) are plain
//! `Option<BufferEntry>` slots owned by the engine.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::isa::instruction::Instruction;

/// Entry in the Pre-ALU, Pre-MEM, Post-MEM and Post-ALU2 buffers.
///
/// Operands are read from the register file at issue time and travel with the
/// instruction, so later register writes never affect an issued instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferEntry {
    /// The issued instruction.
    pub inst: Arc<Instruction>,
    /// First operand (`R[rs]`, or `R[rt]` for shifts).
    pub operand1: i32,
    /// Second operand (`R[rt]`, extended immediate, offset, or shift amount).
    pub operand2: i32,
    /// Data to be stored (for `SW` only).
    pub store_data: i32,
    /// Destination register, or `None` for stores.
    pub dest: Option<usize>,
    /// ALU result, effective address, or loaded word, depending on the stage.
    pub value: i32,
}

impl BufferEntry {
    /// Creates an entry with zeroed operands and the instruction's destination.
    pub fn new(inst: Arc<Instruction>) -> Self {
        let dest = inst.destination();
        Self {
            inst,
            operand1: 0,
            operand2: 0,
            store_data: 0,
            dest,
            value: 0,
        }
    }
}

/// Order-preserving FIFO with a fixed capacity.
///
/// `push` hands the item back when the queue is full instead of growing, so a
/// capacity overrun is always visible to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedQueue<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of items.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the queue holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if no more items can be pushed.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// How many more items fit.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.entries.len())
    }

    /// Appends an item at the tail.
    ///
    /// # Errors
    ///
    /// Returns the item unchanged if the queue is full.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.entries.push_back(item);
        Ok(())
    }

    /// Removes and returns the head.
    pub fn pop_front(&mut self) -> Option<T> {
        self.entries.pop_front()
    }

    /// Head of the queue.
    pub fn front(&self) -> Option<&T> {
        self.entries.front()
    }

    /// Item at `index` (0 is the head).
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Removes the item at `index`, keeping the rest in order.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.entries.remove(index)
    }

    /// Iterates items from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}
