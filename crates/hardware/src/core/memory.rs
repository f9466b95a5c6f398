//! Data segment storage and effective-address mapping.
//!
//! The data segment is the run's only memory: the words that followed `BREAK`
//! in the input. It provides:
//! 1. **Word Storage:** Signed 32-bit words with a base address.
//! 2. **Address Mapping:** Effective address to word index, per [`AddressingMode`].
//! 3. **Access Checking:** Misaligned and out-of-range accesses are reported, never wrapped.

use crate::common::constants::WORD_SIZE;
use crate::config::AddressingMode;

/// Why an effective address could not be mapped to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessFault {
    /// Not a multiple of the word size.
    Misaligned,
    /// Before the first or after the last word.
    OutOfRange,
}

/// Mutable data words following the program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSegment {
    base: u32,
    words: Vec<i32>,
}

impl DataSegment {
    /// Creates a data segment whose first word lives at `base`.
    pub const fn new(base: u32, words: Vec<i32>) -> Self {
        Self { base, words }
    }

    /// Address of the first word.
    #[inline]
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the segment holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, lowest address first.
    #[inline]
    pub fn words(&self) -> &[i32] {
        &self.words
    }

    /// Word stored at program address `address`, if it is inside the segment.
    pub fn word_at(&self, address: u32) -> Option<i32> {
        self.index_of(i64::from(address), AddressingMode::Absolute)
            .ok()
            .map(|idx| self.words[idx])
    }

    /// Iterates `(address, word)` pairs.
    pub fn iter_words(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, &w)| (self.base.wrapping_add(i as u32 * WORD_SIZE), w))
    }

    /// Maps an effective address to a word index.
    ///
    /// # Errors
    ///
    /// [`AccessFault::Misaligned`] or [`AccessFault::OutOfRange`].
    pub fn index_of(&self, address: i64, mode: AddressingMode) -> Result<usize, AccessFault> {
        let offset = match mode {
            AddressingMode::SegmentRelative => address,
            AddressingMode::Absolute => address - i64::from(self.base),
        };
        if offset % i64::from(WORD_SIZE) != 0 {
            return Err(AccessFault::Misaligned);
        }
        if offset < 0 {
            return Err(AccessFault::OutOfRange);
        }
        let idx = (offset / i64::from(WORD_SIZE)) as usize;
        if idx >= self.words.len() {
            return Err(AccessFault::OutOfRange);
        }
        Ok(idx)
    }

    /// Reads a word.
    ///
    /// # Errors
    ///
    /// Propagates the mapping fault from [`Self::index_of`].
    pub fn load(&self, address: i64, mode: AddressingMode) -> Result<i32, AccessFault> {
        self.index_of(address, mode).map(|idx| self.words[idx])
    }

    /// Writes a word.
    ///
    /// # Errors
    ///
    /// Propagates the mapping fault from [`Self::index_of`].
    pub fn store(&mut self, address: i64, value: i32, mode: AddressingMode) -> Result<(), AccessFault> {
        let idx = self.index_of(address, mode)?;
        self.words[idx] = value;
        Ok(())
    }
}
