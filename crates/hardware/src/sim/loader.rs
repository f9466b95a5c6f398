//! Program image loading.
//!
//! This module turns the input text into a runnable image. It performs:
//! 1. **Line parsing:** One 32-character binary word per non-blank line.
//! 2. **Decoding:** Every word up to and including `BREAK` is an instruction.
//! 3. **Data capture:** Every word after `BREAK` is a signed data word.
//!
//! Addresses start at `general.base_address` and advance by one word per
//! non-blank line, so the data segment begins right after `BREAK`.

use tracing::debug;

use crate::common::constants::WORD_SIZE;
use crate::common::error::DecodeError;
use crate::config::Config;
use crate::core::memory::DataSegment;
use crate::isa::decode::{decode, parse_word};
use crate::isa::opcodes::Mnemonic;
use crate::isa::program::Program;

/// A decoded program and its initial data segment.
#[derive(Debug, Clone)]
pub struct Image {
    /// Instructions, `BREAK` included.
    pub program: Program,
    /// Words following `BREAK`.
    pub data: DataSegment,
}

/// Decodes the input text into an [`Image`].
///
/// # Errors
///
/// The first [`DecodeError`] encountered, or [`DecodeError::MissingBreak`] if
/// no `BREAK` instruction was found.
pub fn load_image(text: &str, config: &Config) -> Result<Image, DecodeError> {
    let base = config.general.base_address;
    let mut address = base;
    let mut instructions = Vec::new();
    let mut words = Vec::new();
    let mut data_base = None;

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let word = parse_word(line, line_no)?;

        if data_base.is_some() {
            words.push(word as i32);
        } else {
            let inst = decode(word, address, line_no)?;
            let is_break = inst.mnemonic == Mnemonic::Break;
            instructions.push(inst);
            if is_break {
                data_base = Some(address.wrapping_add(WORD_SIZE));
            }
        }
        address = address.wrapping_add(WORD_SIZE);
    }

    let Some(data_base) = data_base else {
        return Err(DecodeError::MissingBreak);
    };
    debug!(
        instructions = instructions.len(),
        data_words = words.len(),
        base,
        data_base,
        "image loaded"
    );

    Ok(Image {
        program: Program::new(base, instructions),
        data: DataSegment::new(data_base, words),
    })
}
