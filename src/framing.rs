// src/framing.rs
//! Framing layer — slicing flat bit streams into blocks and converting
//! between bit vectors and text.

use crate::bits::Bits;
use crate::consts::BLOCK_BITS;
use crate::error::{CipherError, Result};
use std::path::Path;

/// Partitions a flat bit stream into successive groups of `n` bits.
///
/// No padding and no truncation: a final group shorter than `n` is
/// still emitted when the length is not a multiple of `n`.
pub fn chunk(bits: &Bits, n: usize) -> Vec<Bits> {
    bits.chunks(n)
}

/// Converts a sequence of 8-bit blocks to text, one character per block
/// using its byte value.
///
/// # Errors
/// [`CipherError::BlockLength`] if any block is not exactly 8 bits.
pub fn bits_to_ascii(blocks: &[Bits]) -> Result<String> {
    let mut out = String::with_capacity(blocks.len());
    for block in blocks {
        if block.len() != BLOCK_BITS {
            return Err(CipherError::BlockLength {
                actual: block.len(),
            });
        }
        out.push(char::from(block.value() as u8));
    }
    Ok(out)
}

/// Converts text to a flat bit stream, one 8-bit block per character.
///
/// # Errors
/// [`CipherError::UnencodableChar`] for any character above U+00FF.
pub fn ascii_to_bits(text: &str) -> Result<Bits> {
    let mut out = Bits::empty();
    for c in text.chars() {
        let code = u32::from(c);
        if code > 0xFF {
            return Err(CipherError::UnencodableChar(c));
        }
        out = out.concat(&Bits::from_value(code, BLOCK_BITS));
    }
    Ok(out)
}

/// Reads a ciphertext source: a flat sequence of `'0'`/`'1'` characters
/// (surrounding whitespace tolerated), fully buffered before use.
pub fn read_ciphertext_file(path: &Path) -> Result<Bits> {
    let raw = std::fs::read_to_string(path)?;
    Bits::from_bit_str(&raw)
}
