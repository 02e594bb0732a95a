// src/cipher/mod.rs
//! The Feistel cipher family: one round, the two-round single cipher,
//! and the two-key EDE triple composition.

pub mod round;
pub mod single;
pub mod triple;

pub use single::{decrypt, decrypt_text, encrypt, encrypt_text};
pub use triple::{decrypt3, decrypt3_text, encrypt3, encrypt3_text};

use crate::bits::Bits;
use crate::consts::BLOCK_BITS;
use crate::error::{CipherError, Result};

/// Rejects anything that is not exactly one 8-bit block, before any
/// permutation runs. Short trailing chunks from the framing layer land
/// here instead of reaching the S-boxes with undefined results.
pub(crate) fn ensure_block(block: &Bits) -> Result<()> {
    if block.len() != BLOCK_BITS {
        return Err(CipherError::BlockLength {
            actual: block.len(),
        });
    }
    Ok(())
}
