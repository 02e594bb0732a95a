// src/search/mod.rs
//! Exhaustive key-search engine.
//!
//! Both searches take the ciphertext explicitly — there is no ambient
//! state. The 2^10 single-key space is scanned sequentially; the 2^20
//! two-key space is partitioned across a fixed pool of worker threads
//! with first-success-wins cooperative cancellation.

pub mod parallel;
pub mod single;

pub use parallel::crack_triple;
pub use single::crack_single;

use crate::bits::Bits;
use crate::consts::BLOCK_BITS;
use crate::error::{CipherError, Result};
use crate::oracle;

/// Terminal result of one search. Exhaustion is a normal outcome, not
/// an error; callers distinguish "no key" from a failed search by the
/// surrounding `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<K> {
    /// The first key discovered whose full decryption passed the oracle,
    /// together with the decoded text.
    Found { key: K, plaintext: String },
    /// Every candidate in the space was tried and rejected.
    Exhausted,
}

impl<K> SearchOutcome<K> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

/// Tuning for the parallel search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Worker pool size. The default is one worker per hardware thread.
    pub workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self { workers }
    }
}

/// Validates and frames a flat ciphertext stream into 8-bit blocks.
///
/// # Errors
/// [`CipherError::MalformedCiphertext`] when the bit count is not a
/// whole number of blocks; a short trailing chunk would otherwise make
/// every candidate decryption fail identically.
pub(crate) fn frame_ciphertext(ciphertext: &Bits) -> Result<Vec<Bits>> {
    if !ciphertext.len().is_multiple_of(BLOCK_BITS) {
        return Err(CipherError::MalformedCiphertext {
            bits: ciphertext.len(),
        });
    }
    Ok(ciphertext.chunks(BLOCK_BITS))
}

/// Decrypts every block with the candidate's block decryptor, gating
/// each through the oracle. Short-circuits at the first implausible
/// block: `Ok(None)` is a normal negative result.
pub(crate) fn decode_candidate<F>(chunks: &[Bits], decrypt_block: F) -> Result<Option<String>>
where
    F: Fn(&Bits) -> Result<Bits>,
{
    let mut text = String::with_capacity(chunks.len());
    for block in chunks {
        let clear = decrypt_block(block)?;
        let byte = clear.value() as u8;
        if !oracle::plausible(byte) {
            return Ok(None);
        }
        text.push(char::from(byte));
    }
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher;
    use crate::keys::MasterKey;

    #[test]
    fn frame_rejects_partial_blocks() {
        let bits = Bits::from_value(0, 12);
        assert!(matches!(
            frame_ciphertext(&bits),
            Err(CipherError::MalformedCiphertext { bits: 12 })
        ));
        assert_eq!(frame_ciphertext(&Bits::from_value(0, 16)).unwrap().len(), 2);
    }

    #[test]
    fn decode_candidate_short_circuits() {
        let key = MasterKey::from_index(37).unwrap();
        let good = cipher::encrypt_text(&key, "ok").unwrap();
        let chunks = frame_ciphertext(&good).unwrap();
        let decoded = decode_candidate(&chunks, |b| cipher::decrypt(&key, b)).unwrap();
        assert_eq!(decoded.as_deref(), Some("ok"));

        // A digit fails the oracle even under the correct key.
        let bad = cipher::encrypt_text(&key, "ok9ok").unwrap();
        let chunks = frame_ciphertext(&bad).unwrap();
        let decoded = decode_candidate(&chunks, |b| cipher::decrypt(&key, b)).unwrap();
        assert_eq!(decoded, None);
    }
}
