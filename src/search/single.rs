// src/search/single.rs
//! Sequential scan of the 2^10 single-key space.

use super::{decode_candidate, frame_ciphertext, SearchOutcome};
use crate::bits::Bits;
use crate::cipher;
use crate::consts::KEY_SPACE;
use crate::error::Result;
use crate::keys::MasterKey;
use log::{debug, info};

/// Tries every 10-bit key in enumeration order against the framed
/// ciphertext, returning the first key whose full decryption passes the
/// oracle. 1024 candidates is small enough that no parallelism is
/// warranted.
///
/// An empty ciphertext can never produce an accepted decryption, so it
/// exhausts immediately.
pub fn crack_single(ciphertext: &Bits) -> Result<SearchOutcome<MasterKey>> {
    let chunks = frame_ciphertext(ciphertext)?;
    if chunks.is_empty() {
        return Ok(SearchOutcome::Exhausted);
    }
    info!(
        "single-key search: {} candidates over {} blocks",
        KEY_SPACE,
        chunks.len()
    );
    for index in 0..KEY_SPACE as u16 {
        let key = MasterKey::from_index(index)?;
        if let Some(plaintext) = decode_candidate(&chunks, |block| cipher::decrypt(&key, block))? {
            info!("key {key} accepted after full oracle pass");
            return Ok(SearchOutcome::Found { key, plaintext });
        }
    }
    debug!("single-key space exhausted with no accepted decryption");
    Ok(SearchOutcome::Exhausted)
}
