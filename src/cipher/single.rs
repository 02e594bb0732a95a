// src/cipher/single.rs
//! The two-round simplified-DES cipher.

use super::ensure_block;
use super::round::feistel_round;
use crate::bits::Bits;
use crate::consts::{BLOCK_BITS, IP, IP_INV};
use crate::error::Result;
use crate::framing;
use crate::keys::{subkeys, MasterKey};

/// Encrypts one 8-bit block: IP → round(K1) → swap → round(K2) → IP⁻¹.
///
/// # Errors
/// [`crate::error::CipherError::BlockLength`] unless `block` is 8 bits.
pub fn encrypt(key: &MasterKey, block: &Bits) -> Result<Bits> {
    ensure_block(block)?;
    let (k1, k2) = subkeys(key)?;
    let state = block.permute(&IP)?;
    let state = feistel_round(&state, &k1)?;
    let state = state.swap_halves();
    let state = feistel_round(&state, &k2)?;
    state.permute(&IP_INV)
}

/// Decrypts one 8-bit block. Same network as [`encrypt`] with the round
/// keys applied in reverse order — the Feistel invertibility property.
pub fn decrypt(key: &MasterKey, block: &Bits) -> Result<Bits> {
    ensure_block(block)?;
    let (k1, k2) = subkeys(key)?;
    let state = block.permute(&IP)?;
    let state = feistel_round(&state, &k2)?;
    let state = state.swap_halves();
    let state = feistel_round(&state, &k1)?;
    state.permute(&IP_INV)
}

/// Encrypts a whole text, one block per character.
pub fn encrypt_text(key: &MasterKey, text: &str) -> Result<Bits> {
    let blocks = framing::ascii_to_bits(text)?.chunks(BLOCK_BITS);
    let mut out = Bits::empty();
    for block in &blocks {
        out = out.concat(&encrypt(key, block)?);
    }
    Ok(out)
}

/// Decrypts a flat bit stream produced by [`encrypt_text`].
pub fn decrypt_text(key: &MasterKey, bits: &Bits) -> Result<String> {
    let mut clear = Vec::new();
    for block in &bits.chunks(BLOCK_BITS) {
        clear.push(decrypt(key, block)?);
    }
    framing::bits_to_ascii(&clear)
}
