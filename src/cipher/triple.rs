// src/cipher/triple.rs
//! Two-key Encrypt-Decrypt-Encrypt composition over the single cipher.
//!
//! Signatures mirror the construction's asymmetry: encryption takes the
//! two master keys separately, decryption takes the 20-bit combined key
//! recovered by the key search.

use super::ensure_block;
use super::single::{decrypt, encrypt};
use crate::bits::Bits;
use crate::consts::BLOCK_BITS;
use crate::error::Result;
use crate::framing;
use crate::keys::{CombinedKey, MasterKey};

/// EDE encryption of one block: `E(k1, D(k2, E(k1, p)))`.
pub fn encrypt3(k1: &MasterKey, k2: &MasterKey, block: &Bits) -> Result<Bits> {
    ensure_block(block)?;
    encrypt(k1, &decrypt(k2, &encrypt(k1, block)?)?)
}

/// EDE decryption of one block under a combined key split into
/// (first 10 bits, last 10 bits): `D(ka, E(kb, D(ka, c)))`.
pub fn decrypt3(key: &CombinedKey, block: &Bits) -> Result<Bits> {
    ensure_block(block)?;
    let (ka, kb) = key.split();
    decrypt(&ka, &encrypt(&kb, &decrypt(&ka, block)?)?)
}

/// EDE-encrypts a whole text, one block per character.
pub fn encrypt3_text(k1: &MasterKey, k2: &MasterKey, text: &str) -> Result<Bits> {
    let blocks = framing::ascii_to_bits(text)?.chunks(BLOCK_BITS);
    let mut out = Bits::empty();
    for block in &blocks {
        out = out.concat(&encrypt3(k1, k2, block)?);
    }
    Ok(out)
}

/// Decrypts a flat bit stream produced by [`encrypt3_text`].
pub fn decrypt3_text(key: &CombinedKey, bits: &Bits) -> Result<String> {
    let mut clear = Vec::new();
    for block in &bits.chunks(BLOCK_BITS) {
        clear.push(decrypt3(key, block)?);
    }
    framing::bits_to_ascii(&clear)
}
