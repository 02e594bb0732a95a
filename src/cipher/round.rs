// src/cipher/round.rs
//! One Feistel round.

use crate::bits::{sbox_lookup, Bits};
use crate::consts::{EP, P4, S0, S1};
use crate::error::Result;

/// Applies one round to an 8-bit state under an 8-bit subkey.
///
/// The right half passes through unchanged; the left half is XORed with
/// a mask derived from the right half: expand via EP, XOR the subkey,
/// substitute the two 4-bit halves through S0/S1, permute via P4.
/// Because the mask depends only on the unchanged right half and the
/// subkey, the round is its own inverse.
pub(crate) fn feistel_round(state: &Bits, subkey: &Bits) -> Result<Bits> {
    let (left, right) = state.split_halves();
    let mixed = right.permute(&EP)?.xor(subkey)?;
    let (outer, inner) = mixed.split_halves();
    let substituted = sbox_lookup(&outer, &S0)?.concat(&sbox_lookup(&inner, &S1)?);
    let mask = substituted.permute(&P4)?;
    Ok(left.xor(&mask)?.concat(&right))
}
