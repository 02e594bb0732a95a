// src/bits.rs
//! Fixed-length bit vectors and the permutation/substitution primitives
//! the cipher network is assembled from.
//!
//! Every [`Bits`] value is validated at construction: each element is 0
//! or 1, always. Operations that build new vectors from an existing one
//! (`permute`, `rotate_left`, `xor`, ...) preserve that invariant without
//! revalidating.

use crate::consts::SBox;
use crate::error::{CipherError, Result};
use std::fmt;

/// An ordered sequence of bits, most significant first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bits(Vec<u8>);

impl Bits {
    /// Builds a bit vector from raw values.
    ///
    /// # Errors
    /// [`CipherError::InvalidBit`] if any element is not 0 or 1.
    pub fn from_slice(bits: &[u8]) -> Result<Self> {
        for &bit in bits {
            if bit > 1 {
                return Err(CipherError::InvalidBit(bit));
            }
        }
        Ok(Self(bits.to_vec()))
    }

    /// Parses a `'0'`/`'1'` string; surrounding whitespace is ignored.
    ///
    /// # Errors
    /// [`CipherError::InvalidBitChar`] on any other character.
    pub fn from_bit_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let mut out = Vec::with_capacity(trimmed.len());
        for c in trimmed.chars() {
            match c {
                '0' => out.push(0),
                '1' => out.push(1),
                _ => return Err(CipherError::InvalidBitChar(c)),
            }
        }
        Ok(Self(out))
    }

    /// An empty bit vector, useful as a concatenation accumulator.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Encodes `value` as a `width`-bit vector, MSB first.
    ///
    /// Bits above `width` are discarded.
    pub fn from_value(value: u32, width: usize) -> Self {
        let mut out = Vec::with_capacity(width);
        for i in (0..width).rev() {
            out.push(((value >> i) & 1) as u8);
        }
        Self(out)
    }

    /// The integer value of this vector, MSB first.
    pub fn value(&self) -> u32 {
        self.0.iter().fold(0, |acc, &bit| (acc << 1) | u32::from(bit))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Rearranges bits through a fixed 0-based index table:
    /// `output[i] = input[table[i]]`. The output length is the table
    /// length, so a table may expand, compress, or reorder.
    ///
    /// # Errors
    /// [`CipherError::InvalidPermutation`] if any table index is out of
    /// range for this vector.
    pub fn permute(&self, table: &[usize]) -> Result<Self> {
        let mut out = Vec::with_capacity(table.len());
        for &index in table {
            let bit = self
                .0
                .get(index)
                .copied()
                .ok_or(CipherError::InvalidPermutation {
                    index,
                    len: self.0.len(),
                })?;
            out.push(bit);
        }
        Ok(Self(out))
    }

    /// Circular left rotation by `k` positions.
    pub fn rotate_left(&self, k: usize) -> Self {
        if self.0.is_empty() {
            return self.clone();
        }
        let k = k % self.0.len();
        let mut out = self.0[k..].to_vec();
        out.extend_from_slice(&self.0[..k]);
        Self(out)
    }

    /// Elementwise XOR with an equal-length vector.
    ///
    /// # Errors
    /// [`CipherError::LengthMismatch`] if the lengths differ.
    pub fn xor(&self, other: &Self) -> Result<Self> {
        if self.0.len() != other.0.len() {
            return Err(CipherError::LengthMismatch {
                left: self.0.len(),
                right: other.0.len(),
            });
        }
        let out = self
            .0
            .iter()
            .zip(&other.0)
            .map(|(&a, &b)| a ^ b)
            .collect();
        Ok(Self(out))
    }

    /// Splits into (front half, back half). For odd lengths the front
    /// half is the shorter one.
    pub fn split_halves(&self) -> (Self, Self) {
        let mid = self.0.len() / 2;
        (Self(self.0[..mid].to_vec()), Self(self.0[mid..].to_vec()))
    }

    /// Exchanges the two halves.
    pub fn swap_halves(&self) -> Self {
        let (front, back) = self.split_halves();
        back.concat(&front)
    }

    /// Appends `other` after `self`.
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = self.0.clone();
        out.extend_from_slice(&other.0);
        Self(out)
    }

    /// Slices this vector into successive groups of `n` bits, in order.
    /// The final group may be shorter when the length is not a multiple
    /// of `n`; it is still emitted.
    pub fn chunks(&self, n: usize) -> Vec<Self> {
        if n == 0 {
            return Vec::new();
        }
        self.0.chunks(n).map(|c| Self(c.to_vec())).collect()
    }

    pub fn to_bit_string(&self) -> String {
        self.0.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

/// Looks up a 4-bit value in a substitution box.
///
/// Row is selected by the outer bits (`b0·2 + b3`), column by the inner
/// bits (`b1·2 + b2`); the stored 2-bit value is returned.
///
/// # Errors
/// [`CipherError::SboxInput`] if `bits` is not exactly 4 bits.
pub fn sbox_lookup(bits: &Bits, table: &SBox) -> Result<Bits> {
    let b = bits.as_slice();
    if b.len() != 4 {
        return Err(CipherError::SboxInput(b.len()));
    }
    let row = (2 * b[0] + b[3]) as usize;
    let col = (2 * b[1] + b[2]) as usize;
    Ok(Bits::from_value(u32::from(table[row][col]), 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{EP, IP, IP_INV, S0, S1};

    #[test]
    fn from_slice_rejects_non_bits() {
        assert!(matches!(
            Bits::from_slice(&[0, 1, 2]),
            Err(CipherError::InvalidBit(2))
        ));
    }

    #[test]
    fn from_bit_str_trims_and_parses() {
        let bits = Bits::from_bit_str(" 1010\n").unwrap();
        assert_eq!(bits.as_slice(), &[1, 0, 1, 0]);
    }

    #[test]
    fn from_bit_str_rejects_other_chars() {
        assert!(matches!(
            Bits::from_bit_str("10x1"),
            Err(CipherError::InvalidBitChar('x'))
        ));
    }

    #[test]
    fn value_roundtrip() {
        for value in [0u32, 1, 2, 127, 128, 255] {
            let bits = Bits::from_value(value, 8);
            assert_eq!(bits.len(), 8);
            assert_eq!(bits.value(), value);
        }
        // 10-bit key space endpoints
        assert_eq!(Bits::from_value(1023, 10).value(), 1023);
        assert_eq!(Bits::from_value(0, 10).value(), 0);
    }

    #[test]
    fn permute_out_of_range_index() {
        let bits = Bits::from_value(0b1010, 4);
        assert!(matches!(
            bits.permute(&[0, 4]),
            Err(CipherError::InvalidPermutation { index: 4, len: 4 })
        ));
    }

    #[test]
    fn ip_inverse_undoes_ip() {
        for value in 0..=255u32 {
            let block = Bits::from_value(value, 8);
            let permuted = block.permute(&IP).unwrap();
            assert_eq!(permuted.permute(&IP_INV).unwrap(), block);
        }
    }

    #[test]
    fn expansion_duplicates_bits() {
        let half = Bits::from_bit_str("1011").unwrap();
        // EP = (4,1,2,3,2,3,4,1) in 1-based reference notation
        let expanded = half.permute(&EP).unwrap();
        assert_eq!(expanded.to_bit_string(), "11010111");
    }

    #[test]
    fn rotate_left_wraps() {
        let bits = Bits::from_bit_str("10110").unwrap();
        assert_eq!(bits.rotate_left(1).to_bit_string(), "01101");
        assert_eq!(bits.rotate_left(5), bits);
        assert_eq!(bits.rotate_left(6), bits.rotate_left(1));
    }

    #[test]
    fn xor_requires_equal_lengths() {
        let a = Bits::from_value(0b1010, 4);
        let b = Bits::from_value(0b11, 2);
        assert!(matches!(
            a.xor(&b),
            Err(CipherError::LengthMismatch { left: 4, right: 2 })
        ));
    }

    #[test]
    fn xor_is_elementwise() {
        let a = Bits::from_bit_str("1100").unwrap();
        let b = Bits::from_bit_str("1010").unwrap();
        assert_eq!(a.xor(&b).unwrap().to_bit_string(), "0110");
    }

    #[test]
    fn swap_halves_exchanges() {
        let bits = Bits::from_bit_str("11110000").unwrap();
        assert_eq!(bits.swap_halves().to_bit_string(), "00001111");
        assert_eq!(bits.swap_halves().swap_halves(), bits);
    }

    #[test]
    fn chunks_emits_short_tail() {
        let bits = Bits::from_bit_str("101010101").unwrap();
        let groups = bits.chunks(4);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2].len(), 1);
    }

    #[test]
    fn sbox_row_column_selection() {
        // S0: outer bits (b0,b3) pick the row, inner bits (b1,b2) the column.
        // 1011 → row = 2·1+1 = 3, col = 2·0+1 = 1 → S0[3][1] = 1 → "01"
        let input = Bits::from_bit_str("1011").unwrap();
        assert_eq!(sbox_lookup(&input, &S0).unwrap().to_bit_string(), "01");
        // 0000 → row 0, col 0 → S1[0][0] = 0 → "00"
        let zero = Bits::from_bit_str("0000").unwrap();
        assert_eq!(sbox_lookup(&zero, &S1).unwrap().to_bit_string(), "00");
    }

    #[test]
    fn sbox_rejects_wrong_width() {
        let input = Bits::from_bit_str("10101").unwrap();
        assert!(matches!(
            sbox_lookup(&input, &S0),
            Err(CipherError::SboxInput(5))
        ));
    }
}
