// src/keys.rs
//! Master keys, combined triple-cipher keys, and the round-key schedule.

use crate::bits::Bits;
use crate::consts::{COMBINED_KEY_BITS, KEY_BITS, KEY_SPACE, P10, P8};
use crate::error::{CipherError, Result};
use std::fmt;

/// A validated 10-bit master key, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MasterKey(Bits);

impl MasterKey {
    /// Wraps a bit vector as a master key.
    ///
    /// # Errors
    /// [`CipherError::KeyLength`] unless `bits` is exactly 10 bits.
    pub fn new(bits: Bits) -> Result<Self> {
        if bits.len() != KEY_BITS {
            return Err(CipherError::KeyLength {
                expected: KEY_BITS,
                actual: bits.len(),
            });
        }
        Ok(Self(bits))
    }

    /// Builds the key for a candidate index in `0..1024`.
    ///
    /// # Errors
    /// [`CipherError::KeyOutOfRange`] if `index` is 1024 or above.
    pub fn from_index(index: u16) -> Result<Self> {
        if usize::from(index) >= KEY_SPACE {
            return Err(CipherError::KeyOutOfRange(u32::from(index)));
        }
        Ok(Self(Bits::from_value(u32::from(index), KEY_BITS)))
    }

    /// Parses a 10-character `'0'`/`'1'` string.
    pub fn from_bit_str(text: &str) -> Result<Self> {
        Self::new(Bits::from_bit_str(text)?)
    }

    pub fn bits(&self) -> &Bits {
        &self.0
    }

    /// The key's position in the enumeration order of the key space.
    pub fn index(&self) -> u16 {
        self.0.value() as u16
    }
}

impl fmt::Display for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A 20-bit triple-cipher key: two concatenated master keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombinedKey(Bits);

impl CombinedKey {
    /// Wraps a bit vector as a combined key.
    ///
    /// # Errors
    /// [`CipherError::KeyLength`] unless `bits` is exactly 20 bits.
    pub fn new(bits: Bits) -> Result<Self> {
        if bits.len() != COMBINED_KEY_BITS {
            return Err(CipherError::KeyLength {
                expected: COMBINED_KEY_BITS,
                actual: bits.len(),
            });
        }
        Ok(Self(bits))
    }

    /// Concatenates two master keys.
    pub fn from_pair(first: &MasterKey, second: &MasterKey) -> Self {
        Self(first.bits().concat(second.bits()))
    }

    /// Builds the combined key for a candidate pair of indices.
    pub fn from_indices(first: u16, second: u16) -> Result<Self> {
        Ok(Self::from_pair(
            &MasterKey::from_index(first)?,
            &MasterKey::from_index(second)?,
        ))
    }

    /// Parses a 20-character `'0'`/`'1'` string.
    pub fn from_bit_str(text: &str) -> Result<Self> {
        Self::new(Bits::from_bit_str(text)?)
    }

    /// Splits back into (first 10 bits, last 10 bits).
    pub fn split(&self) -> (MasterKey, MasterKey) {
        let (first, second) = self.0.split_halves();
        (MasterKey(first), MasterKey(second))
    }

    pub fn bits(&self) -> &Bits {
        &self.0
    }
}

impl fmt::Display for CombinedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Derives the two 8-bit round subkeys from a master key.
///
/// P10 → split 5/5 → rotate each half left by 1 → P8 gives K1; rotating
/// each half by 2 more (3 total from the original halves) and applying
/// P8 again gives K2. Deterministic, no state.
pub fn subkeys(key: &MasterKey) -> Result<(Bits, Bits)> {
    let permuted = key.bits().permute(&P10)?;
    let (front, back) = permuted.split_halves();
    let front1 = front.rotate_left(1);
    let back1 = back.rotate_left(1);
    let k1 = front1.concat(&back1).permute(&P8)?;
    let front3 = front1.rotate_left(2);
    let back3 = back1.rotate_left(2);
    let k2 = front3.concat(&back3).permute(&P8)?;
    Ok((k1, k2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_key_length_is_enforced() {
        assert!(matches!(
            MasterKey::from_bit_str("111000111"),
            Err(CipherError::KeyLength {
                expected: 10,
                actual: 9
            })
        ));
        assert!(MasterKey::from_bit_str("1110001110").is_ok());
    }

    #[test]
    fn index_roundtrip_covers_key_space() {
        for index in [0u16, 1, 511, 1023] {
            let key = MasterKey::from_index(index).unwrap();
            assert_eq!(key.index(), index);
            assert_eq!(key.bits().len(), 10);
        }
        assert!(matches!(
            MasterKey::from_index(1024),
            Err(CipherError::KeyOutOfRange(1024))
        ));
    }

    #[test]
    fn combined_key_splits_in_order() {
        let first = MasterKey::from_bit_str("1000101110").unwrap();
        let second = MasterKey::from_bit_str("0110101110").unwrap();
        let combined = CombinedKey::from_pair(&first, &second);
        assert_eq!(combined.bits().len(), 20);
        let (a, b) = combined.split();
        assert_eq!(a, first);
        assert_eq!(b, second);
    }

    #[test]
    fn combined_key_length_is_enforced() {
        assert!(matches!(
            CombinedKey::from_bit_str("1010"),
            Err(CipherError::KeyLength {
                expected: 20,
                actual: 4
            })
        ));
    }

    #[test]
    fn schedule_known_subkeys() {
        let key = MasterKey::from_bit_str("1110001110").unwrap();
        let (k1, k2) = subkeys(&key).unwrap();
        assert_eq!(k1.to_bit_string(), "11101100");
        assert_eq!(k2.to_bit_string(), "11000111");
    }

    #[test]
    fn schedule_is_deterministic() {
        let key = MasterKey::from_index(619).unwrap();
        let (a1, a2) = subkeys(&key).unwrap();
        let (b1, b2) = subkeys(&key).unwrap();
        assert_eq!(a1, b1);
        assert_eq!(a2, b2);
    }
}
