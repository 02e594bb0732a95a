// src/consts.rs
//! Shared constants — cipher geometry and the fixed permutation/S-box tables
//!
//! The reference tables are published 1-based; the arrays below were
//! converted to 0-based indices once, here, so no call site ever adjusts
//! indices at runtime.

/// Width of one plaintext/ciphertext block
pub const BLOCK_BITS: usize = 8;

/// Width of one master key
pub const KEY_BITS: usize = 10;

/// Width of a combined triple-cipher key (two master keys)
pub const COMBINED_KEY_BITS: usize = 2 * KEY_BITS;

/// Size of the single-key search space (2^10)
pub const KEY_SPACE: usize = 1 << KEY_BITS;

/// Key-schedule permutation: 10 key bits → 10
pub const P10: [usize; 10] = [2, 4, 1, 6, 3, 9, 0, 8, 7, 5];

/// Key-schedule compression: 10 rotated bits → 8 subkey bits
pub const P8: [usize; 8] = [5, 2, 6, 3, 7, 4, 9, 8];

/// Round-function output permutation: 4 → 4
pub const P4: [usize; 4] = [1, 3, 2, 0];

/// Initial permutation applied to every block
pub const IP: [usize; 8] = [1, 5, 2, 0, 3, 7, 4, 6];

/// Inverse of [`IP`], applied after the final round
pub const IP_INV: [usize; 8] = [3, 0, 2, 4, 6, 1, 7, 5];

/// Expansion permutation: 4-bit half-block → 8 bits (duplicates positions)
pub const EP: [usize; 8] = [3, 0, 1, 2, 1, 2, 3, 0];

/// A 4×4 substitution table of 2-bit output values
pub type SBox = [[u8; 4]; 4];

/// First substitution box, applied to the left half of the expanded value
pub const S0: SBox = [[1, 0, 3, 2], [3, 2, 1, 0], [0, 2, 1, 3], [3, 1, 3, 2]];

/// Second substitution box, applied to the right half
pub const S1: SBox = [[0, 1, 2, 3], [2, 0, 1, 3], [3, 0, 1, 0], [2, 1, 0, 3]];
