// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bit value {0} is not 0 or 1")]
    InvalidBit(u8),

    #[error("character {0:?} is not a '0' or '1' digit")]
    InvalidBitChar(char),

    #[error("bit vectors of length {left} and {right} cannot be combined")]
    LengthMismatch { left: usize, right: usize },

    #[error("permutation index {index} exceeds input length {len}")]
    InvalidPermutation { index: usize, len: usize },

    #[error("key must be {expected} bits, got {actual}")]
    KeyLength { expected: usize, actual: usize },

    #[error("key index {0} is outside the key space")]
    KeyOutOfRange(u32),

    #[error("block must be 8 bits, got {actual}")]
    BlockLength { actual: usize },

    #[error("S-box input must be 4 bits, got {0}")]
    SboxInput(usize),

    #[error("character {0:?} does not fit in an 8-bit block")]
    UnencodableChar(char),

    #[error("ciphertext length {bits} bits is not a whole number of blocks")]
    MalformedCiphertext { bits: usize },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, CipherError>;
