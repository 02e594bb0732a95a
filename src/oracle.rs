// src/oracle.rs
//! Plaintext-plausibility oracle.
//!
//! A decrypted byte is plausible iff it falls strictly between 64 and 91
//! or strictly between 96 and 123. The boundaries are exclusive on both
//! sides: 64 ('@') and 91 ('[') are rejected while 65 ('A') and 90 ('Z')
//! pass, and likewise 96/123 versus 97 ('a')/122 ('z'). This reproduces
//! the reference convention exactly; it happens to equal "ASCII letter"
//! but is defined by the strict comparisons, not by character class.

/// Accepts a single decrypted byte.
pub fn plausible(byte: u8) -> bool {
    (byte > 64 && byte < 91) || (byte > 96 && byte < 123)
}
