// src/lib.rs
//! sdes-crack — simplified DES, triple composition, and key recovery
//!
//! A from-scratch Feistel block cipher operating on 8-bit blocks with
//! 10-bit keys (a pedagogical toy, not a secure cipher), the two-key
//! Encrypt-Decrypt-Encrypt composition over it, and an exhaustive
//! key-search engine that recovers an unknown key from ciphertext using
//! a plaintext-plausibility oracle — sequential over the 2^10 single-key
//! space, parallel with cooperative cancellation over the 2^20 two-key
//! space.
//!
//! # Examples
//!
//! Encrypt and decrypt one block:
//!
//! ```
//! use sdes_crack::bits::Bits;
//! use sdes_crack::cipher;
//! use sdes_crack::keys::MasterKey;
//!
//! let key = MasterKey::from_bit_str("1110001110").unwrap();
//! let block = Bits::from_bit_str("10101010").unwrap();
//!
//! let ciphertext = cipher::encrypt(&key, &block).unwrap();
//! assert_eq!(ciphertext.to_bit_string(), "11001010");
//! assert_eq!(cipher::decrypt(&key, &ciphertext).unwrap(), block);
//! ```
//!
//! Recover a key by exhaustive search:
//!
//! ```
//! use sdes_crack::cipher::encrypt_text;
//! use sdes_crack::keys::MasterKey;
//! use sdes_crack::search::{crack_single, SearchOutcome};
//!
//! let key = MasterKey::from_bit_str("1000101110").unwrap();
//! let ciphertext = encrypt_text(&key, "SecretWord").unwrap();
//!
//! let outcome = crack_single(&ciphertext).unwrap();
//! assert!(matches!(outcome, SearchOutcome::Found { .. }));
//! ```

pub mod bits;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod error;
pub mod framing;
pub mod keys;
pub mod oracle;
pub mod search;

// Re-export everything users need at the crate root
pub use bits::Bits;
pub use cipher::{decrypt, decrypt3, encrypt, encrypt3};
pub use error::{CipherError, Result};
pub use keys::{subkeys, CombinedKey, MasterKey};
pub use search::{crack_single, crack_triple, SearchConfig, SearchOutcome};
