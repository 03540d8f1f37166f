#![deny(missing_docs)]
//! Cryptographic primitives used by the MLSAG signer core: Ed25519 scalar/point
//! arithmetic, Keccak-256 hashing, and the keypair types built on top of them.

pub mod ecc;
mod hash;
mod keys;

pub use hash::{CNFastHash, Hash256, Hash256Data};
pub use keys::{KeyImage, KeyPair, PublicKey, SecretKey};

pub use ecc::ScalarExt;
