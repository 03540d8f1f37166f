#![deny(missing_docs)]

//! # Multilayered Linkable Spontaneous Anonymous Group (MLSAG) signatures
//!
//! Produces the ring signature Monero uses to authorize a transaction input without
//! revealing which ring member is the real spender. Two entry points cover the two
//! RingCT input shapes; both delegate to a shared signing core.

mod error;
mod full;
mod matrix;
mod simple;
mod sign;

pub use error::{Error, Result};
pub use full::generate_mlsag_full;
pub use matrix::{CtKey, KeyMatrix, RingEntry};
pub use simple::generate_mlsag_simple;
pub use sign::{generate_mlsag, required_buffer_len, KLRki};
