//! Simple RingCT matrix builder
//!
//! Fixes `rows=2, dsRows=1`: layer 0 is the destination key, layer 1 is the ring
//! commitment offset by the transaction's pseudo-output commitment.

use ensure_macro::ensure;

use crypto::ecc::{CompressedPoint, Point, Scalar};
use crypto::KeyImage;

use crate::error::{Error, Result};
use crate::matrix::{CtKey, KeyMatrix, RingEntry};
use crate::sign::{generate_mlsag, KLRki};

/// Builds the Simple-mode matrix and secret vector, then signs
///
/// `a` is the pseudo-output commitment's blinding scalar and `cout` its point; both are
/// folded into the second matrix layer and the secret vector so the signature also
/// proves `in_sk.mask - a` is the discrete log of `commitment - cout`.
pub fn generate_mlsag_simple(
    message: &[u8],
    pubs: &[RingEntry],
    in_sk: CtKey,
    a: Scalar,
    cout: Point,
    klrki: Option<KLRki>,
    index: usize,
    buffer: &mut [u8],
) -> Result<Vec<KeyImage>> {
    let cols = pubs.len();
    ensure!(cols >= 1, Error::InvalidArgument("empty ring"));

    let sk = vec![in_sk.dest, in_sk.mask - a];

    let mut columns = Vec::with_capacity(cols);
    for entry in pubs {
        let commitment = entry
            .commitment
            .decompress()
            .ok_or(Error::CryptoFailure("ring entry does not decode to a curve point"))?;
        let offset_commitment = (commitment - cout).compress();
        columns.push(vec![entry.dest, offset_commitment]);
    }
    let pk = KeyMatrix::from_columns(columns);

    generate_mlsag(message, pk, &sk, klrki, index, 1, buffer)
}
