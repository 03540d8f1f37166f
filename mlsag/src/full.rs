//! Full RingCT matrix builder
//!
//! Folds every input's commitment into a per-column balance accumulator, so the last
//! matrix layer proves the transaction's amounts balance as a side effect of signing.

use ensure_macro::ensure;

use crypto::ecc::{CompressedPoint, Identity, Point, Scalar};
use crypto::KeyImage;

use crate::error::{Error, Result};
use crate::matrix::{CtKey, KeyMatrix, RingEntry};
use crate::sign::{generate_mlsag, KLRki};

fn decompress(p: CompressedPoint) -> Result<Point> {
    p.decompress()
        .ok_or(Error::CryptoFailure("ring entry does not decode to a curve point"))
}

/// Builds the Full-mode matrix and secret vector, then signs
///
/// `pubs[i]` is the `i`-th ring column's entries, one per input being signed
/// simultaneously; every column must have the same length as `in_sk`.
#[allow(clippy::too_many_arguments)]
pub fn generate_mlsag_full(
    message: &[u8],
    pubs: &[Vec<RingEntry>],
    in_sk: &[CtKey],
    out_sk_mask: &[Scalar],
    out_pk_commitments: &[CompressedPoint],
    klrki: Option<KLRki>,
    index: usize,
    txn_fee_key: Point,
    buffer: &mut [u8],
) -> Result<Vec<KeyImage>> {
    let cols = pubs.len();
    ensure!(cols >= 1, Error::InvalidArgument("empty ring"));

    let rows = pubs[0].len();
    ensure!(rows >= 1, Error::InvalidArgument("empty ring column"));
    for column in pubs {
        ensure!(column.len() == rows, Error::InvalidArgument("ring is not rectangular"));
    }
    ensure!(
        in_sk.len() == rows,
        Error::InvalidArgument("input secret key vector length mismatch")
    );
    ensure!(
        out_sk_mask.len() == out_pk_commitments.len(),
        Error::InvalidArgument("output mask/commitment count mismatch")
    );

    let mut columns = Vec::with_capacity(cols);
    for column in pubs {
        let mut balance = Point::identity();
        for entry in column {
            balance += decompress(entry.commitment)?;
        }
        for out_commitment in out_pk_commitments {
            balance -= decompress(*out_commitment)?;
        }
        balance -= txn_fee_key;

        let mut layers: Vec<CompressedPoint> = column.iter().map(|entry| entry.dest).collect();
        layers.push(balance.compress());
        columns.push(layers);
    }
    let pk = KeyMatrix::from_columns(columns);

    let mut sk: Vec<Scalar> = in_sk.iter().map(|k| k.dest).collect();
    let mut mask_balance = Scalar::default();
    for k in in_sk {
        mask_balance += k.mask;
    }
    for m in out_sk_mask {
        mask_balance -= m;
    }
    sk.push(mask_balance);

    // Full mode treats every input layer as a ds-row; see the crate-level design notes.
    generate_mlsag(message, pk, &sk, klrki, index, rows, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::required_buffer_len;
    use crypto::ecc::{ScalarExt, BASEPOINT_TABLE};

    fn entry(secret: Scalar, mask: Scalar) -> (RingEntry, CtKey) {
        let dest = (&secret * &BASEPOINT_TABLE).compress();
        let commitment = (&mask * &BASEPOINT_TABLE).compress();
        (RingEntry { dest, commitment }, CtKey { dest: secret, mask })
    }

    #[test]
    fn signs_single_input_ring_with_one_output() {
        let index = 1usize;
        let mut pubs = Vec::new();
        let mut in_sk = Vec::new();
        for i in 0..3u64 {
            let (ring_entry, ct_key) = entry(Scalar::from(i + 1), Scalar::from(i + 50));
            pubs.push(vec![ring_entry]);
            if i as usize == index {
                in_sk.push(ct_key);
            }
        }
        let out_mask = in_sk[0].mask;
        let out_commitment = (&out_mask * &BASEPOINT_TABLE).compress();

        let mut buffer = vec![0u8; required_buffer_len(3, 2)];
        let result = generate_mlsag_full(
            b"full mode balance",
            &pubs,
            &in_sk,
            &[out_mask],
            &[out_commitment],
            None,
            index,
            Point::identity(),
            &mut buffer,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_non_rectangular_pubs() {
        let pubs = vec![
            vec![entry(Scalar::from_slice(&[1u8; 32]), Scalar::from_slice(&[2u8; 32])).0],
            vec![
                entry(Scalar::from_slice(&[3u8; 32]), Scalar::from_slice(&[4u8; 32])).0,
                entry(Scalar::from_slice(&[5u8; 32]), Scalar::from_slice(&[6u8; 32])).0,
            ],
        ];
        let in_sk = vec![CtKey { dest: Scalar::from(1u64), mask: Scalar::from(2u64) }];
        let mut buffer = vec![0u8; required_buffer_len(2, 2)];
        let err = generate_mlsag_full(
            b"msg",
            &pubs,
            &in_sk,
            &[],
            &[],
            None,
            0,
            Point::identity(),
            &mut buffer,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
