use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crypto::ecc::{CompressedPoint, Scalar};

/// Secret scalar for one ring position and the blinding factor of its commitment
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CtKey {
    /// The secret key corresponding to the ring entry's `dest`
    pub dest: Scalar,
    /// The blinding mask of the ring entry's commitment
    pub mask: Scalar,
}

/// One column of the public ring: a destination key paired with its Pedersen commitment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingEntry {
    /// The one-time output key
    pub dest: CompressedPoint,
    /// The output's Pedersen commitment
    pub commitment: CompressedPoint,
}

/// Column-major public-key/commitment matrix `M[i][j]`
///
/// `i` ranges over ring positions (`cols`); `j` ranges over layers (`rows`). Layer 0 is
/// always the destination keys; layer 1 (and beyond, in Full mode) is the accumulated
/// commitment balance. Storing columns as the outer vector matches the serialized
/// layout, which is emitted one column at a time.
#[derive(Clone, Debug)]
pub struct KeyMatrix(Vec<Vec<CompressedPoint>>);

impl KeyMatrix {
    /// Builds a matrix from its columns; every column must have the same length
    pub fn from_columns(columns: Vec<Vec<CompressedPoint>>) -> Self {
        KeyMatrix(columns)
    }

    /// Number of ring positions
    pub fn cols(&self) -> usize {
        self.0.len()
    }

    /// Number of layers; `0` for an empty matrix
    pub fn rows(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// `true` if every column has the same length as the first
    pub fn is_rectangular(&self) -> bool {
        let rows = self.rows();
        self.0.iter().all(|col| col.len() == rows)
    }

    /// The entry at ring position `i`, layer `j`
    pub fn get(&self, i: usize, j: usize) -> CompressedPoint {
        self.0[i][j]
    }

    /// Drops the ring position's column, releasing its heap data
    ///
    /// Called once a column has been folded into the hash chain, so peak memory stays
    /// bounded by the current column rather than the whole ring.
    pub fn release_column(&mut self, i: usize) {
        self.0[i] = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto::ecc::{Scalar, BASEPOINT_TABLE};

    fn entry(n: u64) -> CompressedPoint {
        (&Scalar::from(n) * &BASEPOINT_TABLE).compress()
    }

    #[test]
    fn rectangular_matrix_reports_dimensions() {
        let m = KeyMatrix::from_columns(vec![
            vec![entry(1), entry(2)],
            vec![entry(3), entry(4)],
            vec![entry(5), entry(6)],
        ]);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.rows(), 2);
        assert!(m.is_rectangular());
    }

    #[test]
    fn ragged_matrix_is_detected() {
        let m = KeyMatrix::from_columns(vec![vec![entry(1), entry(2)], vec![entry(3)]]);
        assert!(!m.is_rectangular());
    }
}
