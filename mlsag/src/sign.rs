//! The shared MLSAG signing core: precondition gate, initial challenge and key images,
//! ring traversal, signer-slot closure and buffer layout.
//!
//! Both [`crate::full`] and [`crate::simple`] build a [`KeyMatrix`] and secret-scalar
//! vector from their own input shapes and delegate here.

use ensure_macro::ensure;
use rand::rngs::OsRng;

use crypto::ecc::{self, Identity, Point, Scalar, BASEPOINT_TABLE};
use crypto::{CNFastHash, KeyImage, SecretKey};

use crate::error::{Error, Result};
use crate::matrix::KeyMatrix;

/// Multisig nonce and key-image material
///
/// The core only ever checks whether this is present; the multisig path it feeds is
/// not implemented, so every call carrying `Some` is rejected at the gate.
#[derive(Clone, Copy)]
pub struct KLRki {
    /// Pre-committed nonce
    pub k: Scalar,
    /// Pre-committed key image
    pub ki: KeyImage,
    /// Pre-committed `L` term
    pub l: Point,
    /// Pre-committed `R` term
    pub r: Point,
}

/// Number of bytes a signature over a ring of `cols` columns and `rows` layers
/// serializes to
///
/// Callers must size their output buffer to exactly this before calling
/// [`generate_mlsag`], [`crate::full::generate_mlsag_full`] or
/// [`crate::simple::generate_mlsag_simple`].
pub fn required_buffer_len(cols: usize, rows: usize) -> usize {
    varint::size(cols as u64) + cols * (varint::size(rows as u64) + rows * 32) + 32
}

fn decompress(p: crypto::ecc::CompressedPoint) -> Result<Point> {
    p.decompress()
        .ok_or(Error::CryptoFailure("ring entry does not decode to a curve point"))
}

/// Validates ring shape and signer position before any secret material is touched
///
/// Returns `(rows, cols)` on success. Every failure here is `InvalidArgument`, except a
/// present `kLRki`, which is `NotImplemented`.
fn assert_preconditions(
    pk: &KeyMatrix,
    xx: &[SecretKey],
    klrki: Option<&KLRki>,
    index: usize,
    ds_rows: usize,
) -> Result<(usize, usize)> {
    let cols = pk.cols();
    ensure!(cols >= 2, Error::InvalidArgument("ring must have at least two members"));
    ensure!(index < cols, Error::InvalidArgument("signer index is outside the ring"));

    let rows = pk.rows();
    ensure!(rows >= 1, Error::InvalidArgument("ring entries have no layers"));
    ensure!(pk.is_rectangular(), Error::InvalidArgument("ring matrix is not rectangular"));
    ensure!(
        xx.len() == rows,
        Error::InvalidArgument("secret vector length does not match layer count")
    );
    ensure!(
        ds_rows >= 1 && ds_rows <= rows,
        Error::InvalidArgument("ds_rows must be between 1 and rows")
    );
    ensure!(
        klrki.is_none(),
        Error::NotImplemented("multisig kLRki signing is not supported")
    );

    Ok((rows, cols))
}

/// Computes the first Fiat-Shamir challenge and the ds-row key images
///
/// This is the only stage that touches the signer's secret scalars directly, aside from
/// the final slot closure.
fn generate_first_c_and_key_images(
    message: &[u8],
    pk: &KeyMatrix,
    xx: &[SecretKey],
    index: usize,
    ds_rows: usize,
    rows: usize,
) -> Result<(Scalar, Vec<Point>, Vec<Scalar>)> {
    let mut key_images = Vec::with_capacity(ds_rows);
    let alpha: Vec<Scalar> = (0..rows).map(|_| Scalar::random(&mut OsRng)).collect();

    let mut hasher = CNFastHash::new();
    hasher.input(message);

    for j in 0..ds_rows {
        let p_bytes = pk.get(index, j);
        hasher.input(p_bytes.as_bytes());

        let h = ecc::hash_to_point(p_bytes.to_bytes());
        let l = &alpha[j] * &BASEPOINT_TABLE;
        let r = alpha[j] * h;
        key_images.push(xx[j] * h);

        hasher.input(l.compress().as_bytes());
        hasher.input(r.compress().as_bytes());
    }

    for (j, a) in alpha.iter().enumerate().skip(ds_rows) {
        let p_bytes = pk.get(index, j);
        let l = a * &BASEPOINT_TABLE;
        hasher.input(p_bytes.as_bytes());
        hasher.input(l.compress().as_bytes());
    }

    let c_old = Scalar::from_bytes_mod_order(hasher.result());
    Ok((c_old, key_images, alpha))
}

/// Runs the shared MLSAG signing core over an already-built matrix and secret vector
///
/// `rows` and `cols` are read off `pk`'s shape; `ds_rows` is the number of leading
/// layers for which a key image and `R` term are produced. `buffer` must be exactly
/// [`required_buffer_len`]`(pk.cols(), pk.rows())` bytes.
pub fn generate_mlsag(
    message: &[u8],
    mut pk: KeyMatrix,
    xx: &[SecretKey],
    klrki: Option<KLRki>,
    index: usize,
    ds_rows: usize,
    buffer: &mut [u8],
) -> Result<Vec<KeyImage>> {
    let (rows, cols) = assert_preconditions(&pk, xx, klrki.as_ref(), index, ds_rows)?;

    let rows_b_size = varint::size(rows as u64);
    let cols_b_size = varint::size(cols as u64);
    let buff_offset = |col: usize| cols_b_size + col * (rows_b_size + rows * 32);

    ensure!(
        buffer.len() == buff_offset(cols) + 32,
        Error::BufferOverflow("output buffer is not sized for this ring shape")
    );

    let header = varint::serialize(cols as u64);
    buffer[..header.len()].copy_from_slice(&header);

    let (mut c_old, key_image_points, alpha) =
        generate_first_c_and_key_images(message, &pk, xx, index, ds_rows, rows)?;

    let mut cc = Scalar::default();
    let mut i = (index + 1) % cols;
    if i == 0 {
        cc = c_old;
    }

    while i != index {
        let mut hasher = CNFastHash::new();
        hasher.input(message);

        let offset = buff_offset(i);
        let row_header = varint::serialize(rows as u64);
        buffer[offset..offset + row_header.len()].copy_from_slice(&row_header);
        let cursor = offset + row_header.len();

        let ss: Vec<Scalar> = (0..rows).map(|_| Scalar::random(&mut OsRng)).collect();

        for j in 0..ds_rows {
            let p_bytes = pk.get(i, j);
            let p = decompress(p_bytes)?;
            let l = ecc::add_keys2(ss[j], c_old, p);
            let h = ecc::hash_to_point(p_bytes.to_bytes());
            let r = ecc::add_keys3(ss[j], h, c_old, key_image_points[j]);

            hasher.input(p_bytes.as_bytes());
            hasher.input(l.compress().as_bytes());
            hasher.input(r.compress().as_bytes());
        }
        for j in ds_rows..rows {
            let p_bytes = pk.get(i, j);
            let p = decompress(p_bytes)?;
            let l = ecc::add_keys2(ss[j], c_old, p);

            hasher.input(p_bytes.as_bytes());
            hasher.input(l.compress().as_bytes());
        }

        for (j, s) in ss.iter().enumerate() {
            let start = cursor + 32 * j;
            buffer[start..start + 32].copy_from_slice(s.as_bytes());
        }

        c_old = Scalar::from_bytes_mod_order(hasher.result());
        log::trace!("mlsag: closed column {i}");
        pk.release_column(i);

        i = (i + 1) % cols;
        if i == 0 {
            cc = c_old;
        }
    }

    let offset = buff_offset(index);
    let row_header = varint::serialize(rows as u64);
    buffer[offset..offset + row_header.len()].copy_from_slice(&row_header);
    let cursor = offset + row_header.len();

    for j in 0..rows {
        let s = ecc::sc_mulsub(alpha[j], c_old, xx[j]);
        let start = cursor + 32 * j;
        buffer[start..start + 32].copy_from_slice(s.as_bytes());
    }

    let cc_offset = buff_offset(cols);
    ensure!(
        cc_offset + 32 == buffer.len(),
        Error::BufferOverflow("invalid mg_buff size")
    );
    buffer[cc_offset..cc_offset + 32].copy_from_slice(cc.as_bytes());

    Ok(key_image_points
        .into_iter()
        .map(|p| p.compress())
        .collect())
}

#[cfg(test)]
pub(crate) fn verify(
    message: &[u8],
    pk: &KeyMatrix,
    ds_rows: usize,
    key_images: &[KeyImage],
    buffer: &[u8],
) -> bool {
    let cols = pk.cols();
    let rows = pk.rows();
    let cols_b_size = varint::size(cols as u64);
    let rows_b_size = varint::size(rows as u64);
    let buff_offset = |col: usize| cols_b_size + col * (rows_b_size + rows * 32);

    let read_scalar = |offset: usize| {
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&buffer[offset..offset + 32]);
        Scalar::from_bytes_mod_order(arr)
    };

    let cc = read_scalar(buff_offset(cols));
    let key_images: Vec<Point> = match key_images
        .iter()
        .map(|p| p.decompress())
        .collect::<Option<Vec<Point>>>()
    {
        Some(v) => v,
        None => return false,
    };

    let mut c_old = cc;
    for i in 0..cols {
        let mut hasher = CNFastHash::new();
        hasher.input(message);
        let cursor = buff_offset(i) + rows_b_size;

        for j in 0..ds_rows {
            let p_bytes = pk.get(i, j);
            let p = match p_bytes.decompress() {
                Some(p) => p,
                None => return false,
            };
            let s = read_scalar(cursor + 32 * j);
            let l = ecc::add_keys2(s, c_old, p);
            let h = ecc::hash_to_point(p_bytes.to_bytes());
            let r = ecc::add_keys3(s, h, c_old, key_images[j]);

            hasher.input(p_bytes.as_bytes());
            hasher.input(l.compress().as_bytes());
            hasher.input(r.compress().as_bytes());
        }
        for j in ds_rows..rows {
            let p_bytes = pk.get(i, j);
            let p = match p_bytes.decompress() {
                Some(p) => p,
                None => return false,
            };
            let s = read_scalar(cursor + 32 * j);
            let l = ecc::add_keys2(s, c_old, p);

            hasher.input(p_bytes.as_bytes());
            hasher.input(l.compress().as_bytes());
        }

        c_old = Scalar::from_bytes_mod_order(hasher.result());
    }

    c_old == cc
}
