//! Ed25519 scalar/point arithmetic and the handful of combined operations the MLSAG
//! signer core treats as pre-existing, correct primitives.

pub use curve25519_dalek::constants::ED25519_BASEPOINT_POINT as BASEPOINT;
pub use curve25519_dalek::constants::ED25519_BASEPOINT_TABLE as BASEPOINT_TABLE;
pub use curve25519_dalek::edwards::CompressedEdwardsY as CompressedPoint;
pub use curve25519_dalek::edwards::EdwardsPoint as Point;
pub use curve25519_dalek::scalar::Scalar;
pub use curve25519_dalek::traits::Identity;

/// Helper extension trait for [`Scalar`]
pub trait ScalarExt {
    /// Builds a canonical scalar from a 32-byte little-endian slice, reducing mod `ell`
    ///
    /// The constructor on [`Scalar`] wants a `[u8; 32]`; call sites almost always have a
    /// `&[u8]` instead, so this is the copy-and-reduce glue repeated everywhere.
    fn from_slice(data: &[u8]) -> Scalar {
        let mut scalar = [0u8; 32];
        scalar.copy_from_slice(data);
        Scalar::from_bytes_mod_order(scalar)
    }
}

impl ScalarExt for Scalar {}

/// Builds a compressed point from a 32-byte slice, without attempting to decompress it
pub fn point_from_slice(data: &[u8]) -> CompressedPoint {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(data);
    CompressedPoint(buf)
}

/// Reduces a 32-byte hash to a scalar mod `ell`
pub fn hash_to_scalar(hash: crate::hash::Hash256Data) -> Scalar {
    Scalar::from_bytes_mod_order(hash)
}

/// Maps a compressed point's bytes to a point on the curve, domain-separated so the
/// result has no known discrete log relative to `BASEPOINT`
///
/// This is Monero's `ge_fromfe_frombytes_vartime` hash-to-point, not the MLSAG core's
/// concern to implement from scratch; it is delegated to `monero-generators`, the same
/// hash-to-point every other Ed25519 Monero signature scheme in this workspace's
/// ecosystem uses.
pub fn hash_to_point(bytes: [u8; 32]) -> Point {
    monero_generators::hash_to_point(bytes)
}

/// `a*G + c*P`, the combined operation behind every "L" term in the ring walk
pub fn add_keys2(a: Scalar, c: Scalar, p: Point) -> Point {
    &a * &BASEPOINT_TABLE + c * p
}

/// `a*H + c*I`, the combined operation behind every "R" term in the ring walk
pub fn add_keys3(a: Scalar, h: Point, c: Scalar, i: Point) -> Point {
    a * h + c * i
}

/// `a - b*c mod ell`
pub fn sc_mulsub(a: Scalar, b: Scalar, c: Scalar) -> Scalar {
    a - b * c
}
