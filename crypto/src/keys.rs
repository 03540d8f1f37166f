use crate::ecc::{Scalar, CompressedPoint, BASEPOINT_TABLE};
use serde::{Serialize, Deserialize};

/// An unsigned 256-bit value used as a private key. Represented with lowercase letters
pub type SecretKey = Scalar;

/// A point on the elliptic curve. Usually determined by multiplication of a scalar to the curve
/// basepoint
pub type PublicKey = CompressedPoint;

/// Type alias specific to Cryptonote
pub type KeyImage = PublicKey;

/// A pair of a given secret key and its corresponding public key
#[derive(Serialize, Deserialize)]
pub struct KeyPair {
    /// The secret key
    pub secret_key: SecretKey,
    /// The public key
    pub public_key: PublicKey,
}

impl KeyPair {
    /// Generates a random keypair using the OS CSPRNG
    pub fn generate() -> Self {
        let mut rng = rand::rngs::OsRng;
        let secret_key = Scalar::random(&mut rng);

        Self::from(secret_key)
    }
}

impl From<Scalar> for KeyPair {
    fn from(secret_key: SecretKey) -> Self {
        let public_key = (&secret_key * &BASEPOINT_TABLE).compress();
        Self {
            secret_key,
            public_key,
        }
    }
}
