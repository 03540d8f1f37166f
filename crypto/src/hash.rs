use sha3::{Digest, Keccak256};

/// Raw bytes of a 32-byte Keccak digest
pub type Hash256Data = [u8; 32];

/// A 32-byte Keccak-256 digest ("cn_fast_hash" in Monero's own terminology)
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash, serde::Serialize, serde::Deserialize)]
pub struct Hash256(Hash256Data);

impl Hash256 {
    /// The all-zero hash
    pub fn null_hash() -> Self {
        Hash256([0; 32])
    }

    /// Raw bytes of this digest
    pub fn data(&self) -> &Hash256Data {
        &self.0
    }
}

impl std::fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Hash256({})", hex::encode(self.0))
    }
}

impl std::convert::TryFrom<&str> for Hash256 {
    type Error = hex::FromHexError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let bytes = hex::decode(value)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut data = [0u8; 32];
        data.copy_from_slice(&bytes);
        Ok(Hash256(data))
    }
}

/// Incremental Keccak-256 hasher used throughout signing
///
/// Wraps [`sha3::Keccak256`] with the `input`/`result`/`result_reset` names the rest of
/// this codebase expects, so call sites read the same whether they're chaining a running
/// hash or asking for a one-shot digest.
pub struct CNFastHash(Keccak256);

impl CNFastHash {
    /// Start a fresh hasher
    pub fn new() -> Self {
        CNFastHash(Keccak256::new())
    }

    /// Absorb more data into the running hash
    pub fn input(&mut self, data: impl AsRef<[u8]>) {
        self.0.update(data);
    }

    /// Finalize and reset, so the hasher can be reused for the next link in a chain
    pub fn result_reset(&mut self) -> Hash256Data {
        self.0.finalize_reset().into()
    }

    /// Consume the hasher and finalize
    pub fn result(self) -> Hash256Data {
        self.0.finalize().into()
    }

    /// One-shot digest of a single buffer
    pub fn digest(data: impl AsRef<[u8]>) -> Hash256Data {
        Keccak256::digest(data).into()
    }
}

impl Default for CNFastHash {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_32_bytes_and_deterministic() {
        let a = CNFastHash::digest(b"de omnibus dubitandum");
        let b = CNFastHash::digest(b"de omnibus dubitandum");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn result_reset_matches_digest() {
        let mut hasher = CNFastHash::new();
        hasher.input(b"abundans");
        hasher.input(b"cautela");
        let chained = hasher.result_reset();

        let oneshot = CNFastHash::digest(b"abundanscautela");
        assert_eq!(chained, oneshot);
    }
}
