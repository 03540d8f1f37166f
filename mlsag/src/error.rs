/// Error taxonomy for the MLSAG signer core
///
/// Every entry function returns either a populated buffer or one of these; on error the
/// buffer's contents are unspecified and must not be read.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Ring too small, index out of range, non-rectangular matrix, mismatched secret or
    /// output vector sizes, or a wrong output-buffer size
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A non-empty multisig (`kLRki`) input was supplied; this path is intentionally
    /// closed rather than silently producing a single-signer signature
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// A curve primitive signaled an internal error, e.g. decoding a malformed point
    #[error("crypto failure: {0}")]
    CryptoFailure(&'static str),

    /// The caller-supplied output buffer does not match the size the layout requires
    #[error("buffer overflow: {0}")]
    BufferOverflow(&'static str),
}

/// Result alias used throughout the signer core
pub type Result<T> = std::result::Result<T, Error>;
