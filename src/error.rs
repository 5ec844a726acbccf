/// The ways a Spook operation can fail.
///
/// Length errors are reported before any cryptographic work is done. A decryption that fails
/// authentication reports [`Error::AuthenticationFailure`] and nothing else.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The key is not 16 or 32 bytes long, or does not fit the requested variant.
    #[error("invalid key length: {0} bytes")]
    InvalidKeyLength(usize),
    /// The nonce is not 16 bytes long.
    #[error("invalid nonce length: {0} bytes, expected 16")]
    InvalidNonceLength(usize),
    /// The ciphertext is too short to hold a tag.
    #[error("invalid input length: {0} bytes, expected at least 16")]
    InvalidInputLength(usize),
    /// The tag did not match.
    #[error("authentication failed")]
    AuthenticationFailure,
}
