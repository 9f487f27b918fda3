use thiserror::Error;

/// Errors produced while building instruction data.
///
/// Builders never return a partially assembled instruction: encoding either
/// yields the full data blob or fails here.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize instruction arguments: {0}")]
    Args(#[from] std::io::Error),
}

/// Errors produced while decoding instruction or account data.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("data is {len} bytes, expected at least {min}")]
    TooShort { len: usize, min: usize },
    #[error("discriminator does not match, expected {expected:02x?}")]
    DiscriminatorMismatch { expected: [u8; 8] },
    #[error("no decoder registered for discriminator {0:02x?}")]
    UnknownDiscriminator([u8; 8]),
    #[error("failed to deserialize arguments: {0}")]
    Args(#[source] std::io::Error),
    #[error("non-empty remaining accounts info is not supported")]
    RemainingAccountsInfo,
    #[error("account data is {len} bytes, expected {expected}")]
    AccountSize { len: usize, expected: usize },
}
