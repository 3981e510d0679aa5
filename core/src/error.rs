use math::error::{InterpolationError, MathError, RadixError};
use num_bigint::BigInt;
use thiserror::Error;

/// Result type specialized for secret recovery.
pub type SecretResult<T> = std::result::Result<T, SecretError>;

/// Errors that can arise while loading shares and recovering a secret.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SecretError {
    #[error(transparent)]
    Math(#[from] MathError),
    #[error(
        "Invalid threshold configuration: threshold {threshold} with {participants} declared shares"
    )]
    InvalidThreshold {
        threshold: usize,
        participants: usize,
    },
    #[error("Insufficient shares: need {0}, got {1}")]
    InsufficientShares(usize, usize),
    #[error("share at x = {x}: {source}")]
    Share {
        x: BigInt,
        #[source]
        source: MathError,
    },
    #[error("invalid share key {0:?}: expected an integer abscissa")]
    InvalidShareKey(String),
    #[error("share key {0:?} appears more than once")]
    DuplicateShareKey(String),
    #[error("malformed share set: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<InterpolationError> for SecretError {
    fn from(value: InterpolationError) -> Self {
        SecretError::Math(value.into())
    }
}

impl From<RadixError> for SecretError {
    fn from(value: RadixError) -> Self {
        SecretError::Math(value.into())
    }
}
