use num_bigint::BigInt;
use thiserror::Error;

use crate::radix::{MAX_BASE, MIN_BASE};

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Radix(#[from] RadixError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

pub type Error = MathError;

/// Errors returned by the Lagrange interpolation helpers.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum InterpolationError {
    #[error("cannot interpolate an empty point set")]
    EmptyInput,
    #[error("abscissa {x} appears at index {first} and again at index {second}")]
    DuplicateAbscissa {
        x: BigInt,
        first: usize,
        second: usize,
    },
    #[error("interpolated value {numerator}/{denominator} is not an integer")]
    NonIntegral {
        numerator: BigInt,
        denominator: BigInt,
    },
}

/// Errors returned by the radix codec.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum RadixError {
    #[error("base must lie in [{min}, {max}], got {0}", min = MIN_BASE, max = MAX_BASE)]
    UnsupportedBase(u32),
    #[error("numeral has no digits")]
    Empty,
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },
}
