pub use crate::{point, points};
pub use crate::{
    error::{InterpolationError, MathError, RadixError},
    lagrange::{
        basis_at, interpolate_at, interpolate_at_zero,
        interpolate_at_zero_exact,
    },
    point::Point,
    radix::{decode, encode},
};

pub use num_bigint::BigInt;
pub use num_rational::BigRational;
