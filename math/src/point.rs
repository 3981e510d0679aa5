//! Sample points on an integer polynomial.

use std::fmt;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// One sample `(x, y)` of the polynomial being reconstructed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl<X, Y> From<(X, Y)> for Point
where
    X: Into<BigInt>,
    Y: Into<BigInt>,
{
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
