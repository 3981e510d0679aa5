//! Exact Lagrange interpolation over the integers.
//!
//! Each basis term is kept as a fraction and the terms are summed as exact
//! rationals. Only the final sum is reduced to an integer, so the result does
//! not depend on any individual term dividing evenly.

use std::collections::HashMap;

use log::trace;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::InterpolationError;
use crate::point::Point;

/// Result type specialized for interpolation.
pub type InterpolationResult<T> = Result<T, InterpolationError>;

/// One term `y_i * L_i(at)` of the Lagrange sum, before reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Term {
    numerator: BigInt,
    denominator: BigInt,
}

impl Term {
    /// Build the term for the `index`-th abscissa of `xs`, weighted by `y`.
    fn new(
        xs: &[&BigInt],
        index: usize,
        y: &BigInt,
        at: &BigInt,
    ) -> InterpolationResult<Self> {
        let xi = xs[index];
        let mut numerator = y.clone();
        let mut denominator = BigInt::one();

        for (j, &xj) in xs.iter().enumerate() {
            if j == index {
                continue;
            }
            if xi == xj {
                return Err(InterpolationError::DuplicateAbscissa {
                    x: xi.clone(),
                    first: index.min(j),
                    second: index.max(j),
                });
            }
            numerator *= at - xj;
            denominator *= xi - xj;
        }

        Ok(Self {
            numerator,
            denominator,
        }
        .normalized())
    }

    /// Move the sign onto the numerator so the denominator is positive.
    fn normalized(mut self) -> Self {
        if self.denominator.is_negative() {
            self.numerator = -self.numerator;
            self.denominator = -self.denominator;
        }
        self
    }

    fn into_ratio(self) -> BigRational {
        BigRational::new(self.numerator, self.denominator)
    }
}

/// Fail with [`InterpolationError::DuplicateAbscissa`] on the first repeated x.
pub fn ensure_distinct_abscissae<'a, I>(xs: I) -> InterpolationResult<()>
where
    I: IntoIterator<Item = &'a BigInt>,
{
    let mut seen: HashMap<&BigInt, usize> = HashMap::new();
    for (index, x) in xs.into_iter().enumerate() {
        if let Some(&first) = seen.get(x) {
            return Err(InterpolationError::DuplicateAbscissa {
                x: x.clone(),
                first,
                second: index,
            });
        }
        seen.insert(x, index);
    }
    Ok(())
}

/// Lagrange basis coefficients `L_i(at)` for the abscissae `xs`.
pub fn basis_at(
    xs: &[BigInt],
    at: &BigInt,
) -> InterpolationResult<Vec<BigRational>> {
    if xs.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    ensure_distinct_abscissae(xs)?;

    let refs: Vec<&BigInt> = xs.iter().collect();
    let one = BigInt::one();
    (0..refs.len())
        .map(|i| Term::new(&refs, i, &one, at).map(Term::into_ratio))
        .collect()
}

/// Evaluate the polynomial through `points` at `at`, exactly.
pub fn interpolate_at(
    points: &[Point],
    at: &BigInt,
) -> InterpolationResult<BigRational> {
    if points.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    ensure_distinct_abscissae(points.iter().map(|point| &point.x))?;

    let xs: Vec<&BigInt> = points.iter().map(|point| &point.x).collect();
    let mut sum = BigRational::zero();
    for (i, point) in points.iter().enumerate() {
        let term = Term::new(&xs, i, &point.y, at)?;
        trace!(
            "term {i} at x = {at}: {}/{}",
            term.numerator,
            term.denominator
        );
        sum += term.into_ratio();
    }
    Ok(sum)
}

/// The constant term `f(0)` as an exact fraction.
pub fn interpolate_at_zero_exact(
    points: &[Point],
) -> InterpolationResult<BigRational> {
    interpolate_at(points, &BigInt::zero())
}

/// The constant term `f(0)` of the polynomial through `points`.
///
/// Points are not checked for lying on a single polynomial of degree
/// `points.len() - 1`; inconsistent points still yield that polynomial's
/// constant term. A sum that does not reduce to an integer is reported as
/// [`InterpolationError::NonIntegral`].
pub fn interpolate_at_zero(points: &[Point]) -> InterpolationResult<BigInt> {
    let value = interpolate_at_zero_exact(points)?;
    if value.is_integer() {
        Ok(value.to_integer())
    } else {
        let (numerator, denominator) = value.into_raw();
        Err(InterpolationError::NonIntegral {
            numerator,
            denominator,
        })
    }
}
