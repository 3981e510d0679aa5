use log::{debug, warn};
use math::{lagrange, point::Point};
use num_bigint::BigInt;

use crate::error::SecretResult;

/// Recover the constant term of the polynomial through `points`.
///
/// The caller is responsible for supplying points that lie on one polynomial
/// of degree `points.len() - 1`; any other input still yields the constant
/// term of the polynomial that interpolates exactly these points.
pub fn reconstruct_secret(points: &[Point]) -> SecretResult<BigInt> {
    debug!("reconstructing secret from {} points", points.len());
    lagrange::interpolate_at_zero(points).map_err(|err| {
        warn!("secret reconstruction failed: {err}");
        err.into()
    })
}

/// A point set that recovers the secret of the polynomial through it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interpolator {
    points: Vec<Point>,
}

impl Interpolator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        points.into_iter().map(Into::into).collect()
    }

    /// Append `(x, y)`. Distinctness of `x` is checked at recovery time.
    pub fn add_point(
        &mut self,
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
    ) -> &mut Self {
        self.push(Point::new(x, y))
    }

    pub fn push(&mut self, point: Point) -> &mut Self {
        self.points.push(point);
        self
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn compute_secret(&self) -> SecretResult<BigInt> {
        reconstruct_secret(&self.points)
    }
}

impl FromIterator<Point> for Interpolator {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for Interpolator {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SecretError;
    use math::error::{InterpolationError, MathError};
    use math::points;

    #[test]
    fn starts_empty() {
        let interpolator = Interpolator::new();
        assert!(interpolator.is_empty());
        assert_eq!(interpolator.len(), 0);
    }

    #[test]
    fn add_point_appends_in_order() {
        let mut interpolator = Interpolator::new();
        interpolator.add_point(3, 12).add_point(1, 4);
        assert_eq!(interpolator.points(), points![(3, 12), (1, 4)].as_slice());
    }

    #[test]
    fn empty_set_is_an_error_not_zero() {
        let err = Interpolator::new()
            .compute_secret()
            .expect_err("empty input must fail");
        assert!(matches!(
            err,
            SecretError::Math(MathError::Interpolation(
                InterpolationError::EmptyInput
            ))
        ));
    }

    #[test]
    fn single_point_returns_its_ordinate() {
        let mut interpolator = Interpolator::new();
        interpolator.add_point(42, -17);
        assert_eq!(interpolator.compute_secret().unwrap(), BigInt::from(-17));
    }

    #[test]
    fn two_points_recover_intercept() {
        let interpolator = Interpolator::with_points([(1, 5), (2, 9)]);
        assert_eq!(interpolator.compute_secret().unwrap(), BigInt::from(1));
    }

    #[test]
    fn first_three_points_of_case_one() {
        let interpolator = Interpolator::with_points([(1, 4), (2, 7), (3, 12)]);
        assert_eq!(interpolator.compute_secret().unwrap(), BigInt::from(3));
    }

    #[test]
    fn duplicate_abscissa_is_an_error() {
        let interpolator = Interpolator::with_points([(1, 4), (2, 7), (1, 5)]);
        assert!(matches!(
            interpolator.compute_secret(),
            Err(SecretError::Math(MathError::Interpolation(
                InterpolationError::DuplicateAbscissa { first: 0, second: 2, .. }
            )))
        ));
    }

    #[test]
    fn clear_points_allows_reuse() {
        let mut interpolator = Interpolator::with_points([(1, 4), (2, 7)]);
        interpolator.clear_points();
        assert!(interpolator.is_empty());

        interpolator.add_point(1, 5).add_point(2, 9);
        assert_eq!(interpolator.compute_secret().unwrap(), BigInt::from(1));
    }

    #[test]
    fn extend_and_collect() {
        let mut interpolator: Interpolator =
            points![(1, 4)].into_iter().collect();
        interpolator.extend(points![(2, 7), (3, 12)]);
        assert_eq!(interpolator.len(), 3);
        assert_eq!(interpolator.compute_secret().unwrap(), BigInt::from(3));
    }

    #[test]
    fn compute_secret_leaves_points_untouched() {
        let interpolator = Interpolator::with_points([(1, 5), (2, 9)]);
        let before = interpolator.clone();
        let _ = interpolator.compute_secret();
        assert_eq!(interpolator, before);
    }

    mod properties {
        use std::collections::BTreeSet;

        use proptest::collection::{btree_set, vec};
        use proptest::prelude::*;
        use test_strategy::proptest;

        use super::*;

        fn evaluate(coefficients: &[i64], x: i64) -> BigInt {
            coefficients
                .iter()
                .rev()
                .fold(BigInt::from(0), |acc, &c| acc * x + c)
        }

        #[proptest]
        fn reversed_insertion_recovers_the_same_secret(
            #[strategy(vec(-500i64..500, 1..=6))] coefficients: Vec<i64>,
            #[strategy(btree_set(-40i64..40, 6..=9))] xs: BTreeSet<i64>,
        ) {
            let mut forward = Interpolator::new();
            let mut backward = Interpolator::new();
            for &x in &xs {
                forward.add_point(x, evaluate(&coefficients, x));
            }
            for &x in xs.iter().rev() {
                backward.add_point(x, evaluate(&coefficients, x));
            }

            let secret = forward.compute_secret().unwrap();
            prop_assert_eq!(&secret, &backward.compute_secret().unwrap());
            prop_assert_eq!(secret, BigInt::from(coefficients[0]));
        }
    }
}
