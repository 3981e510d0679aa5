//! Shared macros for constructing sample points.

/// Simplifies constructing a [`Point`](crate::point::Point).
///
/// ```
/// use math::prelude::*;
///
/// let p = point!(1, 4);
/// assert_eq!(p, Point::new(1, 4));
/// ```
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr $(,)?) => {
        $crate::point::Point::new($x, $y)
    };
}

/// Create a [`Vec`] of [`Point`](crate::point::Point)s from `(x, y)` pairs.
///
/// ```
/// use math::prelude::*;
///
/// let pts = points![(1, 5), (2, 9)];
/// assert_eq!(pts, vec![Point::new(1, 5), Point::new(2, 9)]);
/// ```
#[macro_export]
macro_rules! points {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        vec![$($crate::point::Point::new($x, $y)),*]
    };
}
