pub mod error;
pub mod lagrange;
pub mod point;
pub mod prelude;
pub mod radix;

mod macros;

pub use point::Point;
