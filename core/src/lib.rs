pub mod error;
pub mod interpolator;
pub mod params;
pub mod share;
pub mod share_set;

pub use error::{SecretError, SecretResult};
pub use interpolator::{reconstruct_secret, Interpolator};
pub use share::EncodedShare;
pub use share_set::{Keys, ShareSet};
