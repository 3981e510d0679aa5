use math::{point::Point, radix};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer};

use crate::error::{SecretError, SecretResult};

/// A share whose ordinate is still written as a numeral in some base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedShare {
    pub x: BigInt,
    pub base: u32,
    pub value: String,
}

impl EncodedShare {
    pub fn new(x: impl Into<BigInt>, base: u32, value: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            base,
            value: value.into(),
        }
    }

    /// Decode the ordinate, producing the sample point `(x, y)`.
    pub fn decode(&self) -> SecretResult<Point> {
        let y = radix::decode(&self.value, self.base).map_err(|source| {
            SecretError::Share {
                x: self.x.clone(),
                source: source.into(),
            }
        })?;
        Ok(Point {
            x: self.x.clone(),
            y,
        })
    }
}

/// The body of one share entry in a share-set document.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ShareBody {
    #[serde(deserialize_with = "deserialize_base")]
    pub(crate) base: u32,
    pub(crate) value: String,
}

impl ShareBody {
    pub(crate) fn into_share(self, x: BigInt) -> EncodedShare {
        EncodedShare {
            x,
            base: self.base,
            value: self.value,
        }
    }
}

/// Bases are usually written as strings but plain numbers are accepted too.
fn deserialize_base<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Base {
        Number(u32),
        Text(String),
    }

    match Base::deserialize(deserializer)? {
        Base::Number(base) => Ok(base),
        Base::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("invalid base {text:?}"))
        }),
    }
}
