//! Share-set documents.
//!
//! A share set is a JSON object with a `keys` member giving the number of
//! shares `n` and the threshold `k`, and one member per share keyed by its
//! abscissa:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   "3": { "base": "10", "value": "12" },
//!   "6": { "base": "4", "value": "213" }
//! }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};
use math::point::Point;
use num_bigint::BigInt;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SecretError, SecretResult};
use crate::interpolator::reconstruct_secret;
use crate::params::validate_threshold_config;
use crate::share::{EncodedShare, ShareBody};

/// The `keys` member of a share-set document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub n: usize,
    pub k: usize,
}

/// A share-set document as written, share members kept in document order.
///
/// Members are collected into a list rather than a map so that a repeated
/// share key is still visible to validation.
struct RawShareSet {
    keys: Keys,
    shares: Vec<(String, ShareBody)>,
}

impl<'de> Deserialize<'de> for RawShareSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawShareSetVisitor;

        impl<'de> Visitor<'de> for RawShareSetVisitor {
            type Value = RawShareSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a share-set object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<RawShareSet, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut keys = None;
                let mut shares = Vec::new();
                while let Some(name) = map.next_key::<String>()? {
                    if name == "keys" {
                        if keys.is_some() {
                            return Err(<A::Error as de::Error>::duplicate_field(
                                "keys",
                            ));
                        }
                        keys = Some(map.next_value()?);
                    } else {
                        shares.push((name, map.next_value()?));
                    }
                }
                let keys = keys.ok_or_else(|| {
                    <A::Error as de::Error>::missing_field("keys")
                })?;
                Ok(RawShareSet { keys, shares })
            }
        }

        deserializer.deserialize_map(RawShareSetVisitor)
    }
}

/// Encoded shares of one secret together with its threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    keys: Keys,
    shares: Vec<EncodedShare>,
}

impl ShareSet {
    /// Validate the threshold and order the shares by ascending abscissa.
    pub fn new(keys: Keys, mut shares: Vec<EncodedShare>) -> SecretResult<Self> {
        if !validate_threshold_config(keys.k, keys.n) {
            return Err(SecretError::InvalidThreshold {
                threshold: keys.k,
                participants: keys.n,
            });
        }
        if shares.len() < keys.k {
            return Err(SecretError::InsufficientShares(keys.k, shares.len()));
        }
        if shares.len() != keys.n {
            warn!(
                "share set declares n = {} but carries {} shares",
                keys.n,
                shares.len()
            );
        }

        shares.sort_by(|a, b| a.x.cmp(&b.x));
        Ok(Self { keys, shares })
    }

    pub fn from_json_str(json: &str) -> SecretResult<Self> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> SecretResult<Self> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    /// Read a share-set document from `path`.
    pub fn load(path: impl AsRef<Path>) -> SecretResult<Self> {
        let path = path.as_ref();
        debug!("loading share set from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: RawShareSet) -> SecretResult<Self> {
        let mut seen = HashSet::new();
        if let Some((key, _)) =
            raw.shares.iter().find(|(key, _)| !seen.insert(key.as_str()))
        {
            return Err(SecretError::DuplicateShareKey(key.clone()));
        }

        let shares = raw
            .shares
            .into_iter()
            .map(|(key, body)| {
                let x = key
                    .trim()
                    .parse::<BigInt>()
                    .map_err(|_| SecretError::InvalidShareKey(key.clone()))?;
                Ok(body.into_share(x))
            })
            .collect::<SecretResult<Vec<_>>>()?;
        Self::new(raw.keys, shares)
    }

    pub fn keys(&self) -> Keys {
        self.keys
    }

    pub fn threshold(&self) -> usize {
        self.keys.k
    }

    pub fn shares(&self) -> &[EncodedShare] {
        &self.shares
    }

    /// Decode every share, in ascending order of abscissa.
    pub fn points(&self) -> SecretResult<Vec<Point>> {
        self.shares.iter().map(EncodedShare::decode).collect()
    }

    /// Decode the first `k` shares, the minimum needed for recovery.
    pub fn threshold_points(&self) -> SecretResult<Vec<Point>> {
        self.shares
            .iter()
            .take(self.keys.k)
            .map(EncodedShare::decode)
            .collect()
    }

    /// Recover the secret from the first `k` shares.
    pub fn recover_secret(&self) -> SecretResult<BigInt> {
        reconstruct_secret(&self.threshold_points()?)
    }
}
