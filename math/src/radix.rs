//! Positional numerals in bases 2 through 36.
//!
//! Digits are `0-9` followed by the letters `a-z` (either case) for the
//! values 10 to 35. A single leading `-` marks a negative numeral.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::RadixError;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

fn check_base(base: u32) -> Result<(), RadixError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(RadixError::UnsupportedBase(base))
    }
}

/// Interpret `value` as a base-`base` numeral.
///
/// Every character is checked against the base; the error reports the
/// byte offset of the first offending character within `value`.
pub fn decode(value: &str, base: u32) -> Result<BigInt, RadixError> {
    check_base(base)?;

    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if digits.is_empty() {
        return Err(RadixError::Empty);
    }

    let offset = value.len() - digits.len();
    let mut result = BigInt::zero();
    for (position, c) in digits.char_indices() {
        let digit = c.to_digit(base).ok_or(RadixError::InvalidDigit {
            digit: c,
            position: offset + position,
            base,
        })?;
        result = result * base + digit;
    }

    Ok(if negative { -result } else { result })
}

/// Render `value` in base `base` using lowercase digits.
pub fn encode(value: &BigInt, base: u32) -> Result<String, RadixError> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod decode_tests {
        use super::*;

        #[test]
        fn decodes_small_numerals() {
            assert_eq!(decode("4", 10).unwrap(), BigInt::from(4));
            assert_eq!(decode("111", 2).unwrap(), BigInt::from(7));
            assert_eq!(decode("213", 4).unwrap(), BigInt::from(39));
        }

        #[test]
        fn letters_are_case_insensitive() {
            assert_eq!(decode("fF", 16).unwrap(), BigInt::from(255));
            assert_eq!(decode("Zz", 36).unwrap(), BigInt::from(35 * 36 + 35));
        }

        #[test]
        fn decodes_values_past_u64() {
            let value = decode("2122212201122002221120200210011020220200", 3)
                .unwrap();
            assert_eq!(value.to_string(), "10788619898233492461");
        }

        #[test]
        fn leading_zeros_are_ignored() {
            assert_eq!(decode("000101", 2).unwrap(), BigInt::from(5));
        }

        #[test]
        fn negative_numerals() {
            assert_eq!(decode("-ff", 16).unwrap(), BigInt::from(-255));
        }

        #[test]
        fn rejects_digit_outside_base() {
            assert_eq!(
                decode("1021", 2),
                Err(RadixError::InvalidDigit {
                    digit: '2',
                    position: 2,
                    base: 2,
                })
            );
        }

        #[test]
        fn position_accounts_for_sign() {
            assert_eq!(
                decode("-7g", 16),
                Err(RadixError::InvalidDigit {
                    digit: 'g',
                    position: 2,
                    base: 16,
                })
            );
        }

        #[test]
        fn rejects_non_alphanumeric_characters() {
            assert!(matches!(
                decode("12 3", 10),
                Err(RadixError::InvalidDigit { digit: ' ', .. })
            ));
            assert!(matches!(
                decode("+1", 10),
                Err(RadixError::InvalidDigit { digit: '+', position: 0, .. })
            ));
        }

        #[test]
        fn rejects_empty_numerals() {
            assert_eq!(decode("", 10), Err(RadixError::Empty));
            assert_eq!(decode("-", 10), Err(RadixError::Empty));
        }

        #[test]
        fn rejects_unsupported_bases() {
            assert_eq!(decode("1", 1), Err(RadixError::UnsupportedBase(1)));
            assert_eq!(decode("1", 37), Err(RadixError::UnsupportedBase(37)));
        }
    }

    mod encode_tests {
        use super::*;

        #[test]
        fn encodes_with_lowercase_digits() {
            assert_eq!(encode(&BigInt::from(255), 16).unwrap(), "ff");
            assert_eq!(encode(&BigInt::from(-7), 2).unwrap(), "-111");
            assert_eq!(encode(&BigInt::zero(), 36).unwrap(), "0");
        }

        #[test]
        fn rejects_unsupported_bases() {
            assert_eq!(
                encode(&BigInt::from(1), 0),
                Err(RadixError::UnsupportedBase(0))
            );
        }
    }

    mod round_trip_tests {
        use proptest::prelude::*;
        use test_strategy::proptest;

        use super::*;

        #[proptest]
        fn decode_inverts_encode(
            value: i128,
            #[strategy(MIN_BASE..=MAX_BASE)] base: u32,
        ) {
            let value = BigInt::from(value);
            let text = encode(&value, base).unwrap();
            prop_assert_eq!(decode(&text, base).unwrap(), value);
        }
    }
}
