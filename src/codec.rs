//! Base62 encoding of binary data
//!
//! The input bytes are read as one big-endian unsigned integer and written
//! out in radix 62. Because only the magnitude is encoded, leading zero
//! bytes do not survive a round trip:
//!
//! - `encode(&[])` and `encode(&[0, 0])` are both `"0"`
//! - `decode("0")` is the empty byte vector
//!
//! Any byte string without a leading zero byte round-trips exactly.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::alphabet::{self, BASE};
use crate::error::{Base62Error, ErrorCategory, ErrorKind, Result};

/// Encode bytes as a base62 string. Never returns an empty string.
pub fn encode(data: &[u8]) -> String {
    let magnitude = BigUint::from_bytes_be(data);
    // Most significant digit first; zero yields the single digit 0.
    magnitude
        .to_radix_be(BASE)
        .into_iter()
        .map(alphabet::symbol)
        .collect()
}

/// Decode a base62 string into the minimal big-endian byte form of its value.
///
/// The input must not contain whitespace; strip it first (see
/// [`crate::linewrap::unwrap`]).
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let digits = encoded
        .chars()
        .map(|c| {
            alphabet::digit_value(c).ok_or_else(|| {
                Base62Error::with_kind(
                    ErrorCategory::User,
                    ErrorKind::InvalidCharacter,
                    format!("invalid character in input: {:?}", c),
                )
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    let magnitude = BigUint::from_radix_be(&digits, BASE).ok_or_else(|| {
        Base62Error::with_kind(
            ErrorCategory::Internal,
            ErrorKind::InternalInvariant,
            "digit out of range after alphabet lookup",
        )
    })?;

    if magnitude.is_zero() {
        return Ok(Vec::new());
    }
    Ok(magnitude.to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bytes() {
        assert_eq!(encode(b""), "0");
    }

    #[test]
    fn test_zero_bytes_encode_to_zero() {
        assert_eq!(encode(&[0x00]), "0");
        assert_eq!(encode(&[0x00, 0x00, 0x00]), "0");
    }

    #[test]
    fn test_decode_zero_is_empty() {
        assert_eq!(decode("0").unwrap(), Vec::<u8>::new());
        assert_eq!(decode("000").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_empty_string() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_small_values() {
        assert_eq!(encode(&[1]), "1");
        assert_eq!(encode(&[61]), "z");
        assert_eq!(encode(&[62]), "10");
        assert_eq!(encode(&[0xFF]), "47");
        assert_eq!(decode("z").unwrap(), vec![61]);
        assert_eq!(decode("10").unwrap(), vec![62]);
        assert_eq!(decode("47").unwrap(), vec![0xFF]);
    }

    #[test]
    fn test_simple_string() {
        let encoded = encode(b"Hello, World!");
        assert_eq!(encoded, "1wJfrzvdbtXUOlUjUf");
        assert_eq!(decode(&encoded).unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_leading_zero_byte_is_lost() {
        let encoded = encode(&[0x00, 0x01]);
        assert_eq!(encoded, "1");
        assert_eq!(decode(&encoded).unwrap(), vec![0x01]);
    }

    #[test]
    fn test_trailing_zero_byte_is_kept() {
        // 0x0100 is 256, so nothing is dropped here.
        let encoded = encode(&[0x01, 0x00]);
        assert_eq!(encoded, "48");
        assert_eq!(decode(&encoded).unwrap(), vec![0x01, 0x00]);
    }

    #[test]
    fn test_all_byte_values() {
        // Skip the leading zero, which cannot round-trip.
        let bytes: Vec<u8> = (1..=255).collect();
        let encoded = encode(&bytes);
        assert!(encoded.bytes().all(|b| alphabet::ALPHABET.contains(&b)));
        assert_eq!(decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_large_data() {
        let bytes = vec![0x42u8; 10_000];
        let encoded = encode(&bytes);
        assert_eq!(decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_invalid_character() {
        let err = decode("AB!C").expect_err("expected invalid character error");
        assert_eq!(err.kind, Some(ErrorKind::InvalidCharacter));
        assert_eq!(err.category, ErrorCategory::User);
        assert!(err.to_string().contains('!'), "got: {}", err);
    }

    #[test]
    fn test_whitespace_is_not_stripped() {
        let err = decode("AB C").expect_err("expected invalid character error");
        assert_eq!(err.kind, Some(ErrorKind::InvalidCharacter));
        let err = decode("AB\nC").expect_err("expected invalid character error");
        assert_eq!(err.kind, Some(ErrorKind::InvalidCharacter));
    }

    #[test]
    fn test_non_ascii_character() {
        let err = decode("abc\u{e9}").expect_err("expected invalid character error");
        assert_eq!(err.kind, Some(ErrorKind::InvalidCharacter));
        assert!(err.to_string().contains('\u{e9}'));
    }
}
