//! Entropy Estimation
//!
//! Pure information-content math for string requests; no randomness is
//! drawn. With repetition every position contributes `log2(n)` bits; a
//! no-repeat draw loses one symbol per position, giving the falling
//! factorial `log2(n) + log2(n-1) + ...`.

use crate::error::{DomainError, Result};
use crate::text::StringRequest;

/// Estimate the information content, in bits, of a string request
///
/// # Returns
/// `log2(n) * length` with repetition, `log2(n! / (n-length)!)` without,
/// where `n` is the number of unique symbols. Length 0 is always 0 bits.
///
/// # Errors
/// [`DomainError`] when the character set repeats a code point, is empty,
/// or a no-repeat request asks for more characters than the set holds.
pub fn entropy_bits(request: &StringRequest) -> Result<f64> {
    if request.length == 0 {
        return Ok(0.0);
    }

    let unique = request.charset.resolved()?.len();
    if unique == 0 {
        return Err(DomainError::CharsetTooSmall {
            required: 1,
            actual: 0,
        }
        .into());
    }

    if request.no_repeat {
        if request.length > unique {
            return Err(DomainError::NotEnoughUniqueCharacters {
                requested: request.length,
                available: unique,
            }
            .into());
        }

        let mut bits = 0.0;
        for i in 0..request.length {
            bits += ((unique - i) as f64).log2();
        }
        return Ok(bits);
    }

    Ok((unique as f64).log2() * request.length as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::text::CharacterSet;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_zero_length_is_zero_bits() {
        assert_eq!(entropy_bits(&StringRequest::new(0)).unwrap(), 0.0);

        let no_repeat = StringRequest::new(0).without_repetition();
        assert_eq!(entropy_bits(&no_repeat).unwrap(), 0.0);
    }

    #[test]
    fn test_repetition_closed_form() {
        // 16 alphanumeric characters: 62 symbols per position
        let request = StringRequest::new(16);
        let expected = 62f64.log2() * 16.0;

        assert!((entropy_bits(&request).unwrap() - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_falling_factorial() {
        let request = StringRequest::new(3)
            .with_charset(CharacterSet::Custom("abcde".into()))
            .without_repetition();
        let expected = 5f64.log2() + 4f64.log2() + 3f64.log2();

        assert!((entropy_bits(&request).unwrap() - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_monotone_in_length() {
        let mut previous = 0.0;
        for length in 1..=64 {
            let bits = entropy_bits(&StringRequest::new(length)).unwrap();
            assert!(bits > previous);
            previous = bits;
        }
    }

    #[test]
    fn test_no_repeat_overflow() {
        let request = StringRequest::new(11)
            .with_charset(CharacterSet::Numeric)
            .without_repetition();

        assert!(matches!(
            entropy_bits(&request),
            Err(Error::Domain(DomainError::NotEnoughUniqueCharacters { .. }))
        ));
    }

    #[test]
    fn test_duplicates_rejected() {
        let request = StringRequest::new(2).with_charset(CharacterSet::Custom("aba".into()));

        assert!(matches!(
            entropy_bits(&request),
            Err(Error::Domain(DomainError::DuplicateCharacter { .. }))
        ));
    }

    #[test]
    fn test_exhausting_the_set_matches_log_factorial() {
        // Drawing all ten digits without repetition is log2(10!)
        let request = StringRequest::new(10)
            .with_charset(CharacterSet::Numeric)
            .without_repetition();
        let expected: f64 = (1..=10).map(|n| (n as f64).log2()).sum();

        assert!((entropy_bits(&request).unwrap() - expected).abs() < TOLERANCE);
    }
}
