//! Input Validation
//!
//! Shape validation for the crate's entry points. Rejects malformed values
//! (non-finite bounds, unsupported precision, oversized requests) before
//! any engine runs. The engines still re-validate domain invariants
//! themselves; this layer only guards the outer surface.

use crate::random::DoubleRequest;
use crate::text::{CharacterSet, StringRequest};

/// Bounds for validated inputs
pub mod limits {
    /// Minimum decimal precision for double sampling
    pub const MIN_FRACTION_DIGITS: u8 = 1;
    /// Maximum decimal precision for double sampling (an f64 carries just
    /// under 16 significant decimal digits)
    pub const MAX_FRACTION_DIGITS: u8 = 15;
    /// Maximum generated string length
    pub const MAX_STRING_LENGTH: usize = 1024 * 1024;
    /// Maximum custom character set size, in code points
    pub const MAX_CHARSET_SIZE: usize = 4096;
}

/// Validation error types
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// A numeric bound is NaN or infinite
    NonFiniteBound {
        /// The offending value
        value: f64,
    },
    /// Fraction digits outside the supported range
    FractionDigitsOutOfRange {
        /// Minimum accepted
        min: u8,
        /// Maximum accepted
        max: u8,
        /// Actual value
        actual: u8,
    },
    /// Requested length exceeds the supported maximum
    LengthTooLarge {
        /// Maximum accepted
        max: usize,
        /// Actual value
        actual: usize,
    },
    /// Character set exceeds the supported maximum size
    CharsetTooLarge {
        /// Maximum accepted
        max: usize,
        /// Actual size
        actual: usize,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteBound { value } => {
                write!(f, "Bound must be finite, got {}", value)
            }
            Self::FractionDigitsOutOfRange { min, max, actual } => {
                write!(f, "Fraction digits must lie in {}..={}, got {}", min, max, actual)
            }
            Self::LengthTooLarge { max, actual } => {
                write!(f, "Length too large: at most {} supported, got {}", max, actual)
            }
            Self::CharsetTooLarge { max, actual } => {
                write!(f, "Character set too large: at most {} code points supported, got {}", max, actual)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a single numeric bound
pub fn validate_bound(value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteBound { value });
    }

    Ok(())
}

/// Validate a decimal precision
pub fn validate_fraction_digits(digits: u8) -> ValidationResult<()> {
    if digits < limits::MIN_FRACTION_DIGITS || digits > limits::MAX_FRACTION_DIGITS {
        return Err(ValidationError::FractionDigitsOutOfRange {
            min: limits::MIN_FRACTION_DIGITS,
            max: limits::MAX_FRACTION_DIGITS,
            actual: digits,
        });
    }

    Ok(())
}

/// Validate a double sampling request (finite bounds, supported precision)
pub fn validate_double_request(request: &DoubleRequest) -> ValidationResult<()> {
    validate_bound(request.lower)?;
    validate_bound(request.upper)?;
    validate_fraction_digits(request.fraction_digits)
}

/// Validate a string generation request (length and character-set caps)
pub fn validate_string_request(request: &StringRequest) -> ValidationResult<()> {
    if request.length > limits::MAX_STRING_LENGTH {
        return Err(ValidationError::LengthTooLarge {
            max: limits::MAX_STRING_LENGTH,
            actual: request.length,
        });
    }

    if let CharacterSet::Custom(symbols) = &request.charset {
        let count = symbols.chars().count();
        if count > limits::MAX_CHARSET_SIZE {
            return Err(ValidationError::CharsetTooLarge {
                max: limits::MAX_CHARSET_SIZE,
                actual: count,
            });
        }
    }

    Ok(())
}
