//! Unbiased Sampling Engine
//!
//! Maps raw CSPRNG bytes onto arbitrary integer and double domains without
//! modulo bias. Integer requests assemble the minimum number of random
//! bytes into a big-endian word and reject the truncation tail before
//! reducing; double requests map a 64-bit draw onto `[0,1)`, scale, round
//! to the requested decimal precision and re-check exclusions with an
//! epsilon comparison. Every retry loop is bounded by
//! [`MAX_DRAW_ATTEMPTS`](super::MAX_DRAW_ATTEMPTS).

use log::warn;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::{SecureRandom, MAX_DRAW_ATTEMPTS};
use crate::error::{DomainError, ExhaustionError, Result};
use crate::validation;

/// Exactly 2^64, the denominator mapping a u64 draw onto `[0,1)`
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Boundary exclusion mode for a sampling request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exclusion {
    /// Both bounds are admissible
    #[default]
    None,
    /// The lower bound is excluded
    Lower,
    /// The upper bound is excluded
    Upper,
    /// Both bounds are excluded
    Both,
}

impl Exclusion {
    /// Whether the lower bound is excluded
    pub fn excludes_lower(self) -> bool {
        matches!(self, Self::Lower | Self::Both)
    }

    /// Whether the upper bound is excluded
    pub fn excludes_upper(self) -> bool {
        matches!(self, Self::Upper | Self::Both)
    }
}

impl std::fmt::Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "no bounds excluded"),
            Self::Lower => write!(f, "the lower bound excluded"),
            Self::Upper => write!(f, "the upper bound excluded"),
            Self::Both => write!(f, "both bounds excluded"),
        }
    }
}

/// A request for one uniformly distributed integer
///
/// Bounds are inclusive unless excluded. Reversed bounds are normalized,
/// not rejected.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct IntegerRequest {
    /// Lower bound
    pub lower: i64,
    /// Upper bound
    pub upper: i64,
    /// Which bounds are excluded from the admissible set
    pub exclusion: Exclusion,
}

impl Default for IntegerRequest {
    fn default() -> Self {
        Self {
            lower: 0,
            upper: 1,
            exclusion: Exclusion::None,
        }
    }
}

impl IntegerRequest {
    /// Request a value from `lower..=upper` with no exclusions
    pub fn new(lower: i64, upper: i64) -> Self {
        Self {
            lower,
            upper,
            exclusion: Exclusion::None,
        }
    }

    /// Set the exclusion mode
    pub fn with_exclusion(mut self, exclusion: Exclusion) -> Self {
        self.exclusion = exclusion;
        self
    }
}

/// A request for one uniformly distributed double
///
/// Bounds are inclusive unless excluded; results are rounded to
/// `fraction_digits` decimal places (valid range 1..=15). Reversed bounds
/// are normalized, not rejected.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DoubleRequest {
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
    /// Which bounds are excluded from the admissible set
    pub exclusion: Exclusion,
    /// Decimal places kept in the result
    pub fraction_digits: u8,
}

impl Default for DoubleRequest {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
            exclusion: Exclusion::None,
            fraction_digits: 3,
        }
    }
}

impl DoubleRequest {
    /// Request a value from `lower..=upper` with no exclusions
    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            ..Self::default()
        }
    }

    /// Set the exclusion mode
    pub fn with_exclusion(mut self, exclusion: Exclusion) -> Self {
        self.exclusion = exclusion;
        self
    }

    /// Set the decimal precision of the result
    pub fn with_fraction_digits(mut self, digits: u8) -> Self {
        self.fraction_digits = digits;
        self
    }
}

/// A sampling request, integer or double
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum RandomRequest {
    /// Sample an integer
    Integer(IntegerRequest),
    /// Sample a double
    Double(DoubleRequest),
}

impl Default for RandomRequest {
    fn default() -> Self {
        Self::Integer(IntegerRequest::default())
    }
}

/// The outcome of a sampling request
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// An integer draw
    Integer(i64),
    /// A double draw
    Double(f64),
}

impl Number {
    /// The drawn value as an f64, whichever kind it is
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(v) => v as f64,
            Self::Double(v) => v,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
        }
    }
}

/// Unbiased Random Engine
///
/// Draws from a caller-supplied cryptographically secure source and maps
/// the raw bytes onto the requested domain. All draws are synchronous and
/// no state is carried between calls beyond the source itself.
pub struct RandomEngine<R = SecureRandom> {
    rng: R,
}

impl RandomEngine<SecureRandom> {
    /// Create an engine backed by the operating system CSPRNG
    pub fn secure() -> Result<Self> {
        Ok(Self {
            rng: SecureRandom::new()?,
        })
    }
}

impl<R: RngCore + CryptoRng> RandomEngine<R> {
    /// Create an engine over a caller-supplied secure source
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Sample one number
    ///
    /// # Errors
    /// [`DomainError`] when the bounds, after applying the exclusion mode,
    /// describe an empty domain; [`ExhaustionError`](crate::ExhaustionError)
    /// when no admissible value appears within the retry budget.
    pub fn sample(&mut self, request: &RandomRequest) -> Result<Number> {
        match request {
            RandomRequest::Integer(req) => self.sample_integer(req).map(Number::Integer),
            RandomRequest::Double(req) => self.sample_double(req).map(Number::Double),
        }
    }

    /// Sample one unbiased integer
    ///
    /// Draws the minimum number of bytes whose big-endian value covers the
    /// range, rejects draws in the truncation tail, then reduces. Rejection
    /// keeps every residue class equally likely.
    pub fn sample_integer(&mut self, request: &IntegerRequest) -> Result<i64> {
        let (lo, hi) = if request.lower <= request.upper {
            (request.lower, request.upper)
        } else {
            (request.upper, request.lower)
        };
        let exclusion = request.exclusion;

        let empty = || DomainError::EmptyIntegerRange {
            lower: request.lower,
            upper: request.upper,
            exclusion,
        };

        let min = if exclusion.excludes_lower() {
            lo.checked_add(1).ok_or_else(empty)?
        } else {
            lo
        };
        let max = if exclusion.excludes_upper() {
            hi.checked_sub(1).ok_or_else(empty)?
        } else {
            hi
        };

        if min > max {
            return Err(empty().into());
        }
        if min == max {
            return Ok(min);
        }

        // The full i64 domain spans 2^64 values, so widen to u128.
        let range = max.wrapping_sub(min) as u64 as u128 + 1;
        let mut byte_len = 1usize;
        let mut cap: u128 = 256;
        while cap < range {
            cap <<= 8;
            byte_len += 1;
        }
        let tail_start = (cap / range) * range;

        for _ in 0..MAX_DRAW_ATTEMPTS {
            let mut buf = Zeroizing::new([0u8; 8]);
            self.rng.fill_bytes(&mut buf[8 - byte_len..]);
            let value = u64::from_be_bytes(*buf) as u128;

            if value >= tail_start {
                // truncation tail, reducing it would skew the distribution
                continue;
            }

            let candidate = min.wrapping_add((value % range) as u64 as i64);

            // Exclusion is already folded into the bounds; re-check with
            // exact equality anyway before handing the value out.
            if exclusion.excludes_lower() && candidate == lo {
                continue;
            }
            if exclusion.excludes_upper() && candidate == hi {
                continue;
            }

            return Ok(candidate);
        }

        let domain = format!("integer {}..={} ({})", request.lower, request.upper, exclusion);
        warn!("integer sampling exhausted: {}", domain);
        Err(ExhaustionError {
            attempts: MAX_DRAW_ATTEMPTS,
            domain,
        }
        .into())
    }

    /// Sample one double, rounded to the requested decimal precision
    ///
    /// A 64-bit draw divided by 2^64 gives a uniform value in `[0,1)`; the
    /// float conversion can land on exactly 1.0, which is redrawn. After
    /// scaling and rounding, excluded bounds are re-checked with an epsilon
    /// comparison since rounding can produce values indistinguishable from
    /// a boundary.
    pub fn sample_double(&mut self, request: &DoubleRequest) -> Result<f64> {
        validation::validate_double_request(request)?;

        let (min, max) = if request.lower <= request.upper {
            (request.lower, request.upper)
        } else {
            (request.upper, request.lower)
        };
        let exclusion = request.exclusion;

        if min == max {
            if exclusion == Exclusion::Both {
                return Err(DomainError::DegenerateOpenInterval { bound: min }.into());
            }
            return Ok(min);
        }

        let factor = 10f64.powi(i32::from(request.fraction_digits));

        for _ in 0..MAX_DRAW_ATTEMPTS {
            let mut buf = [0u8; 8];
            self.rng.fill_bytes(&mut buf);
            let unit = u64::from_be_bytes(buf) as f64 / TWO_POW_64;
            if unit >= 1.0 {
                continue;
            }

            let value = ((min + unit * (max - min)) * factor).round() / factor;

            if exclusion.excludes_lower() && (value - min).abs() < f64::EPSILON {
                continue;
            }
            if exclusion.excludes_upper() && (max - value).abs() < f64::EPSILON {
                continue;
            }
            if value < min || value > max {
                // rounding overshot the interval
                continue;
            }

            return Ok(value);
        }

        let domain = format!("double {}..={} ({})", request.lower, request.upper, exclusion);
        warn!("double sampling exhausted: {}", domain);
        Err(ExhaustionError {
            attempts: MAX_DRAW_ATTEMPTS,
            domain,
        }
        .into())
    }
}
