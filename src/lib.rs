//! Fairdraw - Cryptographically Secure Sampling Toolkit
//!
//! Unbiased random numbers, permutations and strings, drawn from the
//! operating system CSPRNG.
//!
//! # Features
//! - Integer and double sampling over arbitrary bounds with boundary
//!   exclusion, free of modulo bias (rejection sampling)
//! - Subrange-aware Fisher-Yates shuffling, in place or copying, with an
//!   optional anti-identity guarantee
//! - Random strings over named or custom character sets, with or without
//!   repeated characters
//! - Entropy estimation for string configurations
//!
//! The crate-level functions below draw a fresh [`SecureRandom`] per call
//! and retain nothing. Callers who hold their own `RngCore + CryptoRng`
//! source can use the engines directly.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

// System Modules
pub mod entropy;
pub mod error;
pub mod random;
pub mod shuffle;
pub mod text;
pub mod validation;

// Re-exports
pub use entropy::entropy_bits;
pub use error::{DomainError, Error, ExhaustionError, Result};
pub use random::*;
pub use shuffle::{ShuffleEngine, ShuffleOptions};
pub use text::{CharacterSet, StringEngine, StringRequest};
pub use validation::ValidationError;

/// Crate version
pub const VERSION: &str = "0.1.0";

/// Sample one number from the operating system CSPRNG
///
/// # Errors
/// [`ValidationError`] on malformed shapes, [`DomainError`] on empty
/// domains, [`ExhaustionError`] when the retry budget runs out.
pub fn sample(request: &RandomRequest) -> Result<Number> {
    match request {
        RandomRequest::Integer(req) => sample_integer(req).map(Number::Integer),
        RandomRequest::Double(req) => sample_double(req).map(Number::Double),
    }
}

/// Sample one unbiased integer from the operating system CSPRNG
pub fn sample_integer(request: &IntegerRequest) -> Result<i64> {
    RandomEngine::secure()?.sample_integer(request)
}

/// Sample one double from the operating system CSPRNG
pub fn sample_double(request: &DoubleRequest) -> Result<f64> {
    validation::validate_double_request(request)?;
    RandomEngine::secure()?.sample_double(request)
}

/// Return a securely shuffled copy of `items`
pub fn shuffle<T: Clone + PartialEq>(items: &[T], options: &ShuffleOptions) -> Result<Vec<T>> {
    ShuffleEngine::secure()?.shuffle_copy(items, options)
}

/// Securely shuffle `items` in place
pub fn shuffle_in_place<T: Clone + PartialEq>(
    items: &mut [T],
    options: &ShuffleOptions,
) -> Result<()> {
    ShuffleEngine::secure()?.shuffle_in_place(items, options)
}

/// Generate one random string from the operating system CSPRNG
pub fn generate_string(request: &StringRequest) -> Result<String> {
    if request.length == 0 {
        return Ok(String::new());
    }
    validation::validate_string_request(request)?;
    StringEngine::secure()?.generate(request)
}
