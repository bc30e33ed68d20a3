//! Random String Generation
//!
//! Samples characters from a named or custom character set. With
//! repetition, every position is an independent unbiased index draw;
//! without, the unique symbols are permuted once and the prefix taken, so
//! a distinct-character draw reuses the shuffle engine instead of
//! re-implementing sampling without replacement.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{DomainError, Result};
use crate::random::{IntegerRequest, SecureRandom};
use crate::shuffle::{ShuffleEngine, ShuffleOptions};

/// The digits 0-9
pub const NUMERIC: &str = "0123456789";

/// Lowercase latin letters
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase latin letters
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lower- and uppercase latin letters
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits plus lower- and uppercase latin letters
pub const ALPHANUMERIC: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase hexadecimal digits
pub const HEXADECIMAL: &str = "0123456789abcdef";

/// A character set for string generation
///
/// Named sets resolve through a fixed alphabet table; custom sets supply
/// their own alphabet and must not repeat a code point.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterSet {
    /// The digits 0-9
    Numeric,
    /// Lowercase latin letters
    Lowercase,
    /// Uppercase latin letters
    Uppercase,
    /// Lower- and uppercase latin letters
    Letters,
    /// Digits plus lower- and uppercase latin letters
    #[default]
    Alphanumeric,
    /// Lowercase hexadecimal digits
    Hexadecimal,
    /// A caller-supplied alphabet of unique code points
    Custom(String),
}

impl CharacterSet {
    /// The alphabet this set resolves to
    pub fn symbols(&self) -> &str {
        match self {
            Self::Numeric => NUMERIC,
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Letters => LETTERS,
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Hexadecimal => HEXADECIMAL,
            Self::Custom(symbols) => symbols,
        }
    }

    /// Resolve to the sequence of code points, rejecting duplicates.
    ///
    /// Named alphabets are duplicate-free by construction; only custom
    /// input needs the scan.
    pub(crate) fn resolved(&self) -> Result<Vec<char>> {
        let chars: Vec<char> = self.symbols().chars().collect();

        if let Self::Custom(_) = self {
            let mut seen = HashSet::with_capacity(chars.len());
            for &c in &chars {
                if !seen.insert(c) {
                    return Err(DomainError::DuplicateCharacter { duplicate: c }.into());
                }
            }
        }

        Ok(chars)
    }
}

/// A request for one random string
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StringRequest {
    /// Number of characters to produce
    pub length: usize,
    /// Character set to draw from
    pub charset: CharacterSet,
    /// Forbid repeated characters in the output
    pub no_repeat: bool,
}

impl Default for StringRequest {
    fn default() -> Self {
        Self {
            length: 16,
            charset: CharacterSet::Alphanumeric,
            no_repeat: false,
        }
    }
}

impl StringRequest {
    /// Request `length` characters from the default alphanumeric set
    pub fn new(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Set the character set
    pub fn with_charset(mut self, charset: CharacterSet) -> Self {
        self.charset = charset;
        self
    }

    /// Forbid repeated characters in the output
    pub fn without_repetition(mut self) -> Self {
        self.no_repeat = true;
        self
    }
}

/// Random String Engine
///
/// Builds strings from unbiased character draws. The no-repeat path runs
/// the unique symbols through a full-range non-destructive shuffle and
/// keeps the prefix, which yields a uniformly random selection of distinct
/// characters in random order.
pub struct StringEngine<R = SecureRandom> {
    shuffle: ShuffleEngine<R>,
}

impl StringEngine<SecureRandom> {
    /// Create an engine backed by the operating system CSPRNG
    pub fn secure() -> Result<Self> {
        Ok(Self {
            shuffle: ShuffleEngine::secure()?,
        })
    }
}

impl<R: RngCore + CryptoRng> StringEngine<R> {
    /// Create an engine over a caller-supplied secure source
    pub fn new(rng: R) -> Self {
        Self {
            shuffle: ShuffleEngine::new(rng),
        }
    }

    /// Generate one random string
    ///
    /// Length 0 yields the empty string before the character set is even
    /// looked at.
    ///
    /// # Errors
    /// [`DomainError`] when a custom set repeats a code point, the set has
    /// too few unique symbols for the requested length, or `no_repeat`
    /// asks for more distinct characters than the set holds.
    pub fn generate(&mut self, request: &StringRequest) -> Result<String> {
        if request.length == 0 {
            return Ok(String::new());
        }

        let symbols = request.charset.resolved()?;
        let required = if request.length > 1 { 2 } else { 1 };
        if symbols.len() < required {
            return Err(DomainError::CharsetTooSmall {
                required,
                actual: symbols.len(),
            }
            .into());
        }

        if request.no_repeat {
            if request.length > symbols.len() {
                return Err(DomainError::NotEnoughUniqueCharacters {
                    requested: request.length,
                    available: symbols.len(),
                }
                .into());
            }

            let permuted = self.shuffle.shuffle_copy(&symbols, &ShuffleOptions::default())?;
            return Ok(permuted.into_iter().take(request.length).collect());
        }

        let index = IntegerRequest::new(0, symbols.len() as i64 - 1);
        let mut out = String::with_capacity(request.length);
        for _ in 0..request.length {
            let i = self.shuffle.random_mut().sample_integer(&index)? as usize;
            out.push(symbols[i]);
        }

        Ok(out)
    }
}
