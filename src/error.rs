//! Error types for fairdraw
//!
//! Three failure classes are kept apart so callers can tell "bad input"
//! from "valid input, unsatisfiable domain" from "exhausted retries":
//! [`ValidationError`] for malformed shapes, [`DomainError`] for empty or
//! contradictory domains, and [`ExhaustionError`] for retry budgets that
//! ran dry.

use thiserror::Error;

use crate::random::Exclusion;
use crate::validation::ValidationError;

/// Domain Error Type
///
/// A well-formed request whose domain turned out to be empty or
/// contradictory. Recoverable by the caller; never retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// No integer survives the requested exclusions
    #[error("no integer in {lower}..={upper} with {exclusion}")]
    EmptyIntegerRange {
        /// Lower bound as requested
        lower: i64,
        /// Upper bound as requested
        upper: i64,
        /// Exclusion mode as requested
        exclusion: Exclusion,
    },

    /// Both bounds of a zero-width double interval are excluded
    #[error("no value lies strictly between {bound} and itself")]
    DegenerateOpenInterval {
        /// The coinciding bound
        bound: f64,
    },

    /// Shuffle subrange falls outside the sequence
    #[error("shuffle range {start}..{end} is out of bounds for length {len}")]
    SubrangeOutOfBounds {
        /// First index of the subrange
        start: usize,
        /// One past the last index of the subrange
        end: usize,
        /// Sequence length
        len: usize,
    },

    /// Sequence too short for the anti-identity guarantee
    #[error("sequence of length {actual} cannot differ from a reordering of itself (need at least {required})")]
    SequenceTooShort {
        /// Minimum length required
        required: usize,
        /// Actual length
        actual: usize,
    },

    /// Destructive shuffle over fewer than two elements
    #[error("destructive shuffle range {start}..{end} holds fewer than two elements")]
    EmptyShuffleRange {
        /// First index of the subrange
        start: usize,
        /// One past the last index of the subrange
        end: usize,
    },

    /// Custom character set repeats a code point
    #[error("character set repeats {duplicate:?}")]
    DuplicateCharacter {
        /// The repeated code point
        duplicate: char,
    },

    /// Too few unique symbols for the requested output
    #[error("character set offers {actual} unique symbols, need at least {required}")]
    CharsetTooSmall {
        /// Minimum unique symbols required
        required: usize,
        /// Unique symbols available
        actual: usize,
    },

    /// More distinct characters requested than the set can provide
    #[error("cannot draw {requested} distinct characters from {available} unique symbols")]
    NotEnoughUniqueCharacters {
        /// Characters requested
        requested: usize,
        /// Unique symbols available
        available: usize,
    },
}

/// Exhaustion Error Type
///
/// The retry budget ran out before an admissible value appeared. Signals a
/// domain too narrow for practical sampling (for doubles, an interval far
/// smaller than the requested decimal resolution).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("no admissible value after {attempts} draws from {domain}")]
pub struct ExhaustionError {
    /// Draws performed before giving up
    pub attempts: usize,
    /// Description of the requested domain
    pub domain: String,
}

/// Crate Error Type
///
/// Aggregates the three failure classes behind one `Result` for the public
/// operations.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Input failed shape validation before any engine ran
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Request describes an empty or contradictory domain
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Retry budget exhausted while sampling
    #[error("sampling gave up: {0}")]
    Exhausted(#[from] ExhaustionError),
}

/// Result type for fairdraw operations
pub type Result<T> = std::result::Result<T, Error>;
