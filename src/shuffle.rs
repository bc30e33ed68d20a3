//! Secure Sequence Shuffling
//!
//! Subrange-aware Fisher-Yates permutation driven by the unbiased sampling
//! engine. Offers a destructive form that permutes through the caller's
//! slice and a non-destructive form that returns a shuffled copy, plus an
//! anti-identity guarantee that forces the output to differ from the input.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};
use crate::random::{IntegerRequest, RandomEngine, SecureRandom};

/// Options controlling a shuffle
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ShuffleOptions {
    /// Guarantee the full output differs from the full input.
    ///
    /// Requires at least two elements. The corrective swap excludes the
    /// identity permutation from the output space, a deliberate statistical
    /// bias; unsuitable where every permutation must stay equally likely.
    pub prevent_identical: bool,
    /// First index of the shuffled subrange
    pub start: usize,
    /// One past the last index of the shuffled subrange; `None` means the
    /// full sequence length
    pub end: Option<usize>,
}

impl ShuffleOptions {
    /// Shuffle only `start..end`, leaving everything else in place
    pub fn subrange(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
            ..Self::default()
        }
    }

    /// Request the anti-identity guarantee
    pub fn preventing_identical(mut self) -> Self {
        self.prevent_identical = true;
        self
    }
}

/// Secure Shuffle Engine
///
/// Classic Fisher-Yates restricted to a subrange, with index draws routed
/// through [`RandomEngine`] so pivots stay unbiased. Elements outside the
/// subrange are never touched by the permutation itself; the anti-identity
/// corrective swap, when triggered, exchanges the first and last elements
/// of the whole sequence.
pub struct ShuffleEngine<R = SecureRandom> {
    random: RandomEngine<R>,
}

impl ShuffleEngine<SecureRandom> {
    /// Create an engine backed by the operating system CSPRNG
    pub fn secure() -> Result<Self> {
        Ok(Self {
            random: RandomEngine::secure()?,
        })
    }
}

impl<R: RngCore + CryptoRng> ShuffleEngine<R> {
    /// Create an engine over a caller-supplied secure source
    pub fn new(rng: R) -> Self {
        Self {
            random: RandomEngine::new(rng),
        }
    }

    /// Access the underlying sampling engine
    pub fn random_mut(&mut self) -> &mut RandomEngine<R> {
        &mut self.random
    }

    /// Shuffle the caller's slice in place (the destructive form)
    ///
    /// # Errors
    /// [`DomainError`] when the subrange falls outside the sequence, holds
    /// fewer than two elements, or the sequence is too short for
    /// `prevent_identical`.
    pub fn shuffle_in_place<T: Clone + PartialEq>(
        &mut self,
        items: &mut [T],
        options: &ShuffleOptions,
    ) -> Result<()> {
        let (start, end) = resolve_range(items.len(), options)?;
        if end - start < 2 {
            return Err(DomainError::EmptyShuffleRange { start, end }.into());
        }
        check_anti_identity_length(items.len(), options)?;

        let snapshot = if options.prevent_identical {
            Some(items.to_vec())
        } else {
            None
        };

        self.permute(items, start, end)?;

        if let Some(before) = snapshot {
            if items.iter().eq(before.iter()) {
                let last = items.len() - 1;
                items.swap(0, last);
            }
        }

        Ok(())
    }

    /// Return a shuffled copy, leaving the input untouched
    ///
    /// A subrange with fewer than two elements is allowed here; the copy
    /// simply comes back unpermuted (and anti-identity, if requested, still
    /// applies to the whole sequence).
    pub fn shuffle_copy<T: Clone + PartialEq>(
        &mut self,
        items: &[T],
        options: &ShuffleOptions,
    ) -> Result<Vec<T>> {
        let (start, end) = resolve_range(items.len(), options)?;
        check_anti_identity_length(items.len(), options)?;

        let mut output = items.to_vec();
        self.permute(&mut output, start, end)?;

        if options.prevent_identical && output.iter().eq(items.iter()) {
            let last = output.len() - 1;
            output.swap(0, last);
        }

        Ok(output)
    }

    /// Fisher-Yates over `start..end`: walk the subrange from the top,
    /// swapping each position with a uniformly drawn earlier-or-equal one.
    fn permute<T>(&mut self, items: &mut [T], start: usize, end: usize) -> Result<()> {
        for i in (start + 1..end).rev() {
            let pivot = IntegerRequest::new(start as i64, i as i64);
            let j = self.random.sample_integer(&pivot)? as usize;
            items.swap(i, j);
        }

        Ok(())
    }
}

fn resolve_range(len: usize, options: &ShuffleOptions) -> Result<(usize, usize)> {
    let end = options.end.unwrap_or(len);
    if options.start > end || end > len {
        return Err(DomainError::SubrangeOutOfBounds {
            start: options.start,
            end,
            len,
        }
        .into());
    }

    Ok((options.start, end))
}

fn check_anti_identity_length(len: usize, options: &ShuffleOptions) -> Result<()> {
    if options.prevent_identical && len < 2 {
        return Err(DomainError::SequenceTooShort {
            required: 2,
            actual: len,
        }
        .into());
    }

    Ok(())
}
