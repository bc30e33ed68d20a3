//! Secure Random Number Generation
//!
//! The CSPRNG byte source and the unbiased sampling engine built on it.
//! Every downstream component draws its randomness through this module.

pub mod sampler;
pub mod source;

pub use sampler::*;
pub use source::*;

/// Upper bound on redraws for any rejection or exclusion retry loop
pub const MAX_DRAW_ATTEMPTS: usize = 30;
