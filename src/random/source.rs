//! Secure Random Byte Source
//!
//! Wraps the operating system's cryptographically secure RNG. Engines accept
//! any `RngCore + CryptoRng` implementation; this is the one they bind to by
//! default.

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;

/// Secure Random Byte Source
///
/// Wraps the operating system's cryptographically secure RNG and implements
/// [`RngCore`] + [`CryptoRng`] so it plugs directly into the engines.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecureRandom {
    #[zeroize(skip)]
    inner: rand_core::OsRng,
}

impl SecureRandom {
    /// Create a new secure source
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: rand_core::OsRng,
        })
    }

    /// Generate a random byte array
    ///
    /// # Returns
    /// A fixed-size array of random bytes
    pub fn gen_bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut arr = [0u8; N];
        self.fill_bytes(&mut arr);
        arr
    }

    /// Draw one fair boolean from a single byte's parity
    pub fn coin_flip(&mut self) -> bool {
        let [byte] = self.gen_bytes::<1>();
        byte & 1 != 0
    }
}

impl RngCore for SecureRandom {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRandom {}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::new().expect("Failed to create SecureRandom")
    }
}
