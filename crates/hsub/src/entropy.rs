//! Secure random source abstraction.
//!
//! The engine takes its randomness through [`EntropySource`] so that tests
//! can substitute a deterministic source while production code uses the OS
//! CSPRNG. Nothing in this crate may ever draw from a non-cryptographic
//! PRNG.

use rand::{rngs::OsRng, RngCore};

use crate::error::HsubError;

/// A cryptographically secure source of random bytes.
pub trait EntropySource {
    /// Fill `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HsubError::Entropy`] if the underlying source cannot
    /// produce bytes. Implementations must fail rather than degrade to
    /// predictable output.
    fn fill(&self, buf: &mut [u8]) -> Result<(), HsubError>;
}

/// The operating-system CSPRNG, via [`OsRng`].
///
/// Safe for concurrent use from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), HsubError> {
        OsRng.try_fill_bytes(buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_entropy_fills_the_whole_buffer() {
        // 32 zero bytes staying zero after a fill is a 2^-256 event.
        let mut buf = [0u8; 32];
        OsEntropy.fill(&mut buf).unwrap();
        assert_ne!(buf, [0u8; 32]);
    }

    #[test]
    fn consecutive_fills_differ() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
