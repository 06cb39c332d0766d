//! hSub token construction and verification.
//!
//! All operations are pure functions of their inputs; the engine holds no
//! mutable state and is safe to share across threads. Only
//! [`HsubEngine::generate`] touches the outside world, and only to draw a
//! fresh IV from the entropy source.

use sha2::{Digest, Sha256};

use crate::entropy::{EntropySource, OsEntropy};
use crate::error::HsubError;

/// Byte length of the default IV (8 bytes = 64 bits).
pub const IV_LEN: usize = 8;

/// Byte length of the SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// Default number of hex digits kept in a token.
///
/// 48 digits = 192 bits: the full 64-bit IV plus 128 bits of digest. The
/// untruncated encoding would be 80 digits (IV + full SHA-256).
pub const TRIM_DIGITS: usize = 48;

/// Smallest candidate length [`HsubEngine::verify`] will consider.
///
/// 48 digits is the minimum interoperable token length. The bound is
/// absolute, not derived from the engine's own configuration.
pub const MIN_VERIFY_DIGITS: usize = 48;

/// Immutable per-engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsubConfig {
    /// Byte length of IVs drawn by [`HsubEngine::generate`].
    pub iv_len: usize,

    /// Number of hex digits kept when a token is built. Values above
    /// `(iv_len + 32) * 2` keep the whole encoding; no error is raised.
    pub trim_digits: usize,
}

impl Default for HsubConfig {
    fn default() -> Self {
        Self {
            iv_len: IV_LEN,
            trim_digits: TRIM_DIGITS,
        }
    }
}

/// The hSub engine: token construction and verification under one
/// [`HsubConfig`] and one [`EntropySource`].
///
/// Cheap to construct and to clone; holds no secret material and retains
/// nothing between calls.
#[derive(Debug, Clone, Default)]
pub struct HsubEngine<R = OsEntropy> {
    config: HsubConfig,
    entropy: R,
}

impl HsubEngine<OsEntropy> {
    /// Create an engine backed by the OS CSPRNG.
    pub fn new(config: HsubConfig) -> Self {
        Self::with_entropy(config, OsEntropy)
    }
}

impl<R: EntropySource> HsubEngine<R> {
    /// Create an engine with an explicit entropy source.
    ///
    /// Production code wants [`HsubEngine::new`]; this form exists so tests
    /// can inject a deterministic source.
    pub fn with_entropy(config: HsubConfig, entropy: R) -> Self {
        Self { config, entropy }
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> HsubConfig {
        self.config
    }

    /// Build a token for `secret` under a fresh random IV.
    ///
    /// Each call draws `iv_len` bytes from the entropy source, so repeated
    /// tokens for the same secret are unlinkable.
    ///
    /// # Errors
    ///
    /// Returns [`HsubError::Entropy`] if the random source fails. This is
    /// the only fallible path in the crate.
    pub fn generate(&self, secret: &[u8]) -> Result<String, HsubError> {
        let mut iv = vec![0u8; self.config.iv_len];
        self.entropy.fill(&mut iv)?;
        Ok(self.generate_with_iv(secret, &iv))
    }

    /// Build a token for `secret` under a caller-supplied IV.
    ///
    /// The token is the lowercase hex encoding of
    /// `iv || SHA256(iv || secret)`, truncated to `trim_digits` characters
    /// (the whole encoding if it is shorter than that).
    ///
    /// `iv` is used verbatim at whatever length it has; supply exactly
    /// `iv_len` bytes for tokens that round-trip through
    /// [`HsubEngine::extract_iv`]. Deterministic given identical inputs.
    pub fn generate_with_iv(&self, secret: &[u8], iv: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(iv);
        hasher.update(secret);
        let digest = hasher.finalize();

        let mut token = String::with_capacity((iv.len() + DIGEST_LEN) * 2);
        token.push_str(&hex::encode(iv));
        token.push_str(&hex::encode(digest));
        token.truncate(self.config.trim_digits);
        token
    }

    /// Check whether `candidate` was built from `secret`.
    ///
    /// Candidates are arbitrary strings — most message subjects are not
    /// hSubs at all — so every malformed shape comes back as a plain
    /// `false`, indistinguishable from a mismatch:
    ///
    /// - length below [`MIN_VERIFY_DIGITS`] or above `trim_digits`,
    /// - a non-hex IV prefix,
    /// - anything that fails exact comparison with the recomputed token.
    ///
    /// Note that configuring `trim_digits` below 48 empties the accepted
    /// length range entirely, so no candidate can ever verify. The 48-digit
    /// floor is kept absolute regardless of configuration.
    pub fn verify(&self, secret: &[u8], candidate: &str) -> bool {
        let len = candidate.len();
        if len < MIN_VERIFY_DIGITS || len > self.config.trim_digits {
            return false;
        }
        let Some(iv) = self.extract_iv(candidate) else {
            return false;
        };
        // No partial credit: the recomputed token must match exactly.
        self.generate_with_iv(secret, &iv) == candidate
    }

    /// Decode the IV carried in the first `iv_len * 2` characters of a
    /// token.
    ///
    /// Returns `None` if the token is shorter than that or the prefix is
    /// not valid hexadecimal. Never panics, whatever bytes the caller found
    /// in a Subject field.
    pub fn extract_iv(&self, token: &str) -> Option<Vec<u8>> {
        let digits = self.config.iv_len * 2;
        // `get` rather than slicing: a multi-byte character straddling the
        // boundary must yield None, not a panic.
        let prefix = token.get(..digits)?;
        hex::decode(prefix).ok()
    }
}
