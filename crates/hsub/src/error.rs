//! Error types for the hSub engine.

use thiserror::Error;

/// Errors produced by the hSub engine.
///
/// Malformed tokens are deliberately *not* represented here: candidate
/// tokens are arbitrary, often attacker- or noise-controlled strings
/// (ordinary message subjects included), so [`verify`] reports them as a
/// plain `false` and [`extract_iv`] as `None`. Callers cannot tell a
/// mismatch from a malformed token, and that is intentional.
///
/// [`verify`]: crate::HsubEngine::verify
/// [`extract_iv`]: crate::HsubEngine::extract_iv
#[derive(Debug, Error)]
pub enum HsubError {
    /// The OS secure random source failed to produce bytes.
    ///
    /// This is the one condition that propagates: silently falling back to
    /// weaker randomness would be a security defect.
    #[error("entropy source unavailable")]
    Entropy(#[from] rand::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_entropy_source() {
        let e = HsubError::Entropy(rand::Error::new("rng backend gone"));
        assert!(e.to_string().contains("entropy source unavailable"));
    }
}
