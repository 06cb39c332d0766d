//! Configuration loading and validation for the demo binary.

use anyhow::{Context, Result};
use hsub::MIN_VERIFY_DIGITS;
use serde::Deserialize;

/// Validated demo configuration, read from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Shared secret the demo tokens are built from.
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Byte length of the random IV.
    #[serde(default = "default_iv_len")]
    pub iv_len: usize,

    /// Number of hex digits kept in each token.
    #[serde(default = "default_trim_digits")]
    pub trim_digits: usize,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_secret() -> String {
    "Pass phrase".into()
}
fn default_iv_len() -> usize {
    hsub::IV_LEN
}
fn default_trim_digits() -> usize {
    hsub::TRIM_DIGITS
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build hsub-demo configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise hsub-demo configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.iv_len == 0 {
            anyhow::bail!("IV_LEN must be non-zero");
        }
        Ok(())
    }

    /// True when `trim_digits` is below the verification floor, a
    /// configuration in which no token can ever verify.
    pub fn verification_disabled(&self) -> bool {
        self.trim_digits < MIN_VERIFY_DIGITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(default_secret(), "Pass phrase");
        assert_eq!(default_iv_len(), 8);
        assert_eq!(default_trim_digits(), 48);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_zero_iv_len() {
        let cfg = Config {
            secret: "Pass phrase".into(),
            iv_len: 0,
            trim_digits: 48,
            log_level: "info".into(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        let cfg = Config {
            secret: default_secret(),
            iv_len: default_iv_len(),
            trim_digits: default_trim_digits(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_ok());
        assert!(!cfg.verification_disabled());
    }

    #[test]
    fn short_trim_flags_verification_as_disabled() {
        let cfg = Config {
            secret: default_secret(),
            iv_len: default_iv_len(),
            trim_digits: 40,
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_ok());
        assert!(cfg.verification_disabled());
    }
}
