//! `hsub-demo` — self-test binary entry point.
//!
//! Mirrors the classic hSub smoke test: generate a token for a passphrase,
//! show the IV it carries, verify it with the right secret, then show that
//! a wrong secret does not match.

mod config;
mod telemetry;

use anyhow::{Context, Result};
use hsub::{HsubConfig, HsubEngine};
use tracing::{info, warn};

fn main() -> Result<()> {
    let cfg = config::Config::from_env().map_err(|e| {
        eprintln!("ERROR: hsub-demo configuration invalid: {e}");
        e
    })?;

    telemetry::init(&cfg.log_level)?;

    if cfg.verification_disabled() {
        warn!(
            trim_digits = cfg.trim_digits,
            "trim_digits is below the 48-digit verification floor; \
             no token will ever verify with this configuration"
        );
    }

    let engine = HsubEngine::new(HsubConfig {
        iv_len: cfg.iv_len,
        trim_digits: cfg.trim_digits,
    });

    let secret = cfg.secret.as_bytes();
    let token = engine
        .generate(secret)
        .context("failed to generate hsub token")?;
    let iv = engine
        .extract_iv(&token)
        .context("generated token carries no decodable IV (trim_digits too small?)")?;

    info!(secret = %cfg.secret, "passphrase");
    info!(iv = %hex::encode(&iv), "extracted IV");
    info!(token = %token, len = token.len(), "generated hsub");
    info!(
        matched = engine.verify(secret, &token),
        "verify with correct secret (expect true)"
    );
    info!(
        matched = engine.verify(b"false", &token),
        "verify with wrong secret (expect false)"
    );

    Ok(())
}
