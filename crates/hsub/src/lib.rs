//! hSub (Hashed Subject) token construction and verification.
//!
//! An hSub lets two parties sharing a secret tag messages so the intended
//! recipient can recognise them, without the tag revealing the secret or a
//! static identifier. It is used in anonymous-messaging reply-block schemes
//! where a message Subject field covertly signals ownership.
//!
//! # Token format
//!
//! ```text
//! ----------------------------------------------
//! | 64-bit IV | SHA-256 of 'IV || secret'      |
//! ----------------------------------------------
//! ```
//!
//! hex-encoded, then truncated to `trim_digits` characters (48 by default:
//! the full 8-byte IV plus 16 of the 32 digest bytes).
//!
//! This crate is intentionally free of parsing, transport and key-management
//! concerns. It exposes pure, stateless operations over caller-owned byte
//! strings; the only external side effect is entropy consumption when a
//! fresh IV is drawn.

pub mod engine;
pub mod entropy;
pub mod error;

pub use engine::{HsubConfig, HsubEngine, DIGEST_LEN, IV_LEN, MIN_VERIFY_DIGITS, TRIM_DIGITS};
pub use entropy::{EntropySource, OsEntropy};
pub use error::HsubError;
