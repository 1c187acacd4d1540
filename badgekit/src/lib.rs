//! badgekit - Ed25519 keypair generation and detached message signing
//!
//! Key material lives in two single-line base64 files: `public.key` holds the
//! 32-byte public key, `private.key` holds the 32-byte seed. Only the seed is
//! ever persisted; the full expanded secret key is re-derived from it on every
//! run.

pub mod error;
pub mod keys;

pub use error::{BadgekitError, Result};
