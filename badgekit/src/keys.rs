//! Ed25519 key management and detached signing
//!
//! Wraps keypair generation, seed persistence, and signing behind the two-file
//! contract the badge tools share: `public.key` and `private.key` each hold a
//! single line of standard (padded) base64 encoding 32 raw bytes. Only the
//! first line of a key file is significant; anything after it is ignored.

use std::fs;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use tracing::{debug, info};

use crate::error::{BadgekitError, Result};

/// Length of the persisted private seed in raw bytes
pub const SEED_LENGTH: usize = 32;

/// Length of the public key in raw bytes
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Length of a detached signature in raw bytes
pub const SIGNATURE_LENGTH: usize = 64;

/// File holding the base64-encoded public key
pub const PUBLIC_KEY_FILE: &str = "public.key";

/// File holding the base64-encoded private seed
pub const PRIVATE_KEY_FILE: &str = "private.key";

/// Generate a fresh signing key from the OS random number generator.
///
/// The key internally carries the 32-byte seed; the public half is available
/// via [`SigningKey::verifying_key`].
pub fn generate_keypair() -> SigningKey {
    let mut csprng = OsRng;
    SigningKey::generate(&mut csprng)
}

/// Base64-encode raw bytes using the standard padded alphabet.
pub fn encode(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// Base64-decode text using the standard padded alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(BASE64.decode(text)?)
}

/// Write `public.key` and `private.key` into `dir`, overwriting any previous
/// contents.
///
/// Each file gets one line of base64: the 32-byte public key and the 32-byte
/// seed respectively. The expanded secret key is never written out.
pub fn write_keypair(dir: &Path, signing_key: &SigningKey) -> Result<()> {
    let verifying_key = signing_key.verifying_key();

    let public_b64 = encode(verifying_key.as_bytes());
    let seed_b64 = encode(&signing_key.to_bytes());

    fs::write(dir.join(PUBLIC_KEY_FILE), &public_b64)?;
    fs::write(dir.join(PRIVATE_KEY_FILE), &seed_b64)?;

    info!(
        "Wrote keypair to {} and {}",
        dir.join(PUBLIC_KEY_FILE).display(),
        dir.join(PRIVATE_KEY_FILE).display()
    );
    Ok(())
}

/// Read the first line of a key file, without the line terminator.
fn read_first_line(path: &Path) -> Result<String> {
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            BadgekitError::KeyFileNotFound(path.to_path_buf())
        } else {
            BadgekitError::Io(e)
        }
    })?;

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}

/// Load the 32-byte private seed from a key file.
///
/// Takes only the first line, decodes it, and requires exactly
/// [`SEED_LENGTH`] bytes.
pub fn load_seed(path: &Path) -> Result<[u8; SEED_LENGTH]> {
    let line = read_first_line(path)?;
    let bytes = decode(&line)?;
    let seed: [u8; SEED_LENGTH] = bytes
        .try_into()
        .map_err(|v: Vec<u8>| BadgekitError::InvalidKeySize(v.len()))?;

    debug!("Loaded {}-byte seed from {}", SEED_LENGTH, path.display());
    Ok(seed)
}

/// Deterministically expand a seed into the full signing key.
pub fn signing_key_from_seed(seed: &[u8; SEED_LENGTH]) -> SigningKey {
    SigningKey::from_bytes(seed)
}

/// Load the seed from a key file and expand it into a signing key.
pub fn load_signing_key(path: &Path) -> Result<SigningKey> {
    let seed = load_seed(path)?;
    Ok(signing_key_from_seed(&seed))
}

/// Load the 32-byte public key from a key file.
pub fn load_verifying_key(path: &Path) -> Result<VerifyingKey> {
    let line = read_first_line(path)?;
    let bytes = decode(&line)?;
    let raw: [u8; PUBLIC_KEY_LENGTH] = bytes
        .try_into()
        .map_err(|v: Vec<u8>| BadgekitError::InvalidKeySize(v.len()))?;
    Ok(VerifyingKey::from_bytes(&raw)?)
}

/// Produce a detached signature over the raw message bytes.
pub fn sign_message(signing_key: &SigningKey, message: &[u8]) -> Signature {
    signing_key.sign(message)
}

/// Decode a base64 detached signature, requiring exactly
/// [`SIGNATURE_LENGTH`] bytes.
pub fn decode_signature(text: &str) -> Result<Signature> {
    let bytes = decode(text)?;
    let raw: [u8; SIGNATURE_LENGTH] = bytes
        .try_into()
        .map_err(|v: Vec<u8>| BadgekitError::InvalidSignatureSize(v.len()))?;
    Ok(Signature::from_bytes(&raw))
}

/// Check a detached signature against a message and public key.
pub fn verify_message(
    verifying_key: &VerifyingKey,
    message: &[u8],
    signature: &Signature,
) -> Result<()> {
    verifying_key
        .verify(message, signature)
        .map_err(|_| BadgekitError::SignatureVerification)
}
