//! Error types for the badgekit tools

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BadgekitError>;

#[derive(Error, Debug)]
pub enum BadgekitError {
    #[error("Key file not found: {}", .0.display())]
    KeyFileNotFound(PathBuf),

    #[error("Invalid private key size: {0}")]
    InvalidKeySize(usize),

    #[error("Invalid signature size: {0}")]
    InvalidSignatureSize(usize),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid key material: {0}")]
    Key(#[from] ed25519_dalek::SignatureError),

    #[error("Signature verification failed")]
    SignatureVerification,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
