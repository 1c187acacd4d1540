//! Detached message signing tool
//!
//! Reads the seed from `private.key` in the current directory, re-derives the
//! keypair, and prints a base64 Ed25519 signature over the message argument.

use std::env;
use std::path::Path;

use badgekit::keys::{self, PRIVATE_KEY_FILE};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: badgekit-sign \"message to sign\"");
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1]) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(message: &str) -> badgekit::Result<()> {
    let signing_key = keys::load_signing_key(Path::new(PRIVATE_KEY_FILE))?;
    let signature = keys::sign_message(&signing_key, message.as_bytes());

    println!("Signature: {}", keys::encode(&signature.to_bytes()));
    Ok(())
}
