//! Detached signature verification tool
//!
//! Reads `public.key` from the current directory and checks a base64 Ed25519
//! signature against the message argument.

use std::env;
use std::path::Path;

use badgekit::keys::{self, PUBLIC_KEY_FILE};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: badgekit-verify \"message\" <signature_base64>");
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1], &args[2]) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(message: &str, signature_b64: &str) -> badgekit::Result<()> {
    let verifying_key = keys::load_verifying_key(Path::new(PUBLIC_KEY_FILE))?;
    let signature = keys::decode_signature(signature_b64)?;

    keys::verify_message(&verifying_key, message.as_bytes(), &signature)?;

    println!("Signature verified");
    Ok(())
}
