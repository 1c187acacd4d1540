//! Key generation tool for badge signing keys
//!
//! Writes `public.key` and `private.key` into the current directory,
//! overwriting any previous keypair without asking.

use std::path::Path;

use badgekit::keys::{self, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> badgekit::Result<()> {
    let signing_key = keys::generate_keypair();
    keys::write_keypair(Path::new("."), &signing_key)?;

    println!("Keys saved to '{PUBLIC_KEY_FILE}' and '{PRIVATE_KEY_FILE}'");
    Ok(())
}
