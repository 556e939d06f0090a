//! Build script for the Tunedrop CLI.
//!
//! This build script handles setup tasks that need to occur during the compilation
//! process, primarily related to copying configuration templates to the user's
//! local data directory. This ensures that users have access to configuration
//! examples in the expected location after installation.

use std::{env, fs, path::PathBuf};

/// Main build script entry point that handles configuration file setup.
///
/// Copies `.env.example` from the crate root to the platform-specific local
/// data directory so the application finds a ready-to-use template in the
/// location where it later expects the real `.env`:
/// - Linux: `~/.local/share/tunedrop/.env.example`
/// - macOS: `~/Library/Application Support/tunedrop/.env.example`
/// - Windows: `%LOCALAPPDATA%/tunedrop/.env.example`
///
/// A missing template produces a cargo warning instead of failing the build;
/// directory-creation and copy failures are propagated as build errors.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("tunedrop");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
