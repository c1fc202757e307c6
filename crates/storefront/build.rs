//! Build script for the storefront crate.
//!
//! Fingerprints the stylesheet so templates can link it under an immutable,
//! content-addressed URL (`/static/css/derived/main.<hash>.css`).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Length of the hash embedded in derived file names.
const SHORT_HASH_LEN: usize = 8;

fn main() {
    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo"),
    );
    let static_dir = manifest_dir.join("static");

    fingerprint(&static_dir, "css", "main", "css", "CSS_HASH");
}

/// Copy `<static>/<dir>/<stem>.<ext>` to `<static>/<dir>/derived/<stem>.<hash>.<ext>`
/// and expose the hash to the crate as `env!(<env_var>)`.
///
/// A missing source file yields an empty hash instead of failing the build.
fn fingerprint(static_dir: &Path, dir: &str, stem: &str, ext: &str, env_var: &str) {
    let source = static_dir.join(dir).join(format!("{stem}.{ext}"));
    println!("cargo:rerun-if-changed={}", source.display());

    let content = match fs::read(&source) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read {}: {e}", source.display());
            println!("cargo:rustc-env={env_var}=");
            return;
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash = digest.get(..SHORT_HASH_LEN).unwrap_or(&digest);
    println!("cargo:rustc-env={env_var}={short_hash}");

    let derived_dir = static_dir.join(dir).join("derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived asset directory");
    fs::copy(&source, derived_dir.join(format!("{stem}.{short_hash}.{ext}")))
        .expect("Failed to copy fingerprinted asset");
}
