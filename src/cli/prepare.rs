//! `prepare` command: run every library and set build in the manifest.

use std::path::Path;

use crate::prepare::run_all;

/// # Errors
///
/// Fails if the manifest cannot be loaded, the collection cannot be
/// ensured, or any individual build failed.
pub fn run(manifest: Option<&Path>, token_file: Option<&Path>) -> anyhow::Result<()> {
    let manifest = super::load_manifest(manifest)?;
    let (objects, blobs) = super::open_stores(&manifest, token_file)?;

    let failures = run_all(&manifest, &objects, &blobs)?;
    if failures > 0 {
        anyhow::bail!("{failures} build(s) failed");
    }

    println!(
        "Prepared {} libraries and {} sets in {}",
        manifest.libraries.len(),
        manifest.sets.len(),
        manifest.collection
    );
    Ok(())
}
