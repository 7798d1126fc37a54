//! `library` command: build a single domain library.

use std::path::Path;

use anyhow::anyhow;

use crate::prepare::build_library;

#[derive(clap::Args)]
pub struct LibraryArgs {
    /// Library id from the manifest, e.g. "Pfam-27.0"
    pub id: String,
}

/// # Errors
///
/// Fails if the id is not in the manifest or the build itself fails.
pub fn run(args: LibraryArgs, manifest: Option<&Path>, token_file: Option<&Path>) -> anyhow::Result<()> {
    let manifest = super::load_manifest(manifest)?;
    let spec = manifest
        .library(&args.id)
        .ok_or_else(|| anyhow!("library '{}' is not in the manifest", args.id))?;

    let (objects, blobs) = super::open_stores(&manifest, token_file)?;
    let reference = build_library(spec, &manifest.collection, &objects, &blobs)?;

    println!("{reference}");
    Ok(())
}
