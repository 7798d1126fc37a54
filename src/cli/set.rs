//! `set` command: build a single domain model set.

use std::path::Path;

use anyhow::anyhow;

use crate::prepare::build_model_set;

#[derive(clap::Args)]
pub struct SetArgs {
    /// Set name from the manifest, e.g. "All"
    pub name: String,
}

/// # Errors
///
/// Fails if the name is not in the manifest, a constituent library has not
/// been built yet, or the save fails.
pub fn run(args: SetArgs, manifest: Option<&Path>, token_file: Option<&Path>) -> anyhow::Result<()> {
    let manifest = super::load_manifest(manifest)?;
    let spec = manifest
        .set(&args.name)
        .ok_or_else(|| anyhow!("set '{}' is not in the manifest", args.name))?;

    let (objects, _) = super::open_stores(&manifest, token_file)?;
    let reference = build_model_set(spec, &manifest.collection, &objects)?;

    println!("{reference}");
    Ok(())
}
