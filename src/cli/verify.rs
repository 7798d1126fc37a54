//! `verify` command: download a saved set's library files and check them.

use std::path::{Path, PathBuf};

use crate::prepare::verify_set;

#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Set name to verify, e.g. "All"
    pub name: String,

    /// Directory the downloaded files are written into
    #[arg(long, default_value = ".")]
    pub dest: PathBuf,
}

/// # Errors
///
/// Fails if the set or one of its libraries cannot be loaded, a blob
/// cannot be downloaded, or a downloaded file is empty.
pub fn run(args: VerifyArgs, manifest: Option<&Path>, token_file: Option<&Path>) -> anyhow::Result<()> {
    let manifest = super::load_manifest(manifest)?;
    let (objects, blobs) = super::open_stores(&manifest, token_file)?;

    verify_set(&args.name, &manifest.collection, &objects, &blobs, &args.dest)?;

    println!("{} verified", args.name);
    Ok(())
}
