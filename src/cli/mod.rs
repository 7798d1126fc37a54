//! Command-line interface for domain-prep.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **prepare**: Build every library and set in the prep manifest
//! - **library**: Build a single domain library
//! - **set**: Build a single domain model set
//! - **verify**: Download a saved set's library files and check them
//!
//! ## Usage
//!
//! ```text
//! # Build everything in the embedded manifest
//! domain-prep prepare --token-file ~/.domain-prep-token
//!
//! # Build one library from a custom manifest
//! domain-prep library Pfam-27.0 --manifest prep.json
//!
//! # Aggregate the "All" set once its libraries exist
//! domain-prep set All
//!
//! # Pull a saved set's library files back down and check them
//! domain-prep verify All --dest /tmp
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::{self, PrepManifest};
use crate::store::http::{HttpBlobStore, HttpObjectStore};

pub mod library;
pub mod prepare;
pub mod set;
pub mod verify;

#[derive(Parser)]
#[command(name = "domain-prep")]
#[command(version)]
#[command(about = "Prepare protein domain reference libraries and merged model sets")]
#[command(
    long_about = "domain-prep converts downloaded protein-domain reference databases (CDD, SMART, Pfam, TIGRFAMs) into normalized domain libraries, uploads the raw files to blob storage, and saves the libraries and their merged model sets to the public object store for the annotation services to use."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Prep manifest file (defaults to the embedded public-domains manifest)
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// File holding the bearer token; DOMAIN_PREP_TOKEN is read otherwise
    #[arg(long, global = true)]
    pub token_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build every library and set in the manifest
    Prepare,

    /// Build a single domain library
    Library(library::LibraryArgs),

    /// Build a single domain model set
    Set(set::SetArgs),

    /// Download a saved set's library files and check them
    Verify(verify::VerifyArgs),
}

pub(crate) fn load_manifest(path: Option<&Path>) -> anyhow::Result<PrepManifest> {
    Ok(match path {
        Some(path) => PrepManifest::load_from_file(path)?,
        None => PrepManifest::load_embedded()?,
    })
}

pub(crate) fn open_stores(
    manifest: &PrepManifest,
    token_file: Option<&Path>,
) -> anyhow::Result<(HttpObjectStore, HttpBlobStore)> {
    let token = config::resolve_token(token_file)?;
    if token.is_none() {
        warn!("no auth token found; only public reads will succeed");
    }

    Ok((
        HttpObjectStore::new(manifest.object_store_url.as_str(), token.clone()),
        HttpBlobStore::new(manifest.blob_store_url.as_str(), token),
    ))
}
