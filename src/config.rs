//! Prep manifest: which libraries and sets to build, and where the
//! collaborator services live.
//!
//! The manifest is JSON. A default manifest covering the public reference
//! databases is compiled into the binary; a custom one can be supplied with
//! `--manifest`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assemble::LibrarySpec;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// One set build: name plus constituent library ids in precedence order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSpec {
    pub name: String,

    /// Later entries overwrite earlier ones on prefix collision
    pub libraries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepManifest {
    /// Public collection every object is saved into
    pub collection: String,

    pub object_store_url: String,

    pub blob_store_url: String,

    pub libraries: Vec<LibrarySpec>,

    pub sets: Vec<SetSpec>,
}

impl PrepManifest {
    /// The default public-domains manifest compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Json` if the embedded manifest is invalid.
    pub fn load_embedded() -> Result<Self, ManifestError> {
        const EMBEDDED_MANIFEST: &str = include_str!("../manifests/public_domains.json");
        Ok(serde_json::from_str(EMBEDDED_MANIFEST)?)
    }

    /// Load a manifest from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Io` if the file cannot be read, or
    /// `ManifestError::Json` if it is not a valid manifest.
    pub fn load_from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    #[must_use]
    pub fn library(&self, id: &str) -> Option<&LibrarySpec> {
        self.libraries.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn set(&self, name: &str) -> Option<&SetSpec> {
        self.sets.iter().find(|s| s.name == name)
    }
}

/// Resolve the auth token: an explicit token file wins, then the
/// `DOMAIN_PREP_TOKEN` environment variable. `None` limits the run to
/// public reads.
///
/// # Errors
///
/// Returns `ManifestError::Io` if a named token file cannot be read.
pub fn resolve_token(token_file: Option<&Path>) -> Result<Option<String>, ManifestError> {
    if let Some(path) = token_file {
        let token = std::fs::read_to_string(path)?;
        return Ok(Some(token.trim().to_string()));
    }

    Ok(std::env::var("DOMAIN_PREP_TOKEN")
        .ok()
        .filter(|t| !t.is_empty()))
}
