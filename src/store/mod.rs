//! Boundary contracts for the object store and blob storage collaborators.
//!
//! The parsing and aggregation core never talks to the network directly;
//! it goes through these traits. [`http::HttpObjectStore`] and
//! [`http::HttpBlobStore`] are the production clients; the [`memory`]
//! doubles back the integration tests and offline runs.
//!
//! Both services use a bearer token. Without one, callers are limited to
//! read operations against public collections; every write returns
//! [`StoreError::Auth`] before any request is sent.

pub mod http;
pub mod memory;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::library::DomainLibrary;
use crate::core::set::DomainModelSet;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Authentication required: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Stable reference to a saved object: collection, object, and version ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    pub collection_id: u64,
    pub object_id: u64,
    pub version: u64,
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.collection_id, self.object_id, self.version)
    }
}

/// Versioned object store holding libraries and model sets by name
pub trait ObjectStore {
    /// Create the collection if it does not exist yet
    fn ensure_collection(&self, name: &str) -> Result<(), StoreError>;

    fn save_library(
        &self,
        collection: &str,
        library: &DomainLibrary,
    ) -> Result<ObjectRef, StoreError>;

    fn load_library(&self, collection: &str, id: &str) -> Result<DomainLibrary, StoreError>;

    fn save_model_set(
        &self,
        collection: &str,
        set: &DomainModelSet,
    ) -> Result<ObjectRef, StoreError>;

    fn load_model_set(&self, collection: &str, name: &str) -> Result<DomainModelSet, StoreError>;
}

/// Blob storage for raw library files
pub trait BlobStore {
    /// Upload one file, returning its blob id
    fn upload(&self, path: &Path) -> Result<String, StoreError>;

    /// Make a previously uploaded blob world-readable
    fn publish(&self, blob_id: &str) -> Result<(), StoreError>;

    /// Fetch a blob's bytes into `dest`
    fn download(&self, blob_id: &str, dest: &Path) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ref_display() {
        let r = ObjectRef {
            collection_id: 1342,
            object_id: 17,
            version: 3,
        };
        assert_eq!(r.to_string(), "1342/17/3");
    }

    #[test]
    fn test_object_ref_round_trips_through_json() {
        let r = ObjectRef {
            collection_id: 1,
            object_id: 2,
            version: 1,
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: ObjectRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
