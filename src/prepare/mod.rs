//! Batch driver: build libraries and sets and persist them through the
//! collaborator boundary.
//!
//! Every build function is independently callable; [`run_all`] chains them
//! with failure isolation, so one broken library never blocks the rest of
//! the batch.

use std::path::Path;

use thiserror::Error;
use tracing::{error, info};

use crate::aggregate::aggregate_set;
use crate::assemble::{assemble_library, AssembleError, LibrarySpec};
use crate::config::{PrepManifest, SetSpec};
use crate::store::{BlobStore, ObjectRef, ObjectStore, StoreError};

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Assembly failed: {0}")]
    Assemble(#[from] AssembleError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Verification failed: {0}")]
    Verify(String),
}

/// Assemble one library, upload its files, and save it.
///
/// Each manifest file is uploaded and then published (made world-readable)
/// before the library object is saved, so a saved library never references
/// a private blob.
///
/// # Errors
///
/// Assembly, upload, and save failures propagate; nothing is saved when
/// any step fails.
pub fn build_library(
    spec: &LibrarySpec,
    collection: &str,
    objects: &dyn ObjectStore,
    blobs: &dyn BlobStore,
) -> Result<ObjectRef, PrepError> {
    let mut library = assemble_library(spec)?;

    let dir = spec
        .library_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    for handle in &mut library.library_files {
        let blob_id = blobs.upload(&dir.join(&handle.file_name))?;
        blobs.publish(&blob_id)?;
        handle.blob_id = Some(blob_id);
    }

    let reference = objects.save_library(collection, &library)?;
    info!(library = %library.id, reference = %reference, "saved domain library");
    Ok(reference)
}

/// Load the constituent libraries, merge them, and save the set.
///
/// Libraries must already exist in the collection; a missing one fails the
/// whole set build.
///
/// # Errors
///
/// Load and save failures propagate; nothing is saved when any library
/// cannot be loaded.
pub fn build_model_set(
    spec: &SetSpec,
    collection: &str,
    objects: &dyn ObjectStore,
) -> Result<ObjectRef, PrepError> {
    info!(set = %spec.name, "building domain model set");

    let mut members = Vec::with_capacity(spec.libraries.len());
    for id in &spec.libraries {
        let library = objects.load_library(collection, id)?;
        let location = library.location(collection);
        members.push((library, location));
    }

    let set = aggregate_set(&spec.name, &members);
    let reference = objects.save_model_set(collection, &set)?;
    info!(set = %spec.name, reference = %reference, "saved domain model set");
    Ok(reference)
}

/// Download every blob of a saved library into `dest` and check that none
/// came back empty.
///
/// # Errors
///
/// Returns `PrepError::Verify` for a manifest entry with no blob recorded
/// or an empty download; load and download failures propagate.
pub fn verify_library(
    id: &str,
    collection: &str,
    objects: &dyn ObjectStore,
    blobs: &dyn BlobStore,
    dest: &Path,
) -> Result<(), PrepError> {
    let library = objects.load_library(collection, id)?;

    for handle in &library.library_files {
        let blob_id = handle.blob_id.as_deref().ok_or_else(|| {
            PrepError::Verify(format!("{}: no blob recorded for {}", id, handle.file_name))
        })?;

        let target = dest.join(&handle.file_name);
        blobs.download(blob_id, &target)?;

        let bytes = std::fs::metadata(&target)?.len();
        if bytes == 0 {
            return Err(PrepError::Verify(format!(
                "{}: {} downloaded empty",
                id, handle.file_name
            )));
        }
        info!(library = id, file = %handle.file_name, bytes, "verified blob");
    }

    Ok(())
}

/// Verify every library referenced by a saved model set.
///
/// Mirrors what a consumer does: load the set, follow each
/// `domain_libs` location to its library, and pull that library's files
/// down from blob storage.
///
/// # Errors
///
/// Fails on the first library that cannot be loaded or verified.
pub fn verify_set(
    name: &str,
    collection: &str,
    objects: &dyn ObjectStore,
    blobs: &dyn BlobStore,
    dest: &Path,
) -> Result<(), PrepError> {
    let set = objects.load_model_set(collection, name)?;
    info!(set = name, libraries = set.library_count(), "verifying model set");

    for location in set.domain_libs.values() {
        let id = location.rsplit('/').next().unwrap_or(location.as_str());
        verify_library(id, collection, objects, blobs, dest)?;
    }

    Ok(())
}

/// Run every library and set build in the manifest.
///
/// Builds are failure-isolated: a failing library or set is logged and
/// skipped, and the rest proceed. Returns the number of failed builds.
///
/// # Errors
///
/// Only the up-front collection check can fail the whole run; individual
/// build failures are counted, not returned.
pub fn run_all(
    manifest: &PrepManifest,
    objects: &dyn ObjectStore,
    blobs: &dyn BlobStore,
) -> Result<usize, PrepError> {
    objects.ensure_collection(&manifest.collection)?;

    let mut failures = 0;

    for spec in &manifest.libraries {
        match build_library(spec, &manifest.collection, objects, blobs) {
            Ok(reference) => info!(library = %spec.id, reference = %reference, "library build complete"),
            Err(e) => {
                failures += 1;
                error!(library = %spec.id, error = %e, "library build failed");
            }
        }
    }

    for spec in &manifest.sets {
        match build_model_set(spec, &manifest.collection, objects) {
            Ok(reference) => info!(set = %spec.name, reference = %reference, "set build complete"),
            Err(e) => {
                failures += 1;
                error!(set = %spec.name, error = %e, "set build failed");
            }
        }
    }

    Ok(failures)
}
