//! Library file manifest discovery.
//!
//! A prepared library directory holds the canonical file handed to the
//! search program plus whatever sidecar files the formatter produced
//! (`makeprofiledb` writes `.aux`/`.freq`/`.loo`/..., `hmmpress` writes
//! `.h3f`/`.h3i`/`.h3m`/`.h3p`). Everything sharing the canonical file's
//! name up to its first `.` belongs in the manifest.

use std::path::Path;

use crate::assemble::AssembleError;
use crate::core::library::FileHandle;

/// Collect the file manifest for a canonical library file.
///
/// The canonical file is always entry 0. Sidecar files from the same
/// directory follow, sorted by name so repeated runs produce identical
/// manifests regardless of directory-listing order.
///
/// # Errors
///
/// Returns `AssembleError::InvalidPath` if `canonical` has no usable file
/// name, or `AssembleError::Io` if its directory cannot be listed.
pub fn discover_library_files(canonical: &Path) -> Result<Vec<FileHandle>, AssembleError> {
    let file_name = canonical
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AssembleError::InvalidPath(canonical.to_path_buf()))?;

    // everything up to the first '.' names the file family
    let family = match file_name.find('.') {
        Some(pos) if pos > 0 => &file_name[..pos],
        _ => file_name,
    };

    let mut handles = vec![FileHandle::new(file_name)];

    let dir = canonical.parent().filter(|p| !p.as_os_str().is_empty());
    let dir = dir.unwrap_or_else(|| Path::new("."));

    let mut siblings = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name == file_name || !name.starts_with(family) {
            continue;
        }
        siblings.push(name.to_string());
    }
    siblings.sort();
    handles.extend(siblings.into_iter().map(FileHandle::new));

    Ok(handles)
}
