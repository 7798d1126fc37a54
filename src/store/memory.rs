//! In-process store doubles for tests and offline runs.
//!
//! Save/load round-trips go through `serde_json`, so the doubles exercise
//! the same serialized object shape as the HTTP clients.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

use crate::core::library::DomainLibrary;
use crate::core::set::DomainModelSet;
use crate::store::{BlobStore, ObjectRef, ObjectStore, StoreError};

#[derive(Default)]
struct StoredObject {
    object_id: u64,
    version: u64,
    data: serde_json::Value,
}

#[derive(Default)]
struct MemoryObjects {
    /// collection name -> numeric id
    collections: HashMap<String, u64>,
    /// (collection name, object name) -> stored object
    objects: HashMap<(String, String), StoredObject>,
    next_object_id: u64,
}

/// Object store double backed by JSON values in memory
#[derive(Default)]
pub struct MemoryObjectStore {
    inner: Mutex<MemoryObjects>,
}

impl MemoryObjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an object with this name has been saved
    #[must_use]
    pub fn contains(&self, collection: &str, name: &str) -> bool {
        let inner = self.inner.lock().expect("store mutex");
        inner
            .objects
            .contains_key(&(collection.to_string(), name.to_string()))
    }

    fn save(
        &self,
        collection: &str,
        name: &str,
        data: serde_json::Value,
    ) -> Result<ObjectRef, StoreError> {
        let mut inner = self.inner.lock().expect("store mutex");

        let next_collection_id = inner.collections.len() as u64 + 1;
        let collection_id = *inner
            .collections
            .entry(collection.to_string())
            .or_insert(next_collection_id);

        inner.next_object_id += 1;
        let fresh_object_id = inner.next_object_id;

        let reference = match inner
            .objects
            .entry((collection.to_string(), name.to_string()))
        {
            Entry::Occupied(entry) => {
                let stored = entry.into_mut();
                stored.version += 1;
                stored.data = data;
                ObjectRef {
                    collection_id,
                    object_id: stored.object_id,
                    version: stored.version,
                }
            }
            Entry::Vacant(entry) => {
                let stored = entry.insert(StoredObject {
                    object_id: fresh_object_id,
                    version: 1,
                    data,
                });
                ObjectRef {
                    collection_id,
                    object_id: stored.object_id,
                    version: stored.version,
                }
            }
        };

        Ok(reference)
    }

    fn load(&self, collection: &str, name: &str) -> Result<serde_json::Value, StoreError> {
        let inner = self.inner.lock().expect("store mutex");
        inner
            .objects
            .get(&(collection.to_string(), name.to_string()))
            .map(|stored| stored.data.clone())
            .ok_or_else(|| StoreError::NotFound(format!("{collection}/{name}")))
    }
}

impl ObjectStore for MemoryObjectStore {
    fn ensure_collection(&self, name: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("store mutex");
        let next_id = inner.collections.len() as u64 + 1;
        inner.collections.entry(name.to_string()).or_insert(next_id);
        Ok(())
    }

    fn save_library(
        &self,
        collection: &str,
        library: &DomainLibrary,
    ) -> Result<ObjectRef, StoreError> {
        self.save(
            collection,
            &library.id.to_string(),
            serde_json::to_value(library)?,
        )
    }

    fn load_library(&self, collection: &str, id: &str) -> Result<DomainLibrary, StoreError> {
        Ok(serde_json::from_value(self.load(collection, id)?)?)
    }

    fn save_model_set(
        &self,
        collection: &str,
        set: &DomainModelSet,
    ) -> Result<ObjectRef, StoreError> {
        self.save(collection, &set.set_name, serde_json::to_value(set)?)
    }

    fn load_model_set(&self, collection: &str, name: &str) -> Result<DomainModelSet, StoreError> {
        Ok(serde_json::from_value(self.load(collection, name)?)?)
    }
}

#[derive(Default)]
struct MemoryBlobs {
    /// blob id -> (file name, bytes)
    blobs: HashMap<String, (String, Vec<u8>)>,
    published: HashSet<String>,
    next_id: u64,
}

/// Blob store double holding uploads in memory
#[derive(Default)]
pub struct MemoryBlobStore {
    inner: Mutex<MemoryBlobs>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn blob_count(&self) -> usize {
        self.inner.lock().expect("blob mutex").blobs.len()
    }

    #[must_use]
    pub fn is_published(&self, blob_id: &str) -> bool {
        self.inner
            .lock()
            .expect("blob mutex")
            .published
            .contains(blob_id)
    }
}

impl BlobStore for MemoryBlobStore {
    fn upload(&self, path: &Path) -> Result<String, StoreError> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let mut inner = self.inner.lock().expect("blob mutex");
        inner.next_id += 1;
        let blob_id = format!("blob-{:04}", inner.next_id);
        inner.blobs.insert(blob_id.clone(), (file_name, bytes));
        Ok(blob_id)
    }

    fn publish(&self, blob_id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("blob mutex");
        if !inner.blobs.contains_key(blob_id) {
            return Err(StoreError::NotFound(blob_id.to_string()));
        }
        inner.published.insert(blob_id.to_string());
        Ok(())
    }

    fn download(&self, blob_id: &str, dest: &Path) -> Result<(), StoreError> {
        let inner = self.inner.lock().expect("blob mutex");
        let (_, bytes) = inner
            .blobs
            .get(blob_id)
            .ok_or_else(|| StoreError::NotFound(blob_id.to_string()))?;
        std::fs::write(dest, bytes)?;
        Ok(())
    }
}
