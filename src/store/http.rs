//! HTTP clients for the object store and blob storage services.
//!
//! One request per call, no retries; failures surface unchanged to the
//! caller. Uploads stream the file body; downloads stream to disk.

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::core::library::DomainLibrary;
use crate::core::set::DomainModelSet;
use crate::store::{BlobStore, ObjectRef, ObjectStore, StoreError};

const LIBRARY_TYPE: &str = "DomainLibrary";
const MODEL_SET_TYPE: &str = "DomainModelSet";

fn authorize(req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}

fn require_token(token: Option<&str>, action: &str) -> Result<(), StoreError> {
    if token.is_none() {
        return Err(StoreError::Auth(format!(
            "{action} requires a token; without one only public reads are allowed"
        )));
    }
    Ok(())
}

/// Save/load response and request body shape for stored objects
#[derive(Debug, Deserialize)]
struct SavedObject {
    collection_id: u64,
    object_id: u64,
    version: u64,
}

impl SavedObject {
    fn reference(&self) -> ObjectRef {
        ObjectRef {
            collection_id: self.collection_id,
            object_id: self.object_id,
            version: self.version,
        }
    }
}

pub struct HttpObjectStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpObjectStore {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    fn save_object(
        &self,
        collection: &str,
        name: &str,
        type_tag: &str,
        data: serde_json::Value,
    ) -> Result<ObjectRef, StoreError> {
        require_token(self.token.as_deref(), "saving objects")?;

        let body = json!({
            "collection": collection,
            "name": name,
            "type": type_tag,
            "saved_at": Utc::now().to_rfc3339(),
            "data": data,
        });

        let resp = authorize(
            self.client.post(format!("{}/objects", self.base_url)),
            self.token.as_deref(),
        )
        .json(&body)
        .send()?
        .error_for_status()?;

        let saved: SavedObject = resp.json()?;
        debug!(collection, name, type_tag, reference = %saved.reference(), "saved object");
        Ok(saved.reference())
    }
}

impl ObjectStore for HttpObjectStore {
    fn ensure_collection(&self, name: &str) -> Result<(), StoreError> {
        let status = authorize(
            self.client
                .get(format!("{}/collections/{}", self.base_url, name)),
            self.token.as_deref(),
        )
        .send()?
        .status();

        if status.is_success() {
            return Ok(());
        }

        require_token(self.token.as_deref(), "creating a collection")?;
        authorize(
            self.client.post(format!("{}/collections", self.base_url)),
            self.token.as_deref(),
        )
        .json(&json!({ "name": name, "global_read": true }))
        .send()?
        .error_for_status()?;

        debug!(collection = name, "created collection");
        Ok(())
    }

    fn save_library(
        &self,
        collection: &str,
        library: &DomainLibrary,
    ) -> Result<ObjectRef, StoreError> {
        self.save_object(
            collection,
            &library.id.to_string(),
            LIBRARY_TYPE,
            serde_json::to_value(library)?,
        )
    }

    fn load_library(&self, collection: &str, id: &str) -> Result<DomainLibrary, StoreError> {
        let resp = authorize(
            self.client
                .get(format!("{}/objects/{}/{}", self.base_url, collection, id)),
            self.token.as_deref(),
        )
        .send()?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(format!("{collection}/{id}")));
        }

        Ok(resp.error_for_status()?.json()?)
    }

    fn save_model_set(
        &self,
        collection: &str,
        set: &DomainModelSet,
    ) -> Result<ObjectRef, StoreError> {
        self.save_object(
            collection,
            &set.set_name,
            MODEL_SET_TYPE,
            serde_json::to_value(set)?,
        )
    }

    fn load_model_set(&self, collection: &str, name: &str) -> Result<DomainModelSet, StoreError> {
        let resp = authorize(
            self.client
                .get(format!("{}/objects/{}/{}", self.base_url, collection, name)),
            self.token.as_deref(),
        )
        .send()?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(format!("{collection}/{name}")));
        }

        Ok(resp.error_for_status()?.json()?)
    }
}

#[derive(Debug, Deserialize)]
struct BlobNode {
    id: String,
}

pub struct HttpBlobStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBlobStore {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token,
        }
    }
}

impl BlobStore for HttpBlobStore {
    fn upload(&self, path: &Path) -> Result<String, StoreError> {
        require_token(self.token.as_deref(), "uploading blobs")?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let file = File::open(path)?;

        let resp = authorize(
            self.client.post(format!("{}/node", self.base_url)),
            self.token.as_deref(),
        )
        .query(&[("filename", file_name.as_str())])
        .body(file)
        .send()?
        .error_for_status()?;

        let node: BlobNode = resp.json()?;
        debug!(file = %file_name, blob = %node.id, "uploaded blob");
        Ok(node.id)
    }

    fn publish(&self, blob_id: &str) -> Result<(), StoreError> {
        require_token(self.token.as_deref(), "publishing blobs")?;

        // dropping the owner from the read ACL leaves the blob
        // world-readable
        authorize(
            self.client
                .delete(format!("{}/node/{}/acl/read", self.base_url, blob_id)),
            self.token.as_deref(),
        )
        .send()?
        .error_for_status()?;

        Ok(())
    }

    fn download(&self, blob_id: &str, dest: &Path) -> Result<(), StoreError> {
        let resp = authorize(
            self.client
                .get(format!("{}/node/{}/download", self.base_url, blob_id)),
            self.token.as_deref(),
        )
        .send()?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(blob_id.to_string()));
        }

        let mut resp = resp.error_for_status()?;
        let mut out = File::create(dest)?;
        std::io::copy(&mut resp, &mut out)?;
        Ok(())
    }
}
