use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::model::DomainModel;
use crate::core::types::LibraryId;

/// One raw file backing a library, as referenced from blob storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub file_name: String,

    /// Assigned by blob storage at upload time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_id: Option<String>,
}

impl FileHandle {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            blob_id: None,
        }
    }
}

/// A versioned, sourced collection of domain models plus the raw files
/// backing it. Built once by the assembler and never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainLibrary {
    pub id: LibraryId,

    /// Source database name, e.g. "CDD" or "Pfam"
    pub source: String,

    /// Distribution URL the raw files were fetched from
    pub source_url: String,

    pub version: String,

    pub release_date: String,

    /// Search program the canonical file is formatted for
    pub program: String,

    /// Accession prefix identifying this library's records
    pub domain_prefix: String,

    /// Base URL linking an accession to its external record page
    pub dbxref_prefix: String,

    /// Canonical file first, auxiliary files after
    pub library_files: Vec<FileHandle>,

    /// Accession -> model
    pub domains: HashMap<String, DomainModel>,
}

impl DomainLibrary {
    /// Location reference of this library within a collection
    #[must_use]
    pub fn location(&self, collection: &str) -> String {
        format!("{}/{}", collection, self.id)
    }

    /// The file handed to the downstream search program
    #[must_use]
    pub fn canonical_file(&self) -> Option<&FileHandle> {
        self.library_files.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_library() -> DomainLibrary {
        DomainLibrary {
            id: LibraryId::new("TIGRFAMs-15.0"),
            source: "TIGRFAMs".to_string(),
            source_url: "ftp://ftp.jcvi.org/pub/data/TIGRFAMs/TIGRFAMs_15.0_HMM.LIB.gz".to_string(),
            version: "15.0".to_string(),
            release_date: "2014-09-17".to_string(),
            program: "hmmscan-3.1b1".to_string(),
            domain_prefix: "TIGR".to_string(),
            dbxref_prefix: "http://www.jcvi.org/cgi-bin/tigrfams/HmmReportPage.cgi?acc=".to_string(),
            library_files: vec![
                FileHandle::new("TIGRFAMs_15.0_HMM.LIB"),
                FileHandle::new("TIGRFAMs_15.0_HMM.LIB.h3f"),
            ],
            domains: HashMap::new(),
        }
    }

    #[test]
    fn test_location() {
        let library = sample_library();
        assert_eq!(
            library.location("PublicGeneDomains"),
            "PublicGeneDomains/TIGRFAMs-15.0"
        );
    }

    #[test]
    fn test_canonical_file_is_first() {
        let library = sample_library();
        assert_eq!(
            library.canonical_file().unwrap().file_name,
            "TIGRFAMs_15.0_HMM.LIB"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let library = sample_library();
        let json = serde_json::to_string(&library).unwrap();
        let back: DomainLibrary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, library.id);
        assert_eq!(back.library_files, library.library_files);
        // unassigned blob ids are omitted from the wire shape
        assert!(!json.contains("blob_id"));
    }
}
