//! Assembles parsed domain records and static metadata into a library.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::assemble::{manifest, AssembleError};
use crate::core::library::DomainLibrary;
use crate::core::types::{LibraryId, SourceFamily};
use crate::parsing::{cdd_table, hmm};

/// Static description of one library build, as listed in the prep manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySpec {
    pub id: String,

    /// Distribution URL; also determines the source family
    pub source_url: String,

    /// Canonical file handed to the search program
    pub library_file: PathBuf,

    /// CDD index table, or Stockholm annotation index for HMM families
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_file: Option<PathBuf>,

    pub version: String,

    pub release_date: String,

    pub domain_prefix: String,

    pub dbxref_prefix: String,
}

/// Build a fully populated library from its spec.
///
/// Delegates to the tabular or HMM parser based on the source family
/// detected from `source_url`, then discovers the file manifest next to the
/// canonical file. No storage locations are assigned here.
///
/// # Errors
///
/// Returns `AssembleError::UnknownSource` if `source_url` names no known
/// distribution, `AssembleError::MissingIndex` for a CDD spec without an
/// index table; parse and IO failures propagate unchanged.
pub fn assemble_library(spec: &LibrarySpec) -> Result<DomainLibrary, AssembleError> {
    let family = SourceFamily::from_url(&spec.source_url)
        .ok_or_else(|| AssembleError::UnknownSource(spec.source_url.clone()))?;

    info!(library = %spec.id, source = %family, "assembling domain library");

    let domains = match family {
        SourceFamily::Cdd => {
            let index = spec
                .index_file
                .as_deref()
                .ok_or_else(|| AssembleError::MissingIndex(spec.id.clone()))?;
            cdd_table::parse_cdd_table_file(index, &spec.domain_prefix)?
        }
        SourceFamily::Pfam | SourceFamily::Tigrfams => {
            hmm::parse_hmm_file(&spec.library_file, spec.index_file.as_deref())?
        }
    };

    debug!(library = %spec.id, domains = domains.len(), "parsed domain records");

    let library_files = manifest::discover_library_files(&spec.library_file)?;

    Ok(DomainLibrary {
        id: LibraryId::new(spec.id.as_str()),
        source: family.to_string(),
        source_url: spec.source_url.clone(),
        version: spec.version.clone(),
        release_date: spec.release_date.clone(),
        program: family.program().to_string(),
        domain_prefix: spec.domain_prefix.clone(),
        dbxref_prefix: spec.dbxref_prefix.clone(),
        library_files,
        domains,
    })
}
