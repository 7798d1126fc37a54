//! # domain-prep
//!
//! A library for preparing protein-domain reference databases for use by
//! sequence-search services.
//!
//! Third-party domain databases arrive in heterogeneous flat-file formats:
//! the NCBI Conserved Domain Database ships a tab-delimited index shared by
//! its COG, curated-cd, and SMART sub-databases, while Pfam and TIGRFAMs
//! ship HMMER3 text libraries, optionally paired with a Stockholm
//! annotation index. `domain-prep` parses all of them into one schema:
//! per-domain [`DomainModel`] records grouped into a [`DomainLibrary`],
//! and libraries merged into a [`DomainModelSet`] with cross-library
//! lookup tables.
//!
//! ## Features
//!
//! - **Prefix filtering**: One shared CDD index file is split into separate
//!   libraries by accession prefix
//! - **Model type refinement**: Pfam family types from the annotation index
//!   replace the generic HMM tag
//! - **File manifests**: Every library carries its canonical search-program
//!   file plus the sidecar files discovered next to it
//! - **Set aggregation**: Ordered, last-write-wins merging of libraries
//!   into named sets
//! - **Store boundary**: Object-store and blob-storage collaborators behind
//!   traits, with HTTP clients and in-memory doubles
//!
//! ## Example
//!
//! ```rust,no_run
//! use domain_prep::{assemble_library, LibrarySpec};
//! use std::path::PathBuf;
//!
//! let spec = LibrarySpec {
//!     id: "TIGRFAMs-15.0".to_string(),
//!     source_url: "ftp://ftp.jcvi.org/pub/data/TIGRFAMs/TIGRFAMs_15.0_HMM.LIB.gz".to_string(),
//!     library_file: PathBuf::from("data/db/TIGRFAMs_15.0_HMM.LIB"),
//!     index_file: None,
//!     version: "15.0".to_string(),
//!     release_date: "2014-09-17".to_string(),
//!     domain_prefix: "TIGR".to_string(),
//!     dbxref_prefix: "http://www.jcvi.org/cgi-bin/tigrfams/HmmReportPage.cgi?acc=".to_string(),
//! };
//!
//! let library = assemble_library(&spec).unwrap();
//! println!("{} domains", library.domains.len());
//! ```
//!
//! ## Modules
//!
//! - [`parsing`]: Parsers for the CDD index, HMM libraries, and Stockholm
//!   annotation indexes
//! - [`assemble`]: Library assembly and file manifest discovery
//! - [`aggregate`]: Merging libraries into model sets
//! - [`core`]: Core data types for models, libraries, and sets
//! - [`store`]: Object-store and blob-storage boundary contracts
//! - [`prepare`]: The batch driver tying it all together
//! - [`cli`]: Command-line interface implementation

pub mod aggregate;
pub mod assemble;
pub mod cli;
pub mod config;
pub mod core;
pub mod parsing;
pub mod prepare;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::library::{DomainLibrary, FileHandle};
pub use crate::core::model::DomainModel;
pub use crate::core::set::DomainModelSet;
pub use crate::core::types::{LibraryId, SourceFamily};
pub use aggregate::aggregate_set;
pub use assemble::{assemble_library, LibrarySpec};
pub use config::{PrepManifest, SetSpec};
