//! Parsers for domain reference database flat files.
//!
//! This module provides parsers for:
//!
//! - **CDD index tables** (`cddid.tbl`): tab-delimited, one domain per line,
//!   shared by the COG, NCBI-curated, and SMART sub-databases
//! - **HMMER3 text libraries** (`Pfam-A.hmm`, `TIGRFAMs_*.LIB`): multi-line
//!   header blocks terminated by the numeric match matrix
//! - **Stockholm annotation indexes** (`Pfam-A.full`): `#=GF` lines refining
//!   each family's model type
//!
//! All parsers read `.gz` inputs transparently and return accession-keyed
//! [`DomainModel`](crate::core::model::DomainModel) maps.
//!
//! ## Example
//!
//! ```rust,no_run
//! use domain_prep::parsing::cdd_table::parse_cdd_table_file;
//! use std::path::Path;
//!
//! // Keep only the COG sub-database from the shared index
//! let domains = parse_cdd_table_file(Path::new("cddid.tbl.gz"), "COG").unwrap();
//! println!("{} COG domains", domains.len());
//! ```

pub mod cdd_table;
pub mod hmm;
pub mod stockholm;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record format: {0}")]
    InvalidFormat(String),
}
