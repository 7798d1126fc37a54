//! Library assembly: parsed records plus static metadata plus the file
//! manifest, producing a [`DomainLibrary`](crate::core::library::DomainLibrary)
//! with no storage locations assigned yet.

pub mod assembler;
pub mod manifest;

use std::path::PathBuf;
use thiserror::Error;

use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Unrecognized source URL: {0}")]
    UnknownSource(String),

    #[error("Library {0} requires an index file")]
    MissingIndex(String),

    #[error("Invalid library file path: {0}")]
    InvalidPath(PathBuf),
}

pub use assembler::{assemble_library, LibrarySpec};
pub use manifest::discover_library_files;
