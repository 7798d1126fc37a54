//! Parser for HMMER3 text libraries (`Pfam-A.hmm`, `TIGRFAMs_*.LIB`).
//!
//! Each model is a textual header block followed by the numeric match
//! matrix; the `HMM ` line opening the matrix terminates the header and
//! emits a record. Header fields accumulate line by line and are not reset
//! between blocks: a block that omits a field inherits the previous
//! block's value. The shipped libraries restate every field in every
//! block, so the carryover only shows on hand-edited input.

use std::collections::HashMap;
use std::path::Path;

use crate::core::model::{DomainModel, MODEL_TYPE_HMM_FAMILY};
use crate::parsing::{stockholm, ParseError};
use crate::utils::io::read_maybe_gzipped;

/// Header fields accumulated since the last emitted model
#[derive(Debug, Default)]
struct PendingModel {
    name: String,
    accession: String,
    description: String,
    length: u64,
}

impl PendingModel {
    fn emit(&self) -> DomainModel {
        DomainModel {
            accession: self.accession.clone(),
            cdd_id: None,
            name: self.name.clone(),
            description: self.description.clone(),
            length: self.length,
            model_type: MODEL_TYPE_HMM_FAMILY.to_string(),
        }
    }
}

/// Parse an HMM library file, optionally refining model types from a
/// Stockholm annotation index distributed alongside it.
///
/// # Errors
///
/// Returns `ParseError::Io` if either file cannot be read, or
/// `ParseError::InvalidFormat` for a non-numeric `LENG` value.
pub fn parse_hmm_file(
    path: &Path,
    index: Option<&Path>,
) -> Result<HashMap<String, DomainModel>, ParseError> {
    let text = read_maybe_gzipped(path)?;
    let mut domains = parse_hmm_text(&text)?;

    if let Some(index) = index {
        let index_text = read_maybe_gzipped(index)?;
        stockholm::apply_index_text(&index_text, &mut domains);
    }

    Ok(domains)
}

/// Parse HMM library text into accession-keyed domain models.
///
/// Header lines after the last `HMM ` terminator produce no record.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for a non-numeric `LENG` value.
pub fn parse_hmm_text(text: &str) -> Result<HashMap<String, DomainModel>, ParseError> {
    let mut domains = HashMap::new();
    let mut pending = PendingModel::default();

    for (i, line) in text.lines().enumerate() {
        if let Some(rest) = line.strip_prefix("NAME ") {
            pending.name = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("ACC ") {
            pending.accession = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("DESC ") {
            pending.description = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("LENG ") {
            pending.length = rest.trim().parse().map_err(|_| {
                ParseError::InvalidFormat(format!(
                    "Invalid LENG on line {}: '{}'",
                    i + 1,
                    rest.trim()
                ))
            })?;
        } else if line.starts_with("TC ") {
            // trusted-cutoff thresholds are not carried into the model
        } else if line.starts_with("HMM ") {
            domains.insert(pending.accession.clone(), pending.emit());
        }
        // matrix rows, STATS lines, and record separators are ignored
    }

    Ok(domains)
}
