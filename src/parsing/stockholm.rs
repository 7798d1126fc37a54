//! Stockholm annotation index (`Pfam-A.full`) scan for model types.
//!
//! Pfam distributes a full alignment whose `#=GF` annotation lines carry
//! the family type (Family, Domain, Repeat, Motif). Only the `AC` and `TP`
//! tags matter here; the alignments themselves are skipped.

use std::collections::HashMap;

use crate::core::model::{DomainModel, MODEL_TYPE_HMM_PREFIX};

/// Marker opening a new Stockholm record ("# STOCKHOLM 1.0")
const RECORD_MARKER: &str = "# STOCK";

const ACCESSION_TAG: &str = "#=GF AC ";
const TYPE_TAG: &str = "#=GF TP ";

/// Refine `model_type` for the models named by the annotation index.
///
/// A `TP` line applies to the most recent `AC` accession within the same
/// record; the record marker resets it so a stray `TP` can never attach to
/// the previous record's accession. Accessions absent from `domains` are
/// skipped; the index routinely covers families that the library filter
/// dropped.
pub fn apply_index_text(text: &str, domains: &mut HashMap<String, DomainModel>) {
    let mut accession: Option<String> = None;

    for line in text.lines() {
        if line.starts_with(RECORD_MARKER) {
            accession = None;
        } else if let Some(rest) = line.strip_prefix(ACCESSION_TAG) {
            accession = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(TYPE_TAG) {
            if let Some(acc) = &accession {
                if let Some(model) = domains.get_mut(acc) {
                    model.model_type = format!("{}{}", MODEL_TYPE_HMM_PREFIX, rest.trim());
                }
            }
        }
    }
}
