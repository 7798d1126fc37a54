//! Parser for the CDD tabular index (`cddid.tbl`).
//!
//! One domain per line, tab-delimited:
//!
//! ```text
//! cdd_id<TAB>accession<TAB>name<TAB>description<TAB>length
//! ```
//!
//! A single index file covers several sub-databases (COG, NCBI-curated cd,
//! SMART); the accession prefix selects which one lands in a given library.

use std::collections::HashMap;
use std::path::Path;

use crate::core::model::{DomainModel, MODEL_TYPE_PSSM};
use crate::parsing::ParseError;
use crate::utils::io::read_maybe_gzipped;

/// Parse a CDD index file, keeping records whose accession starts with `prefix`.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` for lines with fewer than five fields or a
/// non-numeric length.
pub fn parse_cdd_table_file(
    path: &Path,
    prefix: &str,
) -> Result<HashMap<String, DomainModel>, ParseError> {
    let text = read_maybe_gzipped(path)?;
    parse_cdd_table_text(&text, prefix)
}

/// Parse CDD index text, keeping records whose accession starts with `prefix`.
///
/// Filtering is an exact, case-sensitive prefix match; non-matching records
/// are dropped without error. A structurally invalid line aborts the whole
/// parse, matching records included or not.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for lines with fewer than five
/// tab-separated fields or a non-numeric length.
pub fn parse_cdd_table_text(
    text: &str,
    prefix: &str,
) -> Result<HashMap<String, DomainModel>, ParseError> {
    let mut domains = HashMap::new();

    for (i, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 5 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {} has {} tab-separated fields, expected 5",
                line_num,
                fields.len()
            )));
        }

        let accession = fields[1].to_string();
        let length: u64 = fields[4].trim().parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid length on line {}: '{}'",
                line_num, fields[4]
            ))
        })?;

        if !accession.starts_with(prefix) {
            continue;
        }

        domains.insert(
            accession.clone(),
            DomainModel {
                accession,
                cdd_id: Some(fields[0].to_string()),
                name: fields[2].to_string(),
                description: fields[3].to_string(),
                length,
                model_type: MODEL_TYPE_PSSM.to_string(),
            },
        );
    }

    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "223558\tCOG0001\tCOG0001\tGlutamate-1-semialdehyde aminotransferase\t425\n\
                          223559\tCOG0002\tCOG0002\tAcetylglutamate semialdehyde dehydrogenase\t344\n\
                          238005\tcd00009\tAAA\tATPases associated with a variety of cellular activities\t151\n";

    #[test]
    fn test_parse_copies_fields_verbatim() {
        let domains = parse_cdd_table_text(SAMPLE, "COG").unwrap();
        assert_eq!(domains.len(), 2);

        let cog1 = &domains["COG0001"];
        assert_eq!(cog1.cdd_id, Some("223558".to_string()));
        assert_eq!(cog1.accession, "COG0001");
        assert_eq!(cog1.name, "COG0001");
        assert_eq!(
            cog1.description,
            "Glutamate-1-semialdehyde aminotransferase"
        );
        assert_eq!(cog1.length, 425);
        assert_eq!(cog1.model_type, "PSSM");
    }

    #[test]
    fn test_prefix_filter_drops_non_matching_records() {
        let domains = parse_cdd_table_text(SAMPLE, "cd").unwrap();
        assert_eq!(domains.len(), 1);
        assert!(domains.contains_key("cd00009"));
        assert!(!domains.contains_key("COG0001"));
    }

    #[test]
    fn test_prefix_filter_is_case_sensitive() {
        let domains = parse_cdd_table_text(SAMPLE, "cog").unwrap();
        assert!(domains.is_empty());
    }

    #[test]
    fn test_short_line_is_fatal() {
        let text = "223558\tCOG0001\tCOG0001\t425\n";
        let result = parse_cdd_table_text(text, "COG");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_short_line_is_fatal_even_outside_prefix() {
        // fail-fast applies to every line, not just the ones kept
        let text = "223558\tCOG0001\tCOG0001\tdesc\t425\nbroken line\n";
        let result = parse_cdd_table_text(text, "COG");
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_length_is_fatal() {
        let text = "223558\tCOG0001\tCOG0001\tdesc\tnot-a-number\n";
        let result = parse_cdd_table_text(text, "COG");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_extra_fields_ignored() {
        // descriptions containing tabs split into extra fields; the first
        // five positions still define the record
        let text = "1\tCOG9999\tname\tdesc\t10\textra\n";
        let domains = parse_cdd_table_text(text, "COG").unwrap();
        assert_eq!(domains["COG9999"].description, "desc");
        assert_eq!(domains["COG9999"].length, 10);
    }

    #[test]
    fn test_reparse_is_idempotent() {
        let first = parse_cdd_table_text(SAMPLE, "COG").unwrap();
        let second = parse_cdd_table_text(SAMPLE, "COG").unwrap();
        assert_eq!(first, second);
    }
}
