use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named, merged view across one or more libraries.
///
/// All three maps are keyed so a consumer can go from any accession to its
/// description, and from an accession's prefix to the owning library and
/// its external cross-reference URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainModelSet {
    pub set_name: String,

    /// Accession -> description, merged from every constituent library
    pub domain_accession_to_description: HashMap<String, String>,

    /// Domain prefix -> external record page base URL
    pub domain_prefix_to_dbxref_url: HashMap<String, String>,

    /// Domain prefix -> library location ("<collection>/<library-id>")
    pub domain_libs: HashMap<String, String>,
}

impl DomainModelSet {
    /// Number of distinct accessions across all constituent libraries
    #[must_use]
    pub fn accession_count(&self) -> usize {
        self.domain_accession_to_description.len()
    }

    /// Number of constituent libraries (one prefix entry per library)
    #[must_use]
    pub fn library_count(&self) -> usize {
        self.domain_libs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut set = DomainModelSet {
            set_name: "All".to_string(),
            ..Default::default()
        };
        set.domain_accession_to_description
            .insert("COG0001".to_string(), "Glutamate-1-semialdehyde aminotransferase".to_string());
        set.domain_prefix_to_dbxref_url.insert(
            "COG".to_string(),
            "http://www.ncbi.nlm.nih.gov/Structure/cdd/cddsrv.cgi?uid=".to_string(),
        );
        set.domain_libs
            .insert("COG".to_string(), "PublicGeneDomains/COGs-CDD-3.12".to_string());

        let json = serde_json::to_string(&set).unwrap();
        let back: DomainModelSet = serde_json::from_str(&json).unwrap();

        assert_eq!(back.set_name, "All");
        assert_eq!(back.accession_count(), 1);
        assert_eq!(back.library_count(), 1);
    }
}
