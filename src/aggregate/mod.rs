//! Merges constituent libraries into a
//! [`DomainModelSet`](crate::core::set::DomainModelSet).
//!
//! Libraries are merged in caller order and later libraries win on key
//! collisions in all three maps, so list order is the overwrite precedence.
//! Domain prefixes are expected to be disjoint across the libraries of one
//! set; this is not validated, and a shared prefix leaves only the last
//! library's entries in the prefix maps.

use tracing::{debug, info};

use crate::core::library::DomainLibrary;
use crate::core::set::DomainModelSet;

/// Merge libraries, paired with their location references, into a named set.
#[must_use]
pub fn aggregate_set(set_name: &str, libraries: &[(DomainLibrary, String)]) -> DomainModelSet {
    let mut set = DomainModelSet {
        set_name: set_name.to_string(),
        ..Default::default()
    };

    for (library, location) in libraries {
        debug!(
            set = set_name,
            library = %library.id,
            domains = library.domains.len(),
            "merging library into set"
        );

        set.domain_libs
            .insert(library.domain_prefix.clone(), location.clone());
        set.domain_prefix_to_dbxref_url
            .insert(library.domain_prefix.clone(), library.dbxref_prefix.clone());

        for (accession, model) in &library.domains {
            set.domain_accession_to_description
                .insert(accession.clone(), model.description.clone());
        }
    }

    info!(
        set = set_name,
        libraries = libraries.len(),
        accessions = set.accession_count(),
        "aggregated domain model set"
    );

    set
}
