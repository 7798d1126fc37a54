use serde::{Deserialize, Serialize};

/// Model type tag for profile-matrix entries
pub const MODEL_TYPE_PSSM: &str = "PSSM";

/// Default model type tag for HMM entries
pub const MODEL_TYPE_HMM_FAMILY: &str = "HMM-Family";

/// Prefix composed with the family type discovered in an annotation index
pub const MODEL_TYPE_HMM_PREFIX: &str = "HMM-";

/// One domain/family entry from a reference database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainModel {
    /// Unique key within a library
    pub accession: String,

    /// CDD numeric id, present only for profile-matrix entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdd_id: Option<String>,

    /// Short name, e.g. "COG0001" or "7tm_1"
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Model length in residues
    pub length: u64,

    /// "PSSM", "HMM-Family", or "HMM-<type>"
    pub model_type: String,
}
