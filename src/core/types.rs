use serde::{Deserialize, Serialize};

/// Unique identifier for a library within a collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryId(pub String);

impl LibraryId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::fmt::Display for LibraryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source database family for a domain library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFamily {
    /// NCBI Conserved Domain Database (position-specific scoring matrices)
    Cdd,
    /// Pfam HMM library
    Pfam,
    /// TIGRFAMs HMM library
    Tigrfams,
}

impl SourceFamily {
    /// Detect the family from the declared source URL.
    ///
    /// Matching is by distribution-site substring; `None` means the URL
    /// names no known distribution and the library cannot be built.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        if url.contains("cdd") {
            Some(Self::Cdd)
        } else if url.contains("Pfam") {
            Some(Self::Pfam)
        } else if url.contains("TIGRFAMs") {
            Some(Self::Tigrfams)
        } else {
            None
        }
    }

    /// Name of the downstream search program the canonical file is built for
    #[must_use]
    pub fn program(self) -> &'static str {
        match self {
            Self::Cdd => "rpsblast-2.2.30",
            Self::Pfam | Self::Tigrfams => "hmmscan-3.1b1",
        }
    }
}

impl std::fmt::Display for SourceFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cdd => write!(f, "CDD"),
            Self::Pfam => write!(f, "Pfam"),
            Self::Tigrfams => write!(f, "TIGRFAMs"),
        }
    }
}
