use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store-assigned identity of a persisted document.
///
/// Values are strictly increasing from 1, assigned exactly once, and never
/// reused after deletion. A document has no id until the store accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(u64);

impl DocumentId {
    pub fn new(value: u64) -> Self {
        DocumentId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown document type: {tag} (expected one of {})", .expected.join(", "))]
pub struct InvalidTypeError {
    pub tag: String,
    pub expected: Vec<&'static str>,
}

impl InvalidTypeError {
    pub(crate) fn new(tag: &str, expected: &[DocumentType]) -> Self {
        InvalidTypeError {
            tag: tag.to_string(),
            expected: expected.iter().map(|t| t.as_str()).collect(),
        }
    }
}

/// The closed set of document type tags.
///
/// Tags are matched case-insensitively everywhere; the canonical spelling is
/// uppercase. The factory can only instantiate the [`CREATABLE`] subset;
/// complex documents come from the builder, templates from the registry.
///
/// [`CREATABLE`]: DocumentType::CREATABLE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Invoice,
    Report,
    Contract,
    Complex,
    Template,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Invoice,
        DocumentType::Report,
        DocumentType::Contract,
        DocumentType::Complex,
        DocumentType::Template,
    ];

    /// Types the factory instantiates directly.
    pub const CREATABLE: [DocumentType; 3] = [
        DocumentType::Invoice,
        DocumentType::Report,
        DocumentType::Contract,
    ];

    /// Parse a tag against the full set, case-insensitively.
    pub fn parse(tag: &str) -> Result<Self, InvalidTypeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| InvalidTypeError::new(tag, &Self::ALL))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "INVOICE",
            DocumentType::Report => "REPORT",
            DocumentType::Contract => "CONTRACT",
            DocumentType::Complex => "COMPLEX",
            DocumentType::Template => "TEMPLATE",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
