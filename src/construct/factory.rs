use crate::document::Document;
use crate::types::identifiers::{DocumentType, InvalidTypeError};

/// Typed factory over the closed set of directly constructible shapes.
///
/// The right strategy when no construction-time assembly is needed: the tag
/// picks the variant, the base fields are assigned, and the variant's extra
/// attributes start at their defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentFactory;

impl DocumentFactory {
    /// Create a document from a case-insensitive type tag.
    ///
    /// Fails with [`InvalidTypeError`] naming the offending tag and the valid
    /// set when the tag is not one of `INVOICE`, `REPORT`, `CONTRACT`.
    pub fn create(
        &self,
        tag: &str,
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Document, InvalidTypeError> {
        match tag.to_ascii_uppercase().as_str() {
            "INVOICE" => Ok(Document::invoice(title, author, content, "", 0.0)),
            "REPORT" => Ok(Document::report(title, author, content, "")),
            "CONTRACT" => Ok(Document::contract(title, author, content, "", "")),
            _ => Err(InvalidTypeError::new(tag, &DocumentType::CREATABLE)),
        }
    }
}
