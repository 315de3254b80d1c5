use super::document::{Document, DocumentBody};
use crate::types::identifiers::DocumentType;

impl Document {
    /// Seed shape held by the prototype registry.
    ///
    /// Author and content start empty; a clone issued by the registry carries
    /// the same defaults until the caller's overrides are applied.
    pub fn template(
        title: impl Into<String>,
        description: impl Into<String>,
        doc_type: DocumentType,
    ) -> Self {
        Document {
            id: None,
            title: title.into(),
            author: String::new(),
            content: String::new(),
            doc_type: doc_type.as_str().to_string(),
            body: DocumentBody::Template {
                description: description.into(),
            },
        }
    }

    /// Template description, when this document is a template.
    pub fn template_description(&self) -> Option<&str> {
        match &self.body {
            DocumentBody::Template { description } => Some(description),
            _ => None,
        }
    }
}
