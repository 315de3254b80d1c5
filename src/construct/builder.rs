use thiserror::Error;

use crate::document::{Document, DocumentBody};

const DEFAULT_AUTHOR: &str = "Unknown";
const DEFAULT_TYPE: &str = "COMPLEX";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("title is required to build a complex document")]
    MissingTitle,
    #[error("content is required to build a complex document")]
    MissingContent,
}

/// Step-wise assembler for complex documents.
///
/// A builder is long-lived: [`build`](Self::build) constructs the document in
/// one shot and resets the builder's own state, so the same instance can be
/// reused for an unrelated build without leaking prior fields. A failed build
/// leaves the state untouched for correction.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    title: Option<String>,
    author: Option<String>,
    content: Option<String>,
    doc_type: Option<String>,
    header: Option<String>,
    footer: Option<String>,
    sections: Vec<String>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(&mut self, author: impl Into<String>) -> &mut Self {
        self.author = Some(author.into());
        self
    }

    pub fn content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = Some(content.into());
        self
    }

    pub fn doc_type(&mut self, doc_type: impl Into<String>) -> &mut Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    pub fn header(&mut self, header: impl Into<String>) -> &mut Self {
        self.header = Some(header.into());
        self
    }

    pub fn footer(&mut self, footer: impl Into<String>) -> &mut Self {
        self.footer = Some(footer.into());
        self
    }

    /// Replace the section list wholesale.
    pub fn sections(&mut self, sections: Vec<String>) -> &mut Self {
        self.sections = sections;
        self
    }

    /// Append a single section.
    pub fn add_section(&mut self, section: impl Into<String>) -> &mut Self {
        self.sections.push(section.into());
        self
    }

    /// Validate and construct the complex document.
    ///
    /// Title and content must be set and non-blank; a missing author defaults
    /// to `"Unknown"`, a missing type to `"COMPLEX"`. On success the builder
    /// is reset to empty. Fields are bound at construction; the returned
    /// document is never mutated through the builder afterward.
    pub fn build(&mut self) -> Result<Document, BuildError> {
        if !filled(&self.title) {
            return Err(BuildError::MissingTitle);
        }
        if !filled(&self.content) {
            return Err(BuildError::MissingContent);
        }

        let state = std::mem::take(self);

        Ok(Document {
            id: None,
            title: state.title.unwrap_or_default(),
            author: state
                .author
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            content: state.content.unwrap_or_default(),
            doc_type: state
                .doc_type
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            body: DocumentBody::Complex {
                header: state.header,
                footer: state.footer,
                sections: state.sections,
            },
        })
    }

    /// Convenience for the standard layout: fixed header and footer, complex
    /// type tag.
    pub fn build_standard(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Document, BuildError> {
        self.title(title)
            .content(content)
            .author(author)
            .doc_type(DEFAULT_TYPE)
            .header("DocuFlow System")
            .footer("Page 1")
            .build()
    }
}

fn filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}
