use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::{DocumentId, DocumentType};

/// Variant-specific payload.
///
/// Every shape shares the base record's title/author/content; the payload
/// carries only what the variant adds. Rendering dispatches on this enum,
/// never on a runtime type check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentBody {
    Invoice {
        invoice_number: String,
        amount: f64,
    },
    Report {
        summary: String,
    },
    Contract {
        company: String,
        signature: String,
    },
    Complex {
        header: Option<String>,
        footer: Option<String>,
        sections: Vec<String>,
    },
    Template {
        description: String,
    },
}

/// A typed record with a self-rendering capability.
///
/// `id` is `None` until the store persists the document; only the store ever
/// assigns it. The type tag is set by whichever construction strategy built
/// the document and is matched case-insensitively in queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Option<DocumentId>,
    pub title: String,
    pub author: String,
    pub content: String,
    pub doc_type: String,
    pub body: DocumentBody,
}

impl Document {
    fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        doc_type: impl Into<String>,
        body: DocumentBody,
    ) -> Self {
        Document {
            id: None,
            title: title.into(),
            author: author.into(),
            content: content.into(),
            doc_type: doc_type.into(),
            body,
        }
    }

    pub fn invoice(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        invoice_number: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self::new(
            title,
            author,
            content,
            DocumentType::Invoice.as_str(),
            DocumentBody::Invoice {
                invoice_number: invoice_number.into(),
                amount,
            },
        )
    }

    pub fn report(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self::new(
            title,
            author,
            content,
            DocumentType::Report.as_str(),
            DocumentBody::Report {
                summary: summary.into(),
            },
        )
    }

    pub fn contract(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        company: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self::new(
            title,
            author,
            content,
            DocumentType::Contract.as_str(),
            DocumentBody::Contract {
                company: company.into(),
                signature: signature.into(),
            },
        )
    }

    /// Complex documents keep their caller-supplied tag; the builder defaults
    /// it to `COMPLEX`.
    pub fn complex(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        doc_type: impl Into<String>,
        header: Option<String>,
        footer: Option<String>,
        sections: Vec<String>,
    ) -> Self {
        Self::new(
            title,
            author,
            content,
            doc_type,
            DocumentBody::Complex {
                header,
                footer,
                sections,
            },
        )
    }

    /// Render the document to its display string.
    ///
    /// Pure and total: every variant renders from its own attributes alone.
    pub fn render(&self) -> String {
        match &self.body {
            DocumentBody::Invoice {
                invoice_number,
                amount,
            } => format!(
                "Invoice Document:\nInvoice Number: {invoice_number}\nAmount: {amount}\nAuthor: {}\nContent: {}",
                self.author, self.content,
            ),
            DocumentBody::Report { summary } => format!(
                "Report Document:\nTitle: {}\nAuthor: {}\nSummary: {summary}\nContent: {}",
                self.title, self.author, self.content,
            ),
            DocumentBody::Contract { company, signature } => format!(
                "Contract Document:\nTitle: {}\nAuthor: {}\nCompany: {company}\nSignature: {signature}\nContent: {}",
                self.title, self.author, self.content,
            ),
            DocumentBody::Complex {
                header,
                footer,
                sections,
            } => {
                let mut out = String::new();
                out.push_str("=== Complex Document ===\n");
                out.push_str(&format!("Title: {}\n", self.title));
                out.push_str(&format!("Author: {}\n", self.author));
                out.push_str(&format!("Type: {}\n", self.doc_type));
                out.push_str(&format!("Header: {}\n", header.as_deref().unwrap_or("N/A")));
                out.push_str(&format!("Content: {}\n\n", self.content));

                if !sections.is_empty() {
                    out.push_str("Sections:\n");
                    for section in sections {
                        out.push_str(&format!(" - {section}\n"));
                    }
                }

                out.push_str(&format!("\nFooter: {}\n", footer.as_deref().unwrap_or("N/A")));
                out
            }
            DocumentBody::Template { .. } => format!(
                "Document generated from template: {}\nContent: {}",
                self.title, self.content,
            ),
        }
    }
}

/// One-line summary for logs and diagnostics; `render` is the full form.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(
                f,
                "Document{{id={id}, title='{}', author='{}', type='{}'}}",
                self.title, self.author, self.doc_type,
            ),
            None => write!(
                f,
                "Document{{id=unassigned, title='{}', author='{}', type='{}'}}",
                self.title, self.author, self.doc_type,
            ),
        }
    }
}
