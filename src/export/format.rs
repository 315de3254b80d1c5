use crate::document::Document;

/// Renders a document and tags the result with a format name.
///
/// Exporters are stateless: every call re-renders via the document's own
/// rendering capability. The output is formatted text standing in for the
/// named format, not real binary bytes.
pub trait DocumentExporter: Send + Sync {
    /// Canonical format identifier, uppercase.
    fn format(&self) -> &'static str;

    fn export(&self, document: &Document) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExporter;

impl DocumentExporter for PdfExporter {
    fn format(&self) -> &'static str {
        "PDF"
    }

    fn export(&self, document: &Document) -> String {
        format!("PDF Export: {}", document.render())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WordExporter;

impl DocumentExporter for WordExporter {
    fn format(&self) -> &'static str {
        "WORD"
    }

    fn export(&self, document: &Document) -> String {
        format!("Word Export: {}", document.render())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExcelExporter;

impl DocumentExporter for ExcelExporter {
    fn format(&self) -> &'static str {
        "EXCEL"
    }

    fn export(&self, document: &Document) -> String {
        format!("Excel Export: {}", document.render())
    }
}
