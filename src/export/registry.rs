use std::collections::BTreeMap;

use thiserror::Error;

use super::format::{DocumentExporter, ExcelExporter, PdfExporter, WordExporter};
use crate::document::Document;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("no exporter registered for format {format} (document type {doc_type})")]
    UnsupportedFormat { format: String, doc_type: String },
}

/// Maps format identifiers to exporters.
///
/// Populated once at startup; lookup is case-insensitive (identifiers are
/// canonicalized to uppercase). No rendered output is cached: each export
/// call re-renders the document.
#[derive(Default)]
pub struct ExportRegistry {
    exporters: BTreeMap<String, Box<dyn DocumentExporter>>,
}

impl ExportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the standard PDF, WORD, and EXCEL exporters.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PdfExporter));
        registry.register(Box::new(WordExporter));
        registry.register(Box::new(ExcelExporter));
        registry
    }

    pub fn register(&mut self, exporter: Box<dyn DocumentExporter>) {
        self.exporters
            .insert(exporter.format().to_ascii_uppercase(), exporter);
    }

    /// Registered format identifiers, lexicographically ordered.
    pub fn formats(&self) -> Vec<String> {
        self.exporters.keys().cloned().collect()
    }

    /// Render `document` through the exporter registered for `format`.
    ///
    /// Fails with [`ExportError::UnsupportedFormat`] carrying the requested
    /// format and the document's type tag when no exporter matches.
    pub fn export(&self, document: &Document, format: &str) -> Result<String, ExportError> {
        let exporter = self.exporters.get(&format.to_ascii_uppercase()).ok_or_else(|| {
            ExportError::UnsupportedFormat {
                format: format.to_string(),
                doc_type: document.doc_type.clone(),
            }
        })?;

        Ok(exporter.export(document))
    }
}
