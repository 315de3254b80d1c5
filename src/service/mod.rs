//! Orchestration over the construction strategies, the store, and the
//! export layer.
//!
//! This is the surface the request layer calls: it routes each creation
//! request to its strategy, persists the result, applies merge semantics on
//! update, and translates lookup misses into typed not-found failures.

use log::{debug, info};
use parking_lot::Mutex;
use thiserror::Error;

use crate::construct::{BuildError, DocumentBuilder, DocumentFactory, PrototypeRegistry};
use crate::document::Document;
use crate::export::{ExportError, ExportRegistry};
use crate::store::{DocumentStore, InMemoryDocumentStore, StoreError};
use crate::types::{DocumentId, DocumentType, InvalidTypeError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("document not found with id {0}")]
    DocumentNotFound(DocumentId),
    #[error("template not found: {0}")]
    TemplateNotFound(String),
    #[error(transparent)]
    InvalidType(#[from] InvalidTypeError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Field changes for [`DocumentService::update_document`]; `None` leaves a
/// field untouched.
#[derive(Debug, Clone, Default)]
pub struct DocumentUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

/// Thin composition layer over a [`DocumentStore`].
///
/// The builder instance is long-lived and shared behind a mutex; its
/// reset-after-build contract keeps unrelated build calls from leaking
/// fields into each other. The prototype catalog and export registry are
/// fixed at construction.
pub struct DocumentService<S = InMemoryDocumentStore> {
    store: S,
    factory: DocumentFactory,
    builder: Mutex<DocumentBuilder>,
    prototypes: PrototypeRegistry,
    exporters: ExportRegistry,
}

impl Default for DocumentService<InMemoryDocumentStore> {
    fn default() -> Self {
        Self::new(
            InMemoryDocumentStore::new(),
            PrototypeRegistry::builtin().clone(),
            ExportRegistry::standard(),
        )
    }
}

impl<S: DocumentStore> DocumentService<S> {
    pub fn new(store: S, prototypes: PrototypeRegistry, exporters: ExportRegistry) -> Self {
        DocumentService {
            store,
            factory: DocumentFactory,
            builder: Mutex::new(DocumentBuilder::new()),
            prototypes,
            exporters,
        }
    }

    /// Factory path: typed creation over the closed tag set, then persist.
    pub fn create_simple_document(
        &self,
        doc_type: &str,
        title: &str,
        author: &str,
        content: &str,
    ) -> Result<Document, ServiceError> {
        let document = self.factory.create(doc_type, title, author, content)?;
        let document = self.store.save(document)?;
        info!("created {document} via factory");
        Ok(document)
    }

    /// Builder path: step-wise assembly of a complex document, then persist.
    pub fn create_complex_document(
        &self,
        title: &str,
        author: &str,
        content: &str,
        header: Option<&str>,
        footer: Option<&str>,
        sections: Vec<String>,
    ) -> Result<Document, ServiceError> {
        let document = {
            let mut builder = self.builder.lock();
            builder.title(title).author(author).content(content).sections(sections);
            if let Some(header) = header {
                builder.header(header);
            }
            if let Some(footer) = footer {
                builder.footer(footer);
            }
            builder.build()?
        };

        let document = self.store.save(document)?;
        info!("created {document} via builder");
        Ok(document)
    }

    /// Prototype path: clone the named template, apply overrides, persist.
    ///
    /// Author is always applied; content only when supplied.
    pub fn create_from_template(
        &self,
        template_name: &str,
        author: &str,
        content: Option<&str>,
    ) -> Result<Document, ServiceError> {
        let mut document = self
            .prototypes
            .get(template_name)
            .ok_or_else(|| ServiceError::TemplateNotFound(template_name.to_string()))?;

        document.author = author.to_string();
        if let Some(content) = content {
            document.content = content.to_string();
        }

        let document = self.store.save(document)?;
        info!("created {document} from template '{template_name}'");
        Ok(document)
    }

    pub fn document(&self, id: DocumentId) -> Result<Document, ServiceError> {
        self.store
            .find_by_id(id)?
            .ok_or(ServiceError::DocumentNotFound(id))
    }

    pub fn documents(&self) -> Result<Vec<Document>, ServiceError> {
        Ok(self.store.find_all()?)
    }

    /// Type-filtered query. The tag must be one of the known types; the
    /// match itself is case-insensitive.
    pub fn documents_by_type(&self, doc_type: &str) -> Result<Vec<Document>, ServiceError> {
        DocumentType::parse(doc_type)?;
        Ok(self.store.find_by_type(doc_type)?)
    }

    /// Merge-update: blank title/author changes are ignored; content
    /// overwrites whenever supplied, even when empty.
    pub fn update_document(
        &self,
        id: DocumentId,
        changes: DocumentUpdate,
    ) -> Result<Document, ServiceError> {
        let mut document = self.document(id)?;

        if let Some(title) = changes.title {
            if !title.trim().is_empty() {
                document.title = title;
            }
        }
        if let Some(author) = changes.author {
            if !author.trim().is_empty() {
                document.author = author;
            }
        }
        if let Some(content) = changes.content {
            document.content = content;
        }

        let document = self.store.update(id, document)?;
        debug!("updated document {id}");
        Ok(document)
    }

    pub fn delete_document(&self, id: DocumentId) -> Result<(), ServiceError> {
        if !self.store.exists_by_id(id)? {
            return Err(ServiceError::DocumentNotFound(id));
        }

        self.store.delete_by_id(id)?;
        info!("deleted document {id}");
        Ok(())
    }

    /// Export a persisted document; re-renders on every call.
    pub fn export_document(&self, id: DocumentId, format: &str) -> Result<String, ServiceError> {
        let document = self.document(id)?;
        Ok(self.exporters.export(&document, format)?)
    }

    /// Export a document the caller already holds.
    pub fn export(&self, document: &Document, format: &str) -> Result<String, ServiceError> {
        Ok(self.exporters.export(document, format)?)
    }

    /// Names of the registered templates.
    pub fn template_names(&self) -> Vec<String> {
        self.prototypes.names()
    }

    /// Owned copies of the full template catalog.
    pub fn templates(&self) -> Vec<Document> {
        self.prototypes.templates()
    }

    pub fn count_documents(&self) -> Result<usize, ServiceError> {
        Ok(self.store.count()?)
    }
}
