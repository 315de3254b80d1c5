//! Thread-safe keyed persistence for documents.
//!
//! [`DocumentStore`] is the substitution boundary: construction and export
//! layers only ever see the trait, so a persistent backend can replace
//! [`InMemoryDocumentStore`] without touching them.

mod memory;

pub use memory::InMemoryDocumentStore;

use thiserror::Error;

use crate::document::Document;
use crate::types::DocumentId;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Update against an identity that was never assigned or has been
    /// deleted.
    #[error("document with id {0} does not exist")]
    MissingDocument(DocumentId),
    /// Backend-specific failure. Never produced by the in-memory store.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Keyed document storage with store-assigned, strictly increasing
/// identities.
///
/// All operations are safe to call from multiple concurrent callers without
/// external locking. Identity assignment is atomic and gap-free: no two
/// saves observe the same value, no value is skipped, and no value is reused
/// after deletion.
pub trait DocumentStore: Send + Sync {
    /// Assign the next identity and persist the document. Returns the
    /// document carrying its assigned id.
    fn save(&self, document: Document) -> Result<Document, StoreError>;

    /// The stored document, or `None` for an unknown id. A missing key is
    /// not an error.
    fn find_by_id(&self, id: DocumentId) -> Result<Option<Document>, StoreError>;

    /// Snapshot of all stored documents, in no particular order.
    fn find_all(&self) -> Result<Vec<Document>, StoreError>;

    /// Linear scan with a case-insensitive type-tag match.
    fn find_by_type(&self, doc_type: &str) -> Result<Vec<Document>, StoreError>;

    /// Replace the value stored under `id`, which must already exist.
    /// Identity is preserved regardless of what the replacement carries.
    fn update(&self, id: DocumentId, document: Document) -> Result<Document, StoreError>;

    /// Remove the document under `id`. Returns whether anything was removed;
    /// a missing id is a no-op, not an error.
    fn delete_by_id(&self, id: DocumentId) -> Result<bool, StoreError>;

    fn exists_by_id(&self, id: DocumentId) -> Result<bool, StoreError>;

    fn count(&self) -> Result<usize, StoreError>;

    /// Remove every document. Identity assignment is unaffected: ids of
    /// cleared documents are never handed out again.
    fn clear(&self) -> Result<(), StoreError>;
}
