use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use parking_lot::RwLock;

use super::{DocumentStore, StoreError};
use crate::document::Document;
use crate::types::DocumentId;

/// HashMap-backed store.
///
/// Identities come from an atomic counter, so concurrent saves observe
/// unique, gap-free values without taking the map lock for allocation.
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<DocumentId, Document>>,
    next_id: AtomicU64,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        InMemoryDocumentStore {
            documents: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn save(&self, mut document: Document) -> Result<Document, StoreError> {
        let id = DocumentId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        document.id = Some(id);

        self.documents.write().insert(id, document.clone());
        debug!("stored document {id}");

        Ok(document)
    }

    fn find_by_id(&self, id: DocumentId) -> Result<Option<Document>, StoreError> {
        Ok(self.documents.read().get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Document>, StoreError> {
        Ok(self.documents.read().values().cloned().collect())
    }

    fn find_by_type(&self, doc_type: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .documents
            .read()
            .values()
            .filter(|doc| doc.doc_type.eq_ignore_ascii_case(doc_type))
            .cloned()
            .collect())
    }

    fn update(&self, id: DocumentId, mut document: Document) -> Result<Document, StoreError> {
        let mut documents = self.documents.write();
        if !documents.contains_key(&id) {
            return Err(StoreError::MissingDocument(id));
        }

        document.id = Some(id);
        documents.insert(id, document.clone());
        debug!("updated document {id}");

        Ok(document)
    }

    fn delete_by_id(&self, id: DocumentId) -> Result<bool, StoreError> {
        let removed = self.documents.write().remove(&id).is_some();
        if removed {
            debug!("deleted document {id}");
        }
        Ok(removed)
    }

    fn exists_by_id(&self, id: DocumentId) -> Result<bool, StoreError> {
        Ok(self.documents.read().contains_key(&id))
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.documents.read().len())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.documents.write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str) -> Document {
        Document::report(title, "A", "C", "S")
    }

    #[test]
    fn save_assigns_ids_from_one() {
        let store = InMemoryDocumentStore::new();

        let first = store.save(doc("first")).unwrap();
        let second = store.save(doc("second")).unwrap();

        assert_eq!(first.id, Some(DocumentId::new(1)));
        assert_eq!(second.id, Some(DocumentId::new(2)));
    }

    #[test]
    fn update_missing_id_fails() {
        let store = InMemoryDocumentStore::new();

        let err = store.update(DocumentId::new(9), doc("x")).unwrap_err();
        assert!(matches!(err, StoreError::MissingDocument(id) if id == DocumentId::new(9)));
    }

    #[test]
    fn update_preserves_identity() {
        let store = InMemoryDocumentStore::new();
        let saved = store.save(doc("before")).unwrap();
        let id = saved.id.unwrap();

        // Replacement arrives without an id; the stored one is stamped on.
        let updated = store.update(id, doc("after")).unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(store.find_by_id(id).unwrap().unwrap().title, "after");
    }

    #[test]
    fn delete_missing_is_a_noop() {
        let store = InMemoryDocumentStore::new();
        assert!(!store.delete_by_id(DocumentId::new(1)).unwrap());
    }

    #[test]
    fn clear_keeps_the_identity_counter() {
        let store = InMemoryDocumentStore::new();
        store.save(doc("a")).unwrap();
        store.save(doc("b")).unwrap();

        store.clear().unwrap();
        assert_eq!(store.count().unwrap(), 0);

        let next = store.save(doc("c")).unwrap();
        assert_eq!(next.id, Some(DocumentId::new(3)));
    }
}
