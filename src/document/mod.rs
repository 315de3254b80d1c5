pub mod document;
mod template;

pub use crate::types::identifiers::{DocumentId, DocumentType};
pub use document::{Document, DocumentBody};
