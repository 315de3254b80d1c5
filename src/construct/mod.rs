//! The three construction strategies.
//!
//! Each produces an unpersisted [`Document`](crate::document::Document): the
//! typed factory for the closed set of simple shapes, the fluent builder for
//! step-wise assembly of complex documents, and the prototype registry for
//! template cloning.

pub mod builder;
pub mod factory;
pub mod prototype;

pub use builder::{BuildError, DocumentBuilder};
pub use factory::DocumentFactory;
pub use prototype::PrototypeRegistry;
