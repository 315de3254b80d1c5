//! Typed document construction, storage, and export.
//!
//! `docuflow-core` models documents as typed records built through three
//! independent construction strategies: a typed factory over a closed set
//! of shapes, a reusable fluent builder, and prototype cloning from a
//! read-only template catalog. Documents are persisted in a thread-safe
//! store with monotonic identity assignment and rendered to tagged export
//! strings through a pluggable format registry.
//!
//! The crate is a pure in-process core: the HTTP layer, request validation,
//! and error-to-status mapping live with the caller.

pub mod construct;
pub mod document;
pub mod export;
pub mod service;
pub mod store;
pub mod types;
