use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::document::{Document, DocumentType};

static BUILTIN: Lazy<PrototypeRegistry> = Lazy::new(|| {
    PrototypeRegistry::with_templates([
        (
            "basic-report",
            Document::template("Basic Report", "Standard report template", DocumentType::Report),
        ),
        (
            "employment-contract",
            Document::template(
                "Employment Contract",
                "Standard employment contract template",
                DocumentType::Contract,
            ),
        ),
        (
            "sales-invoice",
            Document::template("Sales Invoice", "Basic sales invoice template", DocumentType::Invoice),
        ),
    ])
});

/// Read-only catalog of named template prototypes.
///
/// Populated once, never mutated afterward. Callers only ever receive owned
/// deep copies; cloning is the sole way to obtain a mutable instance derived
/// from the catalog.
#[derive(Debug, Clone)]
pub struct PrototypeRegistry {
    templates: BTreeMap<String, Document>,
}

impl PrototypeRegistry {
    /// The process-wide built-in catalog, initialized on first use.
    pub fn builtin() -> &'static PrototypeRegistry {
        &BUILTIN
    }

    pub fn with_templates<N, I>(entries: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Document)>,
    {
        PrototypeRegistry {
            templates: entries
                .into_iter()
                .map(|(name, template)| (name.into(), template))
                .collect(),
        }
    }

    /// An independent deep copy of the named template, if registered.
    ///
    /// The templates hold only owned strings, so a plain clone shares no
    /// mutable state with the catalog entry or with other issued clones.
    pub fn get(&self, name: &str) -> Option<Document> {
        self.templates.get(name).cloned()
    }

    /// Registered template names, lexicographically ordered.
    pub fn names(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    /// Owned copies of every registered template.
    pub fn templates(&self) -> Vec<Document> {
        self.templates.values().cloned().collect()
    }
}
