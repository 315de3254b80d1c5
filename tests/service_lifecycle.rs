use docuflow_core::document::{Document, DocumentBody};
use docuflow_core::service::{DocumentService, DocumentUpdate, ServiceError};
use docuflow_core::types::DocumentId;

fn service() -> DocumentService {
    let _ = env_logger::builder().is_test(true).try_init();
    DocumentService::default()
}

#[test]
fn factory_create_then_lookup_round_trips() {
    let service = service();

    let created = service
        .create_simple_document("INVOICE", "T", "A", "C")
        .unwrap();
    let id = created.id.unwrap();

    let found = service.document(id).unwrap();
    assert_eq!(found, created);

    let rendered = found.render();
    assert!(rendered.contains("Invoice Document"));
    assert!(rendered.contains("Author: A"));
    assert!(rendered.contains("Content: C"));
}

#[test]
fn factory_create_rejects_unknown_types() {
    let service = service();

    let err = service
        .create_simple_document("UNKNOWN", "T", "A", "C")
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidType(ref e)
            if e.tag == "UNKNOWN" && e.expected == ["INVOICE", "REPORT", "CONTRACT"]
    ));
    assert_eq!(service.count_documents().unwrap(), 0);
}

#[test]
fn builder_create_persists_a_complex_document() {
    let service = service();

    let created = service
        .create_complex_document(
            "T",
            "Ana",
            "body",
            Some("Top"),
            None,
            vec!["s1".into(), "s2".into()],
        )
        .unwrap();

    assert_eq!(created.doc_type, "COMPLEX");
    match &created.body {
        DocumentBody::Complex {
            header,
            footer,
            sections,
        } => {
            assert_eq!(header.as_deref(), Some("Top"));
            assert!(footer.is_none());
            assert_eq!(sections.len(), 2);
        }
        other => panic!("builder path produced a non-complex body: {other:?}"),
    }
}

#[test]
fn builder_create_failure_reports_invalid_state() {
    let service = service();

    let err = service
        .create_complex_document("   ", "Ana", "body", None, None, Vec::new())
        .unwrap_err();
    assert!(matches!(err, ServiceError::Build(_)));
}

#[test]
fn template_create_applies_overrides() {
    let service = service();

    let created = service
        .create_from_template("basic-report", "Ana", Some("filled in"))
        .unwrap();
    assert_eq!(created.author, "Ana");
    assert_eq!(created.content, "filled in");
    assert_eq!(created.doc_type, "REPORT");
    assert!(created.id.is_some());

    // Omitted content keeps the template default.
    let bare = service
        .create_from_template("basic-report", "Bo", None)
        .unwrap();
    assert_eq!(bare.author, "Bo");
    assert!(bare.content.is_empty());
}

#[test]
fn template_create_does_not_disturb_the_catalog() {
    let service = service();

    service
        .create_from_template("basic-report", "Ana", Some("mutated"))
        .unwrap();

    let fresh = service
        .create_from_template("basic-report", "Bo", None)
        .unwrap();
    assert!(fresh.content.is_empty());
}

#[test]
fn unknown_template_is_not_found() {
    let service = service();

    let err = service
        .create_from_template("no-such-template", "Ana", None)
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::TemplateNotFound(ref name) if name == "no-such-template"
    ));
}

#[test]
fn lookup_of_missing_id_is_not_found() {
    let service = service();

    let err = service.document(DocumentId::new(42)).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::DocumentNotFound(id) if id == DocumentId::new(42)
    ));
}

#[test]
fn update_with_only_a_title_leaves_other_fields_alone() {
    let service = service();
    let id = service
        .create_simple_document("REPORT", "T", "A", "C")
        .unwrap()
        .id
        .unwrap();

    let updated = service
        .update_document(
            id,
            DocumentUpdate {
                title: Some("New title".into()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.author, "A");
    assert_eq!(updated.content, "C");
    assert_eq!(updated.id, Some(id));
}

#[test]
fn update_skips_blank_title_and_author() {
    let service = service();
    let id = service
        .create_simple_document("REPORT", "T", "A", "C")
        .unwrap()
        .id
        .unwrap();

    let updated = service
        .update_document(
            id,
            DocumentUpdate {
                title: Some("   ".into()),
                author: Some(String::new()),
                content: None,
            },
        )
        .unwrap();

    assert_eq!(updated.title, "T");
    assert_eq!(updated.author, "A");
}

#[test]
fn update_overwrites_content_even_to_empty() {
    let service = service();
    let id = service
        .create_simple_document("REPORT", "T", "A", "C")
        .unwrap()
        .id
        .unwrap();

    let updated = service
        .update_document(
            id,
            DocumentUpdate {
                content: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(updated.content.is_empty());
    assert_eq!(service.document(id).unwrap().content, "");
}

#[test]
fn update_of_missing_id_is_not_found() {
    let service = service();

    let err = service
        .update_document(DocumentId::new(9), DocumentUpdate::default())
        .unwrap_err();
    assert!(matches!(err, ServiceError::DocumentNotFound(_)));
}

#[test]
fn delete_removes_and_reports_missing_ids() {
    let service = service();
    let id = service
        .create_simple_document("REPORT", "T", "A", "C")
        .unwrap()
        .id
        .unwrap();

    service.delete_document(id).unwrap();
    assert!(matches!(
        service.document(id).unwrap_err(),
        ServiceError::DocumentNotFound(_)
    ));
    assert!(matches!(
        service.delete_document(id).unwrap_err(),
        ServiceError::DocumentNotFound(_)
    ));
}

#[test]
fn documents_by_type_matches_case_insensitively() {
    let service = service();
    service
        .create_simple_document("INVOICE", "i", "A", "C")
        .unwrap();
    service
        .create_simple_document("REPORT", "r", "A", "C")
        .unwrap();

    let lower = service.documents_by_type("invoice").unwrap();
    let upper = service.documents_by_type("INVOICE").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].title, "i");
}

#[test]
fn documents_by_type_rejects_unknown_tags() {
    let service = service();

    let err = service.documents_by_type("MEMO").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidType(ref e) if e.tag == "MEMO"
    ));
}

#[test]
fn export_document_tags_and_rerenders() {
    let service = service();
    let created = service
        .create_simple_document("INVOICE", "T", "A", "C")
        .unwrap();
    let id = created.id.unwrap();

    let exported = service.export_document(id, "PDF").unwrap();
    assert!(exported.starts_with("PDF Export: "));
    assert!(exported.contains("Invoice Document"));

    // Exports always reflect the current stored state.
    service
        .update_document(
            id,
            DocumentUpdate {
                content: Some("amended".into()),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(service.export_document(id, "PDF").unwrap().contains("amended"));
}

#[test]
fn export_with_unregistered_format_fails() {
    let service = service();
    let doc = Document::report("T", "A", "C", "S");

    let err = service.export(&doc, "CSV").unwrap_err();
    assert!(matches!(err, ServiceError::Export(_)));
}

#[test]
fn template_listings_expose_names_and_summaries() {
    let service = service();

    assert_eq!(
        service.template_names(),
        vec!["basic-report", "employment-contract", "sales-invoice"]
    );

    let templates = service.templates();
    assert_eq!(templates.len(), 3);
    assert!(templates.iter().all(|t| t.template_description().is_some()));
}

#[test]
fn count_tracks_saves_and_deletes() {
    let service = service();
    assert_eq!(service.count_documents().unwrap(), 0);

    let id = service
        .create_simple_document("REPORT", "T", "A", "C")
        .unwrap()
        .id
        .unwrap();
    service
        .create_from_template("sales-invoice", "Ana", None)
        .unwrap();
    assert_eq!(service.count_documents().unwrap(), 2);

    service.delete_document(id).unwrap();
    assert_eq!(service.count_documents().unwrap(), 1);
    assert_eq!(service.documents().unwrap().len(), 1);
}
