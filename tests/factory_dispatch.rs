use docuflow_core::construct::DocumentFactory;
use docuflow_core::document::DocumentBody;

#[test]
fn invoice_tag_builds_an_invoice_with_default_extras() {
    let doc = DocumentFactory.create("INVOICE", "T", "A", "C").unwrap();

    assert_eq!(doc.doc_type, "INVOICE");
    assert!(doc.id.is_none());
    match &doc.body {
        DocumentBody::Invoice {
            invoice_number,
            amount,
        } => {
            assert!(invoice_number.is_empty());
            assert_eq!(*amount, 0.0);
        }
        other => panic!("factory built the wrong variant: {other:?}"),
    }

    let rendered = doc.render();
    assert!(rendered.contains("Invoice Document"));
    assert!(rendered.contains("Author: A"));
    assert!(rendered.contains("Content: C"));
}

#[test]
fn tags_are_matched_case_insensitively() {
    let report = DocumentFactory.create("report", "T", "A", "C").unwrap();
    assert_eq!(report.doc_type, "REPORT");
    assert!(report.render().contains("Report Document"));

    let contract = DocumentFactory.create("Contract", "T", "A", "C").unwrap();
    assert_eq!(contract.doc_type, "CONTRACT");
    assert!(contract.render().contains("Contract Document"));
}

#[test]
fn unknown_tag_fails_naming_itself_and_the_valid_set() {
    let err = DocumentFactory.create("UNKNOWN", "T", "A", "C").unwrap_err();

    assert_eq!(err.tag, "UNKNOWN");
    assert_eq!(err.expected, vec!["INVOICE", "REPORT", "CONTRACT"]);

    let message = err.to_string();
    assert!(message.contains("UNKNOWN"));
    assert!(message.contains("INVOICE, REPORT, CONTRACT"));
}

#[test]
fn factory_cannot_build_complex_or_template_shapes() {
    assert!(DocumentFactory.create("COMPLEX", "T", "A", "C").is_err());
    assert!(DocumentFactory.create("TEMPLATE", "T", "A", "C").is_err());
}
