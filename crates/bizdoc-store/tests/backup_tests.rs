use bizdoc_store::*;
use chrono::NaiveDate;

fn sample_documents() -> Vec<BusinessDocument> {
    let mut store = MemoryStore::new();
    for (kind, client) in [
        (DocumentKind::Quotation, "Acme Corp"),
        (DocumentKind::TransactionStatement, "Globex"),
    ] {
        let mut doc = BusinessDocument::new(kind, NaiveDate::from_ymd_opt(2026, 2, 10).unwrap());
        doc.client_name = client.to_string();
        doc.remarks = "Net 30\nBank transfer".to_string();
        doc.items.push(LineItem::new("Support", 3.0, "mo", 50_000));
        store.put(doc).unwrap();
    }
    store.list().unwrap()
}

#[test]
fn test_backup_round_trip() {
    let documents = sample_documents();
    let json = export_backup(&documents).unwrap();
    assert!(json.contains("\"version\": 1"));

    let imported = import_backup(&json).unwrap();
    assert_eq!(imported, documents);

    let mut store = MemoryStore::new();
    assert_eq!(store.restore(imported).unwrap(), 2);
    assert_eq!(store.require(DocumentId(2)).unwrap().client_name, "Globex");
}

#[test]
fn test_backup_rejects_malformed() {
    match import_backup("{\"documents\": 5}") {
        Err(StoreError::InvalidBackup(msg)) => assert!(msg.contains("Failed to parse")),
        _ => panic!("Expected InvalidBackup error"),
    }
}

#[test]
fn test_backup_rejects_unknown_version() {
    let json = r#"{"version": 9, "exported_at": "2026-01-01T00:00:00Z", "documents": []}"#;
    match import_backup(json) {
        Err(StoreError::InvalidBackup(msg)) => assert!(msg.contains("version 9")),
        _ => panic!("Expected InvalidBackup error"),
    }
}

#[test]
fn test_backup_fills_defaults() {
    let json = r#"{
        "version": 1,
        "exported_at": "2026-01-01T00:00:00Z",
        "documents": [
            { "kind": "PurchaseOrder", "issue_date": "2026-01-05",
              "items": [ { "name": "Paper", "quantity": 10, "unit_price": 480 } ] }
        ]
    }"#;
    let documents = import_backup(json).unwrap();
    assert_eq!(documents.len(), 1);
    let doc = &documents[0];
    assert_eq!(doc.id, None);
    assert_eq!(doc.tax_rate_percent, 10.0);
    assert_eq!(doc.rounding, RoundingMode::Floor);
    assert_eq!(doc.totals().total, 5_280);
}

#[test]
fn test_restore_backup_with_largest_id() {
    let json = r#"{
        "version": 1,
        "exported_at": "2026-01-01T00:00:00Z",
        "documents": [
            { "id": 18446744073709551615, "kind": "Quotation", "issue_date": "2026-01-05" }
        ]
    }"#;
    let documents = import_backup(json).unwrap();

    let mut store = MemoryStore::new();
    assert_eq!(store.restore(documents).unwrap(), 1);
    assert!(store.require(DocumentId(u64::MAX)).is_ok());

    let fresh = BusinessDocument::new(
        DocumentKind::Quotation,
        NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
    );
    assert!(matches!(store.put(fresh), Err(StoreError::IdsExhausted)));
}
