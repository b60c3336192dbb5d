use crate::{Order, OrderStatus};

#[test]
fn given_order_service_json_when_deserialized_then_status_and_timestamp_parse() {
    let body = r#"{
        "id": 42,
        "skuCode": "SKU042",
        "quantity": 2,
        "status": "CONFIRMED",
        "placedBy": "alice",
        "placedAt": "2026-03-01T09:30:00"
    }"#;

    let order: Order = serde_json::from_str(body).unwrap();

    assert_eq!(order.id, Some(42));
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(order.placed_by.as_deref(), Some("alice"));
    assert!(!order.is_open());
}

#[test]
fn given_missing_optional_fields_when_deserialized_then_defaults_apply() {
    let body = r#"{"skuCode": "SKU001", "quantity": 1}"#;

    let order: Order = serde_json::from_str(body).unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.placed_at.is_none());
    assert!(order.is_open());
}
