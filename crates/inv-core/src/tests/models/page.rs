use crate::{Order, Page};

#[test]
fn given_spring_page_envelope_when_deserialized_then_paging_fields_map() {
    let body = r#"{
        "content": [{"skuCode": "SKU001", "quantity": 1, "status": "PENDING"}],
        "totalPages": 3,
        "totalElements": 11,
        "number": 0,
        "size": 5,
        "first": true,
        "last": false
    }"#;

    let page: Page<Order> = serde_json::from_str(body).unwrap();

    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_elements, 11);
    assert!(page.has_next());
    assert!(!page.is_empty());
}

#[test]
fn given_last_page_then_has_next_is_false() {
    let body = r#"{"content": [], "totalPages": 3, "number": 2}"#;

    let page: Page<Order> = serde_json::from_str(body).unwrap();

    assert!(!page.has_next());
    assert!(page.is_empty());
}
