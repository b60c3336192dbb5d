use crate::InventoryItem;

#[test]
fn test_low_stock_at_and_below_reorder_level() {
    let mut item = InventoryItem::new("SKU001".to_string(), "Widget".to_string(), 5);
    item.reorder_level = 5;
    assert!(item.is_low_stock());

    item.quantity_available = 4;
    assert!(item.is_low_stock());

    item.quantity_available = 6;
    assert!(!item.is_low_stock());
}

#[test]
fn given_service_json_when_deserialized_then_camel_case_fields_map() {
    let body = r#"{
        "id": 7,
        "skuCode": "SKU007",
        "name": "Pallet Jack",
        "quantityAvailable": 3,
        "quantityReserved": 1,
        "reorderLevel": 5,
        "location": "Aisle 4",
        "expiryDate": null
    }"#;

    let item: InventoryItem = serde_json::from_str(body).unwrap();

    assert_eq!(item.id, Some(7));
    assert_eq!(item.sku_code, "SKU007");
    assert_eq!(item.quantity_available, 3);
    assert_eq!(item.location.as_deref(), Some("Aisle 4"));
    assert!(item.is_low_stock());
}

#[test]
fn given_new_item_when_serialized_then_id_is_omitted() {
    let item = InventoryItem::new("SKU001".to_string(), "Widget".to_string(), 10);
    let body = serde_json::to_string(&item).unwrap();

    assert!(!body.contains("\"id\""));
    assert!(body.contains("\"skuCode\":\"SKU001\""));
    assert!(body.contains("\"quantityAvailable\":10"));
}
