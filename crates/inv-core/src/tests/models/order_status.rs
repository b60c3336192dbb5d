use crate::OrderStatus;

use std::str::FromStr;

#[test]
fn test_order_status_as_str() {
    assert_eq!(OrderStatus::Pending.as_str(), "PENDING");
    assert_eq!(OrderStatus::Confirmed.as_str(), "CONFIRMED");
    assert_eq!(OrderStatus::Cancelled.as_str(), "CANCELLED");
}

#[test]
fn test_order_status_from_str() {
    assert_eq!(
        OrderStatus::from_str("PENDING").unwrap(),
        OrderStatus::Pending
    );
    assert_eq!(
        OrderStatus::from_str("CANCELLED").unwrap(),
        OrderStatus::Cancelled
    );
    assert!(OrderStatus::from_str("SHIPPED").is_err());
}

#[test]
fn test_order_status_default() {
    assert_eq!(OrderStatus::default(), OrderStatus::Pending);
}
