//! The dashboard's screen table.

use inv_auth::{RoutePolicy, RouteRule};
use inv_core::role;

pub const DASHBOARD: &str = "/dashboard";
pub const INVENTORY: &str = "/inventory";
pub const INVENTORY_NEW: &str = "/inventory/new";
pub const INVENTORY_REPORTS: &str = "/inventory/reports";
pub const ORDERS: &str = "/orders";
pub const ORDER_NEW: &str = "/orders/new";
pub const USERS: &str = "/users";

/// Role gates for every protected screen.
///
/// Order matters: literal segments must precede `:id` captures so
/// `/inventory/new` hits its own rule rather than the detail rule.
pub fn route_policy() -> RoutePolicy {
    RoutePolicy::new(vec![
        RouteRule::authenticated(DASHBOARD),
        RouteRule::authenticated(INVENTORY_REPORTS),
        RouteRule::any_of(INVENTORY_NEW, &[role::ADMIN, role::MANAGER]),
        RouteRule::any_of("/inventory/:id/edit", &[role::ADMIN, role::MANAGER]),
        RouteRule::any_of(
            "/inventory/:id",
            &[role::ADMIN, role::MANAGER, role::WAREHOUSE_STAFF],
        ),
        RouteRule::any_of(
            INVENTORY,
            &[role::ADMIN, role::MANAGER, role::WAREHOUSE_STAFF],
        ),
        RouteRule::authenticated(ORDER_NEW),
        RouteRule::authenticated("/orders/:id"),
        RouteRule::authenticated(ORDERS),
        RouteRule::any_of(USERS, &[role::ADMIN, role::MANAGER]),
    ])
}
