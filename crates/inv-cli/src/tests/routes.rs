use crate::routes;

use inv_auth::Access;

#[test]
fn given_anonymous_visitor_then_every_protected_screen_redirects_to_login() {
    let policy = routes::route_policy();

    for screen in [
        routes::DASHBOARD,
        routes::INVENTORY,
        routes::INVENTORY_NEW,
        routes::INVENTORY_REPORTS,
        routes::ORDERS,
        routes::USERS,
    ] {
        assert_eq!(
            policy.evaluate(None, screen),
            Access::RedirectLogin,
            "screen {screen}"
        );
    }
}

#[test]
fn given_screen_table_then_literal_rules_precede_param_rules() {
    let policy = routes::route_policy();

    // "/inventory/new" and "/inventory/:id/edit" must not be swallowed by
    // the "/inventory/:id" detail rule.
    let position = |pattern: &str| {
        policy
            .rules()
            .iter()
            .position(|rule| rule.pattern() == pattern)
            .unwrap_or_else(|| panic!("no rule for {pattern}"))
    };

    assert!(position(routes::INVENTORY_NEW) < position("/inventory/:id"));
    assert!(position("/inventory/:id/edit") < position("/inventory/:id"));
}
