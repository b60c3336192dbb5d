use crate::tests::mint_token;
use crate::{Access, Session, authorize};

use inv_core::role;

fn session_with(roles: &[&str]) -> Session {
    Session::from_token(&mint_token("tester", roles)).unwrap()
}

#[test]
fn given_anonymous_visitor_when_route_requires_admin_then_redirect_login() {
    let access = authorize(None, &[role::ADMIN]);

    assert_eq!(access, Access::RedirectLogin);
}

#[test]
fn given_manager_when_route_accepts_admin_or_manager_then_allow() {
    let session = session_with(&[role::MANAGER]);

    let access = authorize(Some(&session), &[role::ADMIN, role::MANAGER]);

    assert_eq!(access, Access::Allow);
}

#[test]
fn given_warehouse_staff_when_route_requires_admin_then_redirect_unauthorized() {
    let session = session_with(&[role::WAREHOUSE_STAFF]);

    let access = authorize(Some(&session), &[role::ADMIN]);

    assert_eq!(access, Access::RedirectUnauthorized);
}

#[test]
fn given_any_session_when_route_has_no_role_requirement_then_allow() {
    let session = session_with(&[role::USER]);

    let access = authorize::<&str>(Some(&session), &[]);

    assert_eq!(access, Access::Allow);
}

#[test]
fn given_session_without_roles_when_route_requires_roles_then_redirect_unauthorized() {
    let session = session_with(&[]);

    let access = authorize(Some(&session), &[role::ADMIN]);

    assert_eq!(access, Access::RedirectUnauthorized);
}
