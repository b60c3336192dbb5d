use crate::Session;

/// Outcome of a route authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render the requested view.
    Allow,
    /// Anonymous: send the visitor to the login entry point.
    RedirectLogin,
    /// Authenticated but under-privileged: send to the unauthorized view.
    RedirectUnauthorized,
}

/// Decide whether `session` may enter a view requiring `required_roles`.
///
/// Authentication is checked before roles, so an anonymous visitor lands on
/// login even for admin-only views. Role matching is any-of: one shared tag
/// is enough. An empty requirement admits any authenticated session.
pub fn authorize<S: AsRef<str>>(session: Option<&Session>, required_roles: &[S]) -> Access {
    let Some(session) = session else {
        return Access::RedirectLogin;
    };

    if required_roles.is_empty() || session.has_any_role(required_roles) {
        Access::Allow
    } else {
        Access::RedirectUnauthorized
    }
}
